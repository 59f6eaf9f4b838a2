pub mod espn_player_stats_repository;
pub mod espn_roster_repository;
pub mod nfl_game_repository;
pub mod nfl_player_repository;
pub mod nfl_team_repository;

pub use espn_player_stats_repository::EspnPlayerStatsRepository;
pub use espn_roster_repository::EspnRosterRepository;
pub use nfl_game_repository::NflGameRepository;
pub use nfl_player_repository::NflPlayerRepository;
pub use nfl_team_repository::NflTeamRepository;

use gridiron_interface::errors::AppError;

use crate::api::http_client::ApiError;

/// A 404 from the upstream means "this resource does not exist", not a failure.
pub(crate) fn not_found_as_none<T>(
    result: Result<T, ApiError>,
) -> Result<Option<T>, AppError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e.into()),
    }
}
