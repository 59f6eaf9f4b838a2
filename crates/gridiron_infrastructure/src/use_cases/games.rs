use gridiron_interface::errors::Result;
use gridiron_interface::games::model::{FindGamesParams, Game};
use gridiron_interface::pagination::PaginatedResponse;

use crate::container::Container;

pub async fn get_games(
    container: &Container,
    params: FindGamesParams,
) -> Result<PaginatedResponse<Game>> {
    container.game_repository()?.find_many(params).await
}

pub async fn get_game_by_id(container: &Container, id: u32) -> Result<Option<Game>> {
    container.game_repository()?.find_by_id(id).await
}

pub async fn get_games_by_season(
    container: &Container,
    season: u32,
    params: FindGamesParams,
) -> Result<PaginatedResponse<Game>> {
    container
        .game_repository()?
        .find_by_season(season, params)
        .await
}

pub async fn get_games_by_team(
    container: &Container,
    team_id: u32,
    params: FindGamesParams,
) -> Result<PaginatedResponse<Game>> {
    container
        .game_repository()?
        .find_by_team(team_id, params)
        .await
}

pub async fn get_games_by_week(
    container: &Container,
    season: u32,
    week: u32,
    params: FindGamesParams,
) -> Result<PaginatedResponse<Game>> {
    container
        .game_repository()?
        .find_by_week(season, week, params)
        .await
}

pub async fn get_playoff_games(
    container: &Container,
    season: u32,
    params: FindGamesParams,
) -> Result<PaginatedResponse<Game>> {
    container
        .game_repository()?
        .find_playoffs(season, params)
        .await
}
