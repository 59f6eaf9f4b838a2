// Use cases crossing both upstreams. NFL API team ids are translated to ESPN
// ids through the team abbreviation before anything is asked to ESPN.

use tracing::{debug, warn};

use gridiron_interface::errors::Result;
use gridiron_interface::player_stats::model::PlayerStatistics;
use gridiron_interface::player_stats::repository::FindPlayerStatsParams;
use gridiron_interface::players::enriched::EnrichedPlayer;
use gridiron_interface::players::model::Player;
use gridiron_interface::roster::model::{Roster, RosterPlayer};
use gridiron_interface::roster::repository::FindRosterParams;

use crate::container::Container;

/// ESPN id of an NFL API team. `None` when the team or its mapping is unknown.
async fn espn_team_id(container: &Container, team_id: u32) -> Result<Option<String>> {
    let Some(team) = container.team_repository()?.find_by_id(team_id).await? else {
        return Ok(None);
    };

    container.espn_team_id_resolver().espn_team_id(&team).await
}

pub async fn get_team_roster(
    container: &Container,
    team_id: u32,
    season: Option<u32>,
) -> Result<Option<Roster>> {
    let Some(espn_id) = espn_team_id(container, team_id).await? else {
        debug!("team {} has no ESPN counterpart", team_id);
        return Ok(None);
    };

    container
        .roster_repository()
        .find_by_team(FindRosterParams {
            team_id: espn_id,
            season,
        })
        .await
}

/// `espn_player_id` is an ESPN athlete id, not an NFL API player id.
pub async fn get_player_statistics(
    container: &Container,
    espn_player_id: &str,
    season: Option<u32>,
) -> Result<Option<PlayerStatistics>> {
    container
        .player_stats_repository()
        .find_by_player(FindPlayerStatsParams {
            player_id: espn_player_id.to_string(),
            season,
        })
        .await
}

pub async fn get_team_player_statistics(
    container: &Container,
    team_id: u32,
    season: Option<u32>,
) -> Result<Vec<PlayerStatistics>> {
    let Some(espn_id) = espn_team_id(container, team_id).await? else {
        return Ok(vec![]);
    };

    container
        .player_stats_repository()
        .find_by_team(&espn_id, season)
        .await
}

// Same display name first. Otherwise the only entry with the same jersey
// number at the same position: numbers are shared across positions.
fn find_roster_entry<'a>(roster: &'a Roster, player: &Player) -> Option<&'a RosterPlayer> {
    let full_name = player.full_name();

    if let Some(entry) = roster
        .players
        .iter()
        .find(|entry| entry.display_name.eq_ignore_ascii_case(&full_name))
    {
        return Some(entry);
    }

    if player.jersey_number.is_empty() || player.position_abbreviation.is_empty() {
        return None;
    }

    let mut candidates = roster.players.iter().filter(|entry| {
        entry.jersey.as_deref() == Some(player.jersey_number.as_str())
            && entry.position.as_ref().is_some_and(|position| {
                position
                    .abbreviation
                    .eq_ignore_ascii_case(&player.position_abbreviation)
            })
    });

    match (candidates.next(), candidates.next()) {
        (Some(entry), None) => Some(entry),
        (Some(_), Some(_)) => {
            debug!(
                "several {} #{} on the roster, {} left without ESPN data",
                player.position_abbreviation, player.jersey_number, full_name
            );
            None
        }
        _ => None,
    }
}

/// NFL API player completed with the matching ESPN roster entry and statistics.
/// Only the NFL API lookup can fail: ESPN data is added when available.
pub async fn get_enriched_player(
    container: &Container,
    player_id: u32,
    season: Option<u32>,
) -> Result<Option<EnrichedPlayer>> {
    let Some(player) = container.player_repository()?.find_by_id(player_id).await? else {
        return Ok(None);
    };

    let Some(team_id) = player.team.as_ref().map(|team| team.id) else {
        return Ok(Some(EnrichedPlayer::new(player)));
    };

    let roster = match get_team_roster(container, team_id, season).await {
        Ok(roster) => roster,
        Err(e) => {
            warn!("roster lookup failed for player {}: {}", player_id, e);
            None
        }
    };

    let roster_entry = roster
        .as_ref()
        .and_then(|roster| find_roster_entry(roster, &player))
        .cloned();

    let mut enriched = EnrichedPlayer::new(player);

    if let Some(roster_entry) = roster_entry {
        match get_player_statistics(container, &roster_entry.id, season).await {
            Ok(Some(statistics)) => enriched = enriched.with_statistics(statistics),
            Ok(None) => {}
            Err(e) => warn!("statistics lookup failed for player {}: {}", player_id, e),
        }

        enriched = enriched.with_roster(roster_entry);
    }

    Ok(Some(enriched))
}
