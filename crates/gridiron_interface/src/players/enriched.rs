// A primary API player completed with what ESPN knows about the same athlete.

use serde::Serialize;

use crate::player_stats::model::PlayerStatistics;
use crate::players::model::Player;
use crate::roster::model::RosterPlayer;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedPlayer {
    pub player: Player,
    pub roster_data: Option<RosterPlayer>,
    pub statistics: Option<PlayerStatistics>,
}

impl EnrichedPlayer {
    pub fn new(player: Player) -> Self {
        Self {
            player,
            roster_data: None,
            statistics: None,
        }
    }

    pub fn with_roster(mut self, roster_player: RosterPlayer) -> Self {
        self.roster_data = Some(roster_player);
        self
    }

    pub fn with_statistics(mut self, statistics: PlayerStatistics) -> Self {
        self.statistics = Some(statistics);
        self
    }

    /// ESPN jersey first, then the primary API one.
    pub fn jersey_number(&self) -> Option<&str> {
        self.roster_data
            .as_ref()
            .and_then(|roster| roster.jersey.as_deref())
            .filter(|jersey| !jersey.is_empty())
            .or_else(|| Some(self.player.jersey_number.as_str()).filter(|j| !j.is_empty()))
    }

    pub fn position_display(&self) -> &str {
        let espn_position = self
            .roster_data
            .as_ref()
            .and_then(|roster| roster.position.as_ref())
            .map(|position| position.abbreviation.as_str());

        [
            espn_position,
            Some(self.player.position_abbreviation.as_str()),
            Some(self.player.position.as_str()),
        ]
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
        .unwrap_or("N/A")
    }

    pub fn headshot(&self) -> Option<&str> {
        self.roster_data
            .as_ref()
            .and_then(|roster| roster.headshot.as_ref())
            .map(|headshot| headshot.href.as_str())
    }

    pub fn has_statistics(&self) -> bool {
        self.statistics.as_ref().is_some_and(|statistics| {
            statistics
                .splits
                .iter()
                .any(|split| !split.categories.is_empty())
        })
    }
}
