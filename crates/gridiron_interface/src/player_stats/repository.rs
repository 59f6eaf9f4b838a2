use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::Result;
use crate::player_stats::model::PlayerStatistics;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindPlayerStatsParams {
    pub player_id: String,   // ESPN athlete id.
    pub season: Option<u32>, // Default season of the client when None.
}

#[async_trait]
pub trait PlayerStatsRepository: Send + Sync {
    /// `Ok(None)` when the upstream answers 404.
    async fn find_by_player(
        &self,
        params: FindPlayerStatsParams,
    ) -> Result<Option<PlayerStatistics>>;

    /// Best effort: one player failing does not fail the whole batch.
    async fn find_by_players(
        &self,
        params: Vec<FindPlayerStatsParams>,
    ) -> Result<Vec<PlayerStatistics>>;

    /// Statistics of every athlete on the team roster (ESPN team id).
    async fn find_by_team(
        &self,
        team_id: &str,
        season: Option<u32>,
    ) -> Result<Vec<PlayerStatistics>>;
}

pub type PlayerStatsRepositoryHandle = Arc<dyn PlayerStatsRepository + Send + Sync>;
