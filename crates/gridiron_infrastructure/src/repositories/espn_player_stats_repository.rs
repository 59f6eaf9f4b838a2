use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use gridiron_interface::errors::Result;
use gridiron_interface::player_stats::{
    model::{map_player_statistics_from_dto, PlayerStatistics},
    repository::{FindPlayerStatsParams, PlayerStatsRepository},
};

use crate::api::espn::EspnApiClient;
use crate::helpers::batch::fetch_all_best_effort;
use crate::repositories::not_found_as_none;

#[derive(Clone)]
pub struct EspnPlayerStatsRepository {
    api_client: Arc<EspnApiClient>,
}

impl EspnPlayerStatsRepository {
    pub fn new(api_client: Arc<EspnApiClient>) -> Self {
        Self { api_client }
    }
}

#[async_trait]
impl PlayerStatsRepository for EspnPlayerStatsRepository {
    async fn find_by_player(
        &self,
        params: FindPlayerStatsParams,
    ) -> Result<Option<PlayerStatistics>> {
        let season = params.season.unwrap_or(self.api_client.season());

        let response = not_found_as_none(
            self.api_client
                .get_player_statistics(&params.player_id, Some(season))
                .await,
        )?;

        Ok(response.map(|dto| map_player_statistics_from_dto(dto, season)))
    }

    async fn find_by_players(
        &self,
        params: Vec<FindPlayerStatsParams>,
    ) -> Result<Vec<PlayerStatistics>> {
        let futures = params.into_iter().map(|params| self.find_by_player(params));

        Ok(fetch_all_best_effort("player statistics", futures)
            .await
            .items)
    }

    async fn find_by_team(
        &self,
        team_id: &str,
        season: Option<u32>,
    ) -> Result<Vec<PlayerStatistics>> {
        let roster =
            not_found_as_none(self.api_client.get_team_roster(team_id, season).await)?;

        let player_ids: Vec<String> = roster
            .and_then(|roster| roster.athletes)
            .map(|athletes| athletes.items.into_iter().map(|player| player.id).collect())
            .unwrap_or_default();

        if player_ids.is_empty() {
            debug!("no athletes on the roster of ESPN team {}", team_id);
            return Ok(vec![]);
        }

        let params = player_ids
            .into_iter()
            .map(|player_id| FindPlayerStatsParams { player_id, season })
            .collect();

        self.find_by_players(params).await
    }
}
