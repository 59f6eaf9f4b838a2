use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::Result;
use crate::pagination::PaginatedResponse;
use crate::players::model::{FindPlayersParams, Player};

#[async_trait]
pub trait PlayerRepository: Send + Sync {
    async fn find_many(&self, params: FindPlayersParams) -> Result<PaginatedResponse<Player>>;

    /// `Ok(None)` when the upstream answers 404.
    async fn find_by_id(&self, id: u32) -> Result<Option<Player>>;

    async fn find_by_team(
        &self,
        team_id: u32,
        params: FindPlayersParams,
    ) -> Result<PaginatedResponse<Player>> {
        self.find_many(FindPlayersParams {
            team_ids: Some(vec![team_id]),
            ..params
        })
        .await
    }

    async fn search(
        &self,
        term: &str,
        params: FindPlayersParams,
    ) -> Result<PaginatedResponse<Player>> {
        self.find_many(FindPlayersParams {
            search: Some(term.to_string()),
            ..params
        })
        .await
    }
}

pub type PlayerRepositoryHandle = Arc<dyn PlayerRepository + Send + Sync>;
