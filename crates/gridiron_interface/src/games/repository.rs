use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::Result;
use crate::games::model::{FindGamesParams, Game};
use crate::pagination::PaginatedResponse;

#[async_trait]
pub trait GameRepository: Send + Sync {
    async fn find_many(&self, params: FindGamesParams) -> Result<PaginatedResponse<Game>>;

    /// `Ok(None)` when the upstream answers 404.
    async fn find_by_id(&self, id: u32) -> Result<Option<Game>>;

    async fn find_by_season(
        &self,
        season: u32,
        params: FindGamesParams,
    ) -> Result<PaginatedResponse<Game>> {
        self.find_many(FindGamesParams {
            seasons: Some(vec![season]),
            ..params
        })
        .await
    }

    async fn find_by_team(
        &self,
        team_id: u32,
        params: FindGamesParams,
    ) -> Result<PaginatedResponse<Game>> {
        self.find_many(FindGamesParams {
            team_ids: Some(vec![team_id]),
            ..params
        })
        .await
    }

    async fn find_by_week(
        &self,
        season: u32,
        week: u32,
        params: FindGamesParams,
    ) -> Result<PaginatedResponse<Game>> {
        self.find_many(FindGamesParams {
            seasons: Some(vec![season]),
            weeks: Some(vec![week]),
            ..params
        })
        .await
    }

    async fn find_playoffs(
        &self,
        season: u32,
        params: FindGamesParams,
    ) -> Result<PaginatedResponse<Game>> {
        self.find_many(FindGamesParams {
            seasons: Some(vec![season]),
            postseason: Some(true),
            ..params
        })
        .await
    }
}

pub type GameRepositoryHandle = Arc<dyn GameRepository + Send + Sync>;
