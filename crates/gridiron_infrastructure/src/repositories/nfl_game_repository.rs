use std::sync::Arc;

use async_trait::async_trait;

use gridiron_interface::errors::Result;
use gridiron_interface::games::{
    model::{FindGamesParams, Game},
    repository::GameRepository,
};
use gridiron_interface::pagination::{map_paginated_response, PaginatedResponse};

use crate::api::nfl::{GetGamesParams, NflApiClient};
use crate::repositories::not_found_as_none;

#[derive(Clone)]
pub struct NflGameRepository {
    api_client: Arc<NflApiClient>,
}

impl NflGameRepository {
    pub fn new(api_client: Arc<NflApiClient>) -> Self {
        Self { api_client }
    }
}

fn map_params(params: FindGamesParams) -> GetGamesParams {
    GetGamesParams {
        cursor: params.cursor,
        per_page: params.per_page,
        postseason: params.postseason,
        dates: params.dates,
        seasons: params.seasons,
        team_ids: params.team_ids,
        weeks: params.weeks,
    }
}

#[async_trait]
impl GameRepository for NflGameRepository {
    async fn find_many(&self, params: FindGamesParams) -> Result<PaginatedResponse<Game>> {
        let response = self.api_client.get_games(&map_params(params)).await?;

        Ok(map_paginated_response(response, Game::from))
    }

    async fn find_by_id(&self, id: u32) -> Result<Option<Game>> {
        let response = not_found_as_none(self.api_client.get_game_by_id(id).await)?;

        Ok(response.map(|response| Game::from(response.data)))
    }
}
