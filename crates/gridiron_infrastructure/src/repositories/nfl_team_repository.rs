use std::sync::Arc;

use async_trait::async_trait;

use gridiron_interface::errors::Result;
use gridiron_interface::pagination::map_list;
use gridiron_interface::teams::{
    model::{map_team_from_dto, Team},
    repository::TeamRepository,
};

use crate::api::nfl::NflApiClient;
use crate::repositories::not_found_as_none;

#[derive(Clone)]
pub struct NflTeamRepository {
    api_client: Arc<NflApiClient>,
}

impl NflTeamRepository {
    pub fn new(api_client: Arc<NflApiClient>) -> Self {
        Self { api_client }
    }
}

#[async_trait]
impl TeamRepository for NflTeamRepository {
    async fn find_all(&self) -> Result<Vec<Team>> {
        let response = self.api_client.get_teams().await?;

        Ok(map_list(response.data, map_team_from_dto))
    }

    async fn find_by_id(&self, id: u32) -> Result<Option<Team>> {
        let response = not_found_as_none(self.api_client.get_team_by_id(id).await)?;

        Ok(response.map(|response| map_team_from_dto(response.data)))
    }
}
