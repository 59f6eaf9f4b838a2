use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::Result;
use crate::teams::model::{Conference, Division, Team};

#[async_trait]
pub trait TeamRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Team>>;

    /// `Ok(None)` when the upstream answers 404.
    async fn find_by_id(&self, id: u32) -> Result<Option<Team>>;

    // The upstream has no conference/division filter: every call fetches the
    // full team list and filters it locally.
    async fn find_by_conference(&self, conference: Conference) -> Result<Vec<Team>> {
        let teams = self.find_all().await?;

        Ok(teams
            .into_iter()
            .filter(|team| team.conference == conference)
            .collect())
    }

    async fn find_by_division(
        &self,
        conference: Conference,
        division: Division,
    ) -> Result<Vec<Team>> {
        let teams = self.find_all().await?;

        Ok(teams
            .into_iter()
            .filter(|team| team.conference == conference && team.division == division)
            .collect())
    }
}

pub type TeamRepositoryHandle = Arc<dyn TeamRepository + Send + Sync>;
