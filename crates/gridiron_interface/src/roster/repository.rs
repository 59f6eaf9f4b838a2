use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::Result;
use crate::roster::model::Roster;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindRosterParams {
    pub team_id: String,     // ESPN team id.
    pub season: Option<u32>, // Default season of the client when None.
}

#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// `Ok(None)` when the upstream answers 404.
    async fn find_by_team(&self, params: FindRosterParams) -> Result<Option<Roster>>;

    /// Best effort: rosters that fail or do not exist are left out.
    async fn find_by_teams(&self, params: Vec<FindRosterParams>) -> Result<Vec<Roster>>;
}

pub type RosterRepositoryHandle = Arc<dyn RosterRepository + Send + Sync>;
