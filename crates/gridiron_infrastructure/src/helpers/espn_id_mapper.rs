// The NFL API and ESPN do not share team ids. The abbreviation (i.g., PHI)
// is the only key both sides agree on.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use gridiron_interface::errors::{AppError, Result};
use gridiron_interface::teams::model::Team;

use crate::api::espn::EspnApiClient;

pub struct EspnTeamIdResolver {
    api_client: Arc<EspnApiClient>,
    // abbreviation (uppercase) -> ESPN team id. Built on first lookup.
    index: OnceCell<HashMap<String, String>>,
}

impl EspnTeamIdResolver {
    pub fn new(api_client: Arc<EspnApiClient>) -> Self {
        Self {
            api_client,
            index: OnceCell::new(),
        }
    }

    // An incomplete listing is an error so the next lookup builds it again.
    async fn index(&self) -> Result<&HashMap<String, String>> {
        self.index
            .get_or_try_init(|| async {
                let mut outcome = self.api_client.get_teams_resolved().await?;

                if let Some((_, e)) = outcome.failures.pop() {
                    warn!(
                        "ESPN team id index not built, {} team(s) could not be fetched",
                        outcome.failures.len() + 1
                    );
                    return Err(AppError::from(e));
                }

                let index: HashMap<String, String> = outcome
                    .items
                    .into_iter()
                    .map(|team| (team.abbreviation.to_ascii_uppercase(), team.id))
                    .collect();

                info!("ESPN team id index built with {} teams", index.len());
                Ok::<_, AppError>(index)
            })
            .await
    }

    /// `Ok(None)` when ESPN does not know the abbreviation.
    pub async fn espn_team_id_by_abbreviation(&self, abbreviation: &str) -> Result<Option<String>> {
        let espn_id = self
            .index()
            .await?
            .get(&abbreviation.to_ascii_uppercase())
            .cloned();

        if espn_id.is_none() {
            debug!("no ESPN team id for abbreviation {}", abbreviation);
        }

        Ok(espn_id)
    }

    pub async fn espn_team_id(&self, team: &Team) -> Result<Option<String>> {
        self.espn_team_id_by_abbreviation(&team.abbreviation).await
    }
}
