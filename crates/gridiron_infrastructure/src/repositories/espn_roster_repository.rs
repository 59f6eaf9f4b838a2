use std::sync::Arc;

use async_trait::async_trait;

use gridiron_interface::errors::Result;
use gridiron_interface::roster::{
    model::{map_roster_from_dto, Roster},
    repository::{FindRosterParams, RosterRepository},
};

use crate::api::espn::EspnApiClient;
use crate::helpers::batch::fetch_all_best_effort;
use crate::repositories::not_found_as_none;

#[derive(Clone)]
pub struct EspnRosterRepository {
    api_client: Arc<EspnApiClient>,
}

impl EspnRosterRepository {
    pub fn new(api_client: Arc<EspnApiClient>) -> Self {
        Self { api_client }
    }
}

#[async_trait]
impl RosterRepository for EspnRosterRepository {
    async fn find_by_team(&self, params: FindRosterParams) -> Result<Option<Roster>> {
        let season = params.season.unwrap_or(self.api_client.season());

        let response = not_found_as_none(
            self.api_client
                .get_team_roster(&params.team_id, Some(season))
                .await,
        )?;

        Ok(response.map(|dto| map_roster_from_dto(dto, &params.team_id, season)))
    }

    async fn find_by_teams(&self, params: Vec<FindRosterParams>) -> Result<Vec<Roster>> {
        let futures = params.into_iter().map(|params| self.find_by_team(params));

        Ok(fetch_all_best_effort("rosters", futures).await.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::espn::EspnApiConfig;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn repository(base_url: String) -> EspnRosterRepository {
        EspnRosterRepository::new(Arc::new(EspnApiClient::new(EspnApiConfig {
            base_url: Some(base_url),
            season: Some(2024),
        })))
    }

    fn roster_json(team_id: &str) -> serde_json::Value {
        json!({
            "id": team_id,
            "uid": format!("s:20~l:28~t:{}", team_id),
            "athletes": {
                "items": [
                    {
                        "id": "3116165",
                        "displayName": "A.J. Brown",
                        "shortName": "A. Brown",
                        "jersey": "11",
                        "position": {
                            "id": "3",
                            "name": "Wide Receiver",
                            "displayName": "Wide Receiver",
                            "abbreviation": "WR"
                        }
                    },
                    {
                        "id": "4040715",
                        "displayName": "Jalen Hurts",
                        "shortName": "J. Hurts",
                        "jersey": "1",
                        "position": {
                            "id": "8",
                            "name": "Quarterback",
                            "displayName": "Quarterback",
                            "abbreviation": "QB"
                        }
                    }
                ]
            }
        })
    }

    fn params(team_id: &str, season: Option<u32>) -> FindRosterParams {
        FindRosterParams {
            team_id: team_id.to_string(),
            season,
        }
    }

    #[tokio::test]
    async fn find_by_team_tags_the_roster_with_team_and_season() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/seasons/2024/teams/21"))
            .and(query_param("enable", "roster"))
            .respond_with(ResponseTemplate::new(200).set_body_json(roster_json("21")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let roster = repository(mock_server.uri())
            .find_by_team(params("21", None))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(roster.team_id, "21");
        assert_eq!(roster.season, 2024);
        assert_eq!(roster.players.len(), 2);
        assert_eq!(
            roster.player_by_jersey("1").map(|p| p.display_name.as_str()),
            Some("Jalen Hurts")
        );
        assert_eq!(roster.players_by_position("WR").len(), 1);
    }

    #[tokio::test]
    async fn find_by_team_is_none_on_404() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/seasons/2019/teams/21"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let roster = repository(mock_server.uri())
            .find_by_team(params("21", Some(2019)))
            .await
            .unwrap();

        assert_eq!(roster, None);
    }

    #[tokio::test]
    async fn find_by_teams_skips_missing_and_failing_rosters() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/seasons/2024/teams/21"))
            .respond_with(ResponseTemplate::new(200).set_body_json(roster_json("21")))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/seasons/2024/teams/2"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/seasons/2024/teams/99"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let rosters = repository(mock_server.uri())
            .find_by_teams(vec![params("2", None), params("21", None), params("99", None)])
            .await
            .unwrap();

        assert_eq!(rosters.len(), 1);
        assert_eq!(rosters[0].team_id, "21");
    }
}
