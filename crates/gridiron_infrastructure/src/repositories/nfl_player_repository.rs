use std::sync::Arc;

use async_trait::async_trait;

use gridiron_interface::errors::Result;
use gridiron_interface::pagination::{map_paginated_response, PaginatedResponse};
use gridiron_interface::players::{
    model::{FindPlayersParams, Player},
    repository::PlayerRepository,
};

use crate::api::nfl::{GetPlayersParams, NflApiClient};
use crate::repositories::not_found_as_none;

#[derive(Clone)]
pub struct NflPlayerRepository {
    api_client: Arc<NflApiClient>,
}

impl NflPlayerRepository {
    pub fn new(api_client: Arc<NflApiClient>) -> Self {
        Self { api_client }
    }
}

fn map_params(params: FindPlayersParams) -> GetPlayersParams {
    GetPlayersParams {
        cursor: params.cursor,
        per_page: params.per_page,
        search: params.search,
        first_name: params.first_name,
        last_name: params.last_name,
        team_ids: params.team_ids,
    }
}

#[async_trait]
impl PlayerRepository for NflPlayerRepository {
    async fn find_many(&self, params: FindPlayersParams) -> Result<PaginatedResponse<Player>> {
        let response = self.api_client.get_players(&map_params(params)).await?;

        Ok(map_paginated_response(response, Player::from))
    }

    async fn find_by_id(&self, id: u32) -> Result<Option<Player>> {
        let response = not_found_as_none(self.api_client.get_player_by_id(id).await)?;

        Ok(response.map(|response| Player::from(response.data)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::nfl::NflApiConfig;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn repository(base_url: String) -> NflPlayerRepository {
        NflPlayerRepository::new(Arc::new(NflApiClient::new(NflApiConfig {
            api_key: "test-key".to_string(),
            base_url: Some(base_url),
        })))
    }

    fn hurts_json() -> serde_json::Value {
        json!({
            "id": 33,
            "first_name": "Jalen",
            "last_name": "Hurts",
            "position": "Quarterback",
            "position_abbreviation": "QB",
            "height": "6' 1\"",
            "weight": "223 lbs",
            "jersey_number": "1",
            "college": "Oklahoma",
            "experience": "5th Season",
            "age": 26,
            "team": {
                "id": 21,
                "conference": "NFC",
                "division": "EAST",
                "location": "Philadelphia",
                "name": "Eagles",
                "full_name": "Philadelphia Eagles",
                "abbreviation": "PHI"
            }
        })
    }

    #[test]
    fn params_are_mapped_field_by_field() {
        let params = FindPlayersParams {
            cursor: Some(7),
            per_page: Some(10),
            team_ids: Some(vec![21]),
            search: Some("hurts".to_string()),
            first_name: Some("Jalen".to_string()),
            last_name: Some("Hurts".to_string()),
        };

        assert_eq!(
            map_params(params),
            GetPlayersParams {
                cursor: Some(7),
                per_page: Some(10),
                search: Some("hurts".to_string()),
                first_name: Some("Jalen".to_string()),
                last_name: Some("Hurts".to_string()),
                team_ids: Some(vec![21]),
            }
        );
    }

    #[tokio::test]
    async fn find_by_team_sends_an_indexed_team_filter() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/players"))
            .and(query_param("team_ids[0]", "21"))
            .and(query_param("per_page", "25"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [hurts_json()],
                "meta": { "next_cursor": 34, "per_page": 25 }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let page = repository(mock_server.uri())
            .find_by_team(
                21,
                FindPlayersParams {
                    per_page: Some(25),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].full_name(), "Jalen Hurts");
        assert_eq!(page.data[0].team.as_ref().map(|t| t.id), Some(21));
        assert!(page.has_next_page());
        assert_eq!(page.meta.next_cursor, Some(34));
    }

    #[tokio::test]
    async fn search_sends_the_term() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/players"))
            .and(query_param("search", "kelce"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [],
                "meta": { "per_page": 25 }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let page = repository(mock_server.uri())
            .search("kelce", FindPlayersParams::default())
            .await
            .unwrap();

        assert!(page.data.is_empty());
        assert!(!page.has_next_page());
    }

    #[tokio::test]
    async fn player_without_team_or_optional_fields() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/players/90"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "id": 90,
                    "first_name": "Free",
                    "last_name": "Agent",
                    "position": null,
                    "jersey_number": null,
                    "age": null,
                    "team": null
                }
            })))
            .mount(&mock_server)
            .await;

        let player = repository(mock_server.uri())
            .find_by_id(90)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(player.team, None);
        assert_eq!(player.position, "");
        assert_eq!(player.jersey_number, "");
        assert_eq!(player.age, None);
    }

    #[tokio::test]
    async fn find_by_id_is_none_on_404_and_fails_on_429() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/players/1"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/players/2"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&mock_server)
            .await;

        let repository = repository(mock_server.uri());

        assert_eq!(repository.find_by_id(1).await.unwrap(), None);
        assert_eq!(
            repository.find_by_id(2).await.unwrap_err().code(),
            "RATE_LIMIT_EXCEEDED"
        );
    }
}
