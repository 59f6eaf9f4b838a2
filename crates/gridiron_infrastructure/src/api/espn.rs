// Client of the ESPN core API (rosters and statistics). Unauthenticated.
// Identifiers are strings and live in a different space than the NFL API ones.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use gridiron_interface::player_stats::model::EspnPlayerStatsResponseDto;
use gridiron_interface::roster::model::EspnRosterResponseDto;

use crate::api::http_client::{ApiError, HttpClient, QueryParams};
use crate::helpers::batch::{fetch_all_best_effort, BatchOutcome};

pub const ESPN_CORE_BASE_URL: &str =
    "https://sports.core.api.espn.com/v2/sports/football/leagues/nfl";

pub const DEFAULT_SEASON: u32 = 2024;

#[derive(Debug, Clone, Default)]
pub struct EspnApiConfig {
    pub base_url: Option<String>,
    pub season: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EspnRef {
    #[serde(rename = "$ref")]
    pub href: String,
}

/// Depending on the endpoint, ESPN embeds a resource or only points to it.
/// `Inline` is tried first: a bare `{ "$ref": ... }` never carries the
/// required fields of a resource.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EspnResource<T> {
    Inline(T),
    Reference(EspnRef),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EspnLinkDto {
    pub href: String,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EspnTeamDto {
    pub id: String,
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub display_name: String,
    pub abbreviation: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub logos: Vec<EspnLinkDto>,
    #[serde(default)]
    pub links: Vec<EspnLinkDto>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EspnPaginatedResponseDto<T> {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub page_index: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub page_count: u32,
    pub items: Vec<T>,
}

pub type EspnTeamsResponseDto = EspnPaginatedResponseDto<EspnResource<EspnTeamDto>>;

#[derive(Debug, Clone)]
pub struct EspnApiClient {
    http: HttpClient,
    season: u32,
}

impl EspnApiClient {
    pub fn new(config: EspnApiConfig) -> Self {
        let base_url = config.base_url.as_deref().unwrap_or(ESPN_CORE_BASE_URL);

        Self {
            http: HttpClient::new(base_url, None),
            season: config.season.unwrap_or(DEFAULT_SEASON),
        }
    }

    /// Season used when a request does not name one.
    pub fn season(&self) -> u32 {
        self.season
    }

    pub async fn get_teams(&self) -> Result<EspnTeamsResponseDto, ApiError> {
        self.http.get("/teams", &QueryParams::new()).await
    }

    /// `page` starts at 1, like `pageIndex` in the response.
    pub async fn get_teams_page(&self, page: u32) -> Result<EspnTeamsResponseDto, ApiError> {
        self.http
            .get("/teams", &QueryParams::new().with("page", page))
            .await
    }

    pub async fn get_team_by_id(&self, team_id: &str) -> Result<EspnTeamDto, ApiError> {
        self.http
            .get(&format!("/teams/{}", team_id), &QueryParams::new())
            .await
    }

    pub async fn get_team_roster(
        &self,
        team_id: &str,
        season: Option<u32>,
    ) -> Result<EspnRosterResponseDto, ApiError> {
        let season = season.unwrap_or(self.season);

        self.http
            .get(
                &format!("/seasons/{}/teams/{}", season, team_id),
                &QueryParams::new().with("enable", "roster"),
            )
            .await
    }

    pub async fn get_player_statistics(
        &self,
        player_id: &str,
        season: Option<u32>,
    ) -> Result<EspnPlayerStatsResponseDto, ApiError> {
        let season = season.unwrap_or(self.season);

        self.http
            .get(
                &format!("/seasons/{}/athletes/{}/statistics", season, player_id),
                &QueryParams::new(),
            )
            .await
    }

    /// Follow a `$ref` when needed. References are absolute urls.
    pub async fn resolve<T: DeserializeOwned>(
        &self,
        resource: EspnResource<T>,
    ) -> Result<T, ApiError> {
        match resource {
            EspnResource::Inline(value) => Ok(value),
            EspnResource::Reference(reference) => {
                self.http
                    .get_url(&reference.href, &QueryParams::new())
                    .await
            }
        }
    }

    /// Every team of every page, references resolved. A page that cannot be
    /// listed fails the call. A reference that cannot be fetched is reported
    /// in the outcome without failing the others.
    pub async fn get_teams_resolved(
        &self,
    ) -> Result<BatchOutcome<EspnTeamDto, ApiError>, ApiError> {
        let first_page = self.get_teams().await?;
        let page_count = first_page.page_count;
        let mut items = first_page.items;

        for page in 2..=page_count {
            items.extend(self.get_teams_page(page).await?.items);
        }

        let futures = items
            .into_iter()
            .map(|item| async move { self.resolve(item).await.map(Some) });

        Ok(fetch_all_best_effort("espn teams", futures).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(base_url: String) -> EspnApiClient {
        EspnApiClient::new(EspnApiConfig {
            base_url: Some(base_url),
            season: None,
        })
    }

    fn team_json(id: &str, abbreviation: &str) -> serde_json::Value {
        json!({
            "id": id,
            "uid": format!("s:20~l:28~t:{}", id),
            "displayName": "Some Team",
            "abbreviation": abbreviation,
            "name": "Team"
        })
    }

    #[test]
    fn resources_are_inline_or_references() {
        let inline: EspnResource<EspnTeamDto> =
            serde_json::from_value(team_json("21", "PHI")).unwrap();
        assert!(matches!(inline, EspnResource::Inline(ref team) if team.abbreviation == "PHI"));

        let reference: EspnResource<EspnTeamDto> =
            serde_json::from_value(json!({ "$ref": "http://espn/teams/21" })).unwrap();
        assert_eq!(
            reference,
            EspnResource::Reference(EspnRef {
                href: "http://espn/teams/21".to_string()
            })
        );
    }

    #[test]
    fn season_defaults_to_the_constant() {
        assert_eq!(
            EspnApiClient::new(EspnApiConfig::default()).season(),
            DEFAULT_SEASON
        );

        let configured = EspnApiClient::new(EspnApiConfig {
            base_url: None,
            season: Some(2023),
        });
        assert_eq!(configured.season(), 2023);
    }

    #[tokio::test]
    async fn roster_path_uses_the_default_season() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/seasons/2024/teams/21"))
            .and(query_param("enable", "roster"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "21" })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let roster = client(mock_server.uri())
            .get_team_roster("21", None)
            .await
            .unwrap();

        assert_eq!(roster.id, "21");
        assert!(roster.athletes.is_none());
    }

    #[tokio::test]
    async fn statistics_path_uses_the_given_season() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/seasons/2022/athletes/4040715/statistics"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "4040715",
                "displayName": "Jalen Hurts"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let statistics = client(mock_server.uri())
            .get_player_statistics("4040715", Some(2022))
            .await
            .unwrap();

        assert_eq!(statistics.display_name, "Jalen Hurts");
    }

    #[tokio::test]
    async fn teams_resolved_follows_references_and_keeps_going_on_failure() {
        let mock_server = MockServer::start().await;
        let uri = mock_server.uri();

        Mock::given(method("GET"))
            .and(path("/teams"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 3,
                "pageIndex": 1,
                "pageSize": 25,
                "pageCount": 1,
                "items": [
                    team_json("2", "BUF"),
                    { "$ref": format!("{}/teams/21", uri) },
                    { "$ref": format!("{}/teams/99", uri) }
                ]
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/teams/21"))
            .respond_with(ResponseTemplate::new(200).set_body_json(team_json("21", "PHI")))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/teams/99"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let outcome = client(uri).get_teams_resolved().await.unwrap();

        let abbreviations: Vec<&str> = outcome
            .items
            .iter()
            .map(|team| team.abbreviation.as_str())
            .collect();
        assert_eq!(abbreviations, vec!["BUF", "PHI"]);

        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].0, 2);
        assert_eq!(outcome.failures[0].1.status(), Some(500));
    }

    #[tokio::test]
    async fn teams_resolved_walks_every_page() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/teams"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 2,
                "pageIndex": 2,
                "pageSize": 1,
                "pageCount": 2,
                "items": [team_json("12", "KC")]
            })))
            .with_priority(1)
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/teams"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 2,
                "pageIndex": 1,
                "pageSize": 1,
                "pageCount": 2,
                "items": [team_json("21", "PHI")]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let outcome = client(mock_server.uri()).get_teams_resolved().await.unwrap();

        let abbreviations: Vec<&str> = outcome
            .items
            .iter()
            .map(|team| team.abbreviation.as_str())
            .collect();
        assert_eq!(abbreviations, vec!["PHI", "KC"]);
        assert!(outcome.is_complete());
    }

    #[tokio::test]
    async fn teams_listing_failure_is_returned() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/teams"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let error = client(mock_server.uri())
            .get_teams_resolved()
            .await
            .unwrap_err();

        assert_eq!(error.status(), Some(503));
    }
}
