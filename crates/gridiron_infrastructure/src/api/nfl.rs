// Client of the primary NFL API (teams, players and games).

use serde::Deserialize;

use gridiron_interface::games::model::GameDto;
use gridiron_interface::pagination::PaginatedResponseDto;
use gridiron_interface::players::model::PlayerDto;
use gridiron_interface::teams::model::TeamDto;

use crate::api::http_client::{ApiError, HttpClient, QueryParams};

pub const NFL_API_BASE_URL: &str = "https://api.balldontlie.io/nfl/v1";

#[derive(Debug, Clone)]
pub struct NflApiConfig {
    pub api_key: String,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetPlayersParams {
    pub cursor: Option<u64>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub team_ids: Option<Vec<u32>>,
}

impl GetPlayersParams {
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("cursor", self.cursor)
            .with_opt("per_page", self.per_page)
            .with_opt("search", self.search.as_deref())
            .with_opt("first_name", self.first_name.as_deref())
            .with_opt("last_name", self.last_name.as_deref())
            .with_indexed("team_ids", self.team_ids.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetGamesParams {
    pub cursor: Option<u64>,
    pub per_page: Option<u32>,
    pub postseason: Option<bool>,
    pub dates: Option<Vec<String>>,
    pub seasons: Option<Vec<u32>>,
    pub team_ids: Option<Vec<u32>>,
    pub weeks: Option<Vec<u32>>,
}

impl GetGamesParams {
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("cursor", self.cursor)
            .with_opt("per_page", self.per_page)
            .with_opt("postseason", self.postseason)
            .with_indexed("dates", self.dates.as_deref())
            .with_indexed("seasons", self.seasons.as_deref())
            .with_indexed("team_ids", self.team_ids.as_deref())
            .with_indexed("weeks", self.weeks.as_deref())
    }
}

// Single resources are wrapped in `{ "data": ... }`.
#[derive(Debug, Clone, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

#[derive(Debug, Clone)]
pub struct NflApiClient {
    http: HttpClient,
}

impl NflApiClient {
    pub fn new(config: NflApiConfig) -> Self {
        let base_url = config.base_url.as_deref().unwrap_or(NFL_API_BASE_URL);

        Self {
            http: HttpClient::new(base_url, Some(config.api_key)),
        }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    pub async fn get_teams(&self) -> Result<DataResponse<Vec<TeamDto>>, ApiError> {
        self.http.get("/teams", &QueryParams::new()).await
    }

    pub async fn get_team_by_id(&self, id: u32) -> Result<DataResponse<TeamDto>, ApiError> {
        self.http
            .get(&format!("/teams/{}", id), &QueryParams::new())
            .await
    }

    pub async fn get_players(
        &self,
        params: &GetPlayersParams,
    ) -> Result<PaginatedResponseDto<PlayerDto>, ApiError> {
        self.http.get("/players", &params.to_query()).await
    }

    pub async fn get_player_by_id(&self, id: u32) -> Result<DataResponse<PlayerDto>, ApiError> {
        self.http
            .get(&format!("/players/{}", id), &QueryParams::new())
            .await
    }

    pub async fn get_games(
        &self,
        params: &GetGamesParams,
    ) -> Result<PaginatedResponseDto<GameDto>, ApiError> {
        self.http.get("/games", &params.to_query()).await
    }

    pub async fn get_game_by_id(&self, id: u32) -> Result<DataResponse<GameDto>, ApiError> {
        self.http
            .get(&format!("/games/{}", id), &QueryParams::new())
            .await
    }
}
