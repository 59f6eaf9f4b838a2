use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;

use gridiron_infrastructure::container::Container;
use gridiron_infrastructure::use_cases::games;

use gridiron_interface::errors::{map_not_found_error, ResourceKind, Result};
use gridiron_interface::games::model::{FindGamesParams, Game};
use gridiron_interface::pagination::PaginatedResponse;

// Single valued filters. The repository accepts lists, the HTTP surface
// exposes the common case.
#[derive(Debug, Default, Deserialize)]
pub struct GamesQuery {
    pub cursor: Option<u64>,
    pub per_page: Option<u32>,
    pub season: Option<u32>,
    pub week: Option<u32>,
    pub team_id: Option<u32>,
    pub postseason: Option<bool>,
}

impl From<GamesQuery> for FindGamesParams {
    fn from(query: GamesQuery) -> Self {
        FindGamesParams {
            cursor: query.cursor,
            per_page: query.per_page,
            seasons: query.season.map(|season| vec![season]),
            weeks: query.week.map(|week| vec![week]),
            team_ids: query.team_id.map(|team_id| vec![team_id]),
            postseason: query.postseason,
            dates: None,
        }
    }
}

pub struct GamesRouter;

impl GamesRouter {
    pub fn new(container: Arc<Container>) -> Router {
        Router::new()
            .route("/games", get(Self::get_games))
            .route("/games/:id", get(Self::get_game))
            .with_state(container)
    }

    async fn get_games(
        State(container): State<Arc<Container>>,
        Query(query): Query<GamesQuery>,
    ) -> Result<Json<PaginatedResponse<Game>>> {
        games::get_games(&container, query.into()).await.map(Json)
    }

    async fn get_game(
        State(container): State<Arc<Container>>,
        Path(id): Path<u32>,
    ) -> Result<Json<Game>> {
        games::get_game_by_id(&container, id)
            .await?
            .map(Json)
            .ok_or_else(|| map_not_found_error(ResourceKind::Game, id))
    }
}
