use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;

use gridiron_infrastructure::container::Container;
use gridiron_infrastructure::use_cases::{players, rosters};

use gridiron_interface::errors::{map_not_found_error, AppError, ResourceKind, Result};
use gridiron_interface::pagination::PaginatedResponse;
use gridiron_interface::player_stats::model::PlayerStatistics;
use gridiron_interface::players::enriched::EnrichedPlayer;
use gridiron_interface::players::model::{FindPlayersParams, Player};

use crate::endpoints::teams_endpoints::SeasonQuery;

#[derive(Debug, Default, Deserialize)]
pub struct PlayersQuery {
    pub cursor: Option<u64>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
    pub team_id: Option<u32>,
}

impl From<PlayersQuery> for FindPlayersParams {
    fn from(query: PlayersQuery) -> Self {
        FindPlayersParams {
            cursor: query.cursor,
            per_page: query.per_page,
            team_ids: query.team_id.map(|team_id| vec![team_id]),
            search: query.search.filter(|search| !search.trim().is_empty()),
            ..Default::default()
        }
    }
}

pub struct PlayersRouter;

impl PlayersRouter {
    pub fn new(container: Arc<Container>) -> Router {
        Router::new()
            .route("/players", get(Self::get_players))
            .route("/players/:id", get(Self::get_player))
            .route("/players/:id/enriched", get(Self::get_enriched_player))
            .route(
                "/players/espn/:espn_id/statistics",
                get(Self::get_player_statistics),
            )
            .with_state(container)
    }

    async fn get_players(
        State(container): State<Arc<Container>>,
        Query(query): Query<PlayersQuery>,
    ) -> Result<Json<PaginatedResponse<Player>>> {
        players::get_players(&container, query.into())
            .await
            .map(Json)
    }

    async fn get_player(
        State(container): State<Arc<Container>>,
        Path(id): Path<u32>,
    ) -> Result<Json<Player>> {
        players::get_player_by_id(&container, id)
            .await?
            .map(Json)
            .ok_or_else(|| map_not_found_error(ResourceKind::Player, id))
    }

    async fn get_enriched_player(
        State(container): State<Arc<Container>>,
        Path(id): Path<u32>,
        Query(query): Query<SeasonQuery>,
    ) -> Result<Json<EnrichedPlayer>> {
        rosters::get_enriched_player(&container, id, query.season)
            .await?
            .map(Json)
            .ok_or_else(|| map_not_found_error(ResourceKind::Player, id))
    }

    async fn get_player_statistics(
        State(container): State<Arc<Container>>,
        Path(espn_id): Path<String>,
        Query(query): Query<SeasonQuery>,
    ) -> Result<Json<PlayerStatistics>> {
        rosters::get_player_statistics(&container, &espn_id, query.season)
            .await?
            .map(Json)
            .ok_or_else(|| AppError::NotFound {
                resource: "Statistics".to_string(),
                identifier: espn_id,
            })
    }
}
