use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;

use gridiron_infrastructure::container::Container;
use gridiron_infrastructure::use_cases::{rosters, teams};

use gridiron_interface::errors::{map_not_found_error, AppError, ResourceKind, Result};
use gridiron_interface::player_stats::model::PlayerStatistics;
use gridiron_interface::roster::model::Roster;
use gridiron_interface::teams::model::{Conference, Division, Team};

#[derive(Debug, Default, Deserialize)]
pub struct SeasonQuery {
    pub season: Option<u32>,
}

pub struct TeamsRouter;

impl TeamsRouter {
    pub fn new(container: Arc<Container>) -> Router {
        Router::new()
            .route("/teams", get(Self::get_teams))
            .route("/teams/:id", get(Self::get_team))
            .route("/teams/:id/roster", get(Self::get_team_roster))
            .route("/teams/:id/statistics", get(Self::get_team_statistics))
            .route(
                "/teams/conference/:conference",
                get(Self::get_teams_by_conference),
            )
            .route(
                "/teams/conference/:conference/division/:division",
                get(Self::get_teams_by_division),
            )
            .with_state(container)
    }

    async fn get_teams(State(container): State<Arc<Container>>) -> Result<Json<Vec<Team>>> {
        teams::get_teams(&container).await.map(Json)
    }

    async fn get_team(
        State(container): State<Arc<Container>>,
        Path(id): Path<u32>,
    ) -> Result<Json<Team>> {
        teams::get_team_by_id(&container, id)
            .await?
            .map(Json)
            .ok_or_else(|| map_not_found_error(ResourceKind::Team, id))
    }

    async fn get_teams_by_conference(
        State(container): State<Arc<Container>>,
        Path(conference): Path<String>,
    ) -> Result<Json<Vec<Team>>> {
        let conference: Conference = conference.parse()?;

        teams::get_teams_by_conference(&container, conference)
            .await
            .map(Json)
    }

    async fn get_teams_by_division(
        State(container): State<Arc<Container>>,
        Path((conference, division)): Path<(String, String)>,
    ) -> Result<Json<Vec<Team>>> {
        let conference: Conference = conference.parse()?;
        let division: Division = division.parse()?;

        teams::get_teams_by_division(&container, conference, division)
            .await
            .map(Json)
    }

    async fn get_team_roster(
        State(container): State<Arc<Container>>,
        Path(id): Path<u32>,
        Query(query): Query<SeasonQuery>,
    ) -> Result<Json<Roster>> {
        rosters::get_team_roster(&container, id, query.season)
            .await?
            .map(Json)
            .ok_or_else(|| AppError::NotFound {
                resource: "Roster".to_string(),
                identifier: id.to_string(),
            })
    }

    async fn get_team_statistics(
        State(container): State<Arc<Container>>,
        Path(id): Path<u32>,
        Query(query): Query<SeasonQuery>,
    ) -> Result<Json<Vec<PlayerStatistics>>> {
        rosters::get_team_player_statistics(&container, id, query.season)
            .await
            .map(Json)
    }
}
