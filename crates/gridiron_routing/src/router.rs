use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use gridiron_infrastructure::container::Container;
use gridiron_infrastructure::settings::Settings;

use crate::endpoints::games_endpoints::GamesRouter;
use crate::endpoints::players_endpoints::PlayersRouter;
use crate::endpoints::teams_endpoints::TeamsRouter;

pub struct ApplicationController;

impl ApplicationController {
    pub fn router(container: Arc<Container>) -> Router {
        Router::new()
            .nest(
                "/api",
                Router::new()
                    .merge(TeamsRouter::new(container.clone()))
                    .merge(PlayersRouter::new(container.clone()))
                    .merge(GamesRouter::new(container)),
            )
            // logging so we can see whats going on
            .layer(TraceLayer::new_for_http())
    }

    pub async fn run(settings: &Settings, container: Arc<Container>) {
        let router = Self::router(container);

        let listener =
            tokio::net::TcpListener::bind(&format!("127.0.0.1:{}", settings.server.port))
                .await
                .expect("Could not start the TCP listener");

        info!("listening on {}", settings.server);

        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .expect("Failed to start the server");
    }
}
