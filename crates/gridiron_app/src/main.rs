use std::sync::Arc;

use gridiron_infrastructure::{container::Container, settings::Settings};

use gridiron_routing::{logger, router::ApplicationController};

#[tokio::main]
async fn main() {
    let settings = Settings::new().expect("Could not parse settings");

    logger::setup(&settings.logger.level);

    let container = Container::from_settings(&settings);
    container
        .resolve_all()
        .expect("Could not resolve the dependency container");

    tracing::info!("starting {} server", settings.environment);

    ApplicationController::run(&settings, Arc::new(container)).await;
}
