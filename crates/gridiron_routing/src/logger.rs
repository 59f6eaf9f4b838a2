// This module setup the logger level.

use std::env;

use tracing_subscriber::EnvFilter;

pub fn setup(logger_level: &str) {
    if env::var_os("RUST_LOG").is_none() {
        let env = format!(
            "gridiron_app={logger_level},gridiron_infrastructure={logger_level},gridiron_routing={logger_level},tower_http={logger_level}"
        );

        env::set_var("RUST_LOG", env);
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}
