use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::fmt;

// Name used by the primary API documentation. Overrides `nfl_api.api_key`.
pub const API_KEY_ENV: &str = "BALLDONTLIE_API_KEY";

#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NflApi {
    // Sent as is in the Authorization header. Required to build the client.
    pub api_key: Option<String>,

    // Mostly used to point the client to a mock server.
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EspnApi {
    pub base_url: Option<String>,

    // Season used when a roster or statistics request does not name one.
    pub season: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub environment: String,
    pub server: Server,
    pub logger: Logger,
    #[serde(default)]
    pub nfl_api: NflApi,
    #[serde(default)]
    pub espn_api: EspnApi,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config = if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        };

        let mut builder = Config::builder()
            .set_default("environment", config)?
            .set_default("server.port", 8000_i64)?
            .set_default("logger.level", "info")?
            .add_source(File::with_name(&format!("config/{config}")).required(false))
            // i.g., GRIDIRON__SERVER__PORT=8080
            .add_source(Environment::with_prefix("GRIDIRON").separator("__"));

        if let Ok(api_key) = env::var(API_KEY_ENV) {
            builder = builder.set_override("nfl_api.api_key", api_key)?;
        }

        builder
            .build()?
            // Deserialize (and thus freeze) the entire configuration.
            .try_deserialize()
    }
}

impl fmt::Display for Server {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "http://localhost:{}", &self.port)
    }
}
