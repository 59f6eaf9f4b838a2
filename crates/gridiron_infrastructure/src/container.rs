use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::info;

use gridiron_interface::errors::{AppError, Result};
use gridiron_interface::games::repository::GameRepositoryHandle;
use gridiron_interface::player_stats::repository::PlayerStatsRepositoryHandle;
use gridiron_interface::players::repository::PlayerRepositoryHandle;
use gridiron_interface::roster::repository::RosterRepositoryHandle;
use gridiron_interface::teams::repository::TeamRepositoryHandle;

use crate::api::espn::{EspnApiClient, EspnApiConfig};
use crate::api::nfl::{NflApiClient, NflApiConfig};
use crate::helpers::espn_id_mapper::EspnTeamIdResolver;
use crate::repositories::{
    EspnPlayerStatsRepository, EspnRosterRepository, NflGameRepository, NflPlayerRepository,
    NflTeamRepository,
};
use crate::settings::{EspnApi, NflApi, Settings, API_KEY_ENV};

/// Holds one instance of every client and repository. Each one is built on
/// first access and shared afterwards. Repositories get their client from
/// the container, so a single client configuration exists per upstream.
pub struct Container {
    nfl_api: NflApi,
    espn_api: EspnApi,

    nfl_api_client: OnceCell<Arc<NflApiClient>>,
    espn_api_client: OnceCell<Arc<EspnApiClient>>,
    espn_team_id_resolver: OnceCell<Arc<EspnTeamIdResolver>>,

    team_repository: OnceCell<TeamRepositoryHandle>,
    player_repository: OnceCell<PlayerRepositoryHandle>,
    game_repository: OnceCell<GameRepositoryHandle>,
    roster_repository: OnceCell<RosterRepositoryHandle>,
    player_stats_repository: OnceCell<PlayerStatsRepositoryHandle>,
}

impl Container {
    pub fn new(nfl_api: NflApi, espn_api: EspnApi) -> Self {
        Self {
            nfl_api,
            espn_api,
            nfl_api_client: OnceCell::new(),
            espn_api_client: OnceCell::new(),
            espn_team_id_resolver: OnceCell::new(),
            team_repository: OnceCell::new(),
            player_repository: OnceCell::new(),
            game_repository: OnceCell::new(),
            roster_repository: OnceCell::new(),
            player_stats_repository: OnceCell::new(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.nfl_api.clone(), settings.espn_api.clone())
    }

    /// Fails with a configuration error when no API key is configured.
    pub fn nfl_api_client(&self) -> Result<Arc<NflApiClient>> {
        self.nfl_api_client
            .get_or_try_init(|| {
                let api_key = self
                    .nfl_api
                    .api_key
                    .as_deref()
                    .map(str::trim)
                    .filter(|api_key| !api_key.is_empty())
                    .ok_or_else(|| AppError::ConfigError {
                        msg: format!(
                            "{} is not set. Define it in the environment or in nfl_api.api_key",
                            API_KEY_ENV
                        ),
                    })?;

                Ok(Arc::new(NflApiClient::new(NflApiConfig {
                    api_key: api_key.to_string(),
                    base_url: self.nfl_api.base_url.clone(),
                })))
            })
            .cloned()
    }

    pub fn espn_api_client(&self) -> Arc<EspnApiClient> {
        self.espn_api_client
            .get_or_init(|| {
                Arc::new(EspnApiClient::new(EspnApiConfig {
                    base_url: self.espn_api.base_url.clone(),
                    season: self.espn_api.season,
                }))
            })
            .clone()
    }

    pub fn espn_team_id_resolver(&self) -> Arc<EspnTeamIdResolver> {
        self.espn_team_id_resolver
            .get_or_init(|| Arc::new(EspnTeamIdResolver::new(self.espn_api_client())))
            .clone()
    }

    pub fn team_repository(&self) -> Result<TeamRepositoryHandle> {
        self.team_repository
            .get_or_try_init(|| {
                let repository: TeamRepositoryHandle =
                    Arc::new(NflTeamRepository::new(self.nfl_api_client()?));
                Ok(repository)
            })
            .cloned()
    }

    pub fn player_repository(&self) -> Result<PlayerRepositoryHandle> {
        self.player_repository
            .get_or_try_init(|| {
                let repository: PlayerRepositoryHandle =
                    Arc::new(NflPlayerRepository::new(self.nfl_api_client()?));
                Ok(repository)
            })
            .cloned()
    }

    pub fn game_repository(&self) -> Result<GameRepositoryHandle> {
        self.game_repository
            .get_or_try_init(|| {
                let repository: GameRepositoryHandle =
                    Arc::new(NflGameRepository::new(self.nfl_api_client()?));
                Ok(repository)
            })
            .cloned()
    }

    pub fn roster_repository(&self) -> RosterRepositoryHandle {
        self.roster_repository
            .get_or_init(|| {
                let repository: RosterRepositoryHandle =
                    Arc::new(EspnRosterRepository::new(self.espn_api_client()));
                repository
            })
            .clone()
    }

    pub fn player_stats_repository(&self) -> PlayerStatsRepositoryHandle {
        self.player_stats_repository
            .get_or_init(|| {
                let repository: PlayerStatsRepositoryHandle =
                    Arc::new(EspnPlayerStatsRepository::new(self.espn_api_client()));
                repository
            })
            .clone()
    }

    /// Build everything up front so a configuration problem shows at startup
    /// rather than on the first request.
    pub fn resolve_all(&self) -> Result<()> {
        self.team_repository()?;
        self.player_repository()?;
        self.game_repository()?;
        self.roster_repository();
        self.player_stats_repository();
        self.espn_team_id_resolver();

        info!("container resolved");
        Ok(())
    }

    /// Drop every memoized instance. The next access builds fresh ones.
    pub fn reset(&mut self) {
        self.nfl_api_client.take();
        self.espn_api_client.take();
        self.espn_team_id_resolver.take();
        self.team_repository.take();
        self.player_repository.take();
        self.game_repository.take();
        self.roster_repository.take();
        self.player_stats_repository.take();
    }
}
