pub mod endpoints {
    pub mod games_endpoints;
    pub mod players_endpoints;
    pub mod teams_endpoints;
}
pub mod logger;
pub mod router;
