pub mod espn;
pub mod http_client;
pub mod nfl;
