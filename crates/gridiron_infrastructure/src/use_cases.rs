pub mod games;
pub mod players;
pub mod rosters;
pub mod teams;
