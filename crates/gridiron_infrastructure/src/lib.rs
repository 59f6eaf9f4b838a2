pub mod api;
pub mod container;
pub mod helpers;
pub mod repositories;
pub mod settings;
pub mod use_cases;
