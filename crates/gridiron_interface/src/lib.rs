pub mod deserializers;
pub mod errors;
pub mod pagination;

pub mod games {
    pub mod model;
    pub mod repository;
}

pub mod player_stats {
    pub mod model;
    pub mod repository;
}

pub mod players {
    pub mod enriched;
    pub mod model;
    pub mod repository;
}

pub mod roster {
    pub mod model;
    pub mod repository;
}

pub mod teams {
    pub mod model;
    pub mod repository;
}
