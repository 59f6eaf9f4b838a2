pub mod batch;
pub mod espn_id_mapper;
