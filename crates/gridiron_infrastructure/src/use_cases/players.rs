use gridiron_interface::errors::Result;
use gridiron_interface::pagination::PaginatedResponse;
use gridiron_interface::players::model::{FindPlayersParams, Player};

use crate::container::Container;

pub async fn get_players(
    container: &Container,
    params: FindPlayersParams,
) -> Result<PaginatedResponse<Player>> {
    container.player_repository()?.find_many(params).await
}

pub async fn get_player_by_id(container: &Container, id: u32) -> Result<Option<Player>> {
    container.player_repository()?.find_by_id(id).await
}

pub async fn get_players_by_team(
    container: &Container,
    team_id: u32,
    params: FindPlayersParams,
) -> Result<PaginatedResponse<Player>> {
    container
        .player_repository()?
        .find_by_team(team_id, params)
        .await
}

pub async fn search_players(
    container: &Container,
    search: &str,
    params: FindPlayersParams,
) -> Result<PaginatedResponse<Player>> {
    container.player_repository()?.search(search, params).await
}
