use gridiron_interface::errors::Result;
use gridiron_interface::teams::model::{Conference, Division, Team};

use crate::container::Container;

pub async fn get_teams(container: &Container) -> Result<Vec<Team>> {
    container.team_repository()?.find_all().await
}

pub async fn get_team_by_id(container: &Container, id: u32) -> Result<Option<Team>> {
    container.team_repository()?.find_by_id(id).await
}

pub async fn get_teams_by_conference(
    container: &Container,
    conference: Conference,
) -> Result<Vec<Team>> {
    container
        .team_repository()?
        .find_by_conference(conference)
        .await
}

pub async fn get_teams_by_division(
    container: &Container,
    conference: Conference,
    division: Division,
) -> Result<Vec<Team>> {
    container
        .team_repository()?
        .find_by_division(conference, division)
        .await
}
