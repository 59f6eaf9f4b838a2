use serde::{Deserialize, Serialize};

use crate::deserializers::null_as_default;
use crate::pagination::PaginationMeta;
use crate::teams::model::{map_team_from_dto, Team, TeamDto};

// Player as returned by GET /players of the primary API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlayerDto {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub position: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub position_abbreviation: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub height: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub weight: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub jersey_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub college: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub experience: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub team: Option<TeamDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub position: String,              // i.g., Quarterback
    pub position_abbreviation: String, // i.g., QB
    pub height: String,                // i.g., 6' 5"
    pub weight: String,                // i.g., 244 lbs
    pub jersey_number: String,
    pub college: String,
    pub experience: String,
    pub age: Option<u32>,
    pub team: Option<Team>, // None when the player is not assigned to a team.
}

impl Player {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn position_display(&self) -> &str {
        if self.position_abbreviation.is_empty() {
            &self.position
        } else {
            &self.position_abbreviation
        }
    }
}

/// Map a player DTO. The team mapper is only applied when the player has a team.
pub fn map_player_from_dto(dto: PlayerDto, team_mapper: impl Fn(TeamDto) -> Team) -> Player {
    Player {
        id: dto.id,
        first_name: dto.first_name,
        last_name: dto.last_name,
        position: dto.position,
        position_abbreviation: dto.position_abbreviation,
        height: dto.height,
        weight: dto.weight,
        jersey_number: dto.jersey_number,
        college: dto.college,
        experience: dto.experience,
        age: dto.age,
        team: dto.team.map(team_mapper),
    }
}

impl From<PlayerDto> for Player {
    fn from(dto: PlayerDto) -> Self {
        map_player_from_dto(dto, map_team_from_dto)
    }
}

/// Filters of a player listing. A `None` field means "no filter on this dimension".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindPlayersParams {
    pub cursor: Option<u64>,
    pub per_page: Option<u32>,
    pub team_ids: Option<Vec<u32>>,
    pub search: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl FindPlayersParams {
    /// Same filters, positioned on the page after `meta`. `None` on the last page.
    pub fn next_page(&self, meta: &PaginationMeta) -> Option<Self> {
        meta.next_cursor.map(|cursor| Self {
            cursor: Some(cursor),
            ..self.clone()
        })
    }
}
