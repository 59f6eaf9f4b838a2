use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Conference {
    Afc,
    Nfc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Division {
    East,
    West,
    North,
    South,
}

impl FromStr for Conference {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "AFC" => Ok(Conference::Afc),
            "NFC" => Ok(Conference::Nfc),
            _ => Err(AppError::ValidationError {
                msg: format!("unknown conference '{}'", s),
                field: Some("conference".to_string()),
            }),
        }
    }
}

impl FromStr for Division {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "EAST" => Ok(Division::East),
            "WEST" => Ok(Division::West),
            "NORTH" => Ok(Division::North),
            "SOUTH" => Ok(Division::South),
            _ => Err(AppError::ValidationError {
                msg: format!("unknown division '{}'", s),
                field: Some("division".to_string()),
            }),
        }
    }
}

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Conference::Afc => write!(f, "AFC"),
            Conference::Nfc => write!(f, "NFC"),
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Division::East => write!(f, "EAST"),
            Division::West => write!(f, "WEST"),
            Division::North => write!(f, "NORTH"),
            Division::South => write!(f, "SOUTH"),
        }
    }
}

// Team as returned by GET /teams of the primary API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TeamDto {
    pub id: u32,
    pub conference: Conference,
    pub division: Division,
    pub location: String,
    pub name: String,
    pub full_name: String,
    pub abbreviation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: u32,
    pub conference: Conference,
    pub division: Division,
    pub location: String, // i.g., Philadelphia
    pub name: String,     // i.g., Eagles
    pub full_name: String,
    pub abbreviation: String, // i.g., PHI. Also the only key shared with the ESPN API.
}

pub fn map_team_from_dto(dto: TeamDto) -> Team {
    Team {
        id: dto.id,
        conference: dto.conference,
        division: dto.division,
        location: dto.location,
        name: dto.name,
        full_name: dto.full_name,
        abbreviation: dto.abbreviation,
    }
}

pub fn map_team_to_dto(team: Team) -> TeamDto {
    TeamDto {
        id: team.id,
        conference: team.conference,
        division: team.division,
        location: team.location,
        name: team.name,
        full_name: team.full_name,
        abbreviation: team.abbreviation,
    }
}

impl From<TeamDto> for Team {
    fn from(dto: TeamDto) -> Self {
        map_team_from_dto(dto)
    }
}

impl From<Team> for TeamDto {
    fn from(team: Team) -> Self {
        map_team_to_dto(team)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    pub(crate) fn eagles_dto() -> TeamDto {
        TeamDto {
            id: 21,
            conference: Conference::Nfc,
            division: Division::East,
            location: "Philadelphia".to_string(),
            name: "Eagles".to_string(),
            full_name: "Philadelphia Eagles".to_string(),
            abbreviation: "PHI".to_string(),
        }
    }

    pub(crate) fn bills_dto() -> TeamDto {
        TeamDto {
            id: 4,
            conference: Conference::Afc,
            division: Division::East,
            location: "Buffalo".to_string(),
            name: "Bills".to_string(),
            full_name: "Buffalo Bills".to_string(),
            abbreviation: "BUF".to_string(),
        }
    }

    #[test]
    fn team_dto_deserializes_from_the_wire_shape() {
        let dto: TeamDto = serde_json::from_value(json!({
            "id": 21,
            "conference": "NFC",
            "division": "EAST",
            "location": "Philadelphia",
            "name": "Eagles",
            "full_name": "Philadelphia Eagles",
            "abbreviation": "PHI"
        }))
        .unwrap();

        assert_eq!(dto, eagles_dto());
    }

    #[test]
    fn full_name_is_renamed() {
        let team = map_team_from_dto(eagles_dto());

        assert_eq!(team.full_name, "Philadelphia Eagles");
        assert_eq!(team.conference, Conference::Nfc);

        let value = serde_json::to_value(&team).unwrap();
        assert_eq!(value["fullName"], "Philadelphia Eagles");
        assert!(value.get("full_name").is_none());
    }

    #[test]
    fn team_round_trips_through_the_dto() {
        for dto in [eagles_dto(), bills_dto()] {
            let team = map_team_from_dto(dto);
            assert_eq!(map_team_from_dto(map_team_to_dto(team.clone())), team);
        }
    }

    #[test]
    fn conference_and_division_parse_case_insensitively() {
        assert_eq!("afc".parse::<Conference>().unwrap(), Conference::Afc);
        assert_eq!("NFC".parse::<Conference>().unwrap(), Conference::Nfc);
        assert_eq!("North".parse::<Division>().unwrap(), Division::North);

        let error = "XFL".parse::<Conference>().unwrap_err();
        assert_eq!(error.code(), "VALIDATION_ERROR");
        assert!("CENTRAL".parse::<Division>().is_err());
    }
}
