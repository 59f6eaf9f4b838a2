use serde::{Deserialize, Serialize};

// ESPN payloads. Identifiers of this API are strings and do not match the
// identifiers of the primary API.

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EspnPositionDto {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub abbreviation: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EspnHeadshotDto {
    pub href: String,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EspnRosterPlayerDto {
    pub id: String,
    #[serde(default)]
    pub uid: String,
    pub display_name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub jersey: Option<String>,
    #[serde(default)]
    pub position: Option<EspnPositionDto>,
    #[serde(default)]
    pub headshot: Option<EspnHeadshotDto>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EspnAthletesDto {
    #[serde(default)]
    pub items: Vec<EspnRosterPlayerDto>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EspnRosterResponseDto {
    pub id: String,
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub athletes: Option<EspnAthletesDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub abbreviation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Headshot {
    pub href: String,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterPlayer {
    pub id: String, // ESPN athlete id.
    pub display_name: String,
    pub short_name: String,
    pub jersey: Option<String>,
    pub position: Option<Position>,
    pub headshot: Option<Headshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Roster {
    pub team_id: String, // ESPN team id.
    pub season: u32,
    pub players: Vec<RosterPlayer>,
}

impl Roster {
    pub fn players_by_position(&self, position_abbreviation: &str) -> Vec<&RosterPlayer> {
        self.players
            .iter()
            .filter(|player| {
                player
                    .position
                    .as_ref()
                    .is_some_and(|position| position.abbreviation == position_abbreviation)
            })
            .collect()
    }

    pub fn player_by_jersey(&self, jersey: &str) -> Option<&RosterPlayer> {
        self.players
            .iter()
            .find(|player| player.jersey.as_deref() == Some(jersey))
    }
}

/// Sort by jersey number. Players without a numeric jersey go last (as 999).
pub fn sort_players_by_jersey(players: &[RosterPlayer]) -> Vec<RosterPlayer> {
    fn jersey_number(player: &RosterPlayer) -> u32 {
        player
            .jersey
            .as_deref()
            .and_then(|jersey| jersey.trim().parse().ok())
            .unwrap_or(999)
    }

    let mut sorted = players.to_vec();
    sorted.sort_by_key(jersey_number);
    sorted
}

pub fn map_roster_player_from_dto(dto: EspnRosterPlayerDto) -> RosterPlayer {
    RosterPlayer {
        id: dto.id,
        display_name: dto.display_name,
        short_name: dto.short_name,
        jersey: dto.jersey,
        position: dto.position.map(|position| Position {
            id: position.id,
            name: position.name,
            display_name: position.display_name,
            abbreviation: position.abbreviation,
        }),
        headshot: dto.headshot.map(|headshot| Headshot {
            href: headshot.href,
            alt: headshot.alt,
        }),
    }
}

pub fn map_roster_from_dto(dto: EspnRosterResponseDto, team_id: &str, season: u32) -> Roster {
    let players = dto
        .athletes
        .map(|athletes| {
            athletes
                .items
                .into_iter()
                .map(map_roster_player_from_dto)
                .collect()
        })
        .unwrap_or_default();

    Roster {
        team_id: team_id.to_string(),
        season,
        players,
    }
}
