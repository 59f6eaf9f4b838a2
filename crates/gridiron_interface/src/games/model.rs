use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::deserializers::null_as_default;
use crate::pagination::PaginationMeta;
use crate::teams::model::{map_team_from_dto, Team, TeamDto};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum GameStatus {
    Final,
    InProgress,
    Scheduled,
    // The upstream also reports quarter-by-quarter statuses ("1st Quarter", "Halftime").
    Other(String),
}

impl From<String> for GameStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "Final" => GameStatus::Final,
            "In Progress" => GameStatus::InProgress,
            "Scheduled" => GameStatus::Scheduled,
            _ => GameStatus::Other(status),
        }
    }
}

impl From<GameStatus> for String {
    fn from(status: GameStatus) -> Self {
        status.to_string()
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameStatus::Final => write!(f, "Final"),
            GameStatus::InProgress => write!(f, "In Progress"),
            GameStatus::Scheduled => write!(f, "Scheduled"),
            GameStatus::Other(status) => write!(f, "{}", status),
        }
    }
}

// Game as returned by GET /games of the primary API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GameDto {
    pub id: u32,
    pub visitor_team: TeamDto,
    pub home_team: TeamDto,
    #[serde(default, deserialize_with = "null_as_default")]
    pub home_team_score: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub visitor_team_score: u32,
    pub season: u32,
    #[serde(default)]
    pub postseason: bool,
    pub status: GameStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub week: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub time: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: u32,
    pub visitor_team: Team,
    pub home_team: Team,
    // Both scores are 0 while the game is scheduled; `time` is what matters then.
    pub home_team_score: u32,
    pub visitor_team_score: u32,
    pub season: u32,
    pub postseason: bool,
    pub status: GameStatus,
    pub week: u32,
    pub time: String, // i.g., 8:20 PM ET
    pub date: String, // YYYY-MM-DD
}

pub fn map_game_from_dto(dto: GameDto, team_mapper: impl Fn(TeamDto) -> Team) -> Game {
    Game {
        id: dto.id,
        visitor_team: team_mapper(dto.visitor_team),
        home_team: team_mapper(dto.home_team),
        home_team_score: dto.home_team_score,
        visitor_team_score: dto.visitor_team_score,
        season: dto.season,
        postseason: dto.postseason,
        status: dto.status,
        week: dto.week,
        time: dto.time,
        date: dto.date,
    }
}

impl From<GameDto> for Game {
    fn from(dto: GameDto) -> Self {
        map_game_from_dto(dto, map_team_from_dto)
    }
}

impl Game {
    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Final
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    pub fn is_scheduled(&self) -> bool {
        self.status == GameStatus::Scheduled
    }

    /// The team with the higher score of a finished game. A tie has no winner.
    pub fn winner(&self) -> Option<&Team> {
        if !self.is_finished() || self.home_team_score == self.visitor_team_score {
            return None;
        }

        if self.home_team_score > self.visitor_team_score {
            Some(&self.home_team)
        } else {
            Some(&self.visitor_team)
        }
    }

    pub fn score_display(&self) -> String {
        if self.is_scheduled() {
            return self.time.clone();
        }

        format!("{} - {}", self.visitor_team_score, self.home_team_score)
    }

    /// Short date such as "Thu, 05 Sep". Falls back to the raw date when it does not parse.
    pub fn date_display(&self) -> String {
        match NaiveDate::parse_from_str(&self.date, "%Y-%m-%d") {
            Ok(date) => date.format("%a, %d %b").to_string(),
            Err(_) => self.date.clone(),
        }
    }
}

/// Filters of a game listing. A `None` field means "no filter on this dimension",
/// values inside a list are OR-ed by the upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindGamesParams {
    pub cursor: Option<u64>,
    pub per_page: Option<u32>,
    pub dates: Option<Vec<String>>, // YYYY-MM-DD
    pub seasons: Option<Vec<u32>>,
    pub team_ids: Option<Vec<u32>>,
    pub postseason: Option<bool>,
    pub weeks: Option<Vec<u32>>,
}

impl FindGamesParams {
    /// Same filters, positioned on the page after `meta`. `None` on the last page.
    pub fn next_page(&self, meta: &PaginationMeta) -> Option<Self> {
        meta.next_cursor.map(|cursor| Self {
            cursor: Some(cursor),
            ..self.clone()
        })
    }
}
