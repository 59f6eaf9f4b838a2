use serde::{Deserialize, Serialize};

/// ESPN reports most values as numbers but some (i.g., a long "45t") as text.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    Text(String),
}

impl StatValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StatValue::Number(value) => Some(*value),
            StatValue::Text(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EspnPlayerStatDto {
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub short_display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub abbreviation: String,
    pub value: StatValue,
    #[serde(default)]
    pub display_value: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EspnStatCategoryDto {
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub abbreviation: String,
    #[serde(default)]
    pub stats: Vec<EspnPlayerStatDto>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EspnStatSplitDto {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub abbreviation: String,
    #[serde(default)]
    pub categories: Vec<EspnStatCategoryDto>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EspnPlayerStatsResponseDto {
    pub id: String,
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub splits: Option<Vec<EspnStatSplitDto>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStat {
    pub name: String, // i.g., passingYards
    pub display_name: String,
    pub short_display_name: String,
    pub description: String,
    pub abbreviation: String,
    pub value: StatValue,
    pub display_value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCategory {
    pub name: String, // i.g., passing
    pub display_name: String,
    pub abbreviation: String,
    pub stats: Vec<PlayerStat>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatSplit {
    pub display_name: String, // i.g., Regular Season
    pub categories: Vec<StatCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatistics {
    pub player_id: String, // ESPN athlete id.
    pub season: u32,
    pub display_name: String,
    pub splits: Vec<StatSplit>,
}

impl PlayerStatistics {
    fn categories(&self) -> impl Iterator<Item = &StatCategory> {
        self.splits.iter().flat_map(|split| split.categories.iter())
    }

    /// First stat named `stat_name`, searching splits in order.
    pub fn stat_by_name(&self, stat_name: &str) -> Option<&PlayerStat> {
        self.categories()
            .flat_map(|category| category.stats.iter())
            .find(|stat| stat.name == stat_name)
    }

    /// Matches the category name or its abbreviation.
    pub fn category_by_name(&self, category_name: &str) -> Option<&StatCategory> {
        self.categories().find(|category| {
            category.name == category_name || category.abbreviation == category_name
        })
    }

    pub fn stats_by_category(&self, category_name: &str) -> &[PlayerStat] {
        self.category_by_name(category_name)
            .map(|category| category.stats.as_slice())
            .unwrap_or_default()
    }

    /// Sum of every numeric value named `stat_name` across splits and categories.
    pub fn stat_total(&self, stat_name: &str) -> f64 {
        self.categories()
            .filter_map(|category| category.stats.iter().find(|stat| stat.name == stat_name))
            .filter_map(|stat| stat.value.as_number())
            .sum()
    }
}

pub fn map_player_stat_from_dto(dto: EspnPlayerStatDto) -> PlayerStat {
    PlayerStat {
        name: dto.name,
        display_name: dto.display_name,
        short_display_name: dto.short_display_name,
        description: dto.description,
        abbreviation: dto.abbreviation,
        value: dto.value,
        display_value: dto.display_value,
    }
}

pub fn map_stat_category_from_dto(dto: EspnStatCategoryDto) -> StatCategory {
    StatCategory {
        name: dto.name,
        display_name: dto.display_name,
        abbreviation: dto.abbreviation,
        stats: dto.stats.into_iter().map(map_player_stat_from_dto).collect(),
    }
}

pub fn map_stat_split_from_dto(dto: EspnStatSplitDto) -> StatSplit {
    let display_name = if dto.name.is_empty() {
        dto.abbreviation
    } else {
        dto.name
    };

    StatSplit {
        display_name,
        categories: dto
            .categories
            .into_iter()
            .map(map_stat_category_from_dto)
            .collect(),
    }
}

pub fn map_player_statistics_from_dto(
    dto: EspnPlayerStatsResponseDto,
    season: u32,
) -> PlayerStatistics {
    PlayerStatistics {
        player_id: dto.id,
        season,
        display_name: dto.display_name,
        splits: dto
            .splits
            .unwrap_or_default()
            .into_iter()
            .map(map_stat_split_from_dto)
            .collect(),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    pub(crate) fn statistics_json() -> serde_json::Value {
        json!({
            "id": "4040715",
            "uid": "s:20~l:28~a:4040715",
            "displayName": "Jalen Hurts",
            "splits": [
                {
                    "id": "0",
                    "name": "Regular Season",
                    "abbreviation": "REG",
                    "categories": [
                        {
                            "name": "passing",
                            "displayName": "Passing",
                            "abbreviation": "pass",
                            "stats": [
                                {
                                    "name": "passingYards",
                                    "displayName": "Passing Yards",
                                    "shortDisplayName": "YDS",
                                    "description": "Total passing yards",
                                    "abbreviation": "YDS",
                                    "value": 2903.0,
                                    "displayValue": "2,903"
                                },
                                {
                                    "name": "longPassing",
                                    "displayName": "Longest Pass",
                                    "abbreviation": "LNG",
                                    "value": "67t",
                                    "displayValue": "67t"
                                }
                            ]
                        },
                        {
                            "name": "rushing",
                            "displayName": "Rushing",
                            "abbreviation": "rush",
                            "stats": [
                                {
                                    "name": "rushingTouchdowns",
                                    "displayName": "Rushing Touchdowns",
                                    "abbreviation": "TD",
                                    "value": 14.0,
                                    "displayValue": "14"
                                }
                            ]
                        }
                    ]
                },
                {
                    "id": "1",
                    "name": "",
                    "abbreviation": "POST",
                    "categories": [
                        {
                            "name": "passing",
                            "displayName": "Passing",
                            "abbreviation": "pass",
                            "stats": [
                                {
                                    "name": "passingYards",
                                    "displayName": "Passing Yards",
                                    "abbreviation": "YDS",
                                    "value": 505.0,
                                    "displayValue": "505"
                                }
                            ]
                        }
                    ]
                }
            ]
        })
    }

    pub(crate) fn statistics() -> PlayerStatistics {
        let dto: EspnPlayerStatsResponseDto = serde_json::from_value(statistics_json()).unwrap();
        map_player_statistics_from_dto(dto, 2024)
    }

    #[test]
    fn splits_fall_back_to_their_abbreviation() {
        let statistics = statistics();

        assert_eq!(statistics.player_id, "4040715");
        assert_eq!(statistics.season, 2024);
        assert_eq!(statistics.splits[0].display_name, "Regular Season");
        assert_eq!(statistics.splits[1].display_name, "POST");
    }

    #[test]
    fn text_values_are_kept() {
        let statistics = statistics();

        let long = statistics.stat_by_name("longPassing").unwrap();
        assert_eq!(long.value, StatValue::Text("67t".to_string()));
        assert_eq!(long.value.as_number(), None);
    }

    #[test]
    fn lookups_by_category() {
        let statistics = statistics();

        assert_eq!(
            statistics.category_by_name("rush").unwrap().display_name,
            "Rushing"
        );
        assert_eq!(statistics.stats_by_category("passing").len(), 2);
        assert!(statistics.stats_by_category("kicking").is_empty());
        assert!(statistics.stat_by_name("fieldGoals").is_none());
    }

    #[test]
    fn stat_total_sums_numeric_values_across_splits() {
        let statistics = statistics();

        assert_eq!(statistics.stat_total("passingYards"), 3408.0);
        assert_eq!(statistics.stat_total("longPassing"), 0.0);
    }

    #[test]
    fn missing_splits_map_to_an_empty_list() {
        let dto: EspnPlayerStatsResponseDto =
            serde_json::from_value(json!({ "id": "1", "displayName": "Nobody" })).unwrap();

        assert!(map_player_statistics_from_dto(dto, 2024).splits.is_empty());
    }
}
