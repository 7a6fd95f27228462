//! Canonical match context (`match_meta_cdf.json`).

use super::ids::{de_id, de_opt_id, EntityId};
use super::sheet::{RefereeRecord, TeamsBlock};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayDirection {
    #[serde(rename = "left right")]
    LeftRight,
    #[serde(rename = "right left")]
    RightLeft,
}

impl PlayDirection {
    pub fn opposite(self) -> Self {
        match self {
            PlayDirection::LeftRight => PlayDirection::RightLeft,
            PlayDirection::RightLeft => PlayDirection::LeftRight,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlayDirection::LeftRight => "left right",
            PlayDirection::RightLeft => "right left",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchMeta {
    #[serde(default, deserialize_with = "de_opt_id", alias = "competition id")]
    pub competition_id: Option<EntityId>,
    #[serde(default, deserialize_with = "de_opt_id", alias = "season id")]
    pub season_id: Option<EntityId>,
    #[serde(deserialize_with = "de_id", alias = "match id")]
    pub match_id: EntityId,
    #[serde(default, alias = "match kickoff time")]
    pub match_kickoff_time: Option<String>,
    #[serde(rename = "match", default)]
    pub match_info: MetaMatchBlock,
    pub teams: TeamsBlock<MetaPlayer>,
    #[serde(default, deserialize_with = "de_opt_id", alias = "stadium id")]
    pub stadium_id: Option<EntityId>,
    #[serde(default)]
    pub stadium: StadiumRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referee: Option<RefereeRecord>,
    #[serde(default)]
    pub meta: FormatMeta,
}

impl MatchMeta {
    /// Top-level `stadium_id`, else the id nested in the stadium block.
    pub fn resolved_stadium_id(&self) -> Option<&str> {
        self.stadium_id
            .as_deref()
            .or(self.stadium.id.as_deref())
            .filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MetaMatchBlock {
    #[serde(default)]
    pub periods: Vec<PeriodRecord>,
    #[serde(default)]
    pub whistles: Vec<WhistleRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PeriodRecord {
    #[serde(rename = "type")]
    pub period_type: String,
    #[serde(default)]
    pub play_direction: Option<PlayDirection>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WhistleRecord {
    /// `"half start"` / `"half end"`
    #[serde(rename = "type")]
    pub whistle_type: String,
    #[serde(default)]
    pub sub_type: Option<String>,
    pub time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetaPlayer {
    #[serde(deserialize_with = "de_id")]
    pub id: EntityId,
    #[serde(deserialize_with = "de_id")]
    pub team_id: EntityId,
    #[serde(default)]
    pub jersey_number: Option<u32>,
    #[serde(default)]
    pub is_starter: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StadiumRecord {
    #[serde(
        default,
        deserialize_with = "de_opt_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "pitch length")]
    pub pitch_length: Option<f64>,
    #[serde(default, alias = "pitch width")]
    pub pitch_width: Option<f64>,
}

/// Fixed-format provenance block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FormatMeta {
    #[serde(default)]
    pub video_perspective: Option<String>,
    #[serde(default)]
    pub event_version: String,
    #[serde(default)]
    pub event_name: String,
    #[serde(default)]
    pub meta_version: String,
    #[serde(default)]
    pub meta_name: String,
    #[serde(default)]
    pub cdf_version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_play_direction_wire_form() {
        assert_eq!(
            serde_json::to_value(PlayDirection::LeftRight).unwrap(),
            json!("left right")
        );
        assert_eq!(PlayDirection::RightLeft.opposite(), PlayDirection::LeftRight);
        assert_eq!(PlayDirection::LeftRight.opposite().as_str(), "right left");
    }

    #[test]
    fn test_stadium_id_falls_back_to_nested() {
        let meta: MatchMeta = serde_json::from_value(json!({
            "match id": 1,
            "teams": {"home": {"id": 1, "players": []}, "away": {"id": 2, "players": []}},
            "stadium": {"id": 44, "name": "Camp Nou", "pitch length": 105.0}
        }))
        .unwrap();

        assert_eq!(meta.match_id, "1");
        assert_eq!(meta.resolved_stadium_id(), Some("44"));
        assert_eq!(meta.stadium.pitch_length, Some(105.0));
        assert!(meta.match_info.whistles.is_empty());
    }
}
