//! Canonical match summary (`match_sheet_cdf.json`).

use super::ids::{de_id, de_opt_id, EntityId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchSheet {
    #[serde(deserialize_with = "de_id")]
    pub match_id: EntityId,
    #[serde(rename = "match")]
    pub match_info: SheetMatchBlock,
    pub teams: TeamsBlock<SheetPlayer>,
    #[serde(default)]
    pub referees: Vec<RefereeRecord>,
    #[serde(default)]
    pub events: SheetEvents,
    #[serde(default)]
    pub meta: SheetMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SheetMatchBlock {
    #[serde(default)]
    pub status: MatchStatus,
    pub result: MatchResult,
}

/// Status flags. `is_neutral` has no source signal and stays `false`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct MatchStatus {
    #[serde(alias = "is neutral")]
    pub is_neutral: bool,
    #[serde(alias = "has extratime")]
    pub has_extratime: bool,
    #[serde(alias = "has shootout")]
    pub has_shootout: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FinalScore {
    pub home: u32,
    pub away: u32,
    /// Unset on a draw
    #[serde(default, deserialize_with = "de_opt_id")]
    pub winning_team_id: Option<EntityId>,
}

/// Score broken down by period name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MatchResult {
    #[serde(rename = "final")]
    pub full_time: FinalScore,
    pub first_half: Score,
    pub second_half: Score,
    #[serde(default)]
    pub first_half_extratime: Score,
    #[serde(default)]
    pub second_half_extratime: Score,
    #[serde(default)]
    pub shootout: Score,
}

impl MatchResult {
    /// `(period label, home, away)` in document order, final first.
    pub fn periods(&self) -> [(&'static str, Score); 6] {
        [
            (
                "final",
                Score {
                    home: self.full_time.home,
                    away: self.full_time.away,
                },
            ),
            ("first_half", self.first_half),
            ("second_half", self.second_half),
            ("first_half_extratime", self.first_half_extratime),
            ("second_half_extratime", self.second_half_extratime),
            ("shootout", self.shootout),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamsBlock<P> {
    pub home: TeamBlock<P>,
    pub away: TeamBlock<P>,
}

impl<P> TeamsBlock<P> {
    /// `("home", team)`, `("away", team)`
    pub fn sides(&self) -> [(&'static str, &TeamBlock<P>); 2] {
        [("home", &self.home), ("away", &self.away)]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamBlock<P> {
    #[serde(deserialize_with = "de_id")]
    pub id: EntityId,
    #[serde(default = "Vec::new")]
    pub players: Vec<P>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SheetPlayer {
    #[serde(deserialize_with = "de_id")]
    pub id: EntityId,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "de_opt_id")]
    pub team_id: Option<EntityId>,
    #[serde(default)]
    pub jersey_number: Option<u32>,
    #[serde(default)]
    pub is_starter: bool,
    #[serde(default)]
    pub has_played: bool,
}

impl SheetPlayer {
    pub fn display_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefereeRecord {
    #[serde(default, deserialize_with = "de_opt_id")]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SheetEvents {
    #[serde(default)]
    pub goals: Vec<GoalRecord>,
    #[serde(default)]
    pub substitutions: Vec<SubstitutionRecord>,
    #[serde(default)]
    pub cards: Vec<CardRecord>,
}

/// One goal with the score *after* it was credited.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalRecord {
    pub time: String,
    #[serde(default, deserialize_with = "de_opt_id")]
    pub player_id: Option<EntityId>,
    #[serde(default, deserialize_with = "de_opt_id")]
    pub assist_id: Option<EntityId>,
    #[serde(deserialize_with = "de_id")]
    pub team_id: EntityId,
    #[serde(default)]
    pub is_own_goal: bool,
    #[serde(default)]
    pub is_penalty: bool,
    pub score: Score,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubstitutionRecord {
    pub in_time: String,
    #[serde(deserialize_with = "de_id")]
    pub in_player_id: EntityId,
    pub out_time: String,
    #[serde(deserialize_with = "de_id")]
    pub out_player_id: EntityId,
    #[serde(deserialize_with = "de_id")]
    pub team_id: EntityId,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardRecord {
    pub time: String,
    #[serde(default, deserialize_with = "de_opt_id")]
    pub player_id: Option<EntityId>,
    /// Lowercase, e.g. `"yellow card"`, `"unknown"`
    #[serde(rename = "type")]
    pub card_type: String,
    #[serde(deserialize_with = "de_id")]
    pub team_id: EntityId,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SheetMeta {
    pub vendor: String,
}

impl Default for SheetMeta {
    fn default() -> Self {
        Self {
            vendor: "StatsBomb".to_string(),
        }
    }
}
