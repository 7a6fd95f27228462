//! Canonical flat event (`event_cdf.json`, one row per retained raw event).

use super::ids::{de_id, de_opt_id, EntityId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RowMeta {
    #[serde(default, alias = "is synced")]
    pub is_synced: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventRow {
    #[serde(deserialize_with = "de_id")]
    pub match_id: EntityId,
    #[serde(default)]
    pub meta: RowMeta,
    /// Same as the source raw event id
    #[serde(deserialize_with = "de_id")]
    pub event_id: String,
    /// Absolute match clock `HH:MM:SS.mmm`
    pub event_time: String,
    /// `"first half"`, `"second half"`, ... `"unknown"`
    pub event_period: String,
    pub event_type: String,
    #[serde(default)]
    pub event_sub_type: Option<String>,
    #[serde(default)]
    pub event_is_successful: bool,
    #[serde(default)]
    pub event_outcome_type: Option<String>,
    #[serde(default, deserialize_with = "de_opt_id")]
    pub event_player_id: Option<EntityId>,
    #[serde(deserialize_with = "de_id")]
    pub event_team_id: EntityId,
    #[serde(default, deserialize_with = "de_opt_id")]
    pub event_receiver_id: Option<EntityId>,
    #[serde(default)]
    pub event_receiver_time: Option<String>,
    #[serde(default)]
    pub event_x: Option<f64>,
    #[serde(default)]
    pub event_y: Option<f64>,
    #[serde(default)]
    pub event_x_end: Option<f64>,
    #[serde(default)]
    pub event_y_end: Option<f64>,
    #[serde(default)]
    pub event_body_part: Option<String>,
    #[serde(default)]
    pub event_related_event_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_reads_legacy_shape() {
        let row: EventRow = serde_json::from_value(json!({
            "match_id": 3788741,
            "meta": {"is synced": false},
            "event_id": "9f3c",
            "event_time": "00:00:01.250",
            "event_period": "first half",
            "event_type": "pass",
            "event_player_id": 5503,
            "event_team_id": 217,
            "event_x": 60.0
        }))
        .unwrap();

        assert_eq!(row.match_id, "3788741");
        assert_eq!(row.event_player_id.as_deref(), Some("5503"));
        assert_eq!(row.event_team_id, "217");
        assert!(row.event_y.is_none());
        assert!(row.event_related_event_ids.is_empty());
    }
}
