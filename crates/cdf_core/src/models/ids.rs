//! Identifier normalization at the input boundary.
//!
//! Vendor feeds (and older CDF files) mix numeric and string identifiers.
//! Everything downstream compares identifiers as strings, so both shapes are
//! folded into `String` during deserialization.

use serde::{Deserialize, Deserializer, Serialize};

pub type EntityId = String;

#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Int(i64),
    Str(String),
}

impl From<WireId> for EntityId {
    fn from(id: WireId) -> Self {
        match id {
            WireId::Int(n) => n.to_string(),
            WireId::Str(s) => s,
        }
    }
}

pub(crate) fn de_id<'de, D>(deserializer: D) -> Result<EntityId, D::Error>
where
    D: Deserializer<'de>,
{
    WireId::deserialize(deserializer).map(EntityId::from)
}

pub(crate) fn de_opt_id<'de, D>(deserializer: D) -> Result<Option<EntityId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<WireId>::deserialize(deserializer)?.map(EntityId::from))
}

/// Pitch coordinate in vendor units (120 × 80 for StatsBomb).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchPoint {
    pub x: f64,
    pub y: f64,
}

impl PitchPoint {
    /// Vendor locations are `[x, y]` or `[x, y, z]`; anything shorter is dropped.
    pub fn from_slice(coords: &[f64]) -> Option<Self> {
        match coords {
            [x, y, ..] => Some(Self { x: *x, y: *y }),
            _ => None,
        }
    }
}
