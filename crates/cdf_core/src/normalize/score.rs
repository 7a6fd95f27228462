//! Running score and per-period score buckets.

use crate::models::{EntityId, Score};
use rustc_hash::FxHashMap;

/// Goal counters for one match.
///
/// Goals are credited to the team the vendor credits (for own goals, the
/// benefiting side). `credit` returns the snapshot *after* the goal.
#[derive(Debug, Clone)]
pub struct ScoreBoard {
    home_id: EntityId,
    away_id: EntityId,
    totals: FxHashMap<EntityId, u32>,
    by_period: FxHashMap<(u8, EntityId), u32>,
}

impl ScoreBoard {
    pub fn new(home_id: &str, away_id: &str) -> Self {
        Self {
            home_id: home_id.to_string(),
            away_id: away_id.to_string(),
            totals: FxHashMap::default(),
            by_period: FxHashMap::default(),
        }
    }

    pub fn credit(&mut self, period: u8, team_id: &str) -> Score {
        *self.totals.entry(team_id.to_string()).or_insert(0) += 1;
        *self
            .by_period
            .entry((period, team_id.to_string()))
            .or_insert(0) += 1;
        self.total()
    }

    pub fn total(&self) -> Score {
        Score {
            home: self.totals.get(&self.home_id).copied().unwrap_or(0),
            away: self.totals.get(&self.away_id).copied().unwrap_or(0),
        }
    }

    pub fn period(&self, period: u8) -> Score {
        let goals = |team: &EntityId| {
            self.by_period
                .get(&(period, team.clone()))
                .copied()
                .unwrap_or(0)
        };
        Score {
            home: goals(&self.home_id),
            away: goals(&self.away_id),
        }
    }

    /// Team with more goals, `None` on a draw.
    pub fn winner(&self) -> Option<EntityId> {
        let total = self.total();
        match total.home.cmp(&total.away) {
            std::cmp::Ordering::Greater => Some(self.home_id.clone()),
            std::cmp::Ordering::Less => Some(self.away_id.clone()),
            std::cmp::Ordering::Equal => None,
        }
    }
}
