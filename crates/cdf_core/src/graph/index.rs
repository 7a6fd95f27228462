//! Lookup tables built once per match before any event node is written.

use super::store::Graph;
use crate::models::{CardRecord, EntityId, GoalRecord, MatchSheet, SubstitutionRecord};
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use tracing::warn;

/// Summary sub-events keyed the way event rows find them.
///
/// - goals: `(time, scorer or "", team)`
/// - substitutions: `(in_time, outgoing player)`
/// - cards: `(time, player or "")`
///
/// On duplicate keys the first record in summary order wins.
#[derive(Debug, Default)]
pub struct JoinIndex<'a> {
    goals: FxHashMap<(&'a str, &'a str, &'a str), &'a GoalRecord>,
    subs: FxHashMap<(&'a str, &'a str), &'a SubstitutionRecord>,
    cards: FxHashMap<(&'a str, &'a str), &'a CardRecord>,
}

impl<'a> JoinIndex<'a> {
    pub fn build(sheet: &'a MatchSheet) -> Self {
        let mut index = Self::default();
        for goal in &sheet.events.goals {
            let key = (
                goal.time.as_str(),
                goal.player_id.as_deref().unwrap_or(""),
                goal.team_id.as_str(),
            );
            index.goals.entry(key).or_insert(goal);
        }
        for sub in &sheet.events.substitutions {
            let key = (sub.in_time.as_str(), sub.out_player_id.as_str());
            index.subs.entry(key).or_insert(sub);
        }
        for card in &sheet.events.cards {
            let key = (card.time.as_str(), card.player_id.as_deref().unwrap_or(""));
            index.cards.entry(key).or_insert(card);
        }
        index
    }

    pub fn goal(
        &self,
        time: &'a str,
        player: Option<&'a str>,
        team: &'a str,
    ) -> Option<&'a GoalRecord> {
        self.goals.get(&(time, player.unwrap_or(""), team)).copied()
    }

    pub fn substitution(
        &self,
        time: &'a str,
        out_player: &'a str,
    ) -> Option<&'a SubstitutionRecord> {
        self.subs.get(&(time, out_player)).copied()
    }

    pub fn card(&self, time: &'a str, player: Option<&'a str>) -> Option<&'a CardRecord> {
        self.cards.get(&(time, player.unwrap_or(""))).copied()
    }
}

/// Canonical player and team nodes.
///
/// Roster processing registers every known entity; everything else that
/// mentions a player or team resolves through here. An unregistered id gets
/// a stub node carrying only its `id`, once, with a warning.
#[derive(Debug, Default)]
pub struct EntityIndex {
    players: FxHashMap<EntityId, String>,
    teams: FxHashMap<EntityId, String>,
    stub_players: BTreeSet<EntityId>,
    stub_teams: BTreeSet<EntityId>,
}

impl EntityIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_player(&mut self, id: &str) -> String {
        self.players
            .entry(id.to_string())
            .or_insert_with(|| player_node(id))
            .clone()
    }

    pub fn register_team(&mut self, id: &str) -> String {
        self.teams
            .entry(id.to_string())
            .or_insert_with(|| team_node(id))
            .clone()
    }

    /// Node of a player, synthesizing a stub for unknown ids.
    pub fn player(&mut self, graph: &mut Graph, id: &str, referrer: &str) -> String {
        if let Some(node) = self.players.get(id) {
            return node.clone();
        }
        warn!(player_id = id, referrer, "player not in any roster, adding stub node");
        let node = self.register_player(id);
        graph.add_type(&node, "Player");
        graph.add_value(&node, "id", id, None);
        self.stub_players.insert(id.to_string());
        node
    }

    /// Node of a team, synthesizing a stub for unknown ids.
    pub fn team(&mut self, graph: &mut Graph, id: &str, referrer: &str) -> String {
        if let Some(node) = self.teams.get(id) {
            return node.clone();
        }
        warn!(team_id = id, referrer, "team not in the summary, adding stub node");
        let node = self.register_team(id);
        graph.add_type(&node, "Team");
        graph.add_value(&node, "id", id, None);
        self.stub_teams.insert(id.to_string());
        node
    }

    pub fn stub_players(&self) -> Vec<EntityId> {
        self.stub_players.iter().cloned().collect()
    }

    pub fn stub_teams(&self) -> Vec<EntityId> {
        self.stub_teams.iter().cloned().collect()
    }
}

pub fn player_node(id: &str) -> String {
    format!("player/{}", id)
}

pub fn team_node(id: &str) -> String {
    format!("team/{}", id)
}
