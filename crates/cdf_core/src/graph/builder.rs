//! Canonical documents → entity graph.
//!
//! Node addresses are `{entity-type}/{natural-key}`; free-text key parts go
//! through [`slug`]. Rosters are processed before any event so that every
//! player and team mention resolves to the one canonical node.

use super::index::{EntityIndex, JoinIndex};
use super::slug::slug;
use super::store::Graph;
use crate::config::GraphConfig;
use crate::models::{EntityId, EventRow, MatchMeta, MatchSheet, SheetPlayer, TeamBlock};
use oxrdf::vocab::xsd;
use tracing::debug;

const GOAL_OUTCOMES: [&str; 2] = ["goal", "successful"];

/// A built graph plus the ids that had to be stubbed.
#[derive(Debug, Clone)]
pub struct GraphBuild {
    pub graph: Graph,
    pub stub_players: Vec<EntityId>,
    pub stub_teams: Vec<EntityId>,
}

pub fn build_graph<'a>(
    sheet: &'a MatchSheet,
    events: &'a [EventRow],
    meta: &'a MatchMeta,
    config: &GraphConfig,
) -> GraphBuild {
    let mut builder = Builder {
        graph: Graph::new(config.namespace.as_str()),
        entities: EntityIndex::new(),
        joins: JoinIndex::build(sheet),
        match_id: meta.match_id.as_str(),
        match_node: format!("match/{}", meta.match_id),
    };

    builder.add_match(meta);
    builder.add_rosters(sheet);
    builder.add_status_and_result(sheet);
    builder.add_venue(meta);
    builder.add_timeline(meta);
    for row in events {
        builder.add_event(row);
    }
    builder.add_meta(config);

    debug!(
        match_id = builder.match_id,
        triples = builder.graph.len(),
        events = events.len(),
        "graph built"
    );
    GraphBuild {
        stub_players: builder.entities.stub_players(),
        stub_teams: builder.entities.stub_teams(),
        graph: builder.graph,
    }
}

struct Builder<'a> {
    graph: Graph,
    entities: EntityIndex,
    joins: JoinIndex<'a>,
    match_id: &'a str,
    match_node: String,
}

impl<'a> Builder<'a> {
    fn add_match(&mut self, meta: &MatchMeta) {
        let m = self.match_node.clone();
        self.graph.add_type(&m, "Match");
        self.graph.add_value(&m, "id", self.match_id, None);

        for (tag, class, id) in [
            ("competition", "Competition", meta.competition_id.as_deref()),
            ("season", "Season", meta.season_id.as_deref()),
        ] {
            let Some(id) = id.filter(|id| !id.is_empty()) else { continue };
            let node = format!("{}/{}", tag, id);
            self.graph.add_type(&node, class);
            self.graph.add_value(&node, "id", id, None);
            self.graph.add_link(&m, tag, &node);
        }

        self.graph
            .add_value(&m, "kickoff_time", meta.match_kickoff_time.as_deref(), None);
    }

    fn add_rosters(&mut self, sheet: &MatchSheet) {
        for (side, team) in sheet.teams.sides() {
            self.add_team(side, team);
        }
    }

    fn add_team(&mut self, side: &str, team: &TeamBlock<SheetPlayer>) {
        let t = self.entities.register_team(&team.id);
        self.graph.add_type(&t, "Team");
        self.graph.add_value(&t, "id", team.id.as_str(), None);
        self.graph
            .add_link(&self.match_node, &format!("teams_{}", side), &t);

        for player in &team.players {
            let p = self.entities.register_player(&player.id);
            let g = &mut self.graph;
            g.add_type(&p, "Player");
            g.add_link(&t, "players", &p);
            g.add_value(&p, "id", player.id.as_str(), None);
            g.add_value(&p, "first_name", player.first_name.as_deref(), None);
            g.add_value(&p, "last_name", player.last_name.as_deref(), None);
            g.add_value(&p, "player_name", player.display_name(), None);
            g.add_value(&p, "jersey_number", player.jersey_number, Some(xsd::INTEGER));
            g.add_value(&p, "is_starter", player.is_starter, None);
            g.add_value(&p, "has_played", player.has_played, None);
            g.add_link(&p, "team_id", &t);
        }
    }

    fn add_status_and_result(&mut self, sheet: &MatchSheet) {
        let m = self.match_node.clone();
        let status = &sheet.match_info.status;
        let s = format!("match_status/{}", self.match_id);
        self.graph.add_type(&s, "Match_Status");
        self.graph.add_link(&m, "match_status", &s);
        self.graph.add_value(&s, "is_neutral", status.is_neutral, None);
        self.graph.add_value(&s, "has_extratime", status.has_extratime, None);
        self.graph.add_value(&s, "has_shootout", status.has_shootout, None);

        let result = &sheet.match_info.result;
        for (period, score) in result.periods() {
            let r = format!("match_result/{}/{}", self.match_id, slug(period));
            self.graph.add_type(&r, "Match_Result");
            self.graph.add_link(&m, "match_result", &r);
            self.graph.add_value(&r, "result_period", period, None);
            self.graph.add_value(&r, "result_home", score.home, Some(xsd::INTEGER));
            self.graph.add_value(&r, "result_away", score.away, Some(xsd::INTEGER));

            if period == "final" {
                if let Some(winner) = result.full_time.winning_team_id.as_deref() {
                    let t = self.entities.team(&mut self.graph, winner, &r);
                    self.graph.add_link(&r, "winning_team", &t);
                }
            }
        }
    }

    fn add_venue(&mut self, meta: &MatchMeta) {
        let m = self.match_node.clone();

        if let Some(sid) = meta.resolved_stadium_id() {
            let s = format!("stadium/{}", sid);
            let stadium = &meta.stadium;
            self.graph.add_type(&s, "Stadium");
            self.graph.add_value(&s, "id", sid, None);
            self.graph.add_value(&s, "name", stadium.name.as_deref(), None);
            self.graph
                .add_value(&s, "pitch_length", stadium.pitch_length, Some(xsd::FLOAT));
            self.graph
                .add_value(&s, "pitch_width", stadium.pitch_width, Some(xsd::FLOAT));
            self.graph.add_link(&m, "stadium_id", &s);
        }

        if let Some(referee) = &meta.referee {
            let id = referee.id.as_deref().filter(|id| !id.is_empty());
            let r = format!("referee/{}", id.unwrap_or("unknown"));
            self.graph.add_type(&r, "Referee");
            self.graph.add_value(&r, "id", id, None);
            self.graph.add_value(&r, "name", referee.name.as_deref(), None);
            self.graph.add_link(&m, "referee", &r);
        }
    }

    fn add_timeline(&mut self, meta: &MatchMeta) {
        let m = self.match_node.clone();

        for whistle in &meta.match_info.whistles {
            let w = format!(
                "whistle/{}/{}/{}",
                self.match_id,
                slug(&whistle.whistle_type),
                slug(&whistle.time)
            );
            self.graph.add_type(&w, "Whistle");
            self.graph.add_link(&m, "match/whistles", &w);
            self.graph.add_value(&w, "type", whistle.whistle_type.as_str(), None);
            self.graph.add_value(&w, "sub_type", whistle.sub_type.as_deref(), None);
            self.graph.add_value(&w, "time", whistle.time.as_str(), None);
        }

        for period in &meta.match_info.periods {
            let Some(direction) = period.play_direction else { continue };
            let p = format!("period/{}/{}", self.match_id, slug(&period.period_type));
            self.graph.add_type(&p, "Period");
            self.graph.add_link(&m, "match/periods", &p);
            self.graph.add_value(&p, "type", period.period_type.as_str(), None);
            self.graph.add_value(&p, "play_direction", direction.as_str(), None);
        }
    }

    fn add_event(&mut self, row: &'a EventRow) {
        let e = format!("event/{}", row.event_id);
        let g = &mut self.graph;
        g.add_type(&e, "Event");
        g.add_link(&self.match_node, "events", &e);

        g.add_value(&e, "id", row.event_id.as_str(), None);
        g.add_value(&e, "time", row.event_time.as_str(), None);
        g.add_value(&e, "event_period", row.event_period.replace(' ', "_"), None);
        g.add_value(&e, "type", row.event_type.as_str(), None);
        g.add_value(&e, "sub_type", row.event_sub_type.as_deref(), None);
        g.add_value(&e, "outcome_type", row.event_outcome_type.as_deref(), None);
        g.add_value(&e, "is_successful", row.event_is_successful, None);
        g.add_value(&e, "x", row.event_x, Some(xsd::FLOAT));
        g.add_value(&e, "y", row.event_y, Some(xsd::FLOAT));
        g.add_value(&e, "x_end", row.event_x_end, Some(xsd::FLOAT));
        g.add_value(&e, "y_end", row.event_y_end, Some(xsd::FLOAT));
        g.add_value(&e, "body_part", row.event_body_part.as_deref(), None);

        let player = row.event_player_id.as_deref().filter(|id| !id.is_empty());
        if let Some(pid) = player {
            let p = self.entities.player(&mut self.graph, pid, &e);
            self.graph.add_link(&e, "player_id", &p);
        }
        let t = self.entities.team(&mut self.graph, &row.event_team_id, &e);
        self.graph.add_link(&e, "team_id", &t);

        let outcome = row
            .event_outcome_type
            .as_deref()
            .unwrap_or("")
            .to_lowercase();

        match row.event_type.as_str() {
            "shot" => {
                self.graph.add_type(&e, "Shot");
                if GOAL_OUTCOMES.contains(&outcome.as_str()) {
                    self.add_goal(&e, row, player);
                }
            }
            "own goal for" => self.add_goal(&e, row, player),
            "pass" => {
                self.graph.add_type(&e, "Pass");
                if let Some(rid) = row.event_receiver_id.as_deref().filter(|id| !id.is_empty()) {
                    let r = self.entities.player(&mut self.graph, rid, &e);
                    self.graph.add_link(&e, "receiver_id", &r);
                }
                self.graph
                    .add_value(&e, "receiver_time", row.event_receiver_time.as_deref(), None);
            }
            "substitution" => {
                self.graph.add_type(&e, "Substitution");
                let sub = player.and_then(|pid| self.joins.substitution(&row.event_time, pid));
                if let Some(sub) = sub {
                    let out = self.entities.player(&mut self.graph, &sub.out_player_id, &e);
                    let incoming = self.entities.player(&mut self.graph, &sub.in_player_id, &e);
                    self.graph.add_link(&e, "out_player_id", &out);
                    self.graph.add_value(&e, "out_time", sub.out_time.as_str(), None);
                    self.graph.add_link(&e, "in_player_id", &incoming);
                }
            }
            _ => {}
        }

        let card = self.joins.card(&row.event_time, player);
        if row.event_type == "card" || card.is_some() {
            self.graph.add_type(&e, "Card");
            self.graph
                .add_value(&e, "card_type", card.map(|c| c.card_type.as_str()), None);
        }
    }

    fn add_goal(&mut self, e: &str, row: &'a EventRow, player: Option<&'a str>) {
        self.graph.add_type(e, "Goal");
        let Some(goal) = self.joins.goal(&row.event_time, player, &row.event_team_id) else {
            return;
        };
        if let Some(assist) = goal.assist_id.as_deref().filter(|id| !id.is_empty()) {
            let a = self.entities.player(&mut self.graph, assist, e);
            self.graph.add_link(e, "assist_id", &a);
        }
        self.graph.add_value(e, "is_own_goal", goal.is_own_goal, None);
        self.graph.add_value(e, "is_penalty", goal.is_penalty, None);
    }

    fn add_meta(&mut self, config: &GraphConfig) {
        let m = self.match_node.clone();
        let node = format!("meta/{}", self.match_id);
        self.graph.add_type(&node, "Meta");
        self.graph
            .add_value(&node, "version", config.meta_version.as_str(), None);
        self.graph.add_value(&node, "vendor", config.vendor.as_str(), None);
        for predicate in ["meta_meta", "meta_video", "meta_landmarks"] {
            self.graph.add_link(&m, predicate, &node);
        }
    }
}
