//! Vendor (StatsBomb open-data) input model.
//!
//! The wire structs mirror the feed loosely; every field is optional so that
//! a malformed record produces a [`NormalizeError::MissingField`] naming the
//! event instead of an opaque serde message. Conversion into [`RawEvent`]
//! is the single place where required fields are checked and nested detail
//! objects are folded into the [`EventDetail`] union.

use super::ids::{de_id, de_opt_id, EntityId, PitchPoint};
use crate::error::{NormalizeError, Result};
use serde::Deserialize;

/// Event type tags the pipeline dispatches on. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    StartingXi,
    HalfStart,
    HalfEnd,
    Pass,
    Shot,
    Carry,
    Substitution,
    FoulCommitted,
    BadBehaviour,
    Card,
    OwnGoalFor,
    Other,
}

impl EventKind {
    pub fn from_type_name(name: &str) -> Self {
        match name {
            "Starting XI" => EventKind::StartingXi,
            "Half Start" => EventKind::HalfStart,
            "Half End" => EventKind::HalfEnd,
            "Pass" => EventKind::Pass,
            "Shot" => EventKind::Shot,
            "Carry" => EventKind::Carry,
            "Substitution" => EventKind::Substitution,
            "Foul Committed" => EventKind::FoulCommitted,
            "Bad Behaviour" => EventKind::BadBehaviour,
            "Card" => EventKind::Card,
            "Own Goal For" => EventKind::OwnGoalFor,
            _ => EventKind::Other,
        }
    }

    /// Administrative events: scanned for whistles/status, not on-pitch rows.
    pub fn is_administrative(self) -> bool {
        matches!(self, EventKind::StartingXi | EventKind::HalfStart | EventKind::HalfEnd)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PassDetail {
    pub recipient_id: Option<EntityId>,
    pub end_location: Option<PitchPoint>,
    pub body_part: Option<String>,
    pub pass_type: Option<String>,
    /// Absent outcome means the pass was completed
    pub outcome: Option<String>,
    pub goal_assist: bool,
    pub assisted_shot_id: Option<String>,
}

impl PassDetail {
    pub fn is_completed(&self) -> bool {
        self.outcome.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShotDetail {
    pub outcome: Option<String>,
    pub shot_type: Option<String>,
    pub key_pass_id: Option<String>,
    pub end_location: Option<PitchPoint>,
    pub body_part: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarryDetail {
    pub end_location: Option<PitchPoint>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubstitutionDetail {
    /// Incoming player; `None` for unresolved / warm-up noise
    pub replacement_id: Option<EntityId>,
    pub outcome: Option<String>,
}

/// Card detail, flattened from either `{type: {name}}` or `{name}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardDetail {
    pub name: Option<String>,
}

impl CardDetail {
    pub const UNKNOWN: &'static str = "unknown";

    /// Lowercase card type, `"unknown"` when the object carries no name.
    pub fn card_type(&self) -> String {
        self.name
            .as_deref()
            .unwrap_or(Self::UNKNOWN)
            .to_lowercase()
    }
}

/// Type-specific payload of a raw event.
#[derive(Debug, Clone, PartialEq)]
pub enum EventDetail {
    Pass(PassDetail),
    Shot(ShotDetail),
    Carry(CarryDetail),
    Substitution(SubstitutionDetail),
    FoulCommitted { card: Option<CardDetail> },
    BadBehaviour { card: Option<CardDetail> },
    Card { card: Option<CardDetail> },
    None,
}

impl EventDetail {
    pub fn pass(&self) -> Option<&PassDetail> {
        match self {
            EventDetail::Pass(pass) => Some(pass),
            _ => None,
        }
    }

    pub fn shot(&self) -> Option<&ShotDetail> {
        match self {
            EventDetail::Shot(shot) => Some(shot),
            _ => None,
        }
    }

    /// Nested card of a card / foul / bad-behaviour event.
    pub fn card(&self) -> Option<&CardDetail> {
        match self {
            EventDetail::FoulCommitted { card }
            | EventDetail::BadBehaviour { card }
            | EventDetail::Card { card } => card.as_ref(),
            _ => None,
        }
    }

    /// Shot type or pass type, as spelled by the vendor.
    pub fn sub_type(&self) -> Option<&str> {
        match self {
            EventDetail::Shot(shot) => shot.shot_type.as_deref(),
            EventDetail::Pass(pass) => pass.pass_type.as_deref(),
            _ => None,
        }
    }

    pub fn outcome(&self) -> Option<&str> {
        match self {
            EventDetail::Shot(shot) => shot.outcome.as_deref(),
            EventDetail::Pass(pass) => pass.outcome.as_deref(),
            _ => None,
        }
    }

    pub fn end_location(&self) -> Option<PitchPoint> {
        match self {
            EventDetail::Pass(pass) => pass.end_location,
            EventDetail::Carry(carry) => carry.end_location,
            _ => None,
        }
    }
}

/// One validated vendor event.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEvent {
    pub id: String,
    /// Position in the feed (0-based)
    pub index: usize,
    pub kind: EventKind,
    pub type_name: String,
    pub team_id: EntityId,
    pub player_id: Option<EntityId>,
    pub period: u8,
    pub minute: u32,
    pub second: u32,
    pub timestamp: Option<String>,
    pub location: Option<PitchPoint>,
    pub duration: Option<f64>,
    pub related_events: Vec<String>,
    pub detail: EventDetail,
}

impl RawEvent {
    /// Shot scored from open play or penalty, or a credited own goal.
    pub fn is_goal(&self) -> bool {
        match self.kind {
            EventKind::Shot => self
                .detail
                .shot()
                .and_then(|s| s.outcome.as_deref())
                .is_some_and(|o| o == "Goal"),
            EventKind::OwnGoalFor => true,
            _ => false,
        }
    }

    pub fn is_own_goal(&self) -> bool {
        self.kind == EventKind::OwnGoalFor
            || self
                .detail
                .shot()
                .and_then(|s| s.outcome.as_deref())
                .is_some_and(|o| o == "Own Goal")
    }

    pub fn is_penalty(&self) -> bool {
        self.detail
            .shot()
            .and_then(|s| s.shot_type.as_deref())
            .is_some_and(|t| t == "Penalty")
    }
}

// ---------------------------------------------------------------------------
// Wire shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
struct NamedWire {
    #[serde(default, deserialize_with = "de_opt_id")]
    id: Option<EntityId>,
    #[serde(default)]
    name: Option<String>,
}

fn name_of(named: Option<NamedWire>) -> Option<String> {
    named.and_then(|n| n.name)
}

fn point_of(coords: Option<Vec<f64>>) -> Option<PitchPoint> {
    coords.as_deref().and_then(PitchPoint::from_slice)
}

#[derive(Debug, Default, Deserialize)]
struct PassWire {
    recipient: Option<NamedWire>,
    end_location: Option<Vec<f64>>,
    body_part: Option<NamedWire>,
    #[serde(rename = "type")]
    pass_type: Option<NamedWire>,
    outcome: Option<NamedWire>,
    #[serde(default)]
    goal_assist: Option<bool>,
    assisted_shot_id: Option<String>,
}

impl From<PassWire> for PassDetail {
    fn from(w: PassWire) -> Self {
        Self {
            recipient_id: w.recipient.and_then(|r| r.id),
            end_location: point_of(w.end_location),
            body_part: name_of(w.body_part),
            pass_type: name_of(w.pass_type),
            outcome: name_of(w.outcome),
            goal_assist: w.goal_assist.unwrap_or(false),
            assisted_shot_id: w.assisted_shot_id,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ShotWire {
    outcome: Option<NamedWire>,
    #[serde(rename = "type")]
    shot_type: Option<NamedWire>,
    key_pass_id: Option<String>,
    end_location: Option<Vec<f64>>,
    body_part: Option<NamedWire>,
}

impl From<ShotWire> for ShotDetail {
    fn from(w: ShotWire) -> Self {
        Self {
            outcome: name_of(w.outcome),
            shot_type: name_of(w.shot_type),
            key_pass_id: w.key_pass_id,
            end_location: point_of(w.end_location),
            body_part: name_of(w.body_part),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct CarryWire {
    end_location: Option<Vec<f64>>,
}

#[derive(Debug, Default, Deserialize)]
struct SubstitutionWire {
    replacement: Option<NamedWire>,
    outcome: Option<NamedWire>,
}

#[derive(Debug, Default, Deserialize)]
struct CardWire {
    /// Either `{ "name": .. }` or something that is not an object
    #[serde(rename = "type")]
    kind: Option<serde_json::Value>,
    name: Option<String>,
}

impl From<CardWire> for CardDetail {
    fn from(w: CardWire) -> Self {
        let name = match w.kind {
            Some(serde_json::Value::Object(map)) => {
                map.get("name").and_then(|v| v.as_str()).map(str::to_string)
            }
            _ => w.name,
        };
        Self { name }
    }
}

#[derive(Debug, Default, Deserialize)]
struct CardHolderWire {
    card: Option<CardWire>,
}

#[derive(Debug, Deserialize)]
struct RawEventWire {
    #[serde(default, deserialize_with = "de_opt_id")]
    id: Option<EntityId>,
    period: Option<u8>,
    timestamp: Option<String>,
    minute: Option<u32>,
    second: Option<u32>,
    #[serde(rename = "type")]
    kind: Option<NamedWire>,
    team: Option<NamedWire>,
    player: Option<NamedWire>,
    location: Option<Vec<f64>>,
    duration: Option<f64>,
    related_events: Option<Vec<String>>,
    pass: Option<PassWire>,
    shot: Option<ShotWire>,
    carry: Option<CarryWire>,
    substitution: Option<SubstitutionWire>,
    foul_committed: Option<CardHolderWire>,
    bad_behaviour: Option<CardHolderWire>,
    card: Option<CardWire>,
}

impl RawEventWire {
    fn into_event(self, index: usize) -> Result<RawEvent> {
        let id = self
            .id
            .ok_or_else(|| NormalizeError::missing(index, None, "id"))?;
        let type_name = name_of(self.kind)
            .ok_or_else(|| NormalizeError::missing(index, Some(&id), "type"))?;
        let team_id = self
            .team
            .and_then(|t| t.id)
            .ok_or_else(|| NormalizeError::missing(index, Some(&id), "team"))?;
        let period = self
            .period
            .ok_or_else(|| NormalizeError::missing(index, Some(&id), "period"))?;

        let kind = EventKind::from_type_name(&type_name);
        let detail = match kind {
            EventKind::Pass => EventDetail::Pass(self.pass.unwrap_or_default().into()),
            EventKind::Shot => EventDetail::Shot(self.shot.unwrap_or_default().into()),
            EventKind::Carry => EventDetail::Carry(CarryDetail {
                end_location: point_of(self.carry.and_then(|c| c.end_location)),
            }),
            EventKind::Substitution => {
                let sub = self.substitution.unwrap_or_default();
                EventDetail::Substitution(SubstitutionDetail {
                    replacement_id: sub.replacement.and_then(|r| r.id),
                    outcome: name_of(sub.outcome),
                })
            }
            EventKind::FoulCommitted => EventDetail::FoulCommitted {
                card: self.foul_committed.and_then(|f| f.card).map(CardDetail::from),
            },
            EventKind::BadBehaviour => EventDetail::BadBehaviour {
                card: self.bad_behaviour.and_then(|b| b.card).map(CardDetail::from),
            },
            EventKind::Card => EventDetail::Card {
                card: self.card.map(CardDetail::from),
            },
            _ => EventDetail::None,
        };

        Ok(RawEvent {
            id,
            index,
            kind,
            type_name,
            team_id,
            player_id: self.player.and_then(|p| p.id),
            period,
            minute: self.minute.unwrap_or(0),
            second: self.second.unwrap_or(0),
            timestamp: self.timestamp,
            location: point_of(self.location),
            duration: self.duration,
            related_events: self.related_events.unwrap_or_default(),
            detail,
        })
    }
}

/// Parse a vendor event array, failing on the first event that lacks a
/// required field.
pub fn parse_events(json: &str) -> Result<Vec<RawEvent>> {
    let wire: Vec<RawEventWire> = serde_json::from_str(json)?;
    collect_events(wire)
}

pub fn events_from_value(value: serde_json::Value) -> Result<Vec<RawEvent>> {
    let wire: Vec<RawEventWire> = serde_json::from_value(value)?;
    collect_events(wire)
}

fn collect_events(wire: Vec<RawEventWire>) -> Result<Vec<RawEvent>> {
    wire.into_iter()
        .enumerate()
        .map(|(index, ev)| ev.into_event(index))
        .collect()
}

// ---------------------------------------------------------------------------
// Lineups
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LineupPosition {
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub start_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LineupPlayer {
    #[serde(deserialize_with = "de_id")]
    pub player_id: EntityId,
    pub player_name: String,
    #[serde(default)]
    pub player_nickname: Option<String>,
    #[serde(default)]
    pub jersey_number: Option<u32>,
    #[serde(default)]
    pub positions: Vec<LineupPosition>,
}

impl LineupPlayer {
    pub fn is_starter(&self) -> bool {
        self.positions
            .iter()
            .any(|p| p.start_reason.as_deref() == Some("Starting XI"))
    }

    pub fn has_played(&self) -> bool {
        !self.positions.is_empty()
    }

    /// Split on the first space: `("Lionel", "Andrés Messi Cuccittini")`.
    pub fn name_parts(&self) -> (String, String) {
        match self.player_name.split_once(' ') {
            Some((first, rest)) => (first.to_string(), rest.to_string()),
            None => (self.player_name.clone(), String::new()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LineupTeam {
    #[serde(deserialize_with = "de_id")]
    pub team_id: EntityId,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default, deserialize_with = "de_opt_id", alias = "competition_id")]
    pub comp_id: Option<EntityId>,
    #[serde(default, deserialize_with = "de_opt_id")]
    pub season_id: Option<EntityId>,
    #[serde(default)]
    pub lineup: Vec<LineupPlayer>,
}

/// Home/away lineups; the vendor lists home first.
#[derive(Debug, Clone, PartialEq)]
pub struct Lineups {
    pub home: LineupTeam,
    pub away: LineupTeam,
}

impl Lineups {
    pub fn from_teams(teams: Vec<LineupTeam>) -> Result<Self> {
        let found = teams.len();
        let mut it = teams.into_iter();
        match (it.next(), it.next(), it.next()) {
            (Some(home), Some(away), None) => Ok(Self { home, away }),
            _ => Err(NormalizeError::InvalidLineup { found }),
        }
    }

    pub fn parse(json: &str) -> Result<Self> {
        Self::from_teams(serde_json::from_str(json)?)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Self::from_teams(serde_json::from_value(value)?)
    }
}

// ---------------------------------------------------------------------------
// Match catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PersonRef {
    #[serde(default, deserialize_with = "de_opt_id")]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CompetitionWire {
    #[serde(default, deserialize_with = "de_opt_id", alias = "competition id")]
    competition_id: Option<EntityId>,
}

#[derive(Debug, Deserialize)]
struct SeasonWire {
    #[serde(default, deserialize_with = "de_opt_id", alias = "season id")]
    season_id: Option<EntityId>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntryWire {
    #[serde(deserialize_with = "de_id", alias = "match id")]
    match_id: EntityId,
    #[serde(default, alias = "match date")]
    match_date: Option<String>,
    #[serde(default, alias = "kick off")]
    kick_off: Option<String>,
    #[serde(default)]
    competition: Option<CompetitionWire>,
    #[serde(default, deserialize_with = "de_opt_id", alias = "competition id")]
    competition_id: Option<EntityId>,
    #[serde(default)]
    season: Option<SeasonWire>,
    #[serde(default, deserialize_with = "de_opt_id", alias = "season id")]
    season_id: Option<EntityId>,
    #[serde(default)]
    referee: Option<PersonRef>,
    #[serde(default)]
    stadium: Option<PersonRef>,
    #[serde(default, deserialize_with = "de_opt_id", alias = "stadium id")]
    stadium_id: Option<EntityId>,
    #[serde(default, alias = "pitch length")]
    pitch_length: Option<f64>,
    #[serde(default, alias = "pitch width")]
    pitch_width: Option<f64>,
}

/// One match of the vendor catalog, with nested/flat spellings collapsed.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(from = "CatalogEntryWire")]
pub struct CatalogEntry {
    pub match_id: EntityId,
    pub match_date: Option<String>,
    pub kick_off: Option<String>,
    pub competition_id: Option<EntityId>,
    pub season_id: Option<EntityId>,
    pub referee: Option<PersonRef>,
    pub stadium_id: Option<EntityId>,
    pub stadium_name: Option<String>,
    pub pitch_length: Option<f64>,
    pub pitch_width: Option<f64>,
}

impl From<CatalogEntryWire> for CatalogEntry {
    fn from(w: CatalogEntryWire) -> Self {
        let (nested_stadium_id, stadium_name) = match w.stadium {
            Some(s) => (s.id, s.name),
            None => (None, None),
        };
        Self {
            match_id: w.match_id,
            match_date: w.match_date,
            kick_off: w.kick_off,
            competition_id: w.competition.and_then(|c| c.competition_id).or(w.competition_id),
            season_id: w.season.and_then(|s| s.season_id).or(w.season_id),
            referee: w.referee,
            stadium_id: nested_stadium_id.or(w.stadium_id),
            stadium_name,
            pitch_length: w.pitch_length,
            pitch_width: w.pitch_width,
        }
    }
}

/// Look up the catalog entry of one match.
pub fn find_catalog_entry<'a>(
    catalog: &'a [CatalogEntry],
    match_id: &str,
) -> Option<&'a CatalogEntry> {
    catalog.iter().find(|m| m.match_id == match_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_pass_event() {
        let events = events_from_value(json!([{
            "id": "e1", "index": 1, "period": 1, "timestamp": "00:01:02.250",
            "minute": 1, "second": 2,
            "type": {"id": 30, "name": "Pass"},
            "team": {"id": 217, "name": "Barcelona"},
            "player": {"id": 5503, "name": "Lionel Andrés Messi Cuccittini"},
            "location": [60.0, 40.0],
            "duration": 1.5,
            "pass": {
                "recipient": {"id": 5470},
                "end_location": [70.0, 35.0],
                "body_part": {"name": "Right Foot"},
                "type": {"name": "Kick Off"},
                "goal_assist": true,
                "assisted_shot_id": "s1"
            }
        }]))
        .unwrap();

        let ev = &events[0];
        assert_eq!(ev.kind, EventKind::Pass);
        assert_eq!(ev.team_id, "217");
        assert_eq!(ev.player_id.as_deref(), Some("5503"));
        let pass = ev.detail.pass().unwrap();
        assert!(pass.is_completed());
        assert!(pass.goal_assist);
        assert_eq!(pass.recipient_id.as_deref(), Some("5470"));
        assert_eq!(pass.end_location, Some(PitchPoint { x: 70.0, y: 35.0 }));
        assert_eq!(ev.detail.sub_type(), Some("Kick Off"));
    }

    #[test]
    fn test_missing_team_is_hard_failure() {
        let err = events_from_value(json!([
            {"id": "ok", "period": 1, "type": {"name": "Pass"}, "team": {"id": 1}},
            {"id": "bad", "period": 1, "type": {"name": "Pass"}}
        ]))
        .unwrap_err();

        match err {
            NormalizeError::MissingField { index, event_id, field } => {
                assert_eq!(index, 1);
                assert_eq!(event_id, "bad");
                assert_eq!(field, "team");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_type_is_hard_failure() {
        let err = events_from_value(json!([{"id": "x", "period": 1, "team": {"id": 1}}])).unwrap_err();
        assert!(err.to_string().contains("`type`"));
    }

    #[test]
    fn test_card_shapes_are_flattened() {
        let events = events_from_value(json!([
            {"id": "a", "period": 1, "type": {"name": "Bad Behaviour"}, "team": {"id": 1},
             "bad_behaviour": {"card": {"type": {"name": "Yellow Card"}}}},
            {"id": "b", "period": 1, "type": {"name": "Foul Committed"}, "team": {"id": 1},
             "foul_committed": {"card": {"id": 7, "name": "Red Card"}}},
            {"id": "c", "period": 1, "type": {"name": "Foul Committed"}, "team": {"id": 1},
             "foul_committed": {"card": {}}},
            {"id": "d", "period": 1, "type": {"name": "Foul Committed"}, "team": {"id": 1}}
        ]))
        .unwrap();

        assert_eq!(events[0].detail.card().unwrap().card_type(), "yellow card");
        assert_eq!(events[1].detail.card().unwrap().card_type(), "red card");
        assert_eq!(events[2].detail.card().unwrap().card_type(), "unknown");
        assert!(events[3].detail.card().is_none());
    }

    #[test]
    fn test_missing_detail_degrades_to_defaults() {
        let events = events_from_value(json!([
            {"id": "s", "period": 2, "type": {"name": "Shot"}, "team": {"id": 1}}
        ]))
        .unwrap();
        let ev = &events[0];
        assert_eq!(ev.detail, EventDetail::Shot(ShotDetail::default()));
        assert!(!ev.is_goal());
        assert_eq!(ev.minute, 0);
        assert!(ev.related_events.is_empty());
    }

    #[test]
    fn test_lineups_require_two_teams() {
        let err = Lineups::from_value(json!([{"team_id": 1, "lineup": []}])).unwrap_err();
        assert!(matches!(err, NormalizeError::InvalidLineup { found: 1 }));
    }

    #[test]
    fn test_lineup_player_helpers() {
        let lineups = Lineups::from_value(json!([
            {"team_id": 1, "lineup": [
                {"player_id": 10, "player_name": "Lionel Andrés Messi", "jersey_number": 10,
                 "positions": [{"position": "Right Wing", "start_reason": "Starting XI"}]},
                {"player_id": 11, "player_name": "Pedri", "positions": []}
            ]},
            {"team_id": 2, "lineup": []}
        ]))
        .unwrap();

        let messi = &lineups.home.lineup[0];
        assert!(messi.is_starter());
        assert!(messi.has_played());
        assert_eq!(
            messi.name_parts(),
            ("Lionel".to_string(), "Andrés Messi".to_string())
        );

        let pedri = &lineups.home.lineup[1];
        assert!(!pedri.is_starter());
        assert!(!pedri.has_played());
        assert_eq!(pedri.name_parts(), ("Pedri".to_string(), String::new()));
    }

    #[test]
    fn test_catalog_spellings_are_canonicalized() {
        let catalog: Vec<CatalogEntry> = serde_json::from_value(json!([
            {"match_id": 7, "match_date": "2018-06-14", "kick_off": "17:00:00.000",
             "competition": {"competition_id": 43}, "season": {"season_id": 3},
             "stadium": {"id": 5, "name": "Luzhniki"}, "referee": {"id": 9, "name": "Néstor Pitana"}},
            {"match id": "8", "competition id": 43, "season id": 3, "stadium id": 6,
             "pitch length": 105.0, "pitch width": 68.0}
        ]))
        .unwrap();

        let first = find_catalog_entry(&catalog, "7").unwrap();
        assert_eq!(first.competition_id.as_deref(), Some("43"));
        assert_eq!(first.season_id.as_deref(), Some("3"));
        assert_eq!(first.stadium_id.as_deref(), Some("5"));
        assert_eq!(first.stadium_name.as_deref(), Some("Luzhniki"));

        let second = find_catalog_entry(&catalog, "8").unwrap();
        assert_eq!(second.competition_id.as_deref(), Some("43"));
        assert_eq!(second.stadium_id.as_deref(), Some("6"));
        assert_eq!(second.pitch_length, Some(105.0));
        assert!(find_catalog_entry(&catalog, "9").is_none());
    }
}
