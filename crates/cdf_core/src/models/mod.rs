pub mod event_row;
pub mod ids;
pub mod meta;
pub mod raw;
pub mod sheet;

pub use event_row::{EventRow, RowMeta};
pub use ids::{EntityId, PitchPoint};
pub use meta::{
    FormatMeta, MatchMeta, MetaMatchBlock, MetaPlayer, PeriodRecord, PlayDirection,
    StadiumRecord, WhistleRecord,
};
pub use raw::{
    events_from_value, find_catalog_entry, parse_events, CardDetail, CarryDetail, CatalogEntry,
    EventDetail, EventKind, LineupPlayer, LineupPosition, LineupTeam, Lineups, PassDetail,
    PersonRef, RawEvent, ShotDetail, SubstitutionDetail,
};
pub use sheet::{
    CardRecord, FinalScore, GoalRecord, MatchResult, MatchSheet, MatchStatus, RefereeRecord,
    Score, SheetEvents, SheetMatchBlock, SheetMeta, SheetPlayer, SubstitutionRecord, TeamBlock,
    TeamsBlock,
};

/// The three canonical documents of one match.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalMatch {
    pub sheet: MatchSheet,
    pub events: Vec<EventRow>,
    pub meta: MatchMeta,
}
