//! Vendor feed → canonical match documents.
//!
//! The raw events are indexed once ([`FeedIndexes`]) and the three documents
//! are then assembled from the same slice, preserving feed order.

pub mod clock;
pub mod correlate;
pub mod events;
pub mod meta;
pub mod score;
pub mod sheet;

pub use clock::{match_clock, period_name, MatchClock};
pub use correlate::{AssistIndex, EventIndex, FeedIndexes};
pub use events::build_event_rows;
pub use meta::build_match_meta;
pub use score::ScoreBoard;
pub use sheet::build_match_sheet;

use crate::config::NormalizeConfig;
use crate::error::Result;
use crate::models::{CanonicalMatch, CatalogEntry, Lineups, RawEvent};
use tracing::debug;

/// Everything the normalizer reads for one match.
#[derive(Debug, Clone, Copy)]
pub struct MatchFeed<'a> {
    pub match_id: &'a str,
    pub events: &'a [RawEvent],
    pub lineups: &'a Lineups,
    pub catalog_entry: Option<&'a CatalogEntry>,
}

pub fn normalize_match(feed: &MatchFeed<'_>, config: &NormalizeConfig) -> Result<CanonicalMatch> {
    let indexes = FeedIndexes::build(feed.events);
    debug!(
        match_id = feed.match_id,
        events = indexes.events.len(),
        assists = indexes.assists.len(),
        "feed indexed"
    );

    let sheet = build_match_sheet(feed, &indexes, config)?;
    let events = build_event_rows(feed.events, feed.match_id, config);
    let meta = build_match_meta(feed, config);

    debug!(
        match_id = feed.match_id,
        rows = events.len(),
        goals = sheet.events.goals.len(),
        "match normalized"
    );
    Ok(CanonicalMatch { sheet, events, meta })
}
