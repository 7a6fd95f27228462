//! Flat event list: one canonical row per retained raw event.

use super::clock::{period_name, MatchClock};
use crate::config::NormalizeConfig;
use crate::models::{EventKind, EventRow, RawEvent, RowMeta};

const UNSUCCESSFUL_OUTCOMES: [&str; 2] = ["incomplete", "out"];

pub fn build_event_rows(
    events: &[RawEvent],
    match_id: &str,
    config: &NormalizeConfig,
) -> Vec<EventRow> {
    events
        .iter()
        .filter(|ev| is_retained(ev.kind, config))
        .map(|ev| event_row(ev, match_id))
        .collect()
}

pub fn event_row(ev: &RawEvent, match_id: &str) -> EventRow {
    let clock = MatchClock::of_event(ev);
    let outcome = ev.detail.outcome().map(str::to_lowercase);
    let pass = ev.detail.pass();

    let is_successful = match (&outcome, pass) {
        (Some(o), _) => !UNSUCCESSFUL_OUTCOMES.contains(&o.as_str()),
        (None, Some(_)) => true,
        (None, None) => false,
    };

    let receiver_time = pass
        .filter(|p| p.is_completed())
        .and(ev.duration)
        .map(|secs| clock.plus_seconds(secs).to_string());

    let end = ev.detail.end_location();

    EventRow {
        match_id: match_id.to_string(),
        meta: RowMeta { is_synced: false },
        event_id: ev.id.clone(),
        event_time: clock.to_string(),
        event_period: period_name(ev.period).to_string(),
        event_type: ev.type_name.to_lowercase(),
        event_sub_type: ev.detail.sub_type().map(str::to_lowercase),
        event_is_successful: is_successful,
        event_outcome_type: outcome,
        event_player_id: ev.player_id.clone(),
        event_team_id: ev.team_id.clone(),
        event_receiver_id: pass.and_then(|p| p.recipient_id.clone()),
        event_receiver_time: receiver_time,
        event_x: ev.location.map(|p| p.x),
        event_y: ev.location.map(|p| p.y),
        event_x_end: end.map(|p| p.x),
        event_y_end: end.map(|p| p.y),
        event_body_part: pass.and_then(|p| p.body_part.clone()),
        event_related_event_ids: ev.related_events.clone(),
    }
}

/// Whether a raw event of this kind contributes a row under `config`.
pub fn is_retained(kind: EventKind, config: &NormalizeConfig) -> bool {
    config.keep_meta_events || !kind.is_administrative()
}
