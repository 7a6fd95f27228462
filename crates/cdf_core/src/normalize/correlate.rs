//! Per-match lookup indexes built once before any document is assembled.

use crate::models::{EntityId, EventKind, RawEvent};
use rustc_hash::FxHashMap;

/// Raw events by vendor id.
#[derive(Debug, Default)]
pub struct EventIndex<'a> {
    by_id: FxHashMap<&'a str, &'a RawEvent>,
}

impl<'a> EventIndex<'a> {
    pub fn build(events: &'a [RawEvent]) -> Self {
        let by_id = events.iter().map(|ev| (ev.id.as_str(), ev)).collect();
        Self { by_id }
    }

    pub fn get(&self, id: &str) -> Option<&'a RawEvent> {
        self.by_id.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Assist provider per goal-scoring shot id.
///
/// The vendor links an assist from both ends: the pass names the shot it set
/// up (`goal_assist` + `assisted_shot_id`), and the shot names its key pass.
/// The pass-side annotation is more specific and wins; the key-pass
/// reference only fills shots the first pass left without an assist.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AssistIndex {
    by_shot: FxHashMap<String, EntityId>,
}

impl AssistIndex {
    pub fn build(events: &[RawEvent], index: &EventIndex<'_>) -> Self {
        let mut by_shot: FxHashMap<String, EntityId> = FxHashMap::default();

        for ev in events.iter().filter(|ev| ev.kind == EventKind::Pass) {
            let Some(pass) = ev.detail.pass() else { continue };
            if !pass.goal_assist {
                continue;
            }
            if let (Some(shot_id), Some(passer)) = (&pass.assisted_shot_id, &ev.player_id) {
                by_shot.insert(shot_id.clone(), passer.clone());
            }
        }

        for ev in events.iter().filter(|ev| ev.is_goal()) {
            if by_shot.contains_key(&ev.id) {
                continue;
            }
            let passer = ev
                .detail
                .shot()
                .and_then(|shot| shot.key_pass_id.as_deref())
                .and_then(|kp| index.get(kp))
                .and_then(|pass| pass.player_id.clone());
            if let Some(passer) = passer {
                by_shot.insert(ev.id.clone(), passer);
            }
        }

        Self { by_shot }
    }

    pub fn assist_for(&self, shot_id: &str) -> Option<&EntityId> {
        self.by_shot.get(shot_id)
    }

    pub fn len(&self) -> usize {
        self.by_shot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_shot.is_empty()
    }
}

/// Everything the document assemblers look up by key.
#[derive(Debug)]
pub struct FeedIndexes<'a> {
    pub events: EventIndex<'a>,
    pub assists: AssistIndex,
}

impl<'a> FeedIndexes<'a> {
    pub fn build(events: &'a [RawEvent]) -> Self {
        let index = EventIndex::build(events);
        let assists = AssistIndex::build(events, &index);
        Self {
            events: index,
            assists,
        }
    }
}
