//! Match summary assembly: status, result, rosters and the goal /
//! substitution / card sub-event lists.

use super::clock::match_clock;
use super::correlate::FeedIndexes;
use super::score::ScoreBoard;
use super::MatchFeed;
use crate::config::NormalizeConfig;
use crate::error::{NormalizeError, Result};
use crate::models::{
    CardRecord, EventDetail, EventKind, FinalScore, GoalRecord, LineupTeam, MatchResult,
    MatchSheet, MatchStatus, RawEvent, RefereeRecord, SheetEvents, SheetMatchBlock, SheetMeta,
    SheetPlayer, SubstitutionRecord, TeamBlock, TeamsBlock,
};

pub fn build_match_sheet(
    feed: &MatchFeed<'_>,
    indexes: &FeedIndexes<'_>,
    config: &NormalizeConfig,
) -> Result<MatchSheet> {
    let home_id = feed.lineups.home.team_id.as_str();
    let away_id = feed.lineups.away.team_id.as_str();

    let mut board = ScoreBoard::new(home_id, away_id);
    let goals = extract_goals(feed.events, indexes, &mut board);

    let result = MatchResult {
        full_time: FinalScore {
            home: board.total().home,
            away: board.total().away,
            winning_team_id: board.winner(),
        },
        first_half: board.period(1),
        second_half: board.period(2),
        first_half_extratime: board.period(3),
        second_half_extratime: board.period(4),
        shootout: board.period(5),
    };

    let referees = feed
        .catalog_entry
        .and_then(|entry| entry.referee.as_ref())
        .map(|r| RefereeRecord {
            id: r.id.clone(),
            name: r.name.clone(),
        })
        .into_iter()
        .collect();

    Ok(MatchSheet {
        match_id: feed.match_id.to_string(),
        match_info: SheetMatchBlock {
            status: derive_status(feed.events),
            result,
        },
        teams: TeamsBlock {
            home: roster(&feed.lineups.home),
            away: roster(&feed.lineups.away),
        },
        referees,
        events: SheetEvents {
            goals,
            substitutions: extract_substitutions(feed.events)?,
            cards: extract_cards(feed.events),
        },
        meta: SheetMeta {
            vendor: config.vendor.clone(),
        },
    })
}

/// Extra time iff any event sits in period 3 or 4; shootout iff period 5.
pub fn derive_status(events: &[RawEvent]) -> MatchStatus {
    MatchStatus {
        is_neutral: false,
        has_extratime: events.iter().any(|ev| matches!(ev.period, 3 | 4)),
        has_shootout: events.iter().any(|ev| ev.period == 5),
    }
}

/// Goals in feed order, each stamped with the running score after it.
pub fn extract_goals(
    events: &[RawEvent],
    indexes: &FeedIndexes<'_>,
    board: &mut ScoreBoard,
) -> Vec<GoalRecord> {
    events
        .iter()
        .filter(|ev| ev.is_goal())
        .map(|ev| {
            let score = board.credit(ev.period, &ev.team_id);
            GoalRecord {
                time: match_clock(ev),
                player_id: ev.player_id.clone(),
                assist_id: indexes.assists.assist_for(&ev.id).cloned(),
                team_id: ev.team_id.clone(),
                is_own_goal: ev.is_own_goal(),
                is_penalty: ev.is_penalty(),
                score,
            }
        })
        .collect()
}

/// Substitutions with a resolved replacement; the rest is warm-up noise.
///
/// Both timestamps come from the substitution event's own clock.
pub fn extract_substitutions(events: &[RawEvent]) -> Result<Vec<SubstitutionRecord>> {
    let mut subs = Vec::new();
    for ev in events.iter().filter(|ev| ev.kind == EventKind::Substitution) {
        let EventDetail::Substitution(detail) = &ev.detail else { continue };
        let Some(incoming) = &detail.replacement_id else { continue };
        let outgoing = ev
            .player_id
            .clone()
            .ok_or_else(|| NormalizeError::missing(ev.index, Some(&ev.id), "player"))?;
        let time = match_clock(ev);
        subs.push(SubstitutionRecord {
            in_time: time.clone(),
            in_player_id: incoming.clone(),
            out_time: time,
            out_player_id: outgoing,
            team_id: ev.team_id.clone(),
        });
    }
    Ok(subs)
}

/// Cards from card, foul-committed and bad-behaviour events.
pub fn extract_cards(events: &[RawEvent]) -> Vec<CardRecord> {
    events
        .iter()
        .filter_map(|ev| {
            let card = ev.detail.card()?;
            Some(CardRecord {
                time: match_clock(ev),
                player_id: ev.player_id.clone(),
                card_type: card.card_type(),
                team_id: ev.team_id.clone(),
            })
        })
        .collect()
}

fn roster(team: &LineupTeam) -> TeamBlock<SheetPlayer> {
    let players = team
        .lineup
        .iter()
        .map(|p| {
            let (first, last) = p.name_parts();
            SheetPlayer {
                id: p.player_id.clone(),
                first_name: Some(first),
                last_name: Some(last),
                team_id: Some(team.team_id.clone()),
                jersey_number: p.jersey_number,
                is_starter: p.is_starter(),
                has_played: p.has_played(),
            }
        })
        .collect();
    TeamBlock {
        id: team.team_id.clone(),
        players,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::events_from_value;
    use insta::assert_json_snapshot;
    use serde_json::json;

    #[test]
    fn test_status_from_periods() {
        let events = events_from_value(json!([
            {"id": "a", "period": 1, "type": {"name": "Pass"}, "team": {"id": 1}},
            {"id": "b", "period": 4, "type": {"name": "Pass"}, "team": {"id": 1}}
        ]))
        .unwrap();
        assert_json_snapshot!(derive_status(&events), @r###"
        {
          "is_neutral": false,
          "has_extratime": true,
          "has_shootout": false
        }
        "###);
    }

    #[test]
    fn test_substitution_filtering() {
        let events = events_from_value(json!([
            {"id": "warmup", "period": 1, "minute": 30, "type": {"name": "Substitution"},
             "team": {"id": 1}, "player": {"id": 7}, "substitution": {"outcome": {"name": "Tactical"}}},
            {"id": "real", "period": 2, "minute": 61, "second": 5, "timestamp": "00:16:05.750",
             "type": {"name": "Substitution"}, "team": {"id": 1}, "player": {"id": 7},
             "substitution": {"replacement": {"id": 17, "name": "Ansu Fati"}}}
        ]))
        .unwrap();

        let subs = extract_substitutions(&events).unwrap();
        assert_eq!(subs.len(), 1);
        let sub = &subs[0];
        assert_eq!(sub.out_player_id, "7");
        assert_eq!(sub.in_player_id, "17");
        assert_eq!(sub.in_time, "01:01:05.750");
        assert_eq!(sub.in_time, sub.out_time);
        assert_eq!(sub.team_id, "1");
    }

    #[test]
    fn test_substitution_without_acting_player_is_error() {
        let events = events_from_value(json!([
            {"id": "s", "period": 2, "type": {"name": "Substitution"}, "team": {"id": 1},
             "substitution": {"replacement": {"id": 17}}}
        ]))
        .unwrap();
        let err = extract_substitutions(&events).unwrap_err();
        assert!(err.to_string().contains("`player`"));
    }

    #[test]
    fn test_card_normalization() {
        let events = events_from_value(json!([
            {"id": "bb", "period": 1, "minute": 12, "type": {"name": "Bad Behaviour"},
             "team": {"id": 2}, "player": {"id": 30},
             "bad_behaviour": {"card": {"type": {"name": "Yellow Card"}}}},
            {"id": "fc", "period": 2, "minute": 70, "type": {"name": "Foul Committed"},
             "team": {"id": 1}, "player": {"id": 8},
             "foul_committed": {"card": {"type": "odd"}}},
            {"id": "plain", "period": 2, "minute": 71, "type": {"name": "Foul Committed"},
             "team": {"id": 1}, "player": {"id": 8}, "foul_committed": {}}
        ]))
        .unwrap();

        let cards = extract_cards(&events);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].card_type, "yellow card");
        assert_eq!(cards[0].player_id.as_deref(), Some("30"));
        assert_eq!(cards[0].time, "00:12:00.000");
        assert_eq!(cards[1].card_type, "unknown");
    }
}
