//! Match context assembly: competition/season, kickoff, play direction,
//! whistles, rosters, stadium and referee.

use super::clock::match_clock;
use super::MatchFeed;
use crate::config::NormalizeConfig;
use crate::models::{
    CatalogEntry, EventKind, FormatMeta, LineupTeam, MatchMeta, MetaMatchBlock, MetaPlayer,
    PeriodRecord, PlayDirection, RawEvent, RefereeRecord, StadiumRecord, TeamBlock, TeamsBlock,
    WhistleRecord,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::warn;

pub fn build_match_meta(feed: &MatchFeed<'_>, config: &NormalizeConfig) -> MatchMeta {
    let lineups = feed.lineups;
    let entry = feed.catalog_entry;

    let competition_id = lineups
        .home
        .comp_id
        .clone()
        .or_else(|| entry.and_then(|e| e.competition_id.clone()));
    let season_id = lineups
        .home
        .season_id
        .clone()
        .or_else(|| entry.and_then(|e| e.season_id.clone()));

    let first_half = play_direction(feed.events, &lineups.home.team_id, config);
    let periods = vec![
        PeriodRecord {
            period_type: "first half".to_string(),
            play_direction: first_half,
        },
        PeriodRecord {
            period_type: "second half".to_string(),
            play_direction: first_half.map(PlayDirection::opposite),
        },
    ];

    MatchMeta {
        competition_id,
        season_id,
        match_id: feed.match_id.to_string(),
        match_kickoff_time: entry.and_then(kickoff_time),
        match_info: MetaMatchBlock {
            periods,
            whistles: whistles(feed.events),
        },
        teams: TeamsBlock {
            home: meta_roster(&lineups.home),
            away: meta_roster(&lineups.away),
        },
        stadium_id: entry.and_then(|e| e.stadium_id.clone()),
        stadium: StadiumRecord {
            id: None,
            name: entry.and_then(|e| e.stadium_name.clone()),
            pitch_length: entry.and_then(|e| e.pitch_length),
            pitch_width: entry.and_then(|e| e.pitch_width),
        },
        referee: entry.and_then(|e| e.referee.as_ref()).map(|r| RefereeRecord {
            id: r.id.clone(),
            name: r.name.clone(),
        }),
        meta: FormatMeta {
            video_perspective: None,
            event_version: config.format_version.clone(),
            event_name: config.vendor.clone(),
            meta_version: config.format_version.clone(),
            meta_name: config.vendor.clone(),
            cdf_version: config.format_version.clone(),
        },
    }
}

/// First-half direction of the home side.
///
/// Averages the along-pitch coordinate of the home team's located events in
/// the opening window of the first half. No sample, no guess.
pub fn play_direction(
    events: &[RawEvent],
    home_id: &str,
    config: &NormalizeConfig,
) -> Option<PlayDirection> {
    let xs: Vec<f64> = events
        .iter()
        .filter(|ev| ev.period == 1 && ev.minute < config.direction_window_minutes)
        .filter(|ev| ev.team_id == home_id)
        .filter_map(|ev| ev.location.map(|p| p.x))
        .collect();

    if xs.is_empty() {
        return None;
    }
    let mean = xs.iter().sum::<f64>() / xs.len() as f64;
    if mean < config.direction_midline_x {
        Some(PlayDirection::LeftRight)
    } else {
        Some(PlayDirection::RightLeft)
    }
}

/// Half-start / half-end whistles with their absolute clock.
pub fn whistles(events: &[RawEvent]) -> Vec<WhistleRecord> {
    events
        .iter()
        .filter(|ev| matches!(ev.kind, EventKind::HalfStart | EventKind::HalfEnd))
        .map(|ev| WhistleRecord {
            whistle_type: ev.type_name.to_lowercase(),
            sub_type: None,
            time: match_clock(ev),
        })
        .collect()
}

/// `{match_date}T{kick_off}Z`, normalized to millisecond precision.
pub fn kickoff_time(entry: &CatalogEntry) -> Option<String> {
    let date = entry.match_date.as_deref()?;
    let time = entry.kick_off.as_deref()?;

    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .zip(NaiveTime::parse_from_str(time, "%H:%M:%S%.f").ok());
    match parsed {
        Some((d, t)) => Some(
            NaiveDateTime::new(d, t)
                .format("%Y-%m-%dT%H:%M:%S%.3fZ")
                .to_string(),
        ),
        None => {
            warn!(match_id = %entry.match_id, date, time, "unparseable kickoff, keeping verbatim");
            Some(format!("{}T{}Z", date, time))
        }
    }
}

fn meta_roster(team: &LineupTeam) -> TeamBlock<MetaPlayer> {
    TeamBlock {
        id: team.team_id.clone(),
        players: team
            .lineup
            .iter()
            .map(|p| MetaPlayer {
                id: p.player_id.clone(),
                team_id: team.team_id.clone(),
                jersey_number: p.jersey_number,
                is_starter: p.is_starter(),
            })
            .collect(),
    }
}
