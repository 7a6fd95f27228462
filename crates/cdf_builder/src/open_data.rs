//! Batch normalize over the StatsBomb open-data layout:
//!
//! ```text
//! <root>/data/matches/<competition>/<season>.json   match catalog
//! <root>/data/events/<match_id>.json                event feed
//! <root>/data/lineups/<match_id>.json               two-team lineup
//! ```

use crate::{
    check_match_id, collect_report, load_json, normalize_files, write_canonical, BatchReport,
    MatchOutcome,
};
use anyhow::Result;
use cdf_core::models::CatalogEntry;
use cdf_core::CdfConfig;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Resolved paths of the open-data tree.
#[derive(Debug, Clone)]
pub struct OpenDataLayout {
    root: PathBuf,
}

impl OpenDataLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn catalog(&self, competition: &str, season: &str) -> PathBuf {
        self.root
            .join("data")
            .join("matches")
            .join(competition)
            .join(format!("{}.json", season))
    }

    pub fn events(&self, match_id: &str) -> PathBuf {
        self.root
            .join("data")
            .join("events")
            .join(format!("{}.json", match_id))
    }

    pub fn lineups(&self, match_id: &str) -> PathBuf {
        self.root
            .join("data")
            .join("lineups")
            .join(format!("{}.json", match_id))
    }
}

/// Normalize every match of every `(competition, season)` catalog.
///
/// Missing catalogs and missing per-match files are reported as skipped;
/// an unreadable catalog or a match that fails to normalize is reported as
/// failed and the batch continues. Matches within a catalog run in parallel.
pub fn run_batch_normalize(
    root: &Path,
    competitions: &[String],
    seasons: &[String],
    out_dir: &Path,
    config: &CdfConfig,
) -> Result<BatchReport> {
    let layout = OpenDataLayout::new(root);
    let mut report = BatchReport::default();

    for competition in competitions {
        for season in seasons {
            let catalog_path = layout.catalog(competition, season);
            if !catalog_path.is_file() {
                warn!(path = %catalog_path.display(), "no match catalog, skipping");
                report.skipped.push(format!("{}/{}", competition, season));
                continue;
            }
            let catalog: Vec<CatalogEntry> = match load_json(&catalog_path) {
                Ok(catalog) => catalog,
                Err(err) => {
                    let err = format!("{:#}", err);
                    warn!(path = %catalog_path.display(), error = %err, "unreadable match catalog");
                    report.failed.push((format!("{}/{}", competition, season), err));
                    continue;
                }
            };
            info!(
                competition = %competition,
                season = %season,
                matches = catalog.len(),
                "normalizing catalog"
            );
            report.merge(normalize_catalog(&layout, &catalog, out_dir, config));
        }
    }

    report.sort();
    Ok(report)
}

fn normalize_catalog(
    layout: &OpenDataLayout,
    catalog: &[CatalogEntry],
    out_dir: &Path,
    config: &CdfConfig,
) -> BatchReport {
    let outcomes: Vec<(String, MatchOutcome)> = catalog
        .par_iter()
        .map(|entry| {
            let id = entry.match_id.clone();
            let result = normalize_one(layout, catalog, &id, out_dir, config);
            let outcome = MatchOutcome::from_result(result);
            if let MatchOutcome::Failed(err) = &outcome {
                warn!(match_id = %id, error = %err, "match failed");
            }
            (id, outcome)
        })
        .collect();
    collect_report(outcomes)
}

fn normalize_one(
    layout: &OpenDataLayout,
    catalog: &[CatalogEntry],
    match_id: &str,
    out_dir: &Path,
    config: &CdfConfig,
) -> Result<bool> {
    check_match_id(match_id)?;
    let events = layout.events(match_id);
    let lineups = layout.lineups(match_id);
    if !events.is_file() || !lineups.is_file() {
        warn!(match_id, "missing events or lineup file, skipping");
        return Ok(false);
    }
    let canonical = normalize_files(&events, &lineups, catalog, match_id, config)?;
    write_canonical(out_dir, &canonical)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{write_json, META_FILE, SHEET_FILE};
    use cdf_core::MatchMeta;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn lineup() -> serde_json::Value {
        json!([
            {"team_id": 217, "team_name": "Barcelona", "lineup": [
                {"player_id": 5503, "player_name": "Lionel Andrés Messi Cuccittini",
                 "jersey_number": 10, "positions": [{"start_reason": "Starting XI"}]}
            ]},
            {"team_id": 206, "team_name": "Deportivo Alavés", "lineup": []}
        ])
    }

    fn events() -> serde_json::Value {
        json!([
            {"id": "a", "period": 1, "minute": 1, "type": {"name": "Pass"},
             "team": {"id": 217}, "player": {"id": 5503}, "location": [30.0, 40.0]}
        ])
    }

    #[test]
    fn test_batch_over_open_data_layout() -> anyhow::Result<()> {
        let tmp = TempDir::new()?;
        let root = tmp.path().join("open-data");
        let layout = OpenDataLayout::new(&root);

        write_json(
            &layout.catalog("11", "1"),
            &json!([
                {"match_id": 15946, "match_date": "2018-08-18", "kick_off": "22:15:00.000",
                 "competition": {"competition_id": 11}, "season": {"season_id": 1},
                 "stadium": {"id": 342, "name": "Estadi Camp Nou"},
                 "referee": {"id": 581, "name": "Gil Manzano"}},
                {"match_id": 15956},
                {"match_id": 15973}
            ]),
        )?;
        write_json(&layout.events("15946"), &events())?;
        write_json(&layout.lineups("15946"), &lineup())?;
        // lineup missing for 15956
        write_json(&layout.events("15956"), &events())?;
        // broken feed: event without a type
        let untyped = json!([{"id": "x", "period": 1, "team": {"id": 1}}]);
        write_json(&layout.events("15973"), &untyped)?;
        write_json(&layout.lineups("15973"), &lineup())?;

        let out_dir = tmp.path().join("cdf");
        let competitions = vec!["11".to_string(), "99".to_string()];
        let seasons = vec!["1".to_string()];
        let config = CdfConfig::default();
        let report = run_batch_normalize(&root, &competitions, &seasons, &out_dir, &config)?;

        assert_eq!(report.written, vec!["15946".to_string()]);
        assert_eq!(report.skipped, vec!["15956".to_string(), "99/1".to_string()]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, "15973");
        assert!(report.failed[0].1.contains("`type`"));

        assert!(out_dir.join("15946").join(SHEET_FILE).is_file());
        let meta: MatchMeta = load_json(&out_dir.join("15946").join(META_FILE))?;
        assert_eq!(meta.competition_id.as_deref(), Some("11"));
        assert_eq!(meta.match_kickoff_time.as_deref(), Some("2018-08-18T22:15:00.000Z"));
        assert_eq!(meta.stadium.name.as_deref(), Some("Estadi Camp Nou"));
        assert!(!out_dir.join("15956").exists());
        assert_eq!(fs::read_dir(&out_dir)?.count(), 1);
        Ok(())
    }

    #[test]
    fn test_unreadable_catalog_does_not_stop_the_batch() -> anyhow::Result<()> {
        let tmp = TempDir::new()?;
        let root = tmp.path().join("open-data");
        let layout = OpenDataLayout::new(&root);

        let broken = layout.catalog("1", "1");
        fs::create_dir_all(broken.parent().unwrap())?;
        fs::write(&broken, "{broken")?;
        write_json(&layout.catalog("2", "1"), &json!([{"match_id": 55555}]))?;
        write_json(&layout.events("55555"), &events())?;
        write_json(&layout.lineups("55555"), &lineup())?;

        let out_dir = tmp.path().join("cdf");
        let competitions = vec!["1".to_string(), "2".to_string()];
        let seasons = vec!["1".to_string()];
        let report = run_batch_normalize(
            &root,
            &competitions,
            &seasons,
            &out_dir,
            &CdfConfig::default(),
        )?;

        assert_eq!(report.written, vec!["55555".to_string()]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, "1/1");
        assert!(report.failed[0].1.contains("Failed to parse JSON"));
        assert!(out_dir.join("55555").join(SHEET_FILE).is_file());
        Ok(())
    }
}
