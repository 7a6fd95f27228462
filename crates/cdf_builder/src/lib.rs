//! CDF Builder Library
//!
//! File-level front-end for `cdf_core`:
//! vendor JSON → three canonical documents per match directory,
//! canonical documents → one `.jsonld` file per match.

pub mod open_data;

use anyhow::{bail, Context, Result};
use cdf_core::models::{parse_events, CanonicalMatch, CatalogEntry, EventRow, Lineups};
use cdf_core::{build_graph, to_jsonld_string, CdfConfig, MatchFeed, MatchMeta, MatchSheet};
use once_cell::sync::OnceCell;
use rayon::prelude::*;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub use open_data::run_batch_normalize;

pub const SHEET_FILE: &str = "match_sheet_cdf.json";
pub const EVENTS_FILE: &str = "event_cdf.json";
pub const META_FILE: &str = "match_meta_cdf.json";
pub const UNKNOWN_MATCH: &str = "unknown_match";

fn match_id_pattern() -> Result<&'static Regex> {
    static PATTERN: OnceCell<Regex> = OnceCell::new();
    PATTERN
        .get_or_try_init(|| Regex::new(r"\d{5,}"))
        .context("Failed to compile match id pattern")
}

/// Outcome of a batch run, one entry per match (or catalog) in id order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchReport {
    pub written: Vec<String>,
    /// Inputs missing on disk; not an error
    pub skipped: Vec<String>,
    /// `(match id, error chain)`
    pub failed: Vec<(String, String)>,
}

impl BatchReport {
    pub fn merge(&mut self, other: BatchReport) {
        self.written.extend(other.written);
        self.skipped.extend(other.skipped);
        self.failed.extend(other.failed);
    }

    pub fn sort(&mut self) {
        self.written.sort();
        self.skipped.sort();
        self.failed.sort();
    }

    fn record(&mut self, id: String, outcome: MatchOutcome) {
        match outcome {
            MatchOutcome::Written => self.written.push(id),
            MatchOutcome::Skipped => self.skipped.push(id),
            MatchOutcome::Failed(err) => self.failed.push((id, err)),
        }
    }
}

/// Per-match result inside a batch.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum MatchOutcome {
    Written,
    Skipped,
    Failed(String),
}

impl MatchOutcome {
    pub(crate) fn from_result(result: Result<bool>) -> Self {
        match result {
            Ok(true) => MatchOutcome::Written,
            Ok(false) => MatchOutcome::Skipped,
            Err(err) => MatchOutcome::Failed(format!("{:#}", err)),
        }
    }
}

pub(crate) fn collect_report(outcomes: Vec<(String, MatchOutcome)>) -> BatchReport {
    let mut report = BatchReport::default();
    for (id, outcome) in outcomes {
        report.record(id, outcome);
    }
    report.sort();
    report
}

pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse JSON: {}", path.display()))
}

pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    let text = serde_json::to_string_pretty(value)?;
    fs::write(path, text)
        .with_context(|| format!("Failed to write output file: {}", path.display()))
}

/// First run of five or more digits in the file name.
pub fn infer_match_id(events_path: &Path) -> Result<String> {
    let pattern = match_id_pattern()?;
    Ok(events_path
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| pattern.find(name))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| UNKNOWN_MATCH.to_string()))
}

/// Match ids name output directories; anything that could leave the
/// output root is rejected.
pub fn check_match_id(match_id: &str) -> Result<()> {
    if match_id.is_empty()
        || match_id == "."
        || match_id == ".."
        || match_id.contains(['/', '\\'])
    {
        bail!("Invalid match id {:?}: must be a single path component", match_id);
    }
    Ok(())
}

/// Read one match's vendor files and normalize it.
pub fn normalize_files(
    events_path: &Path,
    lineup_path: &Path,
    catalog: &[CatalogEntry],
    match_id: &str,
    config: &CdfConfig,
) -> Result<CanonicalMatch> {
    let text = fs::read_to_string(events_path)
        .with_context(|| format!("Failed to read events: {}", events_path.display()))?;
    let events = parse_events(&text)
        .with_context(|| format!("Invalid events feed: {}", events_path.display()))?;

    let text = fs::read_to_string(lineup_path)
        .with_context(|| format!("Failed to read lineup: {}", lineup_path.display()))?;
    let lineups = Lineups::parse(&text)
        .with_context(|| format!("Invalid lineup: {}", lineup_path.display()))?;

    let feed = MatchFeed {
        match_id,
        events: &events,
        lineups: &lineups,
        catalog_entry: cdf_core::models::find_catalog_entry(catalog, match_id),
    };
    cdf_core::normalize_match(&feed, &config.normalize)
        .with_context(|| format!("Failed to normalize match {}", match_id))
}

/// Write the three canonical documents under `out_dir/<match_id>/`.
pub fn write_canonical(out_dir: &Path, canonical: &CanonicalMatch) -> Result<PathBuf> {
    check_match_id(&canonical.sheet.match_id)?;
    let dir = out_dir.join(&canonical.sheet.match_id);
    write_json(&dir.join(SHEET_FILE), &canonical.sheet)?;
    write_json(&dir.join(EVENTS_FILE), &canonical.events)?;
    write_json(&dir.join(META_FILE), &canonical.meta)?;
    Ok(dir)
}

/// Single-match normalize.
#[derive(Debug, Clone)]
pub struct NormalizeRequest {
    pub events: PathBuf,
    pub lineup: PathBuf,
    /// Competition/season catalog holding this match
    pub matches: Option<PathBuf>,
    /// Overrides the id inferred from the events file name
    pub match_id: Option<String>,
    pub out_dir: PathBuf,
}

pub fn run_single_normalize(request: &NormalizeRequest, config: &CdfConfig) -> Result<PathBuf> {
    let match_id = match &request.match_id {
        Some(id) => id.clone(),
        None => infer_match_id(&request.events)?,
    };
    check_match_id(&match_id)?;
    let catalog: Vec<CatalogEntry> = match &request.matches {
        Some(path) => load_json(path)?,
        None => Vec::new(),
    };

    let canonical = normalize_files(
        &request.events,
        &request.lineup,
        &catalog,
        &match_id,
        config,
    )?;
    let dir = write_canonical(&request.out_dir, &canonical)?;
    info!(match_id = %match_id, dir = %dir.display(), "canonical documents written");
    Ok(dir)
}

/// Canonical documents of one match directory, `None` if any is missing.
pub fn load_canonical(match_dir: &Path) -> Result<Option<CanonicalMatch>> {
    let paths = [SHEET_FILE, EVENTS_FILE, META_FILE].map(|name| match_dir.join(name));
    if let Some(missing) = paths.iter().find(|p| !p.is_file()) {
        warn!(dir = %match_dir.display(), missing = %missing.display(), "missing CDF files");
        return Ok(None);
    }
    let sheet: MatchSheet = load_json(&paths[0])?;
    let events: Vec<EventRow> = load_json(&paths[1])?;
    let meta: MatchMeta = load_json(&paths[2])?;
    Ok(Some(CanonicalMatch { sheet, events, meta }))
}

/// Serialize the graph of a canonical match to `out`.
pub fn write_jsonld(canonical: &CanonicalMatch, out: &Path, config: &CdfConfig) -> Result<()> {
    let build = build_graph(
        &canonical.sheet,
        &canonical.events,
        &canonical.meta,
        &config.graph,
    );
    if !build.stub_players.is_empty() || !build.stub_teams.is_empty() {
        warn!(
            match_id = %canonical.meta.match_id,
            stub_players = ?build.stub_players,
            stub_teams = ?build.stub_teams,
            "graph references entities outside the rosters"
        );
    }
    let text = to_jsonld_string(&build.graph, &config.graph)
        .with_context(|| format!("Failed to serialize match {}", canonical.meta.match_id))?;
    if let Some(parent) = out.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    fs::write(out, text)
        .with_context(|| format!("Failed to write output file: {}", out.display()))
}

/// Single-match JSON-LD from three explicit document paths.
pub fn run_single_jsonld(
    sheet: &Path,
    events: &Path,
    meta: &Path,
    out: &Path,
    config: &CdfConfig,
) -> Result<()> {
    let canonical = CanonicalMatch {
        sheet: load_json(sheet)?,
        events: load_json(events)?,
        meta: load_json(meta)?,
    };
    write_jsonld(&canonical, out, config)?;
    info!(out = %out.display(), "JSON-LD written");
    Ok(())
}

/// `match_dir` → `out_dir/<dir name>.jsonld`. `Ok(false)` when skipped.
pub fn convert_one(match_dir: &Path, out_dir: &Path, config: &CdfConfig) -> Result<bool> {
    let Some(canonical) = load_canonical(match_dir)? else {
        return Ok(false);
    };
    let name = dir_name(match_dir);
    let out = out_dir.join(format!("{}.jsonld", name));
    write_jsonld(&canonical, &out, config)?;
    Ok(true)
}

/// Every sub-directory of `root`, converted in parallel.
///
/// A failing match is recorded and the rest of the batch continues.
pub fn run_batch_jsonld(root: &Path, out_dir: &Path, config: &CdfConfig) -> Result<BatchReport> {
    let mut dirs: Vec<PathBuf> = fs::read_dir(root)
        .with_context(|| format!("Failed to list match directories: {}", root.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();

    let outcomes: Vec<(String, MatchOutcome)> = dirs
        .par_iter()
        .map(|dir| {
            let outcome = MatchOutcome::from_result(convert_one(dir, out_dir, config));
            if let MatchOutcome::Failed(err) = &outcome {
                warn!(dir = %dir.display(), error = %err, "match failed");
            }
            (dir_name(dir), outcome)
        })
        .collect();

    Ok(collect_report(outcomes))
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| UNKNOWN_MATCH.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    pub(crate) fn write_vendor_match(dir: &Path, events_name: &str) -> (PathBuf, PathBuf) {
        let events = json!([
            {"id": "p-1", "index": 1, "period": 1, "minute": 2, "second": 0,
             "timestamp": "00:02:00.100", "type": {"name": "Pass"}, "team": {"id": 1},
             "player": {"id": 10}, "location": [40.0, 40.0], "duration": 1.0,
             "pass": {"recipient": {"id": 9}, "goal_assist": true, "assisted_shot_id": "s-1"}},
            {"id": "s-1", "index": 2, "period": 1, "minute": 2, "second": 3,
             "timestamp": "00:02:03.000", "type": {"name": "Shot"}, "team": {"id": 1},
             "player": {"id": 9}, "location": [110.0, 40.0],
             "shot": {"outcome": {"name": "Goal"}, "type": {"name": "Open Play"}}}
        ]);
        let lineups = json!([
            {"team_id": 1, "team_name": "Home", "lineup": [
                {"player_id": 9, "player_name": "Nine Nine", "jersey_number": 9,
                 "positions": [{"start_reason": "Starting XI"}]},
                {"player_id": 10, "player_name": "Ten", "jersey_number": 10,
                 "positions": [{"start_reason": "Starting XI"}]}
            ]},
            {"team_id": 2, "team_name": "Away", "lineup": []}
        ]);
        let events_path = dir.join(events_name);
        let lineup_path = dir.join(format!("lineup_{}", events_name));
        write_json(&events_path, &events).unwrap();
        write_json(&lineup_path, &lineups).unwrap();
        (events_path, lineup_path)
    }

    #[test]
    fn test_infer_match_id() -> Result<()> {
        assert_eq!(infer_match_id(Path::new("data/events/3788741.json"))?, "3788741");
        assert_eq!(infer_match_id(Path::new("sb_events_22912_v2.json"))?, "22912");
        assert_eq!(infer_match_id(Path::new("/tmp/1234/events.json"))?, UNKNOWN_MATCH);
        Ok(())
    }

    #[test]
    fn test_match_id_must_stay_inside_out_dir() -> Result<()> {
        for bad in ["../x", "a/b", "a\\b", "..", ".", ""] {
            assert!(check_match_id(bad).is_err(), "{:?} accepted", bad);
        }
        check_match_id("3788741")?;

        let tmp = TempDir::new()?;
        let (events, lineup) = write_vendor_match(tmp.path(), "3788741.json");
        let out_dir = tmp.path().join("cdf");
        let request = NormalizeRequest {
            events,
            lineup,
            matches: None,
            match_id: Some("../escaped".into()),
            out_dir: out_dir.clone(),
        };
        let err = run_single_normalize(&request, &CdfConfig::default()).unwrap_err();
        assert!(err.to_string().contains("Invalid match id"));
        assert!(!tmp.path().join("escaped").exists());
        assert!(!out_dir.exists());
        Ok(())
    }

    #[test]
    fn test_single_normalize_then_jsonld() -> Result<()> {
        let tmp = TempDir::new()?;
        let (events, lineup) = write_vendor_match(tmp.path(), "3788741.json");
        let out_dir = tmp.path().join("cdf");

        let request = NormalizeRequest {
            events,
            lineup,
            matches: None,
            match_id: None,
            out_dir: out_dir.clone(),
        };
        let config = CdfConfig::default();
        let dir = run_single_normalize(&request, &config)?;
        assert_eq!(dir, out_dir.join("3788741"));

        let sheet: MatchSheet = load_json(&dir.join(SHEET_FILE))?;
        assert_eq!(sheet.events.goals.len(), 1);
        assert_eq!(sheet.events.goals[0].assist_id.as_deref(), Some("10"));

        let out = tmp.path().join("graph").join("match.jsonld");
        run_single_jsonld(
            &dir.join(SHEET_FILE),
            &dir.join(EVENTS_FILE),
            &dir.join(META_FILE),
            &out,
            &config,
        )?;
        let doc: serde_json::Value = load_json(&out)?;
        let ids: Vec<&str> = doc["@graph"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|n| n["@id"].as_str())
            .collect();
        assert!(ids.contains(&"core:match/3788741"));
        assert!(ids.contains(&"core:event/s-1"));
        Ok(())
    }

    #[test]
    fn test_batch_jsonld_skips_incomplete_dirs() -> Result<()> {
        let tmp = TempDir::new()?;
        let (events, lineup) = write_vendor_match(tmp.path(), "10001.json");
        let cdf_root = tmp.path().join("cdf");
        let config = CdfConfig::default();
        run_single_normalize(
            &NormalizeRequest {
                events,
                lineup,
                matches: None,
                match_id: None,
                out_dir: cdf_root.clone(),
            },
            &config,
        )?;

        // incomplete: sheet only
        fs::create_dir_all(cdf_root.join("20002"))?;
        fs::copy(
            cdf_root.join("10001").join(SHEET_FILE),
            cdf_root.join("20002").join(SHEET_FILE),
        )?;
        // broken: all three present, sheet unreadable
        fs::create_dir_all(cdf_root.join("30003"))?;
        for name in [EVENTS_FILE, META_FILE] {
            fs::copy(cdf_root.join("10001").join(name), cdf_root.join("30003").join(name))?;
        }
        fs::write(cdf_root.join("30003").join(SHEET_FILE), "{not json")?;

        let out_dir = tmp.path().join("jsonld");
        let report = run_batch_jsonld(&cdf_root, &out_dir, &config)?;
        assert_eq!(report.written, vec!["10001".to_string()]);
        assert_eq!(report.skipped, vec!["20002".to_string()]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, "30003");
        assert!(out_dir.join("10001.jsonld").is_file());
        assert!(!out_dir.join("20002.jsonld").exists());
        Ok(())
    }
}
