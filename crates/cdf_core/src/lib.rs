//! # cdf_core - StatsBomb → Football CDF conversion
//!
//! Two pure stages over in-memory data:
//! - [`normalize`]: raw vendor events + lineups (+ optional catalog entry) into
//!   the three canonical documents (summary, flat events, context)
//! - [`graph`]: canonical documents into a typed entity graph, exported as
//!   JSON-LD
//!
//! No I/O happens here; `cdf_builder` owns files and the command line.
//!
//! ```rust
//! use cdf_core::graph::slug;
//!
//! assert_eq!(slug("First Half"), "first_half");
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod models;
pub mod normalize;

pub use config::{CdfConfig, GraphConfig, NormalizeConfig};
pub use error::{ConfigError, GraphError, NormalizeError, Result};
pub use graph::{build_graph, to_jsonld, to_jsonld_string, Graph, GraphBuild};
pub use models::{
    CanonicalMatch, CatalogEntry, EventRow, Lineups, MatchMeta, MatchSheet, RawEvent,
};
pub use normalize::{normalize_match, MatchFeed};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Graph of an already-normalized match.
pub fn graph_match(canonical: &CanonicalMatch, config: &GraphConfig) -> GraphBuild {
    build_graph(&canonical.sheet, &canonical.events, &canonical.meta, config)
}

/// Feed straight to graph, both stages with one config.
pub fn convert_match(
    feed: &MatchFeed<'_>,
    config: &CdfConfig,
) -> Result<(CanonicalMatch, GraphBuild)> {
    let canonical = normalize_match(feed, &config.normalize)?;
    let build = graph_match(&canonical, &config.graph);
    Ok((canonical, build))
}
