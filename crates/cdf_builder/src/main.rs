//! CDF Builder CLI
//!
//! StatsBomb JSON → canonical CDF documents → JSON-LD

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "cdf_builder")]
#[command(about = "Convert StatsBomb feeds to Football CDF and JSON-LD", long_about = None)]
struct Cli {
    /// YAML config (defaults apply to anything it leaves out)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Vendor feed → match_sheet / event / match_meta CDF documents
    Normalize {
        /// Events file (single mode)
        #[arg(long, requires = "lineup", conflicts_with = "root")]
        events: Option<PathBuf>,

        /// Lineup file (single mode)
        #[arg(long, requires = "events")]
        lineup: Option<PathBuf>,

        /// Match catalog holding this match (single mode)
        #[arg(long)]
        matches: Option<PathBuf>,

        /// Match id; inferred from the events file name when absent
        #[arg(long)]
        match_id: Option<String>,

        /// Open-data checkout root (batch mode)
        #[arg(long, requires_all = ["competitions", "seasons"])]
        root: Option<PathBuf>,

        /// Competition ids (batch mode)
        #[arg(long, num_args = 1.., value_delimiter = ',')]
        competitions: Vec<String>,

        /// Season ids (batch mode)
        #[arg(long, num_args = 1.., value_delimiter = ',')]
        seasons: Vec<String>,

        /// Output directory; one sub-directory per match
        #[arg(long)]
        out_dir: PathBuf,
    },

    /// Canonical CDF documents → JSON-LD
    Jsonld {
        #[arg(long, requires_all = ["events", "meta"], conflicts_with = "root")]
        sheet: Option<PathBuf>,

        #[arg(long)]
        events: Option<PathBuf>,

        #[arg(long)]
        meta: Option<PathBuf>,

        /// Output file (single mode)
        #[arg(long, default_value = "out/match.jsonld")]
        out: PathBuf,

        /// Directory of per-match CDF folders (batch mode)
        #[arg(long, requires = "out_dir")]
        root: Option<PathBuf>,

        /// Output directory (batch mode)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    use cdf_builder::{
        run_batch_jsonld, run_batch_normalize, run_single_jsonld, run_single_normalize,
    };
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cdf_core::CdfConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Normalize {
            events,
            lineup,
            matches,
            match_id,
            root,
            competitions,
            seasons,
            out_dir,
        } => {
            if let Some(root) = root {
                println!("🔨 Normalizing open-data batch...");
                println!("   Root:         {}", root.display());
                println!("   Competitions: {}", competitions.join(", "));
                println!("   Seasons:      {}", seasons.join(", "));
                println!("   Output:       {}", out_dir.display());

                let report =
                    run_batch_normalize(&root, &competitions, &seasons, &out_dir, &config)?;
                print_report(&report);
            } else {
                let (Some(events), Some(lineup)) = (events, lineup) else {
                    anyhow::bail!("Single mode needs --events and --lineup (or --root for batch)");
                };
                println!("🔨 Normalizing match...");
                println!("   Events: {}", events.display());
                println!("   Lineup: {}", lineup.display());

                let request = cdf_builder::NormalizeRequest {
                    events,
                    lineup,
                    matches,
                    match_id,
                    out_dir,
                };
                let dir = run_single_normalize(&request, &config)?;
                println!("\n✅ CDF documents written → {}", dir.display());
            }
        }

        Commands::Jsonld {
            sheet,
            events,
            meta,
            out,
            root,
            out_dir,
        } => {
            if let Some(root) = root {
                let Some(out_dir) = out_dir else {
                    anyhow::bail!("Batch mode requires --out-dir");
                };
                println!("🔨 Building JSON-LD batch...");
                println!("   Root:   {}", root.display());
                println!("   Output: {}", out_dir.display());

                let report = run_batch_jsonld(&root, &out_dir, &config)?;
                print_report(&report);
            } else {
                let (Some(sheet), Some(events), Some(meta)) = (sheet, events, meta) else {
                    anyhow::bail!("Single mode needs --sheet --events --meta");
                };
                run_single_jsonld(&sheet, &events, &meta, &out, &config)?;
                println!("\n✅ JSON-LD written → {}", out.display());
            }
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn print_report(report: &cdf_builder::BatchReport) {
    println!("\n✅ Batch finished");
    println!("   Written: {}", report.written.len());
    println!("   Skipped: {}", report.skipped.len());
    for id in &report.skipped {
        println!("     - {}", id);
    }
    println!("   Failed:  {}", report.failed.len());
    for (id, err) in &report.failed {
        println!("     - {}: {}", id, err);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("cdf_builder CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
