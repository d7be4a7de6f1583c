//! Statcast CLI
//!
//! Statcast CSV → pitch_core metric family → JSON

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use chrono::NaiveDate;
#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "cli")]
use pitch_core::{DistributionKey, EngineConfig};
#[cfg(feature = "cli")]
use statcast_cli::{Operation, PitchFilter};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "statcast_cli")]
#[command(about = "Pitch mix, arsenal, batted-ball and progression metrics from Statcast CSV", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Args)]
struct SourceArgs {
    /// Statcast per-pitch CSV export
    #[arg(long)]
    csv: PathBuf,

    /// Keep only this pitcher (MLBAM id)
    #[arg(long)]
    pitcher: Option<i64>,

    /// First game date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Last game date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    end: Option<NaiveDate>,

    /// Engine config file (.json/.yaml); defaults to $PITCH_ENGINE_CONFIG_PATH
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write JSON here instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Pitch mix and outcome rates per ball-strike count
    Count {
        #[command(flatten)]
        source: SourceArgs,

        /// Key by opponent of this team code instead of by count
        #[arg(long)]
        vs_team_of: Option<String>,
    },

    /// Per-pitch-type effectiveness metrics
    Arsenal {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Batted-ball summary
    Hits {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Per-game pitch trends with strike percentage
    Progression {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Every metric family plus source metadata
    Report {
        #[command(flatten)]
        source: SourceArgs,

        /// Key the count distribution by opponent of this team code
        #[arg(long)]
        vs_team_of: Option<String>,
    },
}

#[cfg(feature = "cli")]
fn distribution_key(team: Option<String>) -> DistributionKey {
    match team {
        Some(team) => DistributionKey::Opponent { team },
        None => DistributionKey::CountScenario,
    }
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    let (source, operation) = match cli.command {
        Commands::Count { source, vs_team_of } => {
            (source, Operation::CountDistribution(distribution_key(vs_team_of)))
        }
        Commands::Arsenal { source } => (source, Operation::Arsenal),
        Commands::Hits { source } => (source, Operation::HitOutcome),
        Commands::Progression { source } => (source, Operation::Progression),
        Commands::Report { source, vs_team_of } => {
            (source, Operation::Report(distribution_key(vs_team_of)))
        }
    };

    run(source, operation)
}

#[cfg(feature = "cli")]
fn run(source: SourceArgs, operation: Operation) -> Result<()> {
    let config = match &source.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => EngineConfig::from_env().context("Failed to load config from environment")?,
    };

    let filter = PitchFilter {
        pitcher: source.pitcher,
        start: source.start,
        end: source.end,
    };

    log::info!("📥 Loading {}", source.csv.display());
    let (pitches, stats) = statcast_cli::load_pitches(&source.csv, &filter)?;
    log::info!(
        "   Rows: {} parsed, {} failed, {} outside filter → {} pitches",
        stats.parsed,
        stats.failed,
        stats.filtered_out,
        pitches.len()
    );

    let metadata = match operation {
        Operation::Report(_) => Some(statcast_cli::source_metadata(&source.csv, &stats)?),
        _ => None,
    };

    let json = statcast_cli::run_operation(&operation, &pitches, &config, metadata)?;

    match &source.out {
        Some(path) => {
            statcast_cli::write_output(path, &json)?;
            log::info!("📄 Output saved to: {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("statcast_cli is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
