use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sorteo::{draw, load, Result, SorteoConfig};

/// Draw a court for a new case, weighted against current active case load.
#[derive(Parser, Debug)]
#[command(name = "sorteo", version, about)]
struct Cli {
    /// CSV file with raw case records
    input: PathBuf,

    /// TOML config file; defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Smoothing parameter (overrides the config value)
    #[arg(long)]
    alfa: Option<f64>,

    /// Status label to count as active; repeatable, replaces the
    /// configured set when given
    #[arg(long = "status")]
    statuses: Vec<String>,

    /// Fixed RNG seed for a reproducible draw
    #[arg(long)]
    seed: Option<u64>,

    /// Fail on out-of-range draws instead of clamping them into the table
    #[arg(long)]
    no_clamp: bool,
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => SorteoConfig::from_path(path)?,
        None => SorteoConfig::default(),
    };
    if let Some(alfa) = cli.alfa {
        config.alfa = alfa;
    }
    if !cli.statuses.is_empty() {
        config.active_statuses = cli.statuses.iter().cloned().collect::<BTreeSet<_>>();
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.no_clamp {
        config.clamp = false;
    }
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let records = load::load_cases(&cli.input, &config.status_column, &config.entity_column)?;
    info!(records = records.len(), input = %cli.input.display(), "loaded raw cases");

    let selected = draw(&records, &config, &mut rng)?;
    info!(%selected, alfa = config.alfa, "sorteo complete");

    println!("***");
    println!("El juzgado sorteado es el {selected}.");
    println!("***");
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
