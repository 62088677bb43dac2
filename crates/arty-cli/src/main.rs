use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use arty_core::GridConfig;
use arty_solver::{report, solve, FireRequest};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "arty")]
#[command(version)]
#[command(about = "Artillery azimuth and distance from grid coordinates", long_about = None)]
struct Cli {
    /// Grid config file (TOML)
    #[arg(short, long, env = "ARTY_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Calculate artillery
    Fire {
        /// Coords to shoot from. In the form of X-Y-Numpad(s). For example: b-2-3-4
        #[arg(short, long)]
        from: String,

        /// Coords to shoot to. In the form of X-Y-Numpad(s). For example: b-2-3-5
        #[arg(short, long)]
        to: String,

        /// Wind direction. In the form of compass directions. For example: SWW
        #[arg(short, long)]
        wind: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,

        /// Wrap the table in a code fence, as posted to chat
        #[arg(long)]
        fenced: bool,
    },

    /// Print the effective grid config as TOML
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<GridConfig> {
    match path {
        Some(p) => GridConfig::load(p).with_context(|| format!("loading {}", p.display())),
        None => Ok(GridConfig::default()),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let grid = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Fire { from, to, wind, output, fenced } => {
            let req = FireRequest::new(from, to, wind);
            let mission = match solve(&req, &grid) {
                Ok(m) => m,
                Err(e) => {
                    warn!(error = %e, from = %req.from, to = %req.to, "rejected fire mission");
                    eprintln!("{}", e.user_message());
                    return Ok(ExitCode::FAILURE);
                }
            };
            info!(
                azimuth = mission.direct.azimuth_deg,
                distance = mission.direct.distance_m,
                wind_rows = mission.wind_rows.len(),
                "fire mission solved"
            );

            match output {
                OutputFormat::Table if fenced => println!("{}", report::render_fenced(&mission)),
                OutputFormat::Table => print!("{}", report::render(&mission)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&mission)?),
            }
        }
        Commands::Config => {
            print!("{}", toml::to_string(&grid)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}
