//! `prng` - digit-extraction generator workbench
//!
//! Entry point: parses arguments, layers configuration, initialises tracing
//! and dispatches to the command implementations in `service_cli::commands`.

use clap::{Parser, Subcommand};
use service_cli::commands::{self, generate::GenerateArgs, run::RunArgs, test::TestArgs};
use service_cli::config::{build_config, CliOverrides, OutputFormat};
use service_cli::Result;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Digit-extraction pseudo-random generators and randomness tests
#[derive(Parser)]
#[command(name = "prng")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available generators and randomness tests
    List,

    /// Generate a sequence
    Generate(GenerateArgs),

    /// Test a sequence stored in a CSV file
    Test(TestArgs),

    /// Generate a sequence and test it
    Run(RunArgs),
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        let mut overrides = CliOverrides {
            log_level: self.log_level.clone(),
            format: self.format,
            ..Default::default()
        };
        if self.verbose {
            overrides.log_level = Some("debug".to_string());
        }

        let (generator, selection) = match &self.command {
            Commands::List => (None, None),
            Commands::Generate(args) => (Some(&args.generator), None),
            Commands::Test(args) => (None, Some(&args.selection)),
            Commands::Run(args) => (Some(&args.generator), Some(&args.selection)),
        };
        if let Some(generator) = generator {
            overrides.length = generator.length;
            overrides.trace_rows = generator.trace_rows;
        }
        if let Some(selection) = selection {
            overrides.alpha = selection.alpha;
            overrides.bins = selection.bins;
        }
        overrides
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(cli.config.as_deref(), &cli.overrides())?;

    init_tracing(config.log_level.as_filter_str());
    info!("prng v{}", service_cli::VERSION);
    debug!(
        length = config.length,
        alpha = config.alpha,
        bins = ?config.bins,
        trace_rows = config.trace_rows,
        format = %config.format,
        "Configuration loaded"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::List => commands::list::run(&config, &mut out),
        Commands::Generate(args) => commands::generate::run(args, &config, &mut out),
        Commands::Test(args) => commands::test::run(args, &config, &mut out),
        Commands::Run(args) => commands::run::run(args, &config, &mut out),
    }
}
