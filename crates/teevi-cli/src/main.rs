use clap::{Parser, Subcommand};
use std::path::PathBuf;
use teevi::commands::{inspect, pack};
use teevi::GlobalOpts;
use teevi_logger as logger;

#[derive(Parser)]
#[command(name = "teevi")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Packaging toolkit for Teevi extensions",
    long_about = "Packages a compiled Teevi extension bundle into a distributable unit: hashes the entry chunk, merges the author's configuration with the package descriptor, and publishes a manifest.json plus side assets."
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Package a built extension: hash the bundle and publish its manifest
    Pack(pack::PackArgs),
    /// Summarize a published manifest
    Inspect {
        /// Path to a manifest.json, or a directory containing one
        path: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    logger::init_with_verbosity(cli.global.verbosity_level(), cli.global.quiet);

    if cli.global.verbosity_level() >= 1 {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let result = match cli.command {
        Commands::Pack(args) => pack::handle_pack(&args, &cli.global),
        Commands::Inspect { path } => inspect::handle_inspect(path.as_deref()),
    };

    if let Err(e) = result {
        logger::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
