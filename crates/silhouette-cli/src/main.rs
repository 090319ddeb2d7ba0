//! Silhouette CLI - headless driver for the particle simulation

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{config, frames, run, SessionArgs};

#[derive(Parser)]
#[command(name = "silhouette")]
#[command(about = "Particles that seek a target, bounce once and drift away", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation headless and log a summary
    Run {
        #[command(flatten)]
        session: SessionArgs,

        /// Pace frames against the wall clock
        #[arg(long)]
        realtime: bool,

        /// Frame rate used with --realtime
        #[arg(long, default_value = "60")]
        fps: f64,
    },

    /// Print the draw list as JSON lines while running
    Frames {
        #[command(flatten)]
        session: SessionArgs,

        /// Print every Nth frame
        #[arg(long, default_value = "1")]
        every: u64,
    },

    /// Print the effective configuration as TOML
    Config {
        /// Path to a config file (defaults are used when omitted)
        #[arg(long)]
        config: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            session,
            realtime,
            fps,
        } => run::run(run::RunArgs {
            session,
            realtime,
            fps,
        }),
        Commands::Frames { session, every } => frames::run(&session, every),
        Commands::Config { config } => config::run(config.as_deref()),
    }
}
