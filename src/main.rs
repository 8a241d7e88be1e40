use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// lunchcheck - school lunch aware dinner recommendations
#[derive(Parser)]
#[command(name = "lunchcheck")]
#[command(about = "Reads the school lunch menu and suggests a dinner that does not repeat it", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = lunchcheck::Config::load(cli.config)?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    lunchcheck::observability::init_observability(
        "lunchcheck",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
    }
}
