//! proxy-steer: point a load balancer backend at the best upstream proxy.
//!
//! ```text
//!   health feed ──GET /api/v1/proxies──▶ selector ──port──▶ steering
//!                                                              │
//!                                        admin socket ◀────────┘
//!                                             │
//!   current ◀── inspector ◀── show servers state
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use proxy_steer::config::validation::validate_config;
use proxy_steer::config::{load_config, ConfigError};
use proxy_steer::observability::init_logging;
use proxy_steer::output::{render_current, render_endpoint_table, render_steered};
use proxy_steer::selector::SelectionPolicy;
use proxy_steer::{App, SteerConfig, SteerResult};

#[derive(Parser)]
#[command(name = "proxy-steer")]
#[command(version)]
#[command(about = "Steer a load balancer backend to the best upstream proxy", long_about = None)]
struct Cli {
    /// Optional TOML config file; environment variables override it
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all endpoints reported by the health feed
    List,
    /// Steer the backend to a literal port
    SetPort {
        port: u16,
        /// Read the live state back and require it to match
        #[arg(long)]
        verify: bool,
    },
    /// Steer the backend to the best endpoint whose name contains the substring
    SetName {
        #[arg(required = true, num_args = 1..)]
        substring: Vec<String>,
        /// Read the live state back and require it to match
        #[arg(long)]
        verify: bool,
    },
    /// Steer the backend to the best endpoint overall
    Fastest {
        /// Read the live state back and require it to match
        #[arg(long)]
        verify: bool,
    },
    /// Show the live backend state and its health profile
    Current,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config.observability.log_level);

    match run(cli.command, &config).await {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Layered configuration with `--log-level` applied last.
fn resolve_config(cli: &Cli) -> Result<SteerConfig, ConfigError> {
    let mut config = load_config(cli.config.as_deref(), |key| std::env::var(key).ok())?;
    if let Some(level) = &cli.log_level {
        config.observability.log_level = level.clone();
        validate_config(&config).map_err(ConfigError::Validation)?;
    }
    Ok(config)
}

async fn run(command: Commands, config: &SteerConfig) -> SteerResult<String> {
    let app = App::new(config)?;

    match command {
        Commands::List => Ok(render_endpoint_table(&app.list().await?)),
        Commands::SetPort { port, verify } => Ok(render_steered(&app.steer_port(port, verify).await?)),
        Commands::SetName { substring, verify } => {
            let needle = substring.join(" ").trim().to_string();
            let steered = app.steer_best(SelectionPolicy::by_name(needle), verify).await?;
            Ok(render_steered(&steered))
        }
        Commands::Fastest { verify } => {
            let steered = app.steer_best(SelectionPolicy::fastest(), verify).await?;
            Ok(render_steered(&steered))
        }
        Commands::Current => Ok(render_current(&app.current().await?)),
    }
}
