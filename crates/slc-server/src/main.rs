use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use slc_core::config::{CliOverrides, SlcConfig};
use slc_core::tracing::init_tracing;

/// Self-learning two-class classifier over HTTP.
#[derive(Debug, Parser)]
#[command(name = "slc-server", version, about)]
struct Args {
    /// Config file. Without it, `slc.toml` in the root is used when present.
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Directory searched for `slc.toml`.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Listen address, e.g. `127.0.0.1:8080`.
    #[arg(long)]
    bind: Option<String>,

    /// State backend.
    #[arg(long, value_parser = ["memory", "sqlite"])]
    backend: Option<String>,

    /// SQLite database file.
    #[arg(long = "db")]
    db_path: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let overrides = CliOverrides {
        bind: args.bind,
        backend: args.backend,
        db_path: args.db_path,
    };
    let config = match SlcConfig::load(&args.root, args.config.as_deref(), Some(&overrides)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    match slc_server::serve(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "server failed");
            ExitCode::FAILURE
        }
    }
}
