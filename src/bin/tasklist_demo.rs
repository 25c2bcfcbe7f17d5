//! Runs the task list demo script and prints the results to stdout.
//!
//! Usage:
//!
//! ```text
//! tasklist-demo [--renderer plain|csv|json] [--verbose]
//! ```
//!
//! The renderer may also be selected with `TASKLIST_RENDERER`. Diagnostics
//! go to stderr, filtered by `RUST_LOG`.

use std::io::{self, Write};

use clap::Parser;
use eyre::WrapErr;
use tasklist::{
    config::{AppConfig, RendererKind},
    container::TaskListApp,
    demo::run_demo,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Debug, Parser)]
#[command(name = "tasklist-demo")]
#[command(version, about = "Runs the in-memory task list demo")]
struct Cli {
    /// Renderer used for each printed task.
    #[arg(long, env = "TASKLIST_RENDERER", default_value = "plain")]
    renderer: RendererKind,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn app_config(&self) -> AppConfig {
        AppConfig::new().with_renderer(self.renderer)
    }

    fn log_filter(&self) -> EnvFilter {
        if self.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
        }
    }
}

fn main() -> eyre::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(cli.log_filter())
        .init();

    let config = cli.app_config();
    info!(renderer = %config.renderer(), "starting task list demo");

    let app = TaskListApp::build(&config);
    let mut stdout = io::stdout().lock();
    run_demo(&app, &mut stdout).wrap_err("run task list demo")?;
    stdout.flush().wrap_err("flush demo output")?;
    Ok(())
}
