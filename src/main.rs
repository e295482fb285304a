use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use navguard::config::Config;
use navguard::demo::{self, DemoApp};
use navguard::logging::init_tracing;

#[derive(Debug, Parser)]
#[command(name = "navguard", version, about = "Guarded, resolvable navigation demo")]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the fake service delay
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Make the fake service succeed instead of failing
    #[arg(long)]
    succeed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let path = match cli.config {
        Some(path) => path,
        None => Config::config_path(),
    };
    let mut config = Config::load_from(&path)
        .with_context(|| format!("loading config from {}", path.display()))?;

    if let Some(delay_ms) = cli.delay_ms {
        config.data.delay_ms = delay_ms;
    }
    if cli.succeed {
        config.data.fail = false;
    }
    config.validate().context("invalid configuration")?;

    tracing::info!(config = %path.display(), "Starting navguard");

    let mut app = DemoApp::new(config).context("building route table")?;
    let mut stdout = tokio::io::stdout();
    demo::run(&mut app, &mut stdout).await?;

    tracing::info!("navguard exiting");
    Ok(())
}
