//! # Larek Main Entry Point

use anyhow::Result;
use larek::cmd_args::CommandLineArgs;
use larek::config::{get_log_path, resolve_endpoints};
use larek::AppController;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

const QUIET_TARGETS: &[&str] = &[
    "reqwest", "hyper", "hyper_util", "h2", "tokio", "tower", "rustls", "mio",
];

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing_subscriber()?;

    let cmd_args = CommandLineArgs::parse();
    let endpoints = resolve_endpoints(&cmd_args)?;

    let mut app = AppController::new(&endpoints)?;
    app.run().await?;

    tracing::info!("Storefront closed");
    Ok(())
}

fn env_filter() -> Result<EnvFilter> {
    let mut filter = EnvFilter::from_env(format!(
        "{}_LOG_LEVEL",
        env!("CARGO_PKG_NAME").to_uppercase()
    ));
    for target in QUIET_TARGETS {
        filter = filter.add_directive(format!("{target}=warn").parse()?);
    }
    Ok(filter)
}

fn init_tracing_subscriber() -> Result<()> {
    let path = get_log_path();
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter()?)
        .with_timer(ChronoLocal::rfc_3339())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}
