use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use clinic_site::{Config, build_router, build_state};

#[derive(Debug, Parser)]
#[command(name = "clinic-site", version, about = "Multilingual clinic website server")]
struct Cli {
    /// Path to the configuration file, instead of the default locations
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Bind address, overrides the configuration file
    #[arg(long)]
    host: Option<String>,

    /// Bind port, overrides the configuration file
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    // Keep the log writer guard alive for the lifetime of the process.
    let _guard = init_tracing(&config);

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        templates = %config.templates.dir,
        "starting clinic-site"
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = Arc::new(build_state(config)?);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

/// Initialize tracing from the logging configuration. When a log file is
/// configured, output goes to a daily-rolling file without ANSI colors;
/// otherwise it goes to stdout.
fn init_tracing(config: &Config) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match &config.logging.file {
        Some(file) => {
            let path = std::path::Path::new(file);
            let dir = path.parent().unwrap_or_else(|| std::path::Path::new("."));
            let name = path.file_name().unwrap_or_else(|| std::ffi::OsStr::new("clinic-site.log"));
            let appender = tracing_appender::rolling::daily(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
            None
        }
    }
}
