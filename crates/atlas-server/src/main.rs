//! atlas-server — serves the India Atlas site
//!
//! Usage examples
//! --------------
//!
//! - Serve the current directory with data from `static/data`
//!   $ atlas-server
//!
//! - Custom data directory and port
//!   $ atlas-server --data-dir ./data --bind 0.0.0.0:8080
//!
//! - Point the crime tab at another dashboard
//!   $ atlas-server --config atlas.json
//!
//! Logging is controlled with `RUST_LOG` (default `atlas_server=debug,info`).
mod args;

use crate::args::ServerArgs;
use anyhow::Context;
use atlas_core::AtlasConfig;
use atlas_server::{router, Site};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "atlas_server=debug,tower_http=info,info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = ServerArgs::parse();

    let config = match &args.config {
        Some(path) => AtlasConfig::from_path(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => AtlasConfig::default(),
    };

    if !args.data_dir.is_dir() {
        tracing::warn!(
            "data directory {} does not exist; API will serve empty documents",
            args.data_dir.display()
        );
    }
    if !args.static_dir.join("index.html").is_file() {
        tracing::warn!("no index.html under {}", args.static_dir.display());
    }

    let app = router(Site {
        data_dir: args.data_dir.clone(),
        static_dir: args.static_dir.clone(),
        config,
    });

    tracing::info!("India Atlas listening on http://{}", args.bind);
    tracing::info!("   data:   {}", args.data_dir.display());
    tracing::info!("   static: {}", args.static_dir.display());

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("binding {}", args.bind))?;
    axum::serve(listener, app).await?;

    Ok(())
}
