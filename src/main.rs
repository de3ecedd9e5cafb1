use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fundlens_core::{resolve_renderer_config, CardRenderer};

/// Main entry point for the FundLens application
///
/// Starts the REST server on port 3000 (configurable via FUNDLENS_REST_ADDR).
///
/// # Environment Variables
/// - `FUNDLENS_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `FUNDLENS_RENDER_CONFIG`: YAML file overriding the renderer vocabularies (optional)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the renderer configuration cannot be read or fails validation,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fundlens=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("FUNDLENS_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let config_path = std::env::var("FUNDLENS_RENDER_CONFIG").ok().map(PathBuf::from);

    let renderer = Arc::new(CardRenderer::new(resolve_renderer_config(config_path)?)?);
    tracing::debug!("renderer ready: {:?}", renderer);

    tracing::info!("++ Starting FundLens REST on {}", rest_addr);

    let app = api_rest::router(renderer);
    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
