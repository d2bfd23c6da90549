#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use nodebird_server::{config::ServerConfig, server};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let config = ServerConfig::from_env();
    let default_filter = config
        .as_ref()
        .map(|c| c.logging.filter.clone())
        .unwrap_or_else(|_| nodebird_server::config::default_log_filter());

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "failed to load configuration");
            std::process::exit(1);
        }
    };
    tracing::info!("Loaded configuration");

    if let Err(report) = server::run(config).await {
        tracing::error!(error = %report, "server failed");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // This main function is only used for WASM builds
    // The actual hydration happens in lib.rs
}
