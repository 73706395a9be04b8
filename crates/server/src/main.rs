use clap::Parser;
use seoscore_server::api::create_router;
use seoscore_server::api::handlers::AppState;
use seoscore_server::config::ServerConfig;
use seoscore_server::store::ArticleStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("seoscore_server=info".parse()?)
                .add_directive("seoscore_core=info".parse()?),
        )
        .init();

    let store = match &config.database_url {
        Some(url) => ArticleStore::connect(url).await?,
        None => {
            tracing::warn!("DATABASE_URL not set, articles are kept in memory");
            ArticleStore::memory()
        }
    };

    let app = create_router(AppState::new(store.clone()), config.request_timeout());
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!(addr = %config.bind, store = store.backend(), "seoscore-server listening");

    axum::serve(listener, app).with_graceful_shutdown(wait_for_signal()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT"),
        _ = terminate => tracing::info!("Received SIGTERM"),
    }
}
