use holonet::server::{config::Config, model::app::AppState, router, startup};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("holonet=info,tower_http=info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = serve(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn serve(config: Config) -> Result<(), holonet::server::error::Error> {
    let db = startup::connect_to_database(&config).await?;

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;

    tracing::info!("Starting server on {}", config.bind_address());

    axum::serve(listener, router::app(AppState::from(db))).await?;

    Ok(())
}
