use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod provider;
mod routes;
mod store;

use config::Config;
use provider::weatherstack::WeatherstackClient;
use routes::{cors_layer, create_router, AppState};
use store::WeatherStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_data_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    if config.api_key().is_none() {
        tracing::warn!("WEATHERSTACK_API_KEY is not set; weather requests will fail until it is");
    }

    let provider = Arc::new(WeatherstackClient::new(&config)?);
    let store = Arc::new(WeatherStore::new());
    let cors = cors_layer(&config.cors_allowed_origin)?;
    let bind_addr = config.bind_addr.clone();

    let state = AppState {
        config: Arc::new(config),
        store,
        provider,
    };

    let app = create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Server starting on http://{}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
