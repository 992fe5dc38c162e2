//! Lucky Number API server entry point.

use std::error::Error;
use std::sync::{Arc, Mutex};

use lucky_api::config::AppConfig;
use lucky_api::state::AppState;
use lucky_core::clock::{Clock, SystemClock};
use lucky_core::rng::{DeterministicRng, SystemRng};
use lucky_draw::application::command_handlers::{self, SessionRepository};
use lucky_draw::domain::aggregates::DrawSession;
use lucky_session_store::memory_repository::InMemorySnapshotRepository;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Lucky Number API server");

    let config = AppConfig::from_env()?;

    let rng = match config.rng_seed {
        Some(seed) => {
            tracing::warn!(seed, "using a fixed RNG seed; draws are reproducible");
            SystemRng::seeded(seed)
        }
        None => SystemRng::from_entropy(),
    };

    // Build application state.
    let clock: Arc<dyn Clock + Send + Sync> = Arc::new(SystemClock);
    let rng: Arc<Mutex<dyn DeterministicRng + Send>> = Arc::new(Mutex::new(rng));
    let session_repository: Arc<SessionRepository> =
        Arc::new(InMemorySnapshotRepository::<DrawSession>::new());
    let app_state = AppState::new(
        Arc::clone(&clock),
        rng,
        Arc::clone(&session_repository),
        config.default_language,
    );

    // Evict idle sessions in the background.
    let max_idle = config.session_idle;
    let mut sweep = tokio::time::interval(config.sweep_interval());
    tokio::spawn(async move {
        loop {
            sweep.tick().await;
            if let Err(e) = command_handlers::evict_idle_sessions(
                clock.as_ref(),
                max_idle,
                &*session_repository,
            )
            .await
            {
                tracing::error!(error = %e, "idle session sweep failed");
            }
        }
    });

    // TODO: Replace CorsLayer::permissive() with the widget's origin once it is hosted.
    let app = lucky_api::app(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server.
    let addr = config.socket_addr()?;
    tracing::info!(
        default_language = %config.default_language,
        session_idle_secs = config.session_idle.num_seconds(),
        "Listening on {}",
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
