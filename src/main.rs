use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use certdesk::db::{DeskStorage, connect};
use certdesk::router::{DeskState, desk_router};
use certdesk::session::SessionStore;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = &certdesk::config::CONFIG;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        port = cfg.port,
        session_ttl_hours = cfg.session_ttl_hours,
        loglevel = %cfg.loglevel
    );

    let pool = connect(&cfg.database_url).await?;
    let storage = DeskStorage::new(pool.clone());
    storage.init_schema().await?;
    info!("DB connected");

    let sessions = SessionStore::new(pool, cfg.session_ttl_hours);
    let state = DeskState::new(storage, sessions, &cfg.session_secret);
    let app = desk_router(state);

    let addr = format!("0.0.0.0:{}", cfg.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("HTTP server listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
