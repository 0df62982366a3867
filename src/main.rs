use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use trivia_api::{
    config::{get_config, init_config},
    database::{
        pool::{create_pool, run_migrations},
        PgTriviaStore,
    },
    routes,
    telemetry::init_tracing,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_config()?;
    let config = get_config()?;
    init_tracing(config.log_format);

    let pool = create_pool(config).await?;
    run_migrations(&pool).await?;
    info!("Database migrations applied");

    let app_state = AppState::new(Arc::new(PgTriviaStore::new(pool)));
    let app = routes::router(app_state);

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
