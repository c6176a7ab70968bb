use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use xteam_storefront::config::Config;
use xteam_storefront::db::UserStorage;
use xteam_storefront::router::{XteamState, xteam_router};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;
    xteam_storefront::logging::init(&cfg.basic.loglevel);

    info!(
        database_url = %cfg.basic.database_url,
        listen_addr = %cfg.basic.listen_addr,
        loglevel = %cfg.basic.loglevel,
        insecure_cookie = cfg.basic.insecure_cookie
    );

    let storage = UserStorage::connect(&cfg.basic.database_url).await?;
    storage.init_schema().await?;

    let state = XteamState::from_config(storage, &cfg)?;
    let app = xteam_router(state);

    let listener = TcpListener::bind(cfg.basic.listen_addr.as_str()).await?;
    info!("HTTP server listening on {}", cfg.basic.listen_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
