use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use menu_api::{build_router, render::MenuRenderer, AppState};
use menu_core::{MenuService, RouteTable};
use menu_infrastructure::database::{connection, PgMenuItemRepository, PgMenuRepository};
use menu_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (also reads .env)
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize telemetry; the guard flushes file logs on shutdown
    let _log_guard = menu_shared::telemetry::init_telemetry(config.app.log_dir.as_deref());

    info!("Menu Server starting ({})...", config.app.env);

    // Connect to Database
    info!("Connecting to database...");
    let pool = connection::create_pool(
        &config.database.url,
        config.database.max_connections,
        config.database.min_connections,
    )
    .await
    .context("database connection failed")?;
    if let Err(e) = connection::run_migrations(&pool).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Database connection established.");

    // Named routes for menu items
    let routes = RouteTable::from_map(config.routes.clone());
    info!("Loaded {} named routes", routes.len());

    // Create App State
    let state = AppState {
        menu_service: Arc::new(MenuService::new(
            Arc::new(PgMenuItemRepository::new(pool.clone())),
            Arc::new(routes),
        )),
        menu_repo: Arc::new(PgMenuRepository::new(pool)),
        renderer: Arc::new(MenuRenderer::new().context("menu templates failed to compile")?),
        default_menu: config.menu.default_menu.clone(),
    };

    // Build router; cross-origin access is only opened up outside production
    let app = if config.is_production() {
        build_router(state)
    } else {
        build_router(state).layer(CorsLayer::permissive())
    };

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
