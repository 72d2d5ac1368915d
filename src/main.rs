use std::sync::Arc;

mod app;
mod config;
mod db;
mod state;
mod users;

use crate::{config::AppConfig, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Arc::new(AppConfig::from_env()?);
    init_tracing(&config);

    let pool = db::connect(&config).await?;
    db::migrate(&pool).await;

    let state = AppState::init(pool.clone(), config);
    let app = app::build_app(state.clone());
    app::serve(app, &state).await?;

    pool.close().await;
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "users_api=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or_else(|_| config.is_production());

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }
}
