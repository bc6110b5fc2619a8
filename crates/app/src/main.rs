use chrono_tz::Tz;
use server::ServerState;
use thiserror::Error;

mod settings;

#[derive(Debug, Error)]
enum AppError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("engine error: {0}")]
    Engine(#[from] engine::EngineError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unknown timezone: {0}")]
    Timezone(String),
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "spendboard={level},server={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let engine = engine::Engine::builder()
        .week_start(settings.engine.week_start)
        .month_order(settings.engine.month_order)
        .near_limit_percent(settings.engine.near_limit_percent)
        .build()?;

    let timezone: Tz = settings
        .server
        .timezone
        .parse()
        .map_err(|_| AppError::Timezone(settings.server.timezone.clone()))?;

    let bind = settings
        .server
        .bind
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let addr = format!("{}:{}", bind, settings.server.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%timezone, "starting spendboard");
    if let Err(err) = server::run_with_listener(ServerState::new(engine, timezone), listener).await
    {
        tracing::error!("server failed: {err}");
        return Err(err.into());
    }

    Ok(())
}
