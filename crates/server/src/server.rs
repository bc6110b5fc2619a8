use axum::{
    Router,
    extract::{DefaultBodyLimit, Request},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use chrono_tz::Tz;

use std::{sync::Arc, time::Instant};

use crate::{analytics, categories, dashboard, orders};
use engine::Engine;

/// Snapshots can be large; allow bodies well above axum's 2 MiB default.
const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
    /// Timezone used to decide "today" when a request does not say.
    pub timezone: Tz,
}

impl ServerState {
    pub fn new(engine: Engine, timezone: Tz) -> Self {
        Self {
            engine: Arc::new(engine),
            timezone,
        }
    }
}

async fn trace_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    tracing::debug!(
        %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request handled"
    );
    response
}

async fn health() -> &'static str {
    "ok"
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/analytics/categories", post(analytics::categories))
        .route("/analytics/vendors", post(analytics::vendors))
        .route("/analytics/monthly", post(analytics::monthly))
        .route("/analytics/budgets", post(analytics::budgets))
        .route("/dashboard", post(dashboard::get))
        .route("/orders/search", post(orders::search))
        .route("/orders/detail", post(orders::detail))
        .route("/categories", post(categories::list))
        .route("/categories/items", post(categories::items))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(middleware::from_fn(trace_request))
        .with_state(state)
}

pub async fn run_with_listener(
    state: ServerState,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(state)).await
}
