use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::{extract::State, http::Uri, response::Json as AxumJson, routing::get, Router};
use diesel::r2d2::{self, ConnectionManager};
use diesel::sqlite::SqliteConnection;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{error, info, Level};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod handlers {
    pub mod bus_handlers;
}
mod models {
    pub mod bus_models;
}

use config::Config;
use error::AppError;
use handlers::bus_handlers;
use models::bus_models::HealthResponse;

type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

pub struct AppState {
    // Held open for future persistence; no handler queries it.
    db_pool: Option<DbPool>,
}

async fn health_check(State(state): State<Arc<AppState>>) -> AxumJson<HealthResponse> {
    let database = if state.db_pool.is_some() { "connected" } else { "unavailable" };
    AxumJson(HealthResponse {
        status: "ok".to_string(),
        database: database.to_string(),
    })
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

async fn connect_database(database_url: String) -> Option<DbPool> {
    // r2d2 opens its first connections synchronously
    let url = database_url.clone();
    let built = tokio::task::spawn_blocking(move || {
        let manager = ConnectionManager::<SqliteConnection>::new(url);
        r2d2::Pool::builder()
            .max_size(4)
            .connection_timeout(Duration::from_secs(5))
            .build(manager)
    })
    .await;

    match built {
        Ok(Ok(pool)) => {
            info!("Database pool ready at {}", database_url);
            Some(pool)
        }
        Ok(Err(e)) => {
            error!("Failed to connect to database at {}: {}", database_url, e);
            None
        }
        Err(e) => {
            error!("Database connection task failed: {}", e);
            None
        }
    }
}

pub fn build_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(bus_handlers::welcome))
        .route("/api/health", get(health_check))
        .route("/api/bus", get(bus_handlers::get_bus))
        .route("/api/buses", get(bus_handlers::get_buses))
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(
            CorsLayer::new()
                .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
                .allow_origin(Any)
                .allow_headers([axum::http::header::CONTENT_TYPE]),
        )
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => error!("Failed to listen for SIGTERM: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let config = Config::load()?;

    let _sentry_guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    let state = Arc::new(AppState {
        db_pool: connect_database(config.database_url.clone()).await,
    });

    let app = build_app(state);

    let listener = TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr()))?;
    info!("Server running on port {}", config.port);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn health(state: AppState) -> (StatusCode, HealthResponse) {
        let response = build_app(Arc::new(state))
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_is_ok_without_database() {
        let (status, body) = health(AppState { db_pool: None }).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.status, "ok");
        assert_eq!(body.database, "unavailable");
    }

    #[tokio::test]
    async fn health_reports_connected_pool() {
        let pool = connect_database(":memory:".to_string()).await;
        assert!(pool.is_some());

        let (status, body) = health(AppState { db_pool: pool }).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.database, "connected");
    }

    #[tokio::test]
    async fn unreachable_database_is_none() {
        let pool = connect_database("/nonexistent-dir/rideforyou/db.sqlite".to_string()).await;
        assert!(pool.is_none());
    }

    #[tokio::test]
    async fn bus_routes_do_not_depend_on_database() {
        let response = build_app(Arc::new(AppState { db_pool: None }))
            .oneshot(Request::builder().uri("/api/bus").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn cors_allows_any_origin() {
        let response = build_app(Arc::new(AppState { db_pool: None }))
            .oneshot(
                Request::builder()
                    .uri("/api/bus")
                    .header("Origin", "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
    }
}
