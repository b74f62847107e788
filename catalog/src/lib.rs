//! # catalog: item and category catalog API
//!
//! `catalog` is a small HTTP CRUD service over two resources, **items** and **categories**,
//! stored in SQLite. Each operation is bound to exactly one path and one verb:
//!
//! | Verb   | Path                 | Operation                           |
//! |--------|----------------------|-------------------------------------|
//! | GET    | `/items`             | list items                          |
//! | GET    | `/items/get`         | get item by `?id=`                  |
//! | GET    | `/items/get-code`    | get item by `?codigo=`              |
//! | POST   | `/items/create`      | create item from a JSON body        |
//! | PUT    | `/items/update`      | replace item keyed by the body `id` |
//! | DELETE | `/items/delete`      | delete item by `?id=`               |
//! | ...    | `/categorias/...`    | same, minus the code lookup         |
//!
//! Item routes are also served under the legacy `/itens` prefix.
//!
//! ## Architecture
//!
//! The application is built on [Axum](https://github.com/tokio-rs/axum) for the HTTP layer and
//! [sqlx](https://github.com/launchbadge/sqlx) for persistence.
//!
//! A request is routed by path; a verb the path isn't bound to is answered by a method fallback
//! with `405` before anything else runs. Extractors from [`api::extractors`] then validate query
//! parameters or decode the body, the handler borrows one pooled connection, wraps it in a
//! repository from [`db::handlers`] and runs exactly one statement. Every failure is an
//! [`errors::Error`], which renders as a status code plus a short plain-text message.
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use catalog::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = catalog::config::Args::parse();
//!     let config = Config::load(&args)?;
//!
//!     catalog::telemetry::init_telemetry(&config)?;
//!
//!     let app = Application::new(config).await?;
//!     app.serve(async {
//!         let _ = tokio::signal::ctrl_c().await;
//!     })
//!     .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Testing
//!
//! Database tests use `#[sqlx::test]`, which hands every test a fresh, migrated SQLite
//! database. HTTP tests drive the full router through [`test_utils::create_test_app`].

pub mod api;
pub mod config;
pub mod db;
pub mod errors;
mod openapi;
pub mod telemetry;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

use crate::api::handlers::{categories, items, meta};
use axum::{
    Router,
    routing::{MethodRouter, delete, get, post, put},
};
use bon::Builder;
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{Level, debug, info};

pub use config::Config;
pub use openapi::ApiDoc;

/// Application state shared across all request handlers.
///
/// # Example
///
/// ```ignore
/// let state = AppState::builder()
///     .db(pool)
///     .config(config)
///     .build();
/// ```
#[derive(Clone, Builder)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Config,
}

/// Get the catalog database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

/// Bind `route` to its single verb; every other verb gets `405 Método não permitido`.
///
/// `get` also answers `HEAD`; the explicit `HEAD` endpoint keeps it away from the handler.
fn only(route: MethodRouter<AppState>) -> MethodRouter<AppState> {
    route.head(meta::method_not_allowed).fallback(meta::method_not_allowed)
}

fn item_routes(prefix: &str) -> Router<AppState> {
    Router::new()
        .route(prefix, only(get(items::list_items)))
        .route(&format!("{prefix}/get"), only(get(items::get_item)))
        .route(&format!("{prefix}/get-code"), only(get(items::get_item_by_code)))
        .route(&format!("{prefix}/create"), only(post(items::create_item)))
        .route(&format!("{prefix}/update"), only(put(items::update_item)))
        .route(&format!("{prefix}/delete"), only(delete(items::delete_item)))
}

fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/categorias", only(get(categories::list_categories)))
        .route("/categorias/get", only(get(categories::get_category)))
        .route("/categorias/create", only(post(categories::create_category)))
        .route("/categorias/update", only(put(categories::update_category)))
        .route("/categorias/delete", only(delete(categories::delete_category)))
}

/// Build the application router.
///
/// Contains the item and category routes, the `/api` banner, `/healthz`, the OpenAPI document
/// at `/swagger/doc.json` and the Scalar reference page at `/docs`. Unknown paths get
/// `404 Rota não encontrada`.
pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .merge(item_routes("/items"))
        .merge(item_routes("/itens"))
        .merge(category_routes())
        .route("/api", only(get(meta::banner)))
        .route("/healthz", only(get(meta::healthz)))
        .route("/swagger/doc.json", only(get(meta::openapi_json)))
        .route("/docs", only(get(meta::docs)))
        .fallback(meta::route_not_found)
        .with_state(state);

    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::DEBUG))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
}

/// The assembled service: a connected pool plus the router that serves it.
pub struct Application {
    router: Router,
    config: Config,
    pool: SqlitePool,
}

impl Application {
    /// Connect to the configured database, apply migrations if enabled and build the router.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        debug!("Starting catalog with configuration: {:#?}", config);

        let pool = db::pool::connect(&config).await?;
        if config.database.run_migrations {
            migrator().run(&pool).await?;
            info!("Database migrations applied");
        }

        Ok(Self::new_with_pool(config, pool))
    }

    /// Build the application around an existing pool. Migrations are the caller's concern.
    pub fn new_with_pool(config: Config, pool: SqlitePool) -> Self {
        let state = AppState::builder().db(pool.clone()).config(config.clone()).build();
        let router = build_router(state);

        Self { router, config, pool }
    }

    #[cfg(any(test, feature = "test-utils"))]
    pub fn into_test_server(self) -> axum_test::TestServer {
        axum_test::TestServer::new(self.router).expect("Failed to create test server")
    }

    /// Serve until `shutdown` resolves, then close the pool and flush telemetry.
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!(
            "Catalog listening on http://{}, docs at http://localhost:{}/docs",
            bind_addr, self.config.port
        );

        axum::serve(listener, self.router).with_graceful_shutdown(shutdown).await?;

        info!("Closing database connections...");
        self.pool.close().await;

        info!("Shutting down telemetry...");
        telemetry::shutdown_telemetry();

        Ok(())
    }
}
