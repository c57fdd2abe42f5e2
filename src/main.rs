use std::{env, net::SocketAddr};

use axum::{
    routing::{get, post},
    Router,
};
use sqlx::SqlitePool;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::app::{cors::cors_layer, database, env::Envy, errors::StartupError};

mod app;
mod transactions;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

pub fn create_app(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(app::controller::get_root))
        // transactions
        .route(
            "/transactions",
            post(transactions::controller::create_transaction)
                .get(transactions::controller::get_transactions),
        )
        .route(
            "/transactions/",
            post(transactions::controller::create_transaction)
                .get(transactions::controller::get_transactions),
        )
        .route(
            "/transactions/:id",
            get(transactions::controller::get_transaction_by_id)
                .put(transactions::controller::edit_transaction_by_id)
                .delete(transactions::controller::delete_transaction_by_id),
        )
        .with_state(state)
        // layers
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let env_file = dotenvy::from_filename(format!(".env.{}", app_env));

    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = env_file {
        tracing::debug!(%e, "no env file loaded");
    }
    let envy = Envy::from_env()?;
    tracing::info!(app_env = %envy.app_env, "loaded configuration");

    // properties
    let cors = cors_layer(&envy.frontend_url)?;

    let pool = database::connect(&envy).await?;
    database::create_schema(&pool).await?;

    tracing::info!(database_url = %envy.database_url, "connected to db");

    // app
    let app = create_app(AppState { pool }, cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], envy.port));
    tracing::info!(%addr, frontend_url = %envy.frontend_url, "listening");

    axum::Server::try_bind(&addr)?
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
