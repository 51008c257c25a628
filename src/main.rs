use axum::Router;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use crate::{config::Config, errors::Result, state::AppState};

pub mod config;
pub mod consts;
pub mod errors;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
pub mod utils;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing::subscriber::set_global_default(FmtSubscriber::default()).unwrap();

    let config = Config::from_env();
    let state = AppState::init(config).await?;

    info!("Starting server");

    let listener = tokio::net::TcpListener::bind(state.config.addr.as_str()).await?;
    info!("Serving gatepass at http://{}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;

    Ok(())
}

pub fn app(state: AppState) -> Router {
    routes::api_router(state)
}
