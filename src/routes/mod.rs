use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::{middleware::auth_jwt_middleware, state::AppState};

pub mod audit;
pub mod notification;
pub mod visitor;
pub mod worker;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(public_routes())
        .merge(protected_routes(state.clone()))
        .with_state(state)
}

fn public_routes() -> Router<AppState> {
    Router::new().route("/api/workers/hosts", get(worker::get_public_hosts))
}

fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // ! visitors
        .route(
            "/api/visitors",
            post(visitor::register_visitor).get(visitor::get_visitors),
        )
        .route("/api/visitors/me", get(visitor::get_my_visitor_record))
        .route(
            "/api/visitors/{id}",
            get(visitor::get_visitor).put(visitor::update_visitor_status),
        )
        // ! workers
        .route(
            "/api/workers",
            post(worker::register_worker).get(worker::get_workers),
        )
        .route("/api/workers/me", get(worker::get_my_worker_record))
        .route("/api/workers/verify-self", put(worker::verify_self))
        .route(
            "/api/workers/{id}",
            get(worker::get_worker).put(worker::update_worker_status),
        )
        // ! audit trail & notifications
        .route("/api/audit", get(audit::get_audit_logs))
        .route("/api/notifications", get(notification::get_notifications))
        .route("/api/notifications/{id}", put(notification::mark_as_read))
        .layer(middleware::from_fn_with_state(state, auth_jwt_middleware))
}
