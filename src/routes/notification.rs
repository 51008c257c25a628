use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use surrealdb::RecordId;

use crate::{
    consts::table_const,
    errors::{Error, Result},
    middleware::AuthUser,
    models::{notification::Notification, response::ApiResponse},
    state::AppState,
};

pub async fn get_notifications(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<Notification>>>)> {
    let notifications: Vec<Notification> = state
        .sdb
        .query("SELECT * FROM type::table($table) WHERE user = $user ORDER BY created_at DESC LIMIT 20")
        .bind(("table", table_const::NOTIFICATIONS))
        .bind(("user", auth.id.clone()))
        .await?
        .take(0)?;

    Ok((StatusCode::OK, Json(ApiResponse::list(notifications))))
}

#[derive(Debug, serde::Serialize)]
struct ReadPatch {
    read: bool,
}

/// Idempotent: marking an already-read notification read again is a no-op
/// success, only an unknown id is an error.
pub async fn mark_as_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<ApiResponse<Notification>>)> {
    let updated: Option<Notification> = state
        .sdb
        .update(RecordId::from_table_key(table_const::NOTIFICATIONS, id))
        .merge(ReadPatch { read: true })
        .await?;
    let notification = updated.ok_or(Error::NotificationNotFound)?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(notification))))
}
