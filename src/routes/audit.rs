use axum::{Extension, Json, extract::State, http::StatusCode};

use crate::{
    consts::table_const,
    errors::Result,
    middleware::{AuthUser, require_role},
    models::{audit::AuditEntry, response::ApiResponse, user::Role},
    state::AppState,
};

/// Trail retrieval is deliberately simple: the last 100 entries, newest
/// first. The recorder itself is write-only.
pub async fn get_audit_logs(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<AuditEntry>>>)> {
    require_role(&auth, &[Role::SuperAdmin])?;

    let logs: Vec<AuditEntry> = state
        .sdb
        .query("SELECT * FROM type::table($table) ORDER BY timestamp DESC LIMIT 100")
        .bind(("table", table_const::AUDIT_LOGS))
        .await?
        .take(0)?;

    Ok((StatusCode::OK, Json(ApiResponse::list(logs))))
}
