use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use surrealdb::RecordId;
use validator::Validate;

use crate::{
    consts::{gate_const, table_const},
    errors::{Error, Result},
    middleware::{AuthUser, ClientMeta, require_role},
    models::{
        audit::AuditModule,
        history::{GateAction, HistoryEntry},
        notification::NotificationKind,
        response::ApiResponse,
        user::{Role, User},
        visitor::{CreateVisitor, Visitor, VisitorStatus},
    },
    state::AppState,
    utils::{gate_token::derive_gate_token, time::time_now, validated_json::ValidatedJson},
};

#[derive(Debug, Clone, serde::Deserialize, Validate)]
pub struct RegisterVisitorRequest {
    #[validate(length(min = 1, message = "Please add a purpose of visit"))]
    pub purpose: String,
    #[validate(length(min = 1, message = "Please add a host name"))]
    pub host: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct UpdateVisitorRequest {
    pub action: Option<GateAction>,
    pub status: Option<VisitorStatus>,
}

#[derive(Debug, serde::Serialize)]
struct GateTokenPatch {
    qr_token: String,
}

#[derive(Debug, serde::Serialize)]
struct VisitorPatch {
    status: VisitorStatus,
    check_in_time: Option<DateTime<Utc>>,
    check_out_time: Option<DateTime<Utc>>,
    history: Vec<HistoryEntry>,
}

pub async fn register_visitor(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    meta: ClientMeta,
    ValidatedJson(input): ValidatedJson<RegisterVisitorRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Visitor>>)> {
    require_role(&auth, &[Role::Visitor, Role::Receptionist, Role::SuperAdmin])?;

    let created: Option<Visitor> = state
        .sdb
        .create(table_const::VISITORS)
        .content(CreateVisitor::init(auth.id.clone(), input.purpose, input.host))
        .await?;
    let mut visitor = created.ok_or(Error::Unknown)?;

    let qr_token = derive_gate_token(&visitor.id);
    let _: Option<Visitor> = state
        .sdb
        .update(visitor.id.clone())
        .merge(GateTokenPatch {
            qr_token: qr_token.clone(),
        })
        .await?;
    visitor.qr_token = Some(qr_token);

    state
        .audit
        .record(
            auth.id.clone(),
            "VISITOR_REGISTER",
            AuditModule::Visitor,
            format!("Visitor registration for {}", visitor.host),
            &meta,
        )
        .await;
    state
        .notifier
        .dispatch(
            auth.id.clone(),
            "Registration Successful",
            format!("Your visit to {} has been scheduled.", visitor.host),
            NotificationKind::Success,
        )
        .await;
    notify_host(&state, &auth, &visitor).await;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(visitor))))
}

// Host lookup is part of the notification side effect, so a lookup failure
// must not fail the registration either.
async fn notify_host(state: &AppState, auth: &AuthUser, visitor: &Visitor) {
    let found = state
        .sdb
        .query("SELECT * FROM type::table($table) WHERE name = $name LIMIT 1")
        .bind(("table", table_const::USERS))
        .bind(("name", visitor.host.clone()))
        .await
        .and_then(|mut response| response.take::<Vec<User>>(0));

    match found {
        Ok(hosts) => {
            if let Some(host) = hosts.into_iter().next() {
                state
                    .notifier
                    .dispatch(
                        host.id,
                        "New Visitor Scheduled",
                        format!(
                            "{} has registered to visit you for: {}",
                            auth.name, visitor.purpose
                        ),
                        NotificationKind::Info,
                    )
                    .await;
            }
        }
        Err(err) => tracing::error!("Host lookup failed: {err:#?}"),
    }
}

pub async fn get_my_visitor_record(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<(StatusCode, Json<ApiResponse<Visitor>>)> {
    require_role(&auth, &[Role::Visitor])?;

    let records: Vec<Visitor> = state
        .sdb
        .query("SELECT * FROM type::table($table) WHERE user = $user ORDER BY created_at DESC LIMIT 1")
        .bind(("table", table_const::VISITORS))
        .bind(("user", auth.id.clone()))
        .await?
        .take(0)?;
    let visitor = records.into_iter().next().ok_or(Error::NoRegistrationRecord)?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(visitor))))
}

pub async fn get_visitors(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<Visitor>>>)> {
    require_role(
        &auth,
        &[
            Role::SuperAdmin,
            Role::OrgAdmin,
            Role::Security,
            Role::Receptionist,
            Role::Visitor,
        ],
    )?;

    // A visitor-role caller only ever sees their own records.
    let visitors: Vec<Visitor> = if auth.role == Role::Visitor {
        state
            .sdb
            .query("SELECT * FROM type::table($table) WHERE user = $user ORDER BY created_at DESC")
            .bind(("table", table_const::VISITORS))
            .bind(("user", auth.id.clone()))
            .await?
            .take(0)?
    } else {
        state
            .sdb
            .query("SELECT * FROM type::table($table) ORDER BY created_at DESC")
            .bind(("table", table_const::VISITORS))
            .await?
            .take(0)?
    };

    Ok((StatusCode::OK, Json(ApiResponse::list(visitors))))
}

pub async fn get_visitor(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<ApiResponse<Visitor>>)> {
    require_role(
        &auth,
        &[
            Role::SuperAdmin,
            Role::OrgAdmin,
            Role::Security,
            Role::Receptionist,
        ],
    )?;

    let visitor: Option<Visitor> = state
        .sdb
        .select(RecordId::from_table_key(table_const::VISITORS, id))
        .await?;
    let visitor = visitor.ok_or(Error::VisitorNotFound)?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(visitor))))
}

/// Status edits and gate actions in one endpoint. A requested `approved`
/// status is gated on identity verification; every other status value is a
/// direct overwrite. Gate actions are deliberately not guarded by status.
pub async fn update_visitor_status(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    meta: ClientMeta,
    Path(id): Path<String>,
    Json(input): Json<UpdateVisitorRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Visitor>>)> {
    require_role(
        &auth,
        &[
            Role::SuperAdmin,
            Role::OrgAdmin,
            Role::Security,
            Role::Receptionist,
        ],
    )?;

    let record_id = RecordId::from_table_key(table_const::VISITORS, id);
    let visitor: Option<Visitor> = state.sdb.select(record_id.clone()).await?;
    let mut visitor = visitor.ok_or(Error::VisitorNotFound)?;

    if let Some(status) = input.status {
        if status == VisitorStatus::Approved {
            let owner: Option<User> = state.sdb.select(visitor.user.clone()).await?;
            let national_id = owner
                .and_then(|user| user.national_id)
                .unwrap_or_else(|| gate_const::FALLBACK_NATIONAL_ID.to_string());
            let verdict = state.nida.verify(&national_id).await;
            if !verdict.verified {
                return Err(Error::VerificationFailed(format!(
                    "NIDA Verification Failed: {}",
                    verdict.message
                )));
            }
        }
        visitor.status = status;
    }

    let now = time_now();
    match input.action {
        Some(GateAction::CheckIn) => {
            visitor.check_in_time = Some(now);
            visitor.history.push(HistoryEntry {
                action: GateAction::CheckIn,
                timestamp: now,
                performed_by: Some(auth.id.clone()),
            });
        }
        Some(GateAction::CheckOut) => {
            visitor.check_out_time = Some(now);
            visitor.history.push(HistoryEntry {
                action: GateAction::CheckOut,
                timestamp: now,
                performed_by: Some(auth.id.clone()),
            });
        }
        None => {}
    }

    let _: Option<Visitor> = state
        .sdb
        .update(record_id)
        .merge(VisitorPatch {
            status: visitor.status,
            check_in_time: visitor.check_in_time,
            check_out_time: visitor.check_out_time,
            history: visitor.history.clone(),
        })
        .await?;

    // Side effects run after the record is persisted; their outcome cannot
    // change the response any more.
    if let Some(status) = input.status {
        if status == VisitorStatus::Approved {
            state
                .notifier
                .dispatch(
                    visitor.user.clone(),
                    "Visit Approved",
                    format!(
                        "Your visit to {} has been approved. You can now use your QR code.",
                        visitor.host
                    ),
                    NotificationKind::Success,
                )
                .await;
        }
        state
            .audit
            .record(
                auth.id.clone(),
                "VISITOR_STATUS_UPDATE",
                AuditModule::Visitor,
                format!("Visitor status updated to {status}"),
                &meta,
            )
            .await;
    }
    match input.action {
        Some(GateAction::CheckIn) => {
            state
                .audit
                .record(
                    auth.id.clone(),
                    "VISITOR_CHECK_IN",
                    AuditModule::Security,
                    format!("Visitor {} checked in", visitor.id),
                    &meta,
                )
                .await;
        }
        Some(GateAction::CheckOut) => {
            state
                .audit
                .record(
                    auth.id.clone(),
                    "VISITOR_CHECK_OUT",
                    AuditModule::Security,
                    format!("Visitor {} checked out", visitor.id),
                    &meta,
                )
                .await;
        }
        None => {}
    }

    Ok((StatusCode::OK, Json(ApiResponse::ok(visitor))))
}
