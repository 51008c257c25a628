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
        worker::{CreateWorker, Worker, WorkerStatus, is_checking_in},
    },
    state::AppState,
    utils::{
        gate_token::derive_gate_token, record_id::user_record_id, time::time_now,
        validated_json::ValidatedJson,
    },
};

#[derive(Debug, Clone, serde::Deserialize, Validate)]
pub struct VerifySelfRequest {
    #[validate(length(min = 1, message = "Please scan your gate pass"))]
    pub qr_data: String,
}

#[derive(Debug, Clone, serde::Deserialize, Validate)]
pub struct RegisterWorkerRequest {
    #[validate(length(min = 1, message = "Please add the worker's user id"))]
    pub user_id: String,
    pub department: Option<String>,
    pub position: Option<String>,
    pub contract_start: Option<DateTime<Utc>>,
    pub contract_end: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct UpdateWorkerRequest {
    pub action: Option<GateAction>,
    pub status: Option<WorkerStatus>,
}

/// Public projection of active workers for the visitor registration form.
#[derive(Debug, Clone, serde::Serialize)]
pub struct HostEntry {
    pub id: RecordId,
    pub name: String,
    pub department: Option<String>,
}

#[derive(Debug, serde::Serialize)]
struct GateTokenPatch {
    qr_token: String,
}

#[derive(Debug, serde::Serialize)]
struct GateTogglePatch {
    last_check_in: Option<DateTime<Utc>>,
    last_check_out: Option<DateTime<Utc>>,
    history: Vec<HistoryEntry>,
}

#[derive(Debug, serde::Serialize)]
struct WorkerPatch {
    status: WorkerStatus,
    last_check_in: Option<DateTime<Utc>>,
    last_check_out: Option<DateTime<Utc>>,
    history: Vec<HistoryEntry>,
}

/// Self-service gate toggle. The presented token must match the worker's
/// own record before the identity oracle is consulted; only a positive
/// verdict flips the check-in/check-out direction.
pub async fn verify_self(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    meta: ClientMeta,
    ValidatedJson(input): ValidatedJson<VerifySelfRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Worker>>)> {
    require_role(&auth, &[Role::Worker])?;

    let records: Vec<Worker> = state
        .sdb
        .query("SELECT * FROM type::table($table) WHERE user = $user ORDER BY created_at DESC LIMIT 1")
        .bind(("table", table_const::WORKERS))
        .bind(("user", auth.id.clone()))
        .await?
        .take(0)?;
    let mut worker = records.into_iter().next().ok_or(Error::WorkerRecordNotFound)?;

    let presented = input.qr_data.as_str();
    let matches_record =
        presented == worker.id.to_string() || worker.qr_token.as_deref() == Some(presented);
    if !matches_record && presented != gate_const::DEMO_GATE_PASS {
        return Err(Error::InvalidGateToken);
    }

    let national_id = auth
        .national_id
        .clone()
        .unwrap_or_else(|| gate_const::FALLBACK_NATIONAL_ID.to_string());
    let verdict = state.nida.verify(&national_id).await;
    if !verdict.verified {
        return Err(Error::VerificationFailed(verdict.message));
    }

    let checking_in = is_checking_in(worker.last_check_in, worker.last_check_out);
    let now = time_now();
    if checking_in {
        worker.last_check_in = Some(now);
        worker.history.push(HistoryEntry {
            action: GateAction::CheckIn,
            timestamp: now,
            performed_by: None,
        });
    } else {
        worker.last_check_out = Some(now);
        worker.history.push(HistoryEntry {
            action: GateAction::CheckOut,
            timestamp: now,
            performed_by: None,
        });
    }

    let _: Option<Worker> = state
        .sdb
        .update(worker.id.clone())
        .merge(GateTogglePatch {
            last_check_in: worker.last_check_in,
            last_check_out: worker.last_check_out,
            history: worker.history.clone(),
        })
        .await?;

    let (action_code, direction) = if checking_in {
        ("WORKER_SELF_CHECKIN", "Check-in")
    } else {
        ("WORKER_SELF_CHECKOUT", "Check-out")
    };
    state
        .audit
        .record(
            auth.id.clone(),
            action_code,
            AuditModule::Worker,
            "Worker self-verified at gate".to_string(),
            &meta,
        )
        .await;
    let confirmation = if checking_in {
        "You have successfully checked in via gate verification."
    } else {
        "You have successfully checked out via gate verification."
    };
    state
        .notifier
        .dispatch(
            auth.id.clone(),
            "Gate Access Granted",
            confirmation.to_string(),
            NotificationKind::Success,
        )
        .await;

    let message = format!("{direction} verified! {}", verdict.message);
    Ok((StatusCode::OK, Json(ApiResponse::with_message(worker, message))))
}

pub async fn register_worker(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    meta: ClientMeta,
    ValidatedJson(input): ValidatedJson<RegisterWorkerRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Worker>>)> {
    require_role(&auth, &[Role::SuperAdmin, Role::OrgAdmin])?;

    let created: Option<Worker> = state
        .sdb
        .create(table_const::WORKERS)
        .content(CreateWorker::init(
            user_record_id(&input.user_id),
            input.department,
            input.position,
            input.contract_start,
            input.contract_end,
        ))
        .await?;
    let mut worker = created.ok_or(Error::Unknown)?;

    let qr_token = derive_gate_token(&worker.id);
    let _: Option<Worker> = state
        .sdb
        .update(worker.id.clone())
        .merge(GateTokenPatch {
            qr_token: qr_token.clone(),
        })
        .await?;
    worker.qr_token = Some(qr_token);

    let department = worker.department.clone().unwrap_or_default();
    state
        .audit
        .record(
            auth.id.clone(),
            "WORKER_REGISTER",
            AuditModule::Worker,
            format!("Worker registration for department {department}"),
            &meta,
        )
        .await;
    state
        .notifier
        .dispatch(
            auth.id.clone(),
            "Registration Successful",
            format!("Your worker profile for {department} has been created."),
            NotificationKind::Success,
        )
        .await;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(worker))))
}

pub async fn get_my_worker_record(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<(StatusCode, Json<ApiResponse<Worker>>)> {
    require_role(&auth, &[Role::Worker])?;

    let records: Vec<Worker> = state
        .sdb
        .query("SELECT * FROM type::table($table) WHERE user = $user ORDER BY created_at DESC LIMIT 1")
        .bind(("table", table_const::WORKERS))
        .bind(("user", auth.id.clone()))
        .await?
        .take(0)?;
    let worker = records.into_iter().next().ok_or(Error::NoRegistrationRecord)?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(worker))))
}

pub async fn get_workers(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<Worker>>>)> {
    require_role(
        &auth,
        &[
            Role::SuperAdmin,
            Role::OrgAdmin,
            Role::Security,
            Role::Receptionist,
        ],
    )?;

    let workers: Vec<Worker> = state
        .sdb
        .query("SELECT * FROM type::table($table) ORDER BY created_at DESC")
        .bind(("table", table_const::WORKERS))
        .await?
        .take(0)?;

    Ok((StatusCode::OK, Json(ApiResponse::list(workers))))
}

/// Unauthenticated: exposes only name and department of active workers.
pub async fn get_public_hosts(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<HostEntry>>>)> {
    let workers: Vec<Worker> = state
        .sdb
        .query("SELECT * FROM type::table($table) WHERE status = $status")
        .bind(("table", table_const::WORKERS))
        .bind(("status", WorkerStatus::Active))
        .await?
        .take(0)?;

    let mut hosts = Vec::with_capacity(workers.len());
    for worker in workers {
        let user: Option<User> = state.sdb.select(worker.user.clone()).await?;
        if let Some(user) = user {
            hosts.push(HostEntry {
                id: user.id,
                name: user.name,
                department: worker.department,
            });
        }
    }

    Ok((StatusCode::OK, Json(ApiResponse::ok(hosts))))
}

pub async fn get_worker(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<ApiResponse<Worker>>)> {
    require_role(
        &auth,
        &[
            Role::SuperAdmin,
            Role::OrgAdmin,
            Role::Security,
            Role::Receptionist,
        ],
    )?;

    let worker: Option<Worker> = state
        .sdb
        .select(RecordId::from_table_key(table_const::WORKERS, id))
        .await?;
    let worker = worker.ok_or(Error::WorkerNotFound)?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(worker))))
}

/// Administrator-driven mirror of the visitor endpoint: ungated status
/// overwrite plus gate actions performed on the worker's behalf.
pub async fn update_worker_status(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    meta: ClientMeta,
    Path(id): Path<String>,
    Json(input): Json<UpdateWorkerRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Worker>>)> {
    require_role(&auth, &[Role::SuperAdmin, Role::OrgAdmin, Role::Security])?;

    let record_id = RecordId::from_table_key(table_const::WORKERS, id);
    let worker: Option<Worker> = state.sdb.select(record_id.clone()).await?;
    let mut worker = worker.ok_or(Error::WorkerNotFound)?;

    if let Some(status) = input.status {
        worker.status = status;
    }

    let now = time_now();
    match input.action {
        Some(GateAction::CheckIn) => {
            worker.last_check_in = Some(now);
            worker.history.push(HistoryEntry {
                action: GateAction::CheckIn,
                timestamp: now,
                performed_by: Some(auth.id.clone()),
            });
        }
        Some(GateAction::CheckOut) => {
            worker.last_check_out = Some(now);
            worker.history.push(HistoryEntry {
                action: GateAction::CheckOut,
                timestamp: now,
                performed_by: Some(auth.id.clone()),
            });
        }
        None => {}
    }

    let _: Option<Worker> = state
        .sdb
        .update(record_id)
        .merge(WorkerPatch {
            status: worker.status,
            last_check_in: worker.last_check_in,
            last_check_out: worker.last_check_out,
            history: worker.history.clone(),
        })
        .await?;

    if let Some(status) = input.status {
        state
            .audit
            .record(
                auth.id.clone(),
                "WORKER_STATUS_UPDATE",
                AuditModule::Worker,
                format!("Worker status updated to {status}"),
                &meta,
            )
            .await;
        state
            .notifier
            .dispatch(
                worker.user.clone(),
                "Profile Updated",
                format!("Your status has been updated to {status}"),
                NotificationKind::Info,
            )
            .await;
    }
    match input.action {
        Some(GateAction::CheckIn) => {
            state
                .audit
                .record(
                    auth.id.clone(),
                    "WORKER_CHECK_IN",
                    AuditModule::Security,
                    format!("Worker {} checked in", worker.id),
                    &meta,
                )
                .await;
        }
        Some(GateAction::CheckOut) => {
            state
                .audit
                .record(
                    auth.id.clone(),
                    "WORKER_CHECK_OUT",
                    AuditModule::Security,
                    format!("Worker {} checked out", worker.id),
                    &meta,
                )
                .await;
        }
        None => {}
    }

    Ok((StatusCode::OK, Json(ApiResponse::ok(worker))))
}
