use surrealdb::{
    RecordId, Surreal,
    engine::remote::ws::Client,
};
use tracing::error;

use crate::{
    consts::table_const,
    middleware::ClientMeta,
    models::audit::{AuditEntry, AuditModule, CreateAuditEntry},
    utils::time::time_now,
};

/// Append-only recorder for the action trail. Writes are best-effort: a
/// failed insert is logged for the operator and dropped, it never reaches
/// the caller or fails the operation that triggered it.
#[derive(Debug, Clone)]
pub struct AuditRecorder {
    sdb: Surreal<Client>,
}

impl AuditRecorder {
    pub fn new(sdb: Surreal<Client>) -> Self {
        Self { sdb }
    }

    pub async fn record(
        &self,
        actor: RecordId,
        action: &str,
        module: AuditModule,
        description: String,
        meta: &ClientMeta,
    ) {
        let entry = CreateAuditEntry {
            user: actor,
            action: action.to_string(),
            module,
            description,
            ip_address: meta.ip.clone(),
            user_agent: meta.user_agent.clone(),
            timestamp: time_now(),
        };

        let written: Result<Option<AuditEntry>, surrealdb::Error> = self
            .sdb
            .create(table_const::AUDIT_LOGS)
            .content(entry)
            .await;
        if let Err(err) = written {
            error!("Audit Log Error: {err:#?}");
        }
    }
}
