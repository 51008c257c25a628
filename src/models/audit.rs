use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Append-only action trail entry. The core never updates or deletes these.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuditEntry {
    pub id: RecordId,
    pub user: RecordId,
    pub action: String,
    pub module: AuditModule,
    pub description: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AuditModule {
    Auth,
    Visitor,
    Worker,
    Security,
    System,
}

#[derive(Serialize, Debug, Clone)]
pub struct CreateAuditEntry {
    pub user: RecordId,
    pub action: String,
    pub module: AuditModule,
    pub description: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub timestamp: DateTime<Utc>,
}
