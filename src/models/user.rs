use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Account directory entry. Credential material lives in the external auth
/// system; this record only carries what the lifecycle engine needs: the
/// display name for notifications, the national id for gate verification
/// and the role for read scoping.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub national_id: Option<String>,
    pub phone: Option<String>,
    pub organization: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Visitor,
    Worker,
    Receptionist,
    Security,
    OrgAdmin,
    SuperAdmin,
}
