use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use crate::models::history::HistoryEntry;
use crate::utils::time::time_now;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Visitor {
    pub id: RecordId,
    pub user: RecordId,
    pub purpose: String,
    pub host: String,
    pub status: VisitorStatus,
    pub qr_token: Option<String>,
    pub check_in_time: Option<DateTime<Utc>>,
    pub check_out_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    pub created_at: DateTime<Utc>,
}

/// Approval status and the check timestamps evolve independently: gate
/// operators may check a visitor in whatever the status says.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum VisitorStatus {
    Pending,
    Approved,
    Rejected,
    CheckedIn,
    CheckedOut,
}

impl fmt::Display for VisitorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VisitorStatus::Pending => "pending",
            VisitorStatus::Approved => "approved",
            VisitorStatus::Rejected => "rejected",
            VisitorStatus::CheckedIn => "checked-in",
            VisitorStatus::CheckedOut => "checked-out",
        };
        f.write_str(name)
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct CreateVisitor {
    pub user: RecordId,
    pub purpose: String,
    pub host: String,
    pub status: VisitorStatus,
    pub history: Vec<HistoryEntry>,
    pub created_at: DateTime<Utc>,
}

impl CreateVisitor {
    pub fn init(user: RecordId, purpose: String, host: String) -> Self {
        Self {
            user,
            purpose,
            host,
            status: VisitorStatus::Pending,
            history: Vec::new(),
            created_at: time_now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_registrations_start_pending() {
        let record = CreateVisitor::init(
            RecordId::from_table_key("users", "u1"),
            "meeting".to_string(),
            "Alice".to_string(),
        );
        assert_eq!(record.status, VisitorStatus::Pending);
        assert!(record.history.is_empty());
    }

    #[test]
    fn status_uses_wire_spelling() {
        assert_eq!(
            serde_json::to_value(VisitorStatus::CheckedIn).expect("serialize"),
            json!("checked-in")
        );
        assert_eq!(VisitorStatus::CheckedOut.to_string(), "checked-out");
    }
}
