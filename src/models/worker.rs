use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use crate::models::history::HistoryEntry;
use crate::utils::time::time_now;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Worker {
    pub id: RecordId,
    pub user: RecordId,
    pub department: Option<String>,
    pub position: Option<String>,
    pub contract_start: Option<DateTime<Utc>>,
    pub contract_end: Option<DateTime<Utc>>,
    pub status: WorkerStatus,
    pub qr_token: Option<String>,
    pub last_check_in: Option<DateTime<Utc>>,
    pub last_check_out: Option<DateTime<Utc>>,
    #[serde(default)]
    pub documents: Vec<String>,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WorkerStatus {
    Active,
    Inactive,
    Suspended,
}

impl fmt::Display for WorkerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WorkerStatus::Active => "active",
            WorkerStatus::Inactive => "inactive",
            WorkerStatus::Suspended => "suspended",
        };
        f.write_str(name)
    }
}

/// Gate toggle direction, derived purely from the two timestamps. There is
/// no stored "inside/outside" flag to drift out of sync: a worker with no
/// recorded check-in is outside, otherwise the newer timestamp wins.
pub fn is_checking_in(
    last_check_in: Option<DateTime<Utc>>,
    last_check_out: Option<DateTime<Utc>>,
) -> bool {
    match (last_check_in, last_check_out) {
        (None, _) => true,
        (Some(check_in), Some(check_out)) => check_in < check_out,
        (Some(_), None) => false,
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct CreateWorker {
    pub user: RecordId,
    pub department: Option<String>,
    pub position: Option<String>,
    pub contract_start: Option<DateTime<Utc>>,
    pub contract_end: Option<DateTime<Utc>>,
    pub status: WorkerStatus,
    pub documents: Vec<String>,
    pub history: Vec<HistoryEntry>,
    pub created_at: DateTime<Utc>,
}

impl CreateWorker {
    pub fn init(
        user: RecordId,
        department: Option<String>,
        position: Option<String>,
        contract_start: Option<DateTime<Utc>>,
        contract_end: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            user,
            department,
            position,
            contract_start,
            contract_end,
            status: WorkerStatus::Active,
            documents: Vec::new(),
            history: Vec::new(),
            created_at: time_now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn fresh_record_checks_in_first() {
        assert!(is_checking_in(None, None));
    }

    #[test]
    fn toggle_alternates_over_successive_scans() {
        let start = Utc::now();

        // first scan landed: inside, next scan must check out
        let check_in = Some(start);
        assert!(!is_checking_in(check_in, None));

        // second scan landed: outside again, next scan checks in
        let check_out = Some(start + Duration::seconds(30));
        assert!(is_checking_in(check_in, check_out));

        // third scan landed: back inside
        let check_in = Some(start + Duration::seconds(60));
        assert!(!is_checking_in(check_in, check_out));
    }

    #[test]
    fn stale_check_out_still_reports_inside() {
        // An old check-out is never cleared; the comparison alone decides.
        let now = Utc::now();
        assert!(!is_checking_in(Some(now), Some(now - Duration::hours(8))));
    }

    #[test]
    fn new_workers_start_active() {
        let record = CreateWorker::init(
            RecordId::from_table_key("users", "u1"),
            Some("Facilities".to_string()),
            None,
            None,
            None,
        );
        assert_eq!(record.status, WorkerStatus::Active);
        assert!(record.history.is_empty());
        assert!(record.documents.is_empty());
    }
}
