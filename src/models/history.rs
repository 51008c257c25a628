use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// One gate movement. Records are only ever appended, so insertion order is
/// chronological order. `performed_by` is absent for self-service scans.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HistoryEntry {
    pub action: GateAction,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performed_by: Option<RecordId>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum GateAction {
    CheckIn,
    CheckOut,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::time_now;
    use serde_json::json;

    #[test]
    fn gate_action_uses_wire_spelling() {
        assert_eq!(
            serde_json::to_value(GateAction::CheckIn).expect("serialize"),
            json!("check-in")
        );
        assert_eq!(
            serde_json::to_value(GateAction::CheckOut).expect("serialize"),
            json!("check-out")
        );
    }

    #[test]
    fn entries_append_in_chronological_order() {
        let mut history = Vec::new();
        history.push(HistoryEntry {
            action: GateAction::CheckIn,
            timestamp: time_now(),
            performed_by: None,
        });
        history.push(HistoryEntry {
            action: GateAction::CheckOut,
            timestamp: time_now(),
            performed_by: None,
        });

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].action, GateAction::CheckIn);
        assert_eq!(history[1].action, GateAction::CheckOut);
        assert!(history[0].timestamp <= history[1].timestamp);
    }
}
