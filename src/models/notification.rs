use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use crate::utils::time::time_now;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Notification {
    pub id: RecordId,
    pub user: RecordId,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Serialize, Debug, Clone)]
pub struct CreateNotification {
    pub user: RecordId,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl CreateNotification {
    pub fn init(user: RecordId, title: &str, message: String, kind: NotificationKind) -> Self {
        Self {
            user,
            title: title.to_string(),
            message,
            kind,
            read: false,
            created_at: time_now(),
        }
    }
}
