use surrealdb::{
    RecordId, Surreal,
    engine::remote::ws::Client,
};
use tracing::{error, info};

use crate::{
    consts::table_const,
    models::notification::{CreateNotification, Notification, NotificationKind},
};

/// Creates user-addressed notification records. Same best-effort contract
/// as the audit recorder: a failed write is logged and swallowed. A real
/// deployment would also fan out to email/SMS from here.
#[derive(Debug, Clone)]
pub struct Notifier {
    sdb: Surreal<Client>,
}

impl Notifier {
    pub fn new(sdb: Surreal<Client>) -> Self {
        Self { sdb }
    }

    pub async fn dispatch(
        &self,
        recipient: RecordId,
        title: &str,
        message: String,
        kind: NotificationKind,
    ) {
        let notification = CreateNotification::init(recipient.clone(), title, message, kind);
        let created: Result<Option<Notification>, surrealdb::Error> = self
            .sdb
            .create(table_const::NOTIFICATIONS)
            .content(notification)
            .await;
        match created {
            Ok(_) => info!("Notification sent to {recipient}: {title}"),
            Err(err) => error!("Notification Error: {err:#?}"),
        }
    }
}
