use std::sync::Arc;

use surrealdb::{
    Surreal,
    engine::remote::ws::{Client, Ws},
    opt::auth::Root,
};

use crate::{
    config::Config,
    errors::Result,
    utils::{audit_logger::AuditRecorder, nida::NidaClient, notify::Notifier},
};

/// Shared per-request context: the database handle plus the collaborators
/// every lifecycle transition talks to. All of them are cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    pub sdb: Surreal<Client>,
    pub config: Arc<Config>,
    pub nida: NidaClient,
    pub audit: AuditRecorder,
    pub notifier: Notifier,
}

impl AppState {
    pub async fn init(config: Config) -> Result<Self> {
        let sdb = Surreal::new::<Ws>(config.surreal_addr.as_str()).await?;
        sdb.signin(Root {
            username: &config.surreal_user,
            password: &config.surreal_pass,
        })
        .await?;
        sdb.use_ns(config.surreal_ns.as_str())
            .use_db(config.surreal_db.as_str())
            .await?;

        Ok(Self {
            nida: NidaClient::new(),
            audit: AuditRecorder::new(sdb.clone()),
            notifier: Notifier::new(sdb.clone()),
            sdb,
            config: Arc::new(config),
        })
    }
}
