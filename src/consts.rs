pub mod table_const {
    pub const USERS: &str = "users";
    pub const VISITORS: &str = "visitors";
    pub const WORKERS: &str = "workers";
    pub const AUDIT_LOGS: &str = "audit_logs";
    pub const NOTIFICATIONS: &str = "notifications";
}

pub mod gate_const {
    /// Accepted at the gate in place of a scanned worker credential.
    pub const DEMO_GATE_PASS: &str = "DEMO_GATE_PASS";
    /// Substituted when an entrant's owner has no national id on file.
    pub const FALLBACK_NATIONAL_ID: &str = "1199080000000000";
}
