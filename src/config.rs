use std::env;

/// Runtime configuration, read once at startup. Every knob has a local-dev
/// default so `cargo run` works against a stock SurrealDB instance.
#[derive(Debug, Clone)]
pub struct Config {
    pub addr: String,
    pub surreal_addr: String,
    pub surreal_user: String,
    pub surreal_pass: String,
    pub surreal_ns: String,
    pub surreal_db: String,
    pub jwt_secret: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            addr: env_or("GATEPASS_ADDR", "127.0.0.1:5000"),
            surreal_addr: env_or("SURREAL_ADDR", "localhost:8000"),
            surreal_user: env_or("SURREAL_USER", "root"),
            surreal_pass: env_or("SURREAL_PASS", "root"),
            surreal_ns: env_or("SURREAL_NS", "gatepass"),
            surreal_db: env_or("SURREAL_DB", "gatepass"),
            jwt_secret: env_or("JWT_SECRET", "secret"),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
