use chrono::{DateTime, Utc};

/// Single clock call-site; record timestamps must be comparable, so
/// everything is stamped in UTC.
pub fn time_now() -> DateTime<Utc> {
    Utc::now()
}
