use surrealdb::RecordId;

use crate::consts::table_const;

/// Builds a users-table record id from either a bare key or a full
/// `users:key` reference. The table part of the input is ignored so a
/// token or request body can never point the lookup at another table.
pub fn user_record_id(val: &str) -> RecordId {
    let trimmed = val.trim();
    let key = trimmed.rsplit(':').next().unwrap_or(trimmed);
    RecordId::from_table_key(table_const::USERS, key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_full_reference() {
        assert_eq!(user_record_id("users:alice").to_string(), "users:alice");
    }

    #[test]
    fn accepts_a_bare_key() {
        assert_eq!(user_record_id("alice").to_string(), "users:alice");
    }

    #[test]
    fn pins_the_table() {
        assert_eq!(user_record_id("workers:bob").to_string(), "users:bob");
    }
}
