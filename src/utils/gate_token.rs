use sha2::{Digest, Sha256};
use surrealdb::RecordId;

/// Opaque credential embedded in the printed/scannable gate pass. Derived
/// once from the record id after creation; presenting either the raw id or
/// this token satisfies the gate's token check.
pub fn derive_gate_token(record_id: &RecordId) -> String {
    let mut hasher = Sha256::new();
    hasher.update(record_id.to_string().as_bytes());

    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_a_sha256_hex_digest() {
        let token = derive_gate_token(&RecordId::from_table_key("workers", "w1"));
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn token_is_stable_for_the_same_record() {
        let id = RecordId::from_table_key("workers", "w1");
        assert_eq!(derive_gate_token(&id), derive_gate_token(&id));
    }

    #[test]
    fn distinct_records_get_distinct_tokens() {
        assert_ne!(
            derive_gate_token(&RecordId::from_table_key("workers", "w1")),
            derive_gate_token(&RecordId::from_table_key("workers", "w2")),
        );
    }
}
