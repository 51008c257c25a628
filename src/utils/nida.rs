use std::time::Duration;

/// Mock NIDA (National Identification Agency) client. Simulates identity
/// verification for a Rwandan national id: 16 digits, leading 1 or 2.
///
/// This is a simulation: any well-formed id that is not on the small mock
/// roster still verifies, so a positive verdict must never be read as an
/// authoritative identity match.
#[derive(Debug, Clone)]
pub struct NidaClient {
    delay: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NidaVerdict {
    pub verified: bool,
    pub message: String,
    pub person: Option<PersonInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonInfo {
    pub name: String,
    pub dob: Option<String>,
    pub gender: Option<String>,
    pub status: String,
}

impl NidaClient {
    pub fn new() -> Self {
        Self::with_delay(Duration::from_millis(800))
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    /// Never fails: a malformed id is a negative verdict, not an error.
    pub async fn verify(&self, id_number: &str) -> NidaVerdict {
        // The agency endpoint is slow; model the round-trip so callers treat
        // this as a suspending call.
        tokio::time::sleep(self.delay).await;

        let normalized: String = id_number.chars().filter(|c| !c.is_whitespace()).collect();

        if !has_valid_shape(&normalized) {
            return NidaVerdict {
                verified: false,
                message: "Invalid ID format. Rwandan IDs must be 16 digits.".to_string(),
                person: None,
            };
        }

        if let Some(person) = known_person(&normalized) {
            return NidaVerdict {
                verified: true,
                message: "Identity verified successfully with NIDA".to_string(),
                person: Some(person),
            };
        }

        NidaVerdict {
            verified: true,
            message: "Identity verified with NIDA".to_string(),
            person: Some(PersonInfo {
                name: "Verified Citizen".to_string(),
                dob: None,
                gender: None,
                status: "Active".to_string(),
            }),
        }
    }
}

impl Default for NidaClient {
    fn default() -> Self {
        Self::new()
    }
}

fn has_valid_shape(id: &str) -> bool {
    id.len() == 16
        && id.bytes().all(|b| b.is_ascii_digit())
        && matches!(id.as_bytes().first(), Some(b'1' | b'2'))
}

fn known_person(id: &str) -> Option<PersonInfo> {
    match id {
        "1199080000000000" => Some(PersonInfo {
            name: "SHYAKA CLEVER PRINCE".to_string(),
            dob: Some("1990-05-15".to_string()),
            gender: Some("Male".to_string()),
            status: "Active".to_string(),
        }),
        "1199570000000000" => Some(PersonInfo {
            name: "MUGISHA ALAIN".to_string(),
            dob: Some("1995-10-20".to_string()),
            gender: Some("Male".to_string()),
            status: "Active".to_string(),
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::gate_const;

    fn client() -> NidaClient {
        NidaClient::with_delay(Duration::ZERO)
    }

    #[tokio::test]
    async fn rejects_malformed_ids_with_format_message() {
        for id in [
            "",
            "123",
            "9199080000000000",     // bad leading digit
            "11990800000000001",    // 17 digits
            "119908000000000",      // 15 digits
            "1199O80000000000",     // letter O
        ] {
            let verdict = client().verify(id).await;
            assert!(!verdict.verified, "id {id:?} should fail");
            assert_eq!(
                verdict.message,
                "Invalid ID format. Rwandan IDs must be 16 digits."
            );
            assert!(verdict.person.is_none());
        }
    }

    #[tokio::test]
    async fn strips_whitespace_before_validation() {
        let verdict = client().verify("1199 0800 0000 0000").await;
        assert!(verdict.verified);
        let person = verdict.person.expect("allow-listed id carries details");
        assert_eq!(person.name, "SHYAKA CLEVER PRINCE");
    }

    #[tokio::test]
    async fn roster_ids_return_person_details() {
        let verdict = client().verify("1199570000000000").await;
        assert!(verdict.verified);
        assert_eq!(verdict.message, "Identity verified successfully with NIDA");
        let person = verdict.person.expect("details");
        assert_eq!(person.name, "MUGISHA ALAIN");
        assert_eq!(person.dob.as_deref(), Some("1995-10-20"));
        assert_eq!(person.gender.as_deref(), Some("Male"));
        assert_eq!(person.status, "Active");
    }

    #[tokio::test]
    async fn unlisted_but_well_formed_ids_verify_generically() {
        let verdict = client().verify("2001234567890123").await;
        assert!(verdict.verified);
        assert_eq!(verdict.message, "Identity verified with NIDA");
        let person = verdict.person.expect("generic details");
        assert_eq!(person.name, "Verified Citizen");
        assert!(person.dob.is_none());
    }

    #[tokio::test]
    async fn fallback_demo_id_is_on_the_roster() {
        // Entrants without a national id on file are verified against this
        // one, so it must always pass.
        let verdict = client().verify(gate_const::FALLBACK_NATIONAL_ID).await;
        assert!(verdict.verified);
        assert!(verdict.person.is_some());
    }
}
