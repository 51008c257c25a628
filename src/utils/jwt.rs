use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode};

use crate::errors::Result;

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct Claims {
    pub id: String,
    pub exp: usize,
    pub iat: usize,
    pub iss: String,
}

pub fn encode_jwt(claim: &Claims, secret: &[u8]) -> Result<String> {
    let token = encode(&Header::default(), claim, &EncodingKey::from_secret(secret))?;
    Ok(token)
}

pub fn decode_jwt(token: &str, secret: &[u8]) -> Result<TokenData<Claims>> {
    let token = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret),
        &Validation::default(),
    )?;

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    const SECRET: &[u8] = b"test-secret";

    fn claims(exp_offset: i64) -> Claims {
        let iat = Utc::now().timestamp() as usize;
        Claims {
            id: "users:shyaka".to_string(),
            exp: (Utc::now().timestamp() + exp_offset) as usize,
            iat,
            iss: "gatepass".to_string(),
        }
    }

    #[test]
    fn encode_decode_round_trip() {
        let token = encode_jwt(&claims(3600), SECRET).expect("encode");
        let decoded = decode_jwt(&token, SECRET).expect("decode");
        assert_eq!(decoded.claims.id, "users:shyaka");
        assert_eq!(decoded.claims.iss, "gatepass");
    }

    #[test]
    fn expired_tokens_are_rejected() {
        let token = encode_jwt(&claims(-7200), SECRET).expect("encode");
        assert!(decode_jwt(&token, SECRET).is_err());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = encode_jwt(&claims(3600), SECRET).expect("encode");
        assert!(decode_jwt(&token, b"other-secret").is_err());
    }
}
