use axum::{
    extract::{FromRequestParts, Request, State},
    http::{
        header::{AUTHORIZATION, USER_AGENT},
        request::Parts,
    },
    middleware::Next,
    response::Response,
};
use jsonwebtoken::errors::ErrorKind;
use surrealdb::RecordId;

use crate::{
    errors::{Error, Result},
    models::user::{Role, User},
    state::AppState,
    utils::{jwt::decode_jwt, record_id::user_record_id},
};

/// The caller's resolved identity, inserted as a request extension by the
/// auth middleware. Token issuance happens elsewhere; this service only
/// consumes bearer tokens.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: RecordId,
    pub name: String,
    pub role: Role,
    pub national_id: Option<String>,
}

/// Request origin captured for the audit trail.
#[derive(Debug, Clone)]
pub struct ClientMeta {
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

pub async fn auth_jwt_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response> {
    let request = buffer_request_and_authenticate(&state, request).await?;

    Ok(next.run(request).await)
}

async fn buffer_request_and_authenticate(
    state: &AppState,
    request: Request,
) -> Result<Request> {
    let (mut parts, body) = request.into_parts();
    let user = check_auth_parts(state, &parts).await?;

    parts.extensions.insert(user);

    Ok(Request::from_parts(parts, body))
}

async fn check_auth_parts(state: &AppState, parts: &Parts) -> Result<AuthUser> {
    let header_value = parts
        .headers
        .get(AUTHORIZATION)
        .ok_or(Error::MissingToken)?
        .to_str()
        .map_err(|_| Error::InvalidToken)?;

    let mut pieces = header_value.trim().splitn(2, ' ');

    let scheme = pieces.next().ok_or(Error::MissingToken)?;
    let token = pieces.next().ok_or(Error::MissingToken)?;

    if scheme != "Bearer" {
        tracing::warn!("Invalid auth scheme: {scheme}");
        return Err(Error::InvalidScheme);
    }

    let data = decode_jwt(token, state.config.jwt_secret.as_bytes()).map_err(|err| match err {
        Error::JwtError(e) if matches!(e.kind(), ErrorKind::ExpiredSignature) => Error::TokenExpired,
        _ => Error::InvalidToken,
    })?;

    let user: Option<User> = state.sdb.select(user_record_id(&data.claims.id)).await?;
    let user = user.ok_or(Error::InvalidToken)?;

    Ok(AuthUser {
        id: user.id,
        name: user.name,
        role: user.role,
        national_id: user.national_id,
    })
}

/// Role check at the top of a protected handler. Kept a plain function so
/// the allowed list sits next to the handler it guards.
pub fn require_role(auth: &AuthUser, allowed: &[Role]) -> Result<()> {
    if allowed.contains(&auth.role) {
        Ok(())
    } else {
        Err(Error::Forbidden)
    }
}

impl<S> FromRequestParts<S> for ClientMeta
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        let ip = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(',').next())
            .map(|value| value.trim().to_string())
            .or_else(|| {
                parts
                    .headers
                    .get("x-real-ip")
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_string)
            });
        let user_agent = parts
            .headers
            .get(USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        Ok(Self { ip, user_agent })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth(role: Role) -> AuthUser {
        AuthUser {
            id: RecordId::from_table_key("users", "u1"),
            name: "Test User".to_string(),
            role,
            national_id: None,
        }
    }

    #[test]
    fn role_guard_accepts_listed_roles() {
        let allowed = [Role::SuperAdmin, Role::Security];
        assert!(require_role(&auth(Role::Security), &allowed).is_ok());
        assert!(require_role(&auth(Role::SuperAdmin), &allowed).is_ok());
    }

    #[test]
    fn role_guard_rejects_unlisted_roles() {
        assert!(require_role(&auth(Role::Worker), &[Role::SuperAdmin]).is_err());
        assert!(require_role(&auth(Role::Visitor), &[Role::Worker, Role::Security]).is_err());
    }
}
