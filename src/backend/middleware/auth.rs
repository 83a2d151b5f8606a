/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts the bearer token from the Authorization
 * header, resolves it through `AuthService`, and hands the user to handlers
 * via request extensions.
 *
 * The middleware runs before any body extractor of the wrapped handler, so
 * an unauthenticated request is rejected without its body being read.
 */

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::service::AuthService;
use crate::backend::auth::users::User;
use crate::backend::error::BackendError;

/// Authenticated user resolved from the bearer token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user: User,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the token from the `Authorization: Bearer <token>` header
/// 2. Resolves it to a user (signature, expiry, and existence checks)
/// 3. Attaches the user to request extensions for use in handlers
///
/// Returns 401 if the token is missing or invalid, 404 if its user is gone.
pub async fn auth_middleware(
    State(auth): State<AuthService>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = bearer_token(request.headers())?;
    let user = auth.resolve_token(token).await?;

    request.extensions_mut().insert(AuthenticatedUser { user });

    Ok(next.run(request).await)
}

/// Extract the bearer token from request headers
///
/// The scheme is matched case-insensitively.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, BackendError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            BackendError::InvalidToken
        })?;

    let (scheme, token) = auth_header.split_once(' ').ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        BackendError::InvalidToken
    })?;

    let token = token.trim();
    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        tracing::warn!("Invalid Authorization header format");
        return Err(BackendError::InvalidToken);
    }

    Ok(token)
}

/// Axum extractor for the authenticated user
///
/// Reads the user placed in request extensions by `auth_middleware`. Using
/// it on a route without the middleware yields 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub User);

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let authenticated = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::InvalidToken
            })?;

        Ok(AuthUser(authenticated.user))
    }
}
