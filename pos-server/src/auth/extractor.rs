//! Authentication extractors
//!
//! Handlers declare the tier they need through their signature:
//!
//! - [`StoreAuth`]: valid store session (outer tier only)
//! - [`OperatorAuth`]: store session plus a signed-in till operator
//! - [`AdminAuth`]: operator with the ADMIN role
//!
//! `AuthSession` itself is also extractable for handlers that inspect the
//! session without enforcing anything.

use axum::extract::FromRequestParts;
use http::request::Parts;

use crate::auth::identity::StoreId;
use crate::auth::session::AuthSession;
use crate::db::models::{Employee, Role};
use shared::{AppError, ErrorCode};

impl<S> FromRequestParts<S> for AuthSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthSession>()
            .cloned()
            .ok_or_else(|| AppError::internal("Session middleware not installed"))
    }
}

/// Requires a valid store session
pub struct StoreAuth(pub StoreId);

impl<S> FromRequestParts<S> for StoreAuth
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = AuthSession::from_request_parts(parts, state).await?;
        session
            .store_id
            .map(StoreAuth)
            .ok_or_else(AppError::unauthorized)
    }
}

/// Requires a signed-in till operator
pub struct OperatorAuth(pub Employee);

impl<S> FromRequestParts<S> for OperatorAuth
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = AuthSession::from_request_parts(parts, state).await?;
        if session.store_id.is_none() {
            return Err(AppError::unauthorized());
        }
        session.operator.map(OperatorAuth).ok_or_else(|| {
            AppError::new(ErrorCode::OperatorRequired)
        })
    }
}

/// Requires a signed-in till operator with the ADMIN role
pub struct AdminAuth(pub Employee);

impl<S> FromRequestParts<S> for AdminAuth
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let OperatorAuth(employee) = OperatorAuth::from_request_parts(parts, state).await?;
        if employee.role != Role::Admin {
            return Err(AppError::new(ErrorCode::AdminRequired));
        }
        Ok(AdminAuth(employee))
    }
}
