//! Authentication Handlers
//!
//! PIN verification, till logout and session introspection. The outer
//! store session is established elsewhere (hosted identity provider);
//! these endpoints only manage the till-operator tier.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use crate::auth::cookie::{clear_employee_cookie, employee_cookie};
use crate::auth::{AuthSession, StoreAuth};
use crate::core::ServerState;
use crate::db::models::EmployeePublic;
use crate::db::repository::EmployeeRepository;
use crate::security_log;
use shared::{AppError, ErrorCode};

/// PIN verification payload
///
/// Fields are optional so that missing ones produce field-specific 400s
/// instead of a generic deserialization error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPinRequest {
    pub employee_id: Option<String>,
    pub pin: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VerifyPinResponse {
    pub success: bool,
    pub user: EmployeePublic,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub store_id: Option<String>,
    pub operator: Option<EmployeePublic>,
    pub is_fully_authenticated: bool,
}

/// Verify an employee PIN and establish the till session
///
/// Nonexistent, inactive and cross-store employees all answer with the
/// same 404 so the endpoint cannot be used to probe other tenants.
pub async fn verify_pin(
    State(state): State<ServerState>,
    StoreAuth(store_id): StoreAuth,
    jar: CookieJar,
    Json(req): Json<VerifyPinRequest>,
) -> Result<(CookieJar, Json<VerifyPinResponse>), AppError> {
    let employee_id = req
        .employee_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::required_field("employeeId"))?;
    let pin = req
        .pin
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::required_field("pin"))?;

    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo
        .find_login_target(&store_id, &employee_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound))?;

    let pin_valid = employee
        .verify_pin(&pin)
        .map_err(|e| AppError::internal(format!("PIN verification failed: {}", e)))?;

    if !pin_valid {
        security_log!(
            event = "pin_rejected",
            store = %store_id,
            employee = %employee.id_string()
        );
        return Err(AppError::invalid_pin());
    }

    security_log!(
        event = "till_login",
        store = %store_id,
        employee = %employee.id_string()
    );

    let cookie = employee_cookie(&employee.id_string(), state.config.is_production());
    let response = VerifyPinResponse {
        success: true,
        user: employee.public_info(),
    };
    Ok((jar.add(cookie), Json(response)))
}

/// Clear the till session cookie
///
/// Clearing an absent cookie is a no-op success.
pub async fn logout(
    StoreAuth(store_id): StoreAuth,
    session: AuthSession,
    jar: CookieJar,
) -> Result<(CookieJar, Json<LogoutResponse>), AppError> {
    if let Some(operator) = &session.operator {
        security_log!(
            event = "till_logout",
            store = %store_id,
            employee = %operator.id_string()
        );
    }
    Ok((
        jar.add(clear_employee_cookie()),
        Json(LogoutResponse { success: true }),
    ))
}

/// Report the resolver result for both tiers
pub async fn me(session: AuthSession) -> Json<MeResponse> {
    Json(MeResponse {
        is_fully_authenticated: session.is_fully_authenticated(),
        store_id: session.store_id,
        operator: session.operator.as_ref().map(|e| e.public_info()),
    })
}
