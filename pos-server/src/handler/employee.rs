//! Employee Administration Handlers
//!
//! Listing needs only the store tier (the till login screen shows the
//! roster before any operator signs in). Mutations are admin-gated.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use crate::auth::{AdminAuth, StoreAuth};
use crate::core::ServerState;
use crate::db::models::{Employee, EmployeeCreate, EmployeeUpdate};
use crate::db::repository::EmployeeRepository;
use crate::security_log;
use crate::utils::respond::ok;
use shared::{ApiResponse, AppError, ErrorCode};

#[derive(Debug, Deserialize)]
pub struct ListEmployeesQuery {
    #[serde(default)]
    pub include_inactive: bool,
}

/// List employees of the caller's store
pub async fn list(
    State(state): State<ServerState>,
    StoreAuth(store_id): StoreAuth,
    Query(query): Query<ListEmployeesQuery>,
) -> Result<Json<ApiResponse<Vec<Employee>>>, AppError> {
    let repo = EmployeeRepository::new(state.get_db());
    let employees = repo.find_all(&store_id, query.include_inactive).await?;
    Ok(ok(employees))
}

/// Create an employee (admin only)
pub async fn create(
    State(state): State<ServerState>,
    AdminAuth(actor): AdminAuth,
    Json(req): Json<EmployeeCreate>,
) -> Result<Json<ApiResponse<Employee>>, AppError> {
    if req.name.trim().is_empty() {
        return Err(AppError::required_field("name"));
    }
    if req.pin.is_empty() {
        return Err(AppError::required_field("pin"));
    }

    let repo = EmployeeRepository::new(state.get_db());
    let created = repo.create(&actor.store, req).await?;

    security_log!(
        event = "employee_created",
        store = %actor.store,
        actor = %actor.id_string(),
        employee = %created.id_string()
    );
    Ok(ok(created))
}

/// Update an employee (admin only)
///
/// A demotion away from ADMIN is guarded in the repository by a single
/// conditional write, so the sole remaining admin can never demote
/// themselves even under concurrent requests.
pub async fn update(
    State(state): State<ServerState>,
    AdminAuth(actor): AdminAuth,
    Path(id): Path<String>,
    Json(req): Json<EmployeeUpdate>,
) -> Result<Json<ApiResponse<Employee>>, AppError> {
    let repo = EmployeeRepository::new(state.get_db());
    let updated = repo.update(&actor.store, &id, req).await?;

    security_log!(
        event = "employee_updated",
        store = %actor.store,
        actor = %actor.id_string(),
        employee = %updated.id_string()
    );
    Ok(ok(updated))
}

/// Deactivate an employee (admin only, soft delete)
///
/// Self-deactivation is rejected regardless of role, before any write.
pub async fn deactivate(
    State(state): State<ServerState>,
    AdminAuth(actor): AdminAuth,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Employee>>, AppError> {
    let repo = EmployeeRepository::new(state.get_db());
    let target = repo
        .find_by_id(&actor.store, &id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound))?;

    if target.id_string() == actor.id_string() {
        return Err(AppError::new(ErrorCode::CannotDeactivateSelf));
    }

    let deactivated = repo.deactivate(&actor.store, &id).await?;

    security_log!(
        event = "employee_deactivated",
        store = %actor.store,
        actor = %actor.id_string(),
        employee = %deactivated.id_string()
    );
    Ok(ok(deactivated))
}
