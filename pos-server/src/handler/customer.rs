//! Customer Handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use crate::auth::OperatorAuth;
use crate::core::ServerState;
use crate::db::models::{Customer, CustomerCreate, CustomerUpdate};
use crate::db::repository::CustomerRepository;
use crate::utils::respond::ok;
use shared::{ApiResponse, AppError, ErrorCode};

#[derive(Debug, Deserialize)]
pub struct ListCustomersQuery {
    /// Name or phone substring
    pub search: Option<String>,
}

pub async fn list(
    State(state): State<ServerState>,
    OperatorAuth(operator): OperatorAuth,
    Query(query): Query<ListCustomersQuery>,
) -> Result<Json<ApiResponse<Vec<Customer>>>, AppError> {
    let repo = CustomerRepository::new(state.get_db());
    let customers = repo
        .find_all(&operator.store, query.search.as_deref())
        .await?;
    Ok(ok(customers))
}

pub async fn get(
    State(state): State<ServerState>,
    OperatorAuth(operator): OperatorAuth,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Customer>>, AppError> {
    let repo = CustomerRepository::new(state.get_db());
    let customer = repo
        .find_by_id(&operator.store, &id)
        .await?
        .ok_or_else(|| AppError::with_message(ErrorCode::NotFound, "Customer not found"))?;
    Ok(ok(customer))
}

pub async fn create(
    State(state): State<ServerState>,
    OperatorAuth(operator): OperatorAuth,
    Json(req): Json<CustomerCreate>,
) -> Result<Json<ApiResponse<Customer>>, AppError> {
    if req.name.trim().is_empty() {
        return Err(AppError::required_field("name"));
    }
    let repo = CustomerRepository::new(state.get_db());
    let created = repo.create(&operator.store, req).await?;
    Ok(ok(created))
}

pub async fn update(
    State(state): State<ServerState>,
    OperatorAuth(operator): OperatorAuth,
    Path(id): Path<String>,
    Json(req): Json<CustomerUpdate>,
) -> Result<Json<ApiResponse<Customer>>, AppError> {
    let repo = CustomerRepository::new(state.get_db());
    let updated = repo.update(&operator.store, &id, req).await?;
    Ok(ok(updated))
}

pub async fn deactivate(
    State(state): State<ServerState>,
    OperatorAuth(operator): OperatorAuth,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Customer>>, AppError> {
    let repo = CustomerRepository::new(state.get_db());
    let deactivated = repo.deactivate(&operator.store, &id).await?;
    Ok(ok(deactivated))
}
