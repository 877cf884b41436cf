//! Modifier Group Handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use crate::auth::{OperatorAuth, StoreAuth};
use crate::core::ServerState;
use crate::db::models::{ModifierGroup, ModifierGroupCreate, ModifierGroupUpdate};
use crate::db::repository::ModifierGroupRepository;
use crate::utils::respond::ok;
use shared::{ApiResponse, AppError, ErrorCode};

#[derive(Debug, Deserialize)]
pub struct ListGroupsQuery {
    #[serde(default)]
    pub include_inactive: bool,
}

pub async fn list(
    State(state): State<ServerState>,
    StoreAuth(store_id): StoreAuth,
    Query(query): Query<ListGroupsQuery>,
) -> Result<Json<ApiResponse<Vec<ModifierGroup>>>, AppError> {
    let repo = ModifierGroupRepository::new(state.get_db());
    let groups = repo.find_all(&store_id, query.include_inactive).await?;
    Ok(ok(groups))
}

pub async fn get(
    State(state): State<ServerState>,
    StoreAuth(store_id): StoreAuth,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ModifierGroup>>, AppError> {
    let repo = ModifierGroupRepository::new(state.get_db());
    let group = repo
        .find_by_id(&store_id, &id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::ModifierGroupNotFound))?;
    Ok(ok(group))
}

pub async fn create(
    State(state): State<ServerState>,
    OperatorAuth(operator): OperatorAuth,
    Json(req): Json<ModifierGroupCreate>,
) -> Result<Json<ApiResponse<ModifierGroup>>, AppError> {
    if req.name.trim().is_empty() {
        return Err(AppError::required_field("name"));
    }
    let repo = ModifierGroupRepository::new(state.get_db());
    let created = repo.create(&operator.store, req).await?;
    Ok(ok(created))
}

pub async fn update(
    State(state): State<ServerState>,
    OperatorAuth(operator): OperatorAuth,
    Path(id): Path<String>,
    Json(req): Json<ModifierGroupUpdate>,
) -> Result<Json<ApiResponse<ModifierGroup>>, AppError> {
    let repo = ModifierGroupRepository::new(state.get_db());
    let updated = repo.update(&operator.store, &id, req).await?;
    Ok(ok(updated))
}

pub async fn deactivate(
    State(state): State<ServerState>,
    OperatorAuth(operator): OperatorAuth,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ModifierGroup>>, AppError> {
    let repo = ModifierGroupRepository::new(state.get_db());
    let deactivated = repo.deactivate(&operator.store, &id).await?;
    Ok(ok(deactivated))
}
