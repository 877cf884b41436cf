//! Modifier Handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use crate::auth::{OperatorAuth, StoreAuth};
use crate::core::ServerState;
use crate::db::models::{Modifier, ModifierCreate, ModifierUpdate};
use crate::db::repository::{ModifierGroupRepository, ModifierRepository};
use crate::utils::respond::ok;
use shared::{ApiResponse, AppError, ErrorCode};

#[derive(Debug, Deserialize)]
pub struct ListModifiersQuery {
    pub group: Option<String>,
    #[serde(default)]
    pub include_inactive: bool,
}

pub async fn list(
    State(state): State<ServerState>,
    StoreAuth(store_id): StoreAuth,
    Query(query): Query<ListModifiersQuery>,
) -> Result<Json<ApiResponse<Vec<Modifier>>>, AppError> {
    let repo = ModifierRepository::new(state.get_db());
    let modifiers = repo
        .find_all(&store_id, query.group.as_deref(), query.include_inactive)
        .await?;
    Ok(ok(modifiers))
}

pub async fn get(
    State(state): State<ServerState>,
    StoreAuth(store_id): StoreAuth,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Modifier>>, AppError> {
    let repo = ModifierRepository::new(state.get_db());
    let modifier = repo
        .find_by_id(&store_id, &id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::ModifierNotFound))?;
    Ok(ok(modifier))
}

pub async fn create(
    State(state): State<ServerState>,
    OperatorAuth(operator): OperatorAuth,
    Json(req): Json<ModifierCreate>,
) -> Result<Json<ApiResponse<Modifier>>, AppError> {
    if req.name.trim().is_empty() {
        return Err(AppError::required_field("name"));
    }

    // The referenced group must exist in this store
    let groups = ModifierGroupRepository::new(state.get_db());
    groups
        .find_by_id(&operator.store, &req.group.to_string())
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::ModifierGroupNotFound))?;

    let repo = ModifierRepository::new(state.get_db());
    let created = repo.create(&operator.store, req).await?;
    Ok(ok(created))
}

pub async fn update(
    State(state): State<ServerState>,
    OperatorAuth(operator): OperatorAuth,
    Path(id): Path<String>,
    Json(req): Json<ModifierUpdate>,
) -> Result<Json<ApiResponse<Modifier>>, AppError> {
    let repo = ModifierRepository::new(state.get_db());
    let updated = repo.update(&operator.store, &id, req).await?;
    Ok(ok(updated))
}

pub async fn deactivate(
    State(state): State<ServerState>,
    OperatorAuth(operator): OperatorAuth,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Modifier>>, AppError> {
    let repo = ModifierRepository::new(state.get_db());
    let deactivated = repo.deactivate(&operator.store, &id).await?;
    Ok(ok(deactivated))
}
