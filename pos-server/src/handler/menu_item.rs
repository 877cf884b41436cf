//! Menu Item Handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::auth::{OperatorAuth, StoreAuth};
use crate::core::ServerState;
use crate::db::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use crate::db::repository::{CategoryRepository, MenuItemRepository};
use crate::utils::respond::ok;
use shared::{ApiResponse, AppError, ErrorCode};

#[derive(Debug, Deserialize)]
pub struct ListMenuItemsQuery {
    pub category: Option<String>,
    #[serde(default)]
    pub include_inactive: bool,
}

pub async fn list(
    State(state): State<ServerState>,
    StoreAuth(store_id): StoreAuth,
    Query(query): Query<ListMenuItemsQuery>,
) -> Result<Json<ApiResponse<Vec<MenuItem>>>, AppError> {
    let repo = MenuItemRepository::new(state.get_db());
    let items = repo
        .find_all(&store_id, query.category.as_deref(), query.include_inactive)
        .await?;
    Ok(ok(items))
}

pub async fn get(
    State(state): State<ServerState>,
    StoreAuth(store_id): StoreAuth,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MenuItem>>, AppError> {
    let repo = MenuItemRepository::new(state.get_db());
    let item = repo
        .find_by_id(&store_id, &id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::MenuItemNotFound))?;
    Ok(ok(item))
}

pub async fn create(
    State(state): State<ServerState>,
    OperatorAuth(operator): OperatorAuth,
    Json(req): Json<MenuItemCreate>,
) -> Result<Json<ApiResponse<MenuItem>>, AppError> {
    if req.name.trim().is_empty() {
        return Err(AppError::required_field("name"));
    }
    if req.price < Decimal::ZERO {
        return Err(AppError::validation("Price cannot be negative"));
    }

    // The referenced category must exist in this store
    let categories = CategoryRepository::new(state.get_db());
    categories
        .find_by_id(&operator.store, &req.category.to_string())
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::CategoryNotFound))?;

    let repo = MenuItemRepository::new(state.get_db());
    let created = repo.create(&operator.store, req).await?;
    Ok(ok(created))
}

pub async fn update(
    State(state): State<ServerState>,
    OperatorAuth(operator): OperatorAuth,
    Path(id): Path<String>,
    Json(req): Json<MenuItemUpdate>,
) -> Result<Json<ApiResponse<MenuItem>>, AppError> {
    if let Some(price) = req.price
        && price < Decimal::ZERO
    {
        return Err(AppError::validation("Price cannot be negative"));
    }
    if let Some(category) = &req.category {
        let categories = CategoryRepository::new(state.get_db());
        categories
            .find_by_id(&operator.store, &category.to_string())
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::CategoryNotFound))?;
    }

    let repo = MenuItemRepository::new(state.get_db());
    let updated = repo.update(&operator.store, &id, req).await?;
    Ok(ok(updated))
}

pub async fn deactivate(
    State(state): State<ServerState>,
    OperatorAuth(operator): OperatorAuth,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MenuItem>>, AppError> {
    let repo = MenuItemRepository::new(state.get_db());
    let deactivated = repo.deactivate(&operator.store, &id).await?;
    Ok(ok(deactivated))
}
