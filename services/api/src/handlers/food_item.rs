use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use canteen_domain::food::FoodType;

use crate::domain::types::FoodItem;
use crate::error::ApiError;
use crate::extract::{JsonBody, parse_id};
use crate::state::AppState;
use crate::usecase::food_item::{
    CreateFoodItemUseCase, DeleteFoodItemUseCase, FoodItemInput, GetFoodItemUseCase,
    ListFoodItemsUseCase, UpdateFoodItemUseCase,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItemResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub food_type: FoodType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<String>,
    #[serde(serialize_with = "canteen_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<FoodItem> for FoodItemResponse {
    fn from(item: FoodItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name,
            description: item.description,
            food_type: item.food_type,
            food_image: item.food_image,
            vendor_id: item.vendor_id,
            created_at: item.created_at,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub food_type: Option<String>,
    pub food_image: Option<String>,
    pub vendor_id: Option<String>,
}

impl From<FoodItemRequest> for FoodItemInput {
    fn from(body: FoodItemRequest) -> Self {
        Self {
            name: body.name,
            description: body.description,
            food_type: body.food_type,
            food_image: body.food_image,
            vendor_id: body.vendor_id,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItemReply {
    pub message: &'static str,
    pub food_item: FoodItemResponse,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedFoodItemReply {
    pub message: &'static str,
    pub deleted_food_item: FoodItemResponse,
}

// ── POST /api/fooditemroutes/create ──────────────────────────────────────────

pub async fn create_food_item(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<FoodItemRequest>,
) -> Result<(StatusCode, Json<FoodItemReply>), ApiError> {
    let usecase = CreateFoodItemUseCase {
        repo: state.food_item_repo(),
    };
    let item = usecase.execute(body.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(FoodItemReply {
            message: "Food item added successfully",
            food_item: item.into(),
        }),
    ))
}

// ── GET /api/fooditemroutes/getallfoodcollection ─────────────────────────────

pub async fn list_food_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<FoodItemResponse>>, ApiError> {
    let usecase = ListFoodItemsUseCase {
        repo: state.food_item_repo(),
    };
    let items = usecase.execute().await?;
    Ok(Json(items.into_iter().map(FoodItemResponse::from).collect()))
}

// ── GET /api/fooditemroutes/get/{id} ─────────────────────────────────────────

pub async fn get_food_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FoodItemResponse>, ApiError> {
    let id = parse_id(&id, "food item")?;
    let usecase = GetFoodItemUseCase {
        repo: state.food_item_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── PUT /api/fooditemroutes/edit/{id} ────────────────────────────────────────

pub async fn update_food_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<FoodItemRequest>,
) -> Result<Json<FoodItemReply>, ApiError> {
    let id = parse_id(&id, "food item")?;
    let usecase = UpdateFoodItemUseCase {
        repo: state.food_item_repo(),
    };
    let item = usecase.execute(id, body.into()).await?;
    Ok(Json(FoodItemReply {
        message: "Food item updated successfully",
        food_item: item.into(),
    }))
}

// ── DELETE /api/fooditemroutes/delete/{id} ───────────────────────────────────

pub async fn delete_food_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedFoodItemReply>, ApiError> {
    let id = parse_id(&id, "food item")?;
    let usecase = DeleteFoodItemUseCase {
        repo: state.food_item_repo(),
    };
    let item = usecase.execute(id).await?;
    Ok(Json(DeletedFoodItemReply {
        message: "Food item deleted successfully",
        deleted_food_item: item.into(),
    }))
}
