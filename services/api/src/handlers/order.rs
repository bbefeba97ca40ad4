use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::UserOrder;
use crate::error::ApiError;
use crate::extract::{JsonBody, parse_id};
use crate::handlers::{MessageResponse, message};
use crate::state::AppState;
use crate::usecase::order::{
    CreateOrderUseCase, DeleteOrderUseCase, EditOrderUseCase, GetOrderUseCase,
    ListOrdersByUserUseCase, ListOrdersUseCase, OrderPatch,
};

/// Order fields keep the lower-case names clients already send.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: String,
    pub username: String,
    pub userid: String,
    pub userlocation: String,
    pub foodname: String,
    pub usernamecontactno: String,
    pub useremailid: String,
    pub description: String,
    pub quantity: i32,
    #[serde(serialize_with = "canteen_core::serde::to_rfc3339_ms")]
    pub date: DateTime<Utc>,
    #[serde(serialize_with = "canteen_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<UserOrder> for OrderResponse {
    fn from(o: UserOrder) -> Self {
        Self {
            id: o.id.to_string(),
            username: o.username,
            userid: o.userid,
            userlocation: o.userlocation,
            foodname: o.foodname,
            usernamecontactno: o.usernamecontactno,
            useremailid: o.useremailid,
            description: o.description,
            quantity: o.quantity,
            date: o.date,
            created_at: o.created_at,
        }
    }
}

#[derive(Deserialize)]
pub struct OrderRequest {
    pub username: Option<String>,
    pub userid: Option<String>,
    pub userlocation: Option<String>,
    pub foodname: Option<String>,
    pub usernamecontactno: Option<String>,
    pub useremailid: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i64>,
    pub date: Option<String>,
}

impl From<OrderRequest> for OrderPatch {
    fn from(body: OrderRequest) -> Self {
        Self {
            username: body.username,
            userid: body.userid,
            userlocation: body.userlocation,
            foodname: body.foodname,
            usernamecontactno: body.usernamecontactno,
            useremailid: body.useremailid,
            description: body.description,
            quantity: body.quantity,
            date: body.date,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedOrderReply {
    pub message: &'static str,
    pub updated_user_order: OrderResponse,
}

// ── POST /api/UserOrdersRoutes/post ──────────────────────────────────────────

pub async fn create_order(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<OrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), ApiError> {
    let usecase = CreateOrderUseCase {
        repo: state.order_repo(),
    };
    let order = usecase.execute(body.into()).await?;
    Ok((StatusCode::CREATED, Json(order.into())))
}

// ── GET /api/UserOrdersRoutes/getallorder ────────────────────────────────────

pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderResponse>>, ApiError> {
    let usecase = ListOrdersUseCase {
        repo: state.order_repo(),
    };
    let orders = usecase.execute().await?;
    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}

// ── GET /api/UserOrdersRoutes/order/{id} ─────────────────────────────────────

pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<OrderResponse>, ApiError> {
    let id = parse_id(&id, "UserOrder")?;
    let usecase = GetOrderUseCase {
        repo: state.order_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── GET /api/UserOrdersRoutes/{userid} ───────────────────────────────────────

pub async fn list_orders_by_user(
    State(state): State<AppState>,
    Path(userid): Path<String>,
) -> Result<Json<Vec<OrderResponse>>, ApiError> {
    let usecase = ListOrdersByUserUseCase {
        repo: state.order_repo(),
    };
    let orders = usecase.execute(&userid).await?;
    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}

// ── PUT /api/UserOrdersRoutes/edit/{id} ──────────────────────────────────────

pub async fn edit_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<OrderRequest>,
) -> Result<Json<UpdatedOrderReply>, ApiError> {
    let id = parse_id(&id, "UserOrder")?;
    let usecase = EditOrderUseCase {
        repo: state.order_repo(),
    };
    let order = usecase.execute(id, body.into()).await?;
    Ok(Json(UpdatedOrderReply {
        message: "UserOrder updated successfully",
        updated_user_order: order.into(),
    }))
}

// ── DELETE /api/UserOrdersRoutes/delete/{id} ─────────────────────────────────

pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&id, "UserOrder")?;
    let usecase = DeleteOrderUseCase {
        repo: state.order_repo(),
    };
    usecase.execute(id).await?;
    Ok(message("UserOrder deleted successfully"))
}
