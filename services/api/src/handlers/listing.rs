use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use canteen_domain::food::{FoodType, ListingStatus};

use crate::domain::types::Listing;
use crate::error::ApiError;
use crate::extract::{JsonBody, parse_id};
use crate::handlers::{MessageResponse, message};
use crate::state::AppState;
use crate::usecase::listing::{
    CreateListingUseCase, DeleteListingUseCase, GetListingUseCase, ListListingsByVendorUseCase,
    ListingInput, UpdateListingUseCase,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse {
    pub id: String,
    pub vendor_id: String,
    pub name: String,
    pub description: String,
    pub food_type: FoodType,
    #[serde(serialize_with = "canteen_core::serde::to_rfc3339_ms")]
    pub date: DateTime<Utc>,
    pub price: f64,
    pub category: String,
    pub food_image: String,
    /// Always exactly one branch name.
    pub location: [String; 1],
    pub status: ListingStatus,
    #[serde(serialize_with = "canteen_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<Listing> for ListingResponse {
    fn from(l: Listing) -> Self {
        Self {
            id: l.id.to_string(),
            vendor_id: l.vendor_id.to_string(),
            name: l.name,
            description: l.description,
            food_type: l.food_type,
            date: l.date,
            price: l.price,
            category: l.category,
            food_image: l.food_image,
            location: [l.location],
            status: l.status,
            created_at: l.created_at,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingRequest {
    pub vendor_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub food_type: Option<String>,
    pub date: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub food_image: Option<String>,
    pub location: Option<Vec<String>>,
    pub status: Option<String>,
}

impl From<ListingRequest> for ListingInput {
    fn from(body: ListingRequest) -> Self {
        Self {
            vendor_id: body.vendor_id,
            name: body.name,
            description: body.description,
            food_type: body.food_type,
            date: body.date,
            price: body.price,
            category: body.category,
            food_image: body.food_image,
            location: body.location,
            status: body.status,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingReply {
    pub message: &'static str,
    pub vendor_member_food_item: ListingResponse,
}

// ── POST /api/vendorMemberFoodRoutes/addfooditem ─────────────────────────────

pub async fn create_listing(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<ListingRequest>,
) -> Result<(StatusCode, Json<ListingReply>), ApiError> {
    let usecase = CreateListingUseCase {
        repo: state.listing_repo(),
    };
    let listing = usecase.execute(body.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(ListingReply {
            message: "Food item created successfully",
            vendor_member_food_item: listing.into(),
        }),
    ))
}

// ── GET /api/vendorMemberFoodRoutes/getfooditems/{vendorId} ──────────────────

pub async fn list_listings_by_vendor(
    State(state): State<AppState>,
    Path(vendor_id): Path<String>,
) -> Result<Json<Vec<ListingResponse>>, ApiError> {
    let vendor_id = parse_id(&vendor_id, "vendor")?;
    let usecase = ListListingsByVendorUseCase {
        repo: state.listing_repo(),
    };
    let listings = usecase.execute(vendor_id).await?;
    Ok(Json(
        listings.into_iter().map(ListingResponse::from).collect(),
    ))
}

// ── GET /api/vendorMemberFoodRoutes/getfooditem/{id} ─────────────────────────

pub async fn get_listing(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ListingResponse>, ApiError> {
    let id = parse_id(&id, "food item")?;
    let usecase = GetListingUseCase {
        repo: state.listing_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── PUT /api/vendorMemberFoodRoutes/editfooditem/{id} ────────────────────────

pub async fn update_listing(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<ListingRequest>,
) -> Result<Json<ListingReply>, ApiError> {
    let id = parse_id(&id, "food item")?;
    let usecase = UpdateListingUseCase {
        repo: state.listing_repo(),
    };
    let listing = usecase.execute(id, body.into()).await?;
    Ok(Json(ListingReply {
        message: "Food item updated successfully",
        vendor_member_food_item: listing.into(),
    }))
}

// ── DELETE /api/vendorMemberFoodRoutes/deletefooditem/{id} ───────────────────

pub async fn delete_listing(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&id, "food item")?;
    let usecase = DeleteListingUseCase {
        repo: state.listing_repo(),
    };
    usecase.execute(id).await?;
    Ok(message("Food item deleted successfully"))
}
