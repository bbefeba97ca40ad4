use chrono::Utc;
use uuid::Uuid;

use canteen_domain::food::FoodType;

use crate::domain::repository::FoodItemRepository;
use crate::domain::types::FoodItem;
use crate::error::ApiError;

pub const FIELDS_REQUIRED: &str = "All fields (name, description, foodType) are required";
pub const INVALID_FOOD_TYPE: &str = "Invalid food type";

/// Catalog payload as sent; blank strings count as missing.
#[derive(Debug, Default)]
pub struct FoodItemInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub food_type: Option<String>,
    pub food_image: Option<String>,
    pub vendor_id: Option<String>,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

struct CheckedFoodItem {
    name: String,
    description: String,
    food_type: FoodType,
    food_image: Option<String>,
    vendor_id: Option<String>,
}

fn check(input: FoodItemInput) -> Result<CheckedFoodItem, ApiError> {
    let (Some(name), Some(description), Some(food_type)) = (
        present(input.name),
        present(input.description),
        present(input.food_type),
    ) else {
        return Err(ApiError::Validation(FIELDS_REQUIRED.into()));
    };
    let food_type = food_type
        .parse::<FoodType>()
        .map_err(|_| ApiError::Validation(INVALID_FOOD_TYPE.into()))?;
    Ok(CheckedFoodItem {
        name,
        description,
        food_type,
        food_image: present(input.food_image),
        vendor_id: present(input.vendor_id),
    })
}

// ── CreateFoodItem ───────────────────────────────────────────────────────────

pub struct CreateFoodItemUseCase<R: FoodItemRepository> {
    pub repo: R,
}

impl<R: FoodItemRepository> CreateFoodItemUseCase<R> {
    pub async fn execute(&self, input: FoodItemInput) -> Result<FoodItem, ApiError> {
        let checked = check(input)?;
        let item = FoodItem {
            id: Uuid::now_v7(),
            name: checked.name,
            description: checked.description,
            food_type: checked.food_type,
            food_image: checked.food_image,
            vendor_id: checked.vendor_id,
            created_at: Utc::now(),
        };
        self.repo.create(&item).await?;
        Ok(item)
    }
}

// ── ListFoodItems ────────────────────────────────────────────────────────────

pub struct ListFoodItemsUseCase<R: FoodItemRepository> {
    pub repo: R,
}

impl<R: FoodItemRepository> ListFoodItemsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<FoodItem>, ApiError> {
        self.repo.list().await
    }
}

// ── GetFoodItem ──────────────────────────────────────────────────────────────

pub struct GetFoodItemUseCase<R: FoodItemRepository> {
    pub repo: R,
}

impl<R: FoodItemRepository> GetFoodItemUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<FoodItem, ApiError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound("Food item"))
    }
}

// ── UpdateFoodItem ───────────────────────────────────────────────────────────

pub struct UpdateFoodItemUseCase<R: FoodItemRepository> {
    pub repo: R,
}

impl<R: FoodItemRepository> UpdateFoodItemUseCase<R> {
    /// Replaces every field; the same required set applies as on create.
    pub async fn execute(&self, id: Uuid, input: FoodItemInput) -> Result<FoodItem, ApiError> {
        let checked = check(input)?;
        let mut item = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound("Food item"))?;
        item.name = checked.name;
        item.description = checked.description;
        item.food_type = checked.food_type;
        item.food_image = checked.food_image;
        item.vendor_id = checked.vendor_id;
        self.repo.update(&item).await?;
        Ok(item)
    }
}

// ── DeleteFoodItem ───────────────────────────────────────────────────────────

pub struct DeleteFoodItemUseCase<R: FoodItemRepository> {
    pub repo: R,
}

impl<R: FoodItemRepository> DeleteFoodItemUseCase<R> {
    /// Returns the row as it was before deletion.
    pub async fn execute(&self, id: Uuid) -> Result<FoodItem, ApiError> {
        let item = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound("Food item"))?;
        if !self.repo.delete(id).await? {
            return Err(ApiError::NotFound("Food item"));
        }
        Ok(item)
    }
}
