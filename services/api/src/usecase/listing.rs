use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use canteen_domain::date::parse_client_date;
use canteen_domain::food::{FoodType, ListingStatus};

use crate::domain::repository::ListingRepository;
use crate::domain::types::Listing;
use crate::error::ApiError;

pub const NO_LISTINGS: &str = "No food items found for this vendorId";

/// Listing fields in the order they are checked.
const LISTING_FIELDS: &[&str] = &[
    "vendorId",
    "name",
    "description",
    "foodType",
    "date",
    "price",
    "category",
    "foodImage",
    "location",
    "status",
];

/// Listing payload as sent by a vendor member. Every field is optional on the
/// wire so that each missing one can be reported under its own key.
#[derive(Debug, Default, Clone)]
pub struct ListingInput {
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

impl ListingInput {
    /// Fill every absent field from `current`, for partial edits.
    fn or_current(self, current: &Listing) -> Self {
        Self {
            vendor_id: self.vendor_id.or_else(|| Some(current.vendor_id.to_string())),
            name: self.name.or_else(|| Some(current.name.clone())),
            description: self.description.or_else(|| Some(current.description.clone())),
            food_type: self
                .food_type
                .or_else(|| Some(current.food_type.as_str().to_owned())),
            date: self.date.or_else(|| Some(current.date.to_rfc3339())),
            price: self.price.or(Some(current.price)),
            category: self.category.or_else(|| Some(current.category.clone())),
            food_image: self.food_image.or_else(|| Some(current.food_image.clone())),
            location: self.location.or_else(|| Some(vec![current.location.clone()])),
            status: self
                .status
                .or_else(|| Some(current.status.as_str().to_owned())),
        }
    }
}

struct CheckedListing {
    vendor_id: Uuid,
    name: String,
    description: String,
    food_type: FoodType,
    date: DateTime<Utc>,
    price: f64,
    category: String,
    food_image: String,
    location: String,
    status: ListingStatus,
}

fn required(
    errors: &mut BTreeMap<String, String>,
    key: &str,
    message: &str,
    value: Option<String>,
) -> Option<String> {
    let value = value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
    if value.is_none() {
        errors.insert(key.to_owned(), message.to_owned());
    }
    value
}

/// Check every field and report all failures at once, keyed by JSON name.
fn check(input: ListingInput) -> Result<CheckedListing, ApiError> {
    let mut errors = BTreeMap::new();

    let vendor_id = required(&mut errors, "vendorId", "Vendor ID is required", input.vendor_id)
        .and_then(|raw| match raw.parse::<Uuid>() {
            Ok(id) => Some(id),
            Err(_) => {
                errors.insert("vendorId".into(), "Vendor ID must be a valid ID".into());
                None
            }
        });
    let name = required(&mut errors, "name", "Name is required", input.name);
    let description = required(
        &mut errors,
        "description",
        "Description is required",
        input.description,
    );
    let food_type = required(&mut errors, "foodType", "Food type is required", input.food_type)
        .and_then(|raw| match raw.parse::<FoodType>() {
            Ok(t) => Some(t),
            Err(_) => {
                errors.insert("foodType".into(), "Invalid food type".into());
                None
            }
        });
    let date = required(&mut errors, "date", "Date is required", input.date).and_then(|raw| {
        let parsed = parse_client_date(&raw);
        if parsed.is_none() {
            errors.insert("date".into(), "Date must be a valid date".into());
        }
        parsed
    });
    let price = input.price.filter(|p| p.is_finite() && *p > 0.0);
    if price.is_none() {
        errors.insert("price".into(), "Price is required".into());
    }
    let category = required(&mut errors, "category", "Category is required", input.category);
    let food_image = required(
        &mut errors,
        "foodImage",
        "Food image is required",
        input.food_image,
    );
    let location = match input.location.as_deref() {
        Some([single]) if !single.trim().is_empty() => Some(single.trim().to_owned()),
        _ => {
            errors.insert(
                "location".into(),
                "Location is required and must be an array with exactly one value".into(),
            );
            None
        }
    };
    let status = match input.status.as_deref().map(str::trim) {
        None | Some("") => Some(ListingStatus::default()),
        Some(raw) => raw.parse::<ListingStatus>().ok().or_else(|| {
            errors.insert("status".into(), "Invalid status value".into());
            None
        }),
    };

    match (
        vendor_id,
        name,
        description,
        food_type,
        date,
        price,
        category,
        food_image,
        location,
        status,
    ) {
        (
            Some(vendor_id),
            Some(name),
            Some(description),
            Some(food_type),
            Some(date),
            Some(price),
            Some(category),
            Some(food_image),
            Some(location),
            Some(status),
        ) if errors.is_empty() => Ok(CheckedListing {
            vendor_id,
            name,
            description,
            food_type,
            date,
            price,
            category,
            food_image,
            location,
            status,
        }),
        _ => Err(ApiError::invalid_fields(errors, LISTING_FIELDS)),
    }
}

// ── CreateListing ────────────────────────────────────────────────────────────

pub struct CreateListingUseCase<R: ListingRepository> {
    pub repo: R,
}

impl<R: ListingRepository> CreateListingUseCase<R> {
    pub async fn execute(&self, input: ListingInput) -> Result<Listing, ApiError> {
        let c = check(input)?;
        let listing = Listing {
            id: Uuid::now_v7(),
            vendor_id: c.vendor_id,
            name: c.name,
            description: c.description,
            food_type: c.food_type,
            date: c.date,
            price: c.price,
            category: c.category,
            food_image: c.food_image,
            location: c.location,
            status: c.status,
            created_at: Utc::now(),
        };
        self.repo.create(&listing).await?;
        Ok(listing)
    }
}

// ── ListListingsByVendor ─────────────────────────────────────────────────────

pub struct ListListingsByVendorUseCase<R: ListingRepository> {
    pub repo: R,
}

impl<R: ListingRepository> ListListingsByVendorUseCase<R> {
    pub async fn execute(&self, vendor_id: Uuid) -> Result<Vec<Listing>, ApiError> {
        let listings = self.repo.list_by_vendor(vendor_id).await?;
        if listings.is_empty() {
            return Err(ApiError::NoneFound(NO_LISTINGS));
        }
        Ok(listings)
    }
}

// ── GetListing ───────────────────────────────────────────────────────────────

pub struct GetListingUseCase<R: ListingRepository> {
    pub repo: R,
}

impl<R: ListingRepository> GetListingUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<Listing, ApiError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound("Food item"))
    }
}

// ── UpdateListing ────────────────────────────────────────────────────────────

pub struct UpdateListingUseCase<R: ListingRepository> {
    pub repo: R,
}

impl<R: ListingRepository> UpdateListingUseCase<R> {
    /// Absent fields keep their stored value; the merged row is checked like a new one.
    pub async fn execute(&self, id: Uuid, input: ListingInput) -> Result<Listing, ApiError> {
        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound("Food item"))?;
        let c = check(input.or_current(&current))?;
        let listing = Listing {
            id: current.id,
            vendor_id: c.vendor_id,
            name: c.name,
            description: c.description,
            food_type: c.food_type,
            date: c.date,
            price: c.price,
            category: c.category,
            food_image: c.food_image,
            location: c.location,
            status: c.status,
            created_at: current.created_at,
        };
        self.repo.update(&listing).await?;
        Ok(listing)
    }
}

// ── DeleteListing ────────────────────────────────────────────────────────────

pub struct DeleteListingUseCase<R: ListingRepository> {
    pub repo: R,
}

impl<R: ListingRepository> DeleteListingUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), ApiError> {
        if !self.repo.delete(id).await? {
            return Err(ApiError::NotFound("Food item"));
        }
        Ok(())
    }
}
