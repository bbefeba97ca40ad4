use uuid::Uuid;

use canteen_api::error::ApiError;
use canteen_api::usecase::listing::{
    CreateListingUseCase, DeleteListingUseCase, ListListingsByVendorUseCase, ListingInput,
    UpdateListingUseCase,
};
use canteen_domain::food::{FoodType, ListingStatus};
use canteen_testing::fixture::Fixture;

use crate::helpers::MockListingRepo;

fn input(vendor_id: Uuid, location: Vec<&str>) -> ListingInput {
    ListingInput {
        vendor_id: Some(vendor_id.to_string()),
        name: Some("Paneer Roll".into()),
        description: Some("Grilled paneer wrap".into()),
        food_type: Some("Veg".into()),
        date: Some("2024-05-01T09:00:00Z".into()),
        price: Some(80.0),
        category: Some("Snacks".into()),
        food_image: Some("uploads/roll.png".into()),
        location: Some(location.into_iter().map(String::from).collect()),
        status: None,
    }
}

fn location_error(result: Result<impl std::fmt::Debug, ApiError>) -> String {
    match result {
        Err(ApiError::InvalidFields { errors, .. }) => errors["location"].clone(),
        other => panic!("expected InvalidFields, got {other:?}"),
    }
}

// ── CreateListingUseCase ─────────────────────────────────────────────────────

#[tokio::test]
async fn should_require_exactly_one_location() {
    let usecase = CreateListingUseCase {
        repo: MockListingRepo::default(),
    };
    let vendor_id = Uuid::now_v7();
    let expected = "Location is required and must be an array with exactly one value";

    let none = usecase.execute(input(vendor_id, vec![])).await;
    assert_eq!(location_error(none), expected);

    let two = usecase.execute(input(vendor_id, vec!["Pune", "Mumbai"])).await;
    assert_eq!(location_error(two), expected);

    let one = usecase.execute(input(vendor_id, vec!["Pune"])).await.unwrap();
    assert_eq!(one.location, "Pune");
    assert_eq!(one.status, ListingStatus::Available);
}

#[tokio::test]
async fn should_create_listing_from_fixture_payload() {
    let body = Fixture::request("listing_create");
    let usecase = CreateListingUseCase {
        repo: MockListingRepo::default(),
    };
    let raw = |key: &str| body[key].as_str().map(str::to_owned);

    let listing = usecase
        .execute(ListingInput {
            vendor_id: raw("vendorId"),
            name: raw("name"),
            description: raw("description"),
            food_type: raw("foodType"),
            date: raw("date"),
            price: body["price"].as_f64(),
            category: raw("category"),
            food_image: raw("foodImage"),
            location: body["location"].as_array().map(|a| {
                a.iter()
                    .filter_map(|v| v.as_str().map(str::to_owned))
                    .collect()
            }),
            status: raw("status"),
        })
        .await
        .unwrap();

    assert_eq!(listing.food_type, FoodType::NonVeg);
    assert_eq!(listing.status, ListingStatus::Finished);
}

// ── ListListingsByVendorUseCase ──────────────────────────────────────────────

#[tokio::test]
async fn should_404_when_vendor_has_no_listings() {
    let repo = MockListingRepo::default();
    let listings = repo.listings.clone();
    let vendor_id = Uuid::now_v7();
    CreateListingUseCase { repo }
        .execute(input(vendor_id, vec!["Pune"]))
        .await
        .unwrap();

    let usecase = ListListingsByVendorUseCase {
        repo: MockListingRepo { listings },
    };
    assert_eq!(usecase.execute(vendor_id).await.unwrap().len(), 1);

    let err = usecase.execute(Uuid::now_v7()).await.unwrap_err();
    assert_eq!(err.to_string(), "No food items found for this vendorId");
}

// ── UpdateListingUseCase / DeleteListingUseCase ──────────────────────────────

#[tokio::test]
async fn should_mark_listing_finished_and_then_delete_it() {
    let repo = MockListingRepo::default();
    let listings = repo.listings.clone();
    let created = CreateListingUseCase { repo }
        .execute(input(Uuid::now_v7(), vec!["Pune"]))
        .await
        .unwrap();

    let update = UpdateListingUseCase {
        repo: MockListingRepo {
            listings: listings.clone(),
        },
    };
    let patch = ListingInput {
        status: Some("Finished".into()),
        ..Default::default()
    };
    let updated = update.execute(created.id, patch).await.unwrap();
    assert_eq!(updated.status, ListingStatus::Finished);
    assert_eq!(updated.name, created.name);

    let bad = ListingInput {
        status: Some("Sold out".into()),
        ..Default::default()
    };
    let err = update.execute(created.id, bad).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidFields { .. }));

    let delete = DeleteListingUseCase {
        repo: MockListingRepo {
            listings: listings.clone(),
        },
    };
    delete.execute(created.id).await.unwrap();
    assert!(listings.lock().unwrap().is_empty());
    assert!(matches!(
        delete.execute(created.id).await,
        Err(ApiError::NotFound("Food item"))
    ));
}
