use chrono::Utc;
use sea_orm::{DatabaseBackend, MockDatabase};
use uuid::Uuid;

use canteen_api::domain::repository::BranchRepository;
use canteen_api::domain::types::Branch;
use canteen_api::error::ApiError;
use canteen_api::infra::db::DbBranchRepository;
use canteen_api::usecase::admin::ChangeAdminPasswordUseCase;
use canteen_api::usecase::branch::{
    CreateBranchInput, CreateBranchUseCase, DeleteBranchUseCase, UpdateBranchInput,
    UpdateBranchUseCase,
};
use canteen_api::usecase::feedback::{
    DeleteFeedbackUseCase, SubmitFeedbackInput, SubmitFeedbackUseCase,
};
use canteen_api::usecase::food_item::{
    CreateFoodItemUseCase, DeleteFoodItemUseCase, FoodItemInput, UpdateFoodItemUseCase,
};
use canteen_api::usecase::user::{UpdateUserInput, UpdateUserUseCase};
use canteen_api::usecase::vendor::{DeleteVendorUseCase, UpdateVendorInput, UpdateVendorUseCase};
use canteen_api::usecase::vendor_member::{
    ListVendorMembersByVendorUseCase, UpdateVendorMemberInput, UpdateVendorMemberUseCase,
};
use canteen_api_schema::branches;
use canteen_auth_types::password::verify_password;
use canteen_domain::feedback::FeedbackKind;
use canteen_domain::food::FoodType;

use crate::helpers::{
    MockAdminRepo, MockBranchRepo, MockFeedbackRepo, MockFoodItemRepo, MockUserRepo,
    MockVendorMemberRepo, MockVendorRepo, test_admin, test_member, test_user, test_vendor,
};

// ── Branches ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_edit_only_location_fields_of_branch() {
    let repo = MockBranchRepo::default();
    let branches = repo.branches.clone();
    let created = CreateBranchUseCase { repo }
        .execute(CreateBranchInput {
            admin_id: "admin-1".into(),
            company_name: "Acme Foods".into(),
            country: "India".into(),
            city: "Pune".into(),
            branch: "Hinjewadi".into(),
        })
        .await
        .unwrap();

    let updated = UpdateBranchUseCase {
        repo: MockBranchRepo {
            branches: branches.clone(),
        },
    }
    .execute(
        created.id,
        UpdateBranchInput {
            country: "India".into(),
            city: "Mumbai".into(),
            branch: "Powai".into(),
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.city, "Mumbai");
    assert_eq!(updated.company_name, "Acme Foods");
    assert_eq!(branches.lock().unwrap()[0].branch, "Powai");
}

#[tokio::test]
async fn should_404_deleting_unknown_branch() {
    let usecase = DeleteBranchUseCase {
        repo: MockBranchRepo::default(),
    };
    let err = usecase.execute(Uuid::now_v7()).await.unwrap_err();
    assert_eq!(err.to_string(), "Branch not found");
}

#[tokio::test]
async fn should_404_when_branch_vanishes_before_update() {
    // The update's RETURNING clause comes back empty.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<branches::Model>::new()])
        .into_connection();
    let repo = DbBranchRepository { db };
    let branch = Branch {
        id: Uuid::now_v7(),
        admin_id: "admin-1".into(),
        company_name: "Acme Foods".into(),
        country: "India".into(),
        city: "Pune".into(),
        branch: "Baner".into(),
        created_at: Utc::now(),
    };

    let err = repo.update(&branch).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound("Branch")));
    assert_eq!(err.to_string(), "Branch not found");
}

// ── Food catalog ─────────────────────────────────────────────────────────────

fn food(name: &str, food_type: &str) -> FoodItemInput {
    FoodItemInput {
        name: Some(name.into()),
        description: Some("House special".into()),
        food_type: Some(food_type.into()),
        ..Default::default()
    }
}

#[tokio::test]
async fn should_return_deleted_food_item() {
    let repo = MockFoodItemRepo::default();
    let items = repo.items.clone();
    let created = CreateFoodItemUseCase { repo }
        .execute(food("Idli", "Veg"))
        .await
        .unwrap();

    let deleted = DeleteFoodItemUseCase {
        repo: MockFoodItemRepo {
            items: items.clone(),
        },
    }
    .execute(created.id)
    .await
    .unwrap();

    assert_eq!(deleted.id, created.id);
    assert_eq!(deleted.name, "Idli");
    assert!(items.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_require_all_food_fields_on_update() {
    let repo = MockFoodItemRepo::default();
    let items = repo.items.clone();
    let created = CreateFoodItemUseCase { repo }
        .execute(food("Idli", "Veg"))
        .await
        .unwrap();

    let update = UpdateFoodItemUseCase {
        repo: MockFoodItemRepo { items },
    };
    let err = update
        .execute(
            created.id,
            FoodItemInput {
                name: Some("Idli".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "All fields (name, description, foodType) are required"
    );

    let updated = update
        .execute(created.id, food("Egg Curry", "Non-Veg"))
        .await
        .unwrap();
    assert_eq!(updated.food_type, FoodType::NonVeg);
}

// ── Feedback ─────────────────────────────────────────────────────────────────

fn feedback(kind: &str) -> SubmitFeedbackInput {
    SubmitFeedbackInput {
        user_id: Some("user-1".into()),
        username: Some("Asha".into()),
        mobile: Some("9876543210".into()),
        kind: Some(kind.into()),
        description: Some("Great food".into()),
    }
}

#[tokio::test]
async fn should_store_feedback_and_reject_unknown_kind() {
    let repo = MockFeedbackRepo::default();
    let rows = repo.feedback.clone();
    let usecase = SubmitFeedbackUseCase { repo };

    let stored = usecase.execute(feedback("complaint")).await.unwrap();
    assert_eq!(stored.kind, FeedbackKind::Complaint);

    let err = usecase.execute(feedback("praise")).await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid feedback type");

    let err = usecase
        .execute(SubmitFeedbackInput {
            description: None,
            ..feedback("feedback")
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Missing required fields");

    assert_eq!(rows.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_404_deleting_unknown_feedback() {
    let usecase = DeleteFeedbackUseCase {
        repo: MockFeedbackRepo::default(),
    };
    let result = usecase.execute(Uuid::now_v7()).await;
    assert!(matches!(result, Err(ApiError::NotFound("Feedback"))));
}

// ── Profiles ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_update_user_name_and_mobile() {
    let user = test_user("asha@example.com", "secret1").await;
    let usecase = UpdateUserUseCase {
        repo: MockUserRepo::new(vec![user.clone()]),
    };

    let updated = usecase
        .execute(
            user.id,
            UpdateUserInput {
                name: "Asha K".into(),
                mobile: "9000000000".into(),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Asha K");
    assert_eq!(updated.email, user.email);
}

#[tokio::test]
async fn should_rehash_admin_password() {
    let admin = test_admin("admin@acme.io", "secret1").await;
    let repo = MockAdminRepo::new(vec![admin.clone()]);
    let admins = repo.handle();

    ChangeAdminPasswordUseCase { repo }
        .execute(admin.id, "new-secret")
        .await
        .unwrap();

    let stored = admins.lock().unwrap()[0].clone();
    assert!(verify_password("new-secret", &stored.password_hash).await.unwrap());
    assert!(!verify_password("secret1", &stored.password_hash).await.unwrap());
}

#[tokio::test]
async fn should_reject_vendor_mobile_owned_by_another_vendor() {
    let a = test_vendor("a@example.com", "9999999999", "secret1").await;
    let b = test_vendor("b@example.com", "8888888888", "secret1").await;
    let usecase = UpdateVendorUseCase {
        repo: MockVendorRepo::new(vec![a.clone(), b.clone()]),
    };

    let err = usecase
        .execute(
            a.id,
            UpdateVendorInput {
                name: "A".into(),
                mobile: b.mobile.clone(),
                locations: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Mobile number is already associated with another vendor"
    );

    let kept = usecase
        .execute(
            a.id,
            UpdateVendorInput {
                name: "A2".into(),
                mobile: a.mobile.clone(),
                locations: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(kept.locations, a.locations);
}

#[tokio::test]
async fn should_404_deleting_missing_vendor() {
    let usecase = DeleteVendorUseCase {
        repo: MockVendorRepo::empty(),
    };
    let err = usecase.execute(Uuid::now_v7()).await.unwrap_err();
    assert_eq!(err.to_string(), "Vendor not found");
}

#[tokio::test]
async fn should_list_members_per_vendor() {
    let vendor_id = Uuid::now_v7();
    let member = test_member(vendor_id, "m@example.com", "secret1").await;
    let usecase = ListVendorMembersByVendorUseCase {
        repo: MockVendorMemberRepo::new(vec![member.clone()]),
    };

    let found = usecase.execute(vendor_id).await.unwrap();
    assert_eq!(found[0].id, member.id);

    let err = usecase.execute(Uuid::now_v7()).await.unwrap_err();
    assert_eq!(err.to_string(), "No vendor members found for this vendor");
}

#[tokio::test]
async fn should_replace_member_locations_when_given() {
    let member = test_member(Uuid::now_v7(), "m@example.com", "secret1").await;
    let usecase = UpdateVendorMemberUseCase {
        repo: MockVendorMemberRepo::new(vec![member.clone()]),
    };

    let updated = usecase
        .execute(
            member.id,
            UpdateVendorMemberInput {
                name: " Ravi S ".into(),
                mobile: member.mobile.clone(),
                locations: Some(vec!["Mumbai".into()]),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Ravi S");
    assert_eq!(updated.locations, vec!["Mumbai".to_owned()]);
}
