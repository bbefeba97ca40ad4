use chrono::{Duration, Utc};
use uuid::Uuid;

use canteen_api::error::{ApiError, OrderAction};
use canteen_api::usecase::order::{
    CreateOrderUseCase, DeleteOrderUseCase, EditOrderUseCase, ListOrdersByUserUseCase,
    OrderPatch,
};

use crate::helpers::{MockOrderRepo, test_order};

fn full_patch() -> OrderPatch {
    OrderPatch {
        username: Some("Asha".into()),
        userid: Some("user-1".into()),
        userlocation: Some("Pune".into()),
        foodname: Some("Veg Thali".into()),
        usernamecontactno: Some("9876543210".into()),
        useremailid: Some("  Asha@Example.com ".into()),
        description: Some("Less spicy".into()),
        quantity: Some(2),
        date: None,
    }
}

// ── CreateOrderUseCase ───────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_order_with_normalized_email_and_default_date() {
    let repo = MockOrderRepo::default();
    let orders = repo.orders.clone();
    let usecase = CreateOrderUseCase { repo };

    let before = Utc::now();
    let order = usecase.execute(full_patch()).await.unwrap();

    assert_eq!(order.useremailid, "asha@example.com");
    assert!(order.date >= before);
    assert_eq!(order.created_at, order.date);
    assert_eq!(orders.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_reject_order_with_bad_contact_and_zero_quantity() {
    let usecase = CreateOrderUseCase {
        repo: MockOrderRepo::default(),
    };
    let mut patch = full_patch();
    patch.usernamecontactno = Some("12345".into());
    patch.quantity = Some(0);

    match usecase.execute(patch).await {
        Err(ApiError::InvalidFields { message, errors }) => {
            assert_eq!(message, "usernamecontactno must be exactly 10 digits");
            assert!(errors.contains_key("usernamecontactno"));
            assert!(errors.contains_key("quantity"));
            assert_eq!(errors.len(), 2);
        }
        other => panic!("expected InvalidFields, got {other:?}"),
    }
}

#[tokio::test]
async fn should_reject_overlong_username() {
    let usecase = CreateOrderUseCase {
        repo: MockOrderRepo::default(),
    };
    let mut patch = full_patch();
    patch.username = Some("x".repeat(101));

    let err = usecase.execute(patch).await.unwrap_err();
    assert_eq!(err.to_string(), "username must be at most 100 characters");
}

// ── ListOrdersByUserUseCase ──────────────────────────────────────────────────

#[tokio::test]
async fn should_404_when_user_has_no_orders() {
    let usecase = ListOrdersByUserUseCase {
        repo: MockOrderRepo::new(vec![test_order(Utc::now())]),
    };

    assert_eq!(usecase.execute("user-1").await.unwrap().len(), 1);
    let err = usecase.execute("someone-else").await.unwrap_err();
    assert!(matches!(err, ApiError::NoneFound(_)));
    assert_eq!(err.to_string(), "No UserOrders found for this userid");
}

// ── EditOrderUseCase ─────────────────────────────────────────────────────────

#[tokio::test]
async fn should_edit_fresh_order_and_keep_untouched_fields() {
    let order = test_order(Utc::now() - Duration::minutes(10));
    let repo = MockOrderRepo::new(vec![order.clone()]);
    let orders = repo.orders.clone();
    let usecase = EditOrderUseCase { repo };

    let patch = OrderPatch {
        quantity: Some(5),
        ..Default::default()
    };
    let updated = usecase.execute(order.id, patch).await.unwrap();

    assert_eq!(updated.quantity, 5);
    assert_eq!(updated.foodname, order.foodname);
    assert_eq!(updated.created_at, order.created_at);
    assert_eq!(orders.lock().unwrap()[0], updated);
}

#[tokio::test]
async fn should_allow_edit_exactly_at_thirty_minutes() {
    let created = Utc::now();
    let order = test_order(created);
    let usecase = EditOrderUseCase {
        repo: MockOrderRepo::new(vec![order.clone()]),
    };

    let result = usecase
        .execute_at(order.id, OrderPatch::default(), created + Duration::minutes(30))
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn should_refuse_edit_after_thirty_minutes() {
    let order = test_order(Utc::now() - Duration::minutes(31));
    let repo = MockOrderRepo::new(vec![order.clone()]);
    let orders = repo.orders.clone();
    let usecase = EditOrderUseCase { repo };

    let patch = OrderPatch {
        quantity: Some(9),
        ..Default::default()
    };
    let err = usecase.execute(order.id, patch).await.unwrap_err();

    assert!(matches!(err, ApiError::OrderLocked(OrderAction::Edit)));
    assert_eq!(err.to_string(), "Cannot edit order after 30 minutes");
    assert_eq!(orders.lock().unwrap()[0].quantity, order.quantity);
}

#[tokio::test]
async fn should_404_editing_unknown_order() {
    let usecase = EditOrderUseCase {
        repo: MockOrderRepo::default(),
    };
    let err = usecase
        .execute(Uuid::now_v7(), OrderPatch::default())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "UserOrder not found");
}

// ── DeleteOrderUseCase ───────────────────────────────────────────────────────

#[tokio::test]
async fn should_delete_fresh_order() {
    let order = test_order(Utc::now() - Duration::minutes(5));
    let repo = MockOrderRepo::new(vec![order.clone()]);
    let orders = repo.orders.clone();
    let usecase = DeleteOrderUseCase { repo };

    usecase.execute(order.id).await.unwrap();
    assert!(orders.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_refuse_delete_after_thirty_minutes() {
    let order = test_order(Utc::now() - Duration::hours(2));
    let repo = MockOrderRepo::new(vec![order.clone()]);
    let orders = repo.orders.clone();
    let usecase = DeleteOrderUseCase { repo };

    let err = usecase.execute(order.id).await.unwrap_err();
    assert!(matches!(err, ApiError::OrderLocked(OrderAction::Delete)));
    assert_eq!(err.to_string(), "Cannot delete order after 30 minutes");
    assert_eq!(orders.lock().unwrap().len(), 1);
}
