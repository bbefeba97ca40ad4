use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use canteen_domain::contact::{is_valid_email, is_valid_mobile, normalize_email};
use canteen_domain::date::parse_client_date;
use canteen_domain::order::is_order_mutable;

use crate::domain::repository::OrderRepository;
use crate::domain::types::UserOrder;
use crate::error::{ApiError, OrderAction};

pub const NO_ORDERS: &str = "No UserOrders found for this userid";

const ORDER_FIELDS: &[&str] = &[
    "username",
    "userid",
    "userlocation",
    "foodname",
    "usernamecontactno",
    "useremailid",
    "description",
    "quantity",
    "date",
];

/// Order fields as sent. Create requires all but `date`; edit takes any subset.
#[derive(Debug, Default, Clone)]
pub struct OrderPatch {
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

struct Draft {
    username: Option<String>,
    userid: Option<String>,
    userlocation: Option<String>,
    foodname: Option<String>,
    usernamecontactno: Option<String>,
    useremailid: Option<String>,
    description: Option<String>,
    quantity: Option<i64>,
    date: Option<DateTime<Utc>>,
}

fn text(
    errors: &mut BTreeMap<String, String>,
    key: &str,
    value: Option<String>,
    max: usize,
) -> Option<String> {
    let Some(value) = value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()) else {
        errors.insert(key.to_owned(), format!("{key} is required"));
        return None;
    };
    if value.chars().count() > max {
        errors.insert(key.to_owned(), format!("{key} must be at most {max} characters"));
        return None;
    }
    Some(value)
}

fn check(draft: Draft) -> Result<UserOrder, ApiError> {
    let mut errors = BTreeMap::new();

    let username = text(&mut errors, "username", draft.username, 100);
    let userid = text(&mut errors, "userid", draft.userid, 50);
    let userlocation = text(&mut errors, "userlocation", draft.userlocation, 255);
    let foodname = text(&mut errors, "foodname", draft.foodname, 255);
    let description = text(&mut errors, "description", draft.description, 500);

    let contact = match draft.usernamecontactno.map(|v| v.trim().to_owned()) {
        Some(v) if is_valid_mobile(&v) => Some(v),
        Some(v) if !v.is_empty() => {
            errors.insert(
                "usernamecontactno".into(),
                "usernamecontactno must be exactly 10 digits".into(),
            );
            None
        }
        _ => {
            errors.insert("usernamecontactno".into(), "usernamecontactno is required".into());
            None
        }
    };
    let email = match draft.useremailid.map(|v| normalize_email(&v)) {
        Some(v) if is_valid_email(&v) => Some(v),
        Some(v) if !v.is_empty() => {
            errors.insert("useremailid".into(), "useremailid must be a valid email".into());
            None
        }
        _ => {
            errors.insert("useremailid".into(), "useremailid is required".into());
            None
        }
    };
    let quantity = match draft.quantity {
        Some(q) if q >= 1 => i32::try_from(q).ok().or_else(|| {
            errors.insert("quantity".into(), "quantity is too large".into());
            None
        }),
        Some(_) => {
            errors.insert("quantity".into(), "quantity must be at least 1".into());
            None
        }
        None => {
            errors.insert("quantity".into(), "quantity is required".into());
            None
        }
    };

    match (
        username,
        userid,
        userlocation,
        foodname,
        contact,
        email,
        description,
        quantity,
    ) {
        (
            Some(username),
            Some(userid),
            Some(userlocation),
            Some(foodname),
            Some(usernamecontactno),
            Some(useremailid),
            Some(description),
            Some(quantity),
        ) if errors.is_empty() => {
            let now = Utc::now();
            Ok(UserOrder {
                id: Uuid::nil(),
                username,
                userid,
                userlocation,
                foodname,
                usernamecontactno,
                useremailid,
                description,
                quantity,
                date: draft.date.unwrap_or(now),
                created_at: now,
            })
        }
        _ => Err(ApiError::invalid_fields(errors, ORDER_FIELDS)),
    }
}

fn parse_date(raw: Option<String>) -> Result<Option<DateTime<Utc>>, ApiError> {
    match raw {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => parse_client_date(&raw).map(Some).ok_or_else(|| {
            ApiError::invalid_fields(
                BTreeMap::from([("date".to_owned(), "date must be a valid date".to_owned())]),
                ORDER_FIELDS,
            )
        }),
    }
}

// ── CreateOrder ──────────────────────────────────────────────────────────────

pub struct CreateOrderUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> CreateOrderUseCase<R> {
    pub async fn execute(&self, input: OrderPatch) -> Result<UserOrder, ApiError> {
        let date = parse_date(input.date)?;
        let mut order = check(Draft {
            username: input.username,
            userid: input.userid,
            userlocation: input.userlocation,
            foodname: input.foodname,
            usernamecontactno: input.usernamecontactno,
            useremailid: input.useremailid,
            description: input.description,
            quantity: input.quantity,
            date,
        })?;
        order.id = Uuid::now_v7();
        self.repo.create(&order).await?;
        Ok(order)
    }
}

// ── ListOrders ───────────────────────────────────────────────────────────────

pub struct ListOrdersUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> ListOrdersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<UserOrder>, ApiError> {
        self.repo.list().await
    }
}

// ── GetOrder ─────────────────────────────────────────────────────────────────

pub struct GetOrderUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> GetOrderUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<UserOrder, ApiError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound("UserOrder"))
    }
}

// ── ListOrdersByUser ─────────────────────────────────────────────────────────

pub struct ListOrdersByUserUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> ListOrdersByUserUseCase<R> {
    pub async fn execute(&self, userid: &str) -> Result<Vec<UserOrder>, ApiError> {
        let orders = self.repo.list_by_userid(userid).await?;
        if orders.is_empty() {
            return Err(ApiError::NoneFound(NO_ORDERS));
        }
        Ok(orders)
    }
}

// ── EditOrder ────────────────────────────────────────────────────────────────

pub struct EditOrderUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> EditOrderUseCase<R> {
    pub async fn execute(&self, id: Uuid, patch: OrderPatch) -> Result<UserOrder, ApiError> {
        self.execute_at(id, patch, Utc::now()).await
    }

    /// Same as `execute` with the clock supplied by the caller.
    pub async fn execute_at(
        &self,
        id: Uuid,
        patch: OrderPatch,
        now: DateTime<Utc>,
    ) -> Result<UserOrder, ApiError> {
        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound("UserOrder"))?;
        if !is_order_mutable(current.created_at, now) {
            return Err(ApiError::OrderLocked(OrderAction::Edit));
        }
        let date = parse_date(patch.date)?.unwrap_or(current.date);
        let mut order = check(Draft {
            username: patch.username.or(Some(current.username)),
            userid: patch.userid.or(Some(current.userid)),
            userlocation: patch.userlocation.or(Some(current.userlocation)),
            foodname: patch.foodname.or(Some(current.foodname)),
            usernamecontactno: patch.usernamecontactno.or(Some(current.usernamecontactno)),
            useremailid: patch.useremailid.or(Some(current.useremailid)),
            description: patch.description.or(Some(current.description)),
            quantity: patch.quantity.or(Some(i64::from(current.quantity))),
            date: Some(date),
        })?;
        order.id = current.id;
        order.created_at = current.created_at;
        self.repo.update(&order).await?;
        Ok(order)
    }
}

// ── DeleteOrder ──────────────────────────────────────────────────────────────

pub struct DeleteOrderUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> DeleteOrderUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), ApiError> {
        self.execute_at(id, Utc::now()).await
    }

    pub async fn execute_at(&self, id: Uuid, now: DateTime<Utc>) -> Result<(), ApiError> {
        let order = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound("UserOrder"))?;
        if !is_order_mutable(order.created_at, now) {
            return Err(ApiError::OrderLocked(OrderAction::Delete));
        }
        if !self.repo.delete(id).await? {
            return Err(ApiError::NotFound("UserOrder"));
        }
        Ok(())
    }
}
