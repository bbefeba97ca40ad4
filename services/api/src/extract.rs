//! Request extractors: JSON bodies with 400 rejections, and bearer-token principals.

use std::future::Future;
use std::marker::PhantomData;

use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use axum::Json;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::{Authorization, HeaderMapExt};
use serde::de::DeserializeOwned;
use uuid::Uuid;
use validator::Validate;

use canteen_domain::role::Role;

use crate::domain::repository::{
    AdminRepository, UserRepository, VendorMemberRepository, VendorRepository,
};
use crate::domain::types::{Admin, User, Vendor, VendorMember};
use crate::error::ApiError;
use crate::state::AppState;

/// `Json<T>` whose parse failures answer 400 with the service error body.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

/// Request body fields in declaration order; the first failing one names the
/// reported validation message.
pub trait FieldOrder {
    const FIELDS: &'static [&'static str];
}

/// JSON body that must also pass its `validator` rules.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + FieldOrder,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value
            .validate()
            .map_err(|errs| ApiError::from_validation(errs, T::FIELDS))?;
        Ok(Self(value))
    }
}

/// Parse a path id; `what` names the resource in the 400 message.
pub fn parse_id(raw: &str, what: &'static str) -> Result<Uuid, ApiError> {
    raw.parse().map_err(|_| ApiError::InvalidId(what))
}

/// A role whose tokens can be verified and whose principal can be loaded.
pub trait PrincipalKind: Send + Sync + 'static {
    const ROLE: Role;
    type Principal: Send;

    fn load(
        state: &AppState,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<Self::Principal>, ApiError>> + Send;
}

pub struct AsUser;
pub struct AsAdmin;
pub struct AsVendor;
pub struct AsVendorMember;

impl PrincipalKind for AsUser {
    const ROLE: Role = Role::User;
    type Principal = User;

    fn load(
        state: &AppState,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<User>, ApiError>> + Send {
        let repo = state.user_repo();
        async move { repo.find_by_id(id).await }
    }
}

impl PrincipalKind for AsAdmin {
    const ROLE: Role = Role::Admin;
    type Principal = Admin;

    fn load(
        state: &AppState,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<Admin>, ApiError>> + Send {
        let repo = state.admin_repo();
        async move { repo.find_by_id(id).await }
    }
}

impl PrincipalKind for AsVendor {
    const ROLE: Role = Role::Vendor;
    type Principal = Vendor;

    fn load(
        state: &AppState,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<Vendor>, ApiError>> + Send {
        let repo = state.vendor_repo();
        async move { repo.find_by_id(id).await }
    }
}

impl PrincipalKind for AsVendorMember {
    const ROLE: Role = Role::VendorMember;
    type Principal = VendorMember;

    fn load(
        state: &AppState,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<VendorMember>, ApiError>> + Send {
        let repo = state.vendor_member_repo();
        async move { repo.find_by_id(id).await }
    }
}

/// The principal behind `Authorization: Bearer <token>` for role `K`.
///
/// | Condition | Rejection |
/// |-----------|-----------|
/// | header absent | `NotLoggedIn` |
/// | not a bearer token, bad signature, expired, other role's token | `InvalidToken` |
/// | principal row gone | `NotAuthorized` |
pub struct Authenticated<K: PrincipalKind> {
    pub principal: K::Principal,
    _kind: PhantomData<fn() -> K>,
}

impl<K: PrincipalKind> Authenticated<K> {
    pub fn into_inner(self) -> K::Principal {
        self.principal
    }
}

impl<K: PrincipalKind> FromRequestParts<AppState> for Authenticated<K> {
    type Rejection = ApiError;

    // axum-core 0.5 declares this as `fn -> impl Future + Send`. Read the header
    // synchronously and return a future that owns everything it touches.
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let token = match parts.headers.typed_try_get::<Authorization<Bearer>>() {
            Ok(Some(Authorization(bearer))) => Ok(bearer.token().to_owned()),
            Ok(None) => Err(ApiError::NotLoggedIn),
            Err(_) => Err(ApiError::InvalidToken),
        };
        let state = state.clone();

        async move {
            let token = token?;
            let id = state
                .signer
                .verify(&token, K::ROLE)
                .map_err(|_| ApiError::InvalidToken)?;
            let principal = K::load(&state, id).await?.ok_or(ApiError::NotAuthorized)?;
            Ok(Self {
                principal,
                _kind: PhantomData,
            })
        }
    }
}
