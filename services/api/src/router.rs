use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;

use canteen_core::health::healthz;
use canteen_core::middleware::{propagate_request_id_layer, request_id_layer, trace_layer};

use crate::handlers::{
    admin, auth, branch, feedback, food_item, health::readyz, listing, order, user, vendor,
    vendor_member,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Token checks
        .route("/", get(auth::check_user))
        .route("/admintoken", get(auth::check_admin))
        .route("/vendorToken", get(auth::check_vendor))
        .route("/vendormemberToken", get(auth::check_vendor_member))
        .route("/api/auth/login", post(auth::unified_login))
        // Users
        .route("/api/user", get(user::list_users))
        .route("/api/user/Usersignup", post(user::signup))
        .route("/api/user/Userlogin", post(user::login))
        .route("/api/user/{id}", get(user::get_user).put(user::update_user))
        // Admins
        .route("/api/admin/login", post(admin::login))
        .route("/api/admin/{id}", get(admin::get_admin).put(admin::update_admin))
        .route("/api/admin/password/{id}", put(admin::change_password))
        // Vendors
        .route("/api/vendor/signup", post(vendor::signup))
        .route("/api/vendor/login", post(vendor::login))
        .route("/api/vendor/getallvendor", get(vendor::list_vendors))
        .route("/api/vendor/vendor/{id}", get(vendor::get_vendor))
        .route(
            "/api/vendor/{id}",
            put(vendor::update_vendor).delete(vendor::delete_vendor),
        )
        // Vendor members
        .route("/api/vendormember/signup", post(vendor_member::signup))
        .route("/api/vendormember/login", post(vendor_member::login))
        .route("/api/vendormember/getallmembers", get(vendor_member::list_members))
        .route(
            "/api/vendormember/byvendor/{vendor_id}",
            get(vendor_member::list_members_by_vendor),
        )
        .route(
            "/api/vendormember/{id}",
            get(vendor_member::get_member)
                .put(vendor_member::update_member)
                .delete(vendor_member::delete_member),
        )
        // Feedback
        .route("/api/user/feedback/submit-feedback", post(feedback::submit_feedback))
        .route("/api/user/feedback/get-all-feedback", get(feedback::list_feedback))
        .route("/api/user/feedback/get-feedback/{id}", get(feedback::get_feedback))
        .route(
            "/api/user/feedback/delete-feedback/{id}",
            delete(feedback::delete_feedback),
        )
        // Branches
        .route("/api/branchRoutes/addbranch", post(branch::create_branch))
        .route("/api/branchRoutes/viewallbranch", get(branch::list_branches))
        .route("/api/branchRoutes/viewbranch/{id}", get(branch::get_branch))
        .route("/api/branchRoutes/editbranch/{id}", put(branch::update_branch))
        .route("/api/branchRoutes/deletebranch/{id}", delete(branch::delete_branch))
        // Food catalog
        .route("/api/fooditemroutes/create", post(food_item::create_food_item))
        .route(
            "/api/fooditemroutes/getallfoodcollection",
            get(food_item::list_food_items),
        )
        .route("/api/fooditemroutes/get/{id}", get(food_item::get_food_item))
        .route("/api/fooditemroutes/edit/{id}", put(food_item::update_food_item))
        .route("/api/fooditemroutes/delete/{id}", delete(food_item::delete_food_item))
        // Vendor member listings
        .route("/api/vendorMemberFoodRoutes/addfooditem", post(listing::create_listing))
        .route(
            "/api/vendorMemberFoodRoutes/getfooditems/{vendor_id}",
            get(listing::list_listings_by_vendor),
        )
        .route(
            "/api/vendorMemberFoodRoutes/getfooditem/{id}",
            get(listing::get_listing),
        )
        .route(
            "/api/vendorMemberFoodRoutes/editfooditem/{id}",
            put(listing::update_listing),
        )
        .route(
            "/api/vendorMemberFoodRoutes/deletefooditem/{id}",
            delete(listing::delete_listing),
        )
        // Orders
        .route("/api/UserOrdersRoutes/post", post(order::create_order))
        .route("/api/UserOrdersRoutes/getallorder", get(order::list_orders))
        .route("/api/UserOrdersRoutes/order/{id}", get(order::get_order))
        .route("/api/UserOrdersRoutes/edit/{id}", put(order::edit_order))
        .route("/api/UserOrdersRoutes/delete/{id}", delete(order::delete_order))
        .route("/api/UserOrdersRoutes/{userid}", get(order::list_orders_by_user))
        .layer(CorsLayer::permissive())
        .layer(propagate_request_id_layer())
        .layer(trace_layer())
        .layer(request_id_layer())
        .with_state(state)
}
