use sea_orm::Database;
use tracing::info;

use canteen_api::config::ApiConfig;
use canteen_api::router::build_router;
use canteen_api::state::AppState;
use canteen_auth_types::token::TokenSigner;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    canteen_core::tracing::init_tracing("canteen_api");

    let config = ApiConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        signer: TokenSigner::new(config.jwt_secret, config.token_ttl_secs),
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.api_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("api service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
