//! Insert an admin account.
//!
//! ```bash
//! cargo run -p canteen-api --bin seed-admin -- \
//!     --company-name Acme --email admin@acme.io --password secret1 --contact-no 9876543210
//! ```
//!
//! Every flag falls back to its environment variable, and a `.env` file is
//! read first. Exits 1 when the email is already registered.

use anyhow::{Context, Result};
use clap::Parser;
use sea_orm::Database;

use canteen_api::error::ApiError;
use canteen_api::infra::db::DbAdminRepository;
use canteen_api::usecase::admin::{SeedAdminInput, SeedAdminUseCase};

#[derive(Parser)]
#[command(about = "Create an admin account")]
struct Args {
    #[arg(long, env = "COMPANY_NAME")]
    company_name: String,

    #[arg(long, env = "ADMIN_EMAIL")]
    email: String,

    #[arg(long, env = "ADMIN_PASSWORD")]
    password: String,

    #[arg(long, env = "CONTACT_NO")]
    contact_no: String,

    /// PostgreSQL connection URL
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    canteen_core::tracing::init_tracing("canteen_api");

    let args = Args::parse();
    let db = Database::connect(&args.database_url)
        .await
        .context("failed to connect to database")?;

    let usecase = SeedAdminUseCase {
        repo: DbAdminRepository { db },
    };
    let result = usecase
        .execute(SeedAdminInput {
            company_name: args.company_name,
            email: args.email,
            password: args.password,
            contact_no: args.contact_no,
        })
        .await;

    match result {
        Ok(admin) => {
            println!("Admin created: {} ({})", admin.email, admin.id);
            Ok(())
        }
        Err(ApiError::AlreadyExists(msg)) => {
            eprintln!("{msg}");
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
