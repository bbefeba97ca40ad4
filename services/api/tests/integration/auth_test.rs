use canteen_api::error::ApiError;
use canteen_api::usecase::admin::{SeedAdminInput, SeedAdminUseCase};
use canteen_api::usecase::login::{LoginInput, LoginUseCase, UnifiedLoginUseCase};
use canteen_auth_types::password::verify_password;
use canteen_auth_types::session::Session;
use canteen_domain::role::Role;

use crate::helpers::{
    MockAdminRepo, MockUserRepo, MockVendorMemberRepo, MockVendorRepo, test_admin, test_member,
    test_signer, test_user, test_vendor,
};

fn creds(email: &str, password: &str) -> LoginInput {
    LoginInput {
        email: email.to_owned(),
        password: password.to_owned(),
    }
}

// ── LoginUseCase ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_log_in_user_with_correct_password() {
    let user = test_user("asha@example.com", "secret1").await;
    let usecase = LoginUseCase {
        repo: MockUserRepo::new(vec![user.clone()]),
        signer: test_signer(),
    };

    let session = usecase
        .execute(creds("Asha@Example.com", "secret1"))
        .await
        .unwrap();

    assert_eq!(session.role, Role::User);
    assert_eq!(session.principal_id, user.id);
    assert_eq!(test_signer().verify(&session.token, Role::User).unwrap(), user.id);
}

#[tokio::test]
async fn should_give_same_error_for_wrong_password_and_unknown_email() {
    let admin = test_admin("admin@example.com", "secret1").await;
    let usecase = LoginUseCase {
        repo: MockAdminRepo::new(vec![admin]),
        signer: test_signer(),
    };

    let wrong_password = usecase
        .execute(creds("admin@example.com", "nope"))
        .await
        .unwrap_err();
    let unknown_email = usecase
        .execute(creds("ghost@example.com", "secret1"))
        .await
        .unwrap_err();

    assert!(matches!(wrong_password, ApiError::InvalidCredentials));
    assert!(matches!(unknown_email, ApiError::InvalidCredentials));
    assert_eq!(wrong_password.to_string(), unknown_email.to_string());
}

#[tokio::test]
async fn should_sign_vendor_tokens_with_vendor_claim() {
    let vendor = test_vendor("v@example.com", "9999999999", "secret1").await;
    let usecase = LoginUseCase {
        repo: MockVendorRepo::new(vec![vendor.clone()]),
        signer: test_signer(),
    };

    let session = usecase.execute(creds("v@example.com", "secret1")).await.unwrap();

    assert_eq!(test_signer().verify(&session.token, Role::Vendor).unwrap(), vendor.id);
    assert!(test_signer().verify(&session.token, Role::User).is_err());
}

// ── UnifiedLoginUseCase ──────────────────────────────────────────────────────

fn unified(
    users: MockUserRepo,
    admins: MockAdminRepo,
    vendors: MockVendorRepo,
    members: MockVendorMemberRepo,
) -> UnifiedLoginUseCase<MockUserRepo, MockAdminRepo, MockVendorRepo, MockVendorMemberRepo> {
    UnifiedLoginUseCase {
        users,
        admins,
        vendors,
        members,
        signer: test_signer(),
    }
}

#[tokio::test]
async fn should_prefer_user_when_email_exists_in_several_roles() {
    let user = test_user("shared@example.com", "secret1").await;
    let vendor = test_vendor("shared@example.com", "9999999999", "secret1").await;
    let usecase = unified(
        MockUserRepo::new(vec![user.clone()]),
        MockAdminRepo::empty(),
        MockVendorRepo::new(vec![vendor]),
        MockVendorMemberRepo::empty(),
    );

    let session = usecase
        .execute(creds("shared@example.com", "secret1"))
        .await
        .unwrap();
    assert_eq!(session.role, Role::User);
    assert_eq!(session.principal_id, user.id);
}

#[tokio::test]
async fn should_fall_through_to_next_role_on_password_mismatch() {
    let user = test_user("shared@example.com", "user-pass").await;
    let vendor = test_vendor("shared@example.com", "9999999999", "vendor-pass").await;
    let usecase = unified(
        MockUserRepo::new(vec![user]),
        MockAdminRepo::empty(),
        MockVendorRepo::new(vec![vendor.clone()]),
        MockVendorMemberRepo::empty(),
    );

    let session = usecase
        .execute(creds("shared@example.com", "vendor-pass"))
        .await
        .unwrap();
    assert_eq!(session.role, Role::Vendor);
    assert_eq!(session.principal_id, vendor.id);
}

#[tokio::test]
async fn should_reach_vendor_member_last() {
    let member = test_member(uuid::Uuid::now_v7(), "m@example.com", "secret1").await;
    let usecase = unified(
        MockUserRepo::empty(),
        MockAdminRepo::empty(),
        MockVendorRepo::empty(),
        MockVendorMemberRepo::new(vec![member.clone()]),
    );

    let session = usecase.execute(creds("m@example.com", "secret1")).await.unwrap();
    assert_eq!(session.role, Role::VendorMember);

    let mut client = Session::new();
    client.sign_in(session);
    assert_eq!(client.active_role(), Some(Role::VendorMember));
}

#[tokio::test]
async fn should_fail_unified_login_when_no_role_matches() {
    let usecase = unified(
        MockUserRepo::empty(),
        MockAdminRepo::empty(),
        MockVendorRepo::empty(),
        MockVendorMemberRepo::empty(),
    );

    let result = usecase.execute(creds("nobody@example.com", "secret1")).await;
    assert!(matches!(result, Err(ApiError::InvalidCredentials)));
}

// ── SeedAdminUseCase ─────────────────────────────────────────────────────────

fn seed_input(email: &str) -> SeedAdminInput {
    SeedAdminInput {
        company_name: "Acme Foods".to_owned(),
        email: email.to_owned(),
        password: "secret1".to_owned(),
        contact_no: "9123456780".to_owned(),
    }
}

#[tokio::test]
async fn should_seed_admin_that_can_log_in() {
    let repo = MockAdminRepo::empty();
    let admins = repo.handle();
    let seed = SeedAdminUseCase { repo };

    let admin = seed.execute(seed_input("Admin@Acme.io")).await.unwrap();
    assert_eq!(admin.email, "admin@acme.io");

    let stored = admins.lock().unwrap()[0].clone();
    assert!(verify_password("secret1", &stored.password_hash).await.unwrap());
}

#[tokio::test]
async fn should_refuse_duplicate_admin_email() {
    let existing = test_admin("admin@acme.io", "secret1").await;
    let seed = SeedAdminUseCase {
        repo: MockAdminRepo::new(vec![existing]),
    };

    let err = seed.execute(seed_input("admin@acme.io")).await.unwrap_err();
    assert_eq!(err.to_string(), "Admin already exists with this email");
}
