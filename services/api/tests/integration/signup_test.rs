use canteen_api::error::ApiError;
use canteen_api::usecase::signup::{
    UserSignupInput, UserSignupUseCase, VendorMemberSignupInput, VendorMemberSignupUseCase,
    VendorSignupInput, VendorSignupUseCase,
};
use canteen_auth_types::password::verify_password;
use canteen_domain::role::Role;
use uuid::Uuid;

use crate::helpers::{
    MockUserRepo, MockVendorMemberRepo, MockVendorRepo, test_member, test_signer, test_user,
    test_vendor,
};

fn user_input(email: &str) -> UserSignupInput {
    UserSignupInput {
        name: "A".to_owned(),
        email: email.to_owned(),
        mobile: "1234567890".to_owned(),
        password: "secret1".to_owned(),
    }
}

// ── UserSignupUseCase ────────────────────────────────────────────────────────

#[tokio::test]
async fn should_register_user_and_issue_user_token() {
    let repo = MockUserRepo::empty();
    let users = repo.handle();
    let usecase = UserSignupUseCase {
        repo,
        signer: test_signer(),
    };

    let out = usecase.execute(user_input("a@a.com")).await.unwrap();

    let stored = users.lock().unwrap()[0].clone();
    assert_eq!(stored.id, out.id);
    assert_ne!(stored.password_hash, "secret1");
    assert!(verify_password("secret1", &stored.password_hash).await.unwrap());
    assert_eq!(test_signer().verify(&out.token, Role::User).unwrap(), out.id);
    assert!(test_signer().verify(&out.token, Role::Admin).is_err());
}

#[tokio::test]
async fn should_reject_second_signup_with_same_email() {
    let usecase = UserSignupUseCase {
        repo: MockUserRepo::empty(),
        signer: test_signer(),
    };
    usecase.execute(user_input("a@a.com")).await.unwrap();

    let result = usecase.execute(user_input("a@a.com")).await;
    match result {
        Err(ApiError::AlreadyExists(msg)) => assert_eq!(msg, "User already exists"),
        other => panic!("expected AlreadyExists, got {other:?}"),
    }
}

#[tokio::test]
async fn should_normalize_email_before_uniqueness_check() {
    let existing = test_user("asha@example.com", "secret1").await;
    let usecase = UserSignupUseCase {
        repo: MockUserRepo::new(vec![existing]),
        signer: test_signer(),
    };

    let result = usecase.execute(user_input("  Asha@Example.COM ")).await;
    assert!(matches!(result, Err(ApiError::AlreadyExists(_))));
}

// ── VendorSignupUseCase ──────────────────────────────────────────────────────

fn vendor_input(email: &str, mobile: &str) -> VendorSignupInput {
    VendorSignupInput {
        name: "Spice Hub".to_owned(),
        email: email.to_owned(),
        mobile: mobile.to_owned(),
        password: "secret1".to_owned(),
        locations: vec!["Pune".to_owned()],
    }
}

#[tokio::test]
async fn should_reject_vendor_with_taken_mobile() {
    let existing = test_vendor("v1@example.com", "9999999999", "secret1").await;
    let usecase = VendorSignupUseCase {
        repo: MockVendorRepo::new(vec![existing]),
        signer: test_signer(),
    };

    let err = usecase
        .execute(vendor_input("v2@example.com", "9999999999"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Vendor already exists with this mobile number");
}

#[tokio::test]
async fn should_report_email_clash_caught_by_unique_index() {
    let existing = test_vendor("v1@example.com", "9999999999", "secret1").await;
    let usecase = VendorSignupUseCase {
        repo: MockVendorRepo::new(vec![existing]),
        signer: test_signer(),
    };

    let err = usecase
        .execute(vendor_input("v1@example.com", "8888888888"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Vendor already exists with this email");
}

#[tokio::test]
async fn should_register_vendor_with_locations() {
    let repo = MockVendorRepo::empty();
    let vendors = repo.handle();
    let usecase = VendorSignupUseCase {
        repo,
        signer: test_signer(),
    };

    let out = usecase
        .execute(vendor_input("v@example.com", "9999999999"))
        .await
        .unwrap();

    let stored = vendors.lock().unwrap()[0].clone();
    assert_eq!(stored.locations, vec!["Pune".to_owned()]);
    assert_eq!(test_signer().verify(&out.token, Role::Vendor).unwrap(), out.id);
}

// ── VendorMemberSignupUseCase ────────────────────────────────────────────────

fn member_input(vendor_id: Uuid, email: &str, mobile: &str) -> VendorMemberSignupInput {
    VendorMemberSignupInput {
        vendor_id,
        name: "Ravi".to_owned(),
        email: email.to_owned(),
        mobile: mobile.to_owned(),
        password: "secret1".to_owned(),
        locations: vec!["Pune".to_owned()],
    }
}

#[tokio::test]
async fn should_check_member_mobile_before_email() {
    let vendor_id = Uuid::now_v7();
    let existing = test_member(vendor_id, "m@example.com", "secret1").await;
    let mobile = existing.mobile.clone();
    let usecase = VendorMemberSignupUseCase {
        repo: MockVendorMemberRepo::new(vec![existing]),
        signer: test_signer(),
    };

    let err = usecase
        .execute(member_input(vendor_id, "m@example.com", &mobile))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Vendor member already exists with this mobile number");

    let err = usecase
        .execute(member_input(vendor_id, "m@example.com", "9111111111"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Vendor member already exists with this email");
}

#[tokio::test]
async fn should_register_member_under_vendor() {
    let vendor_id = Uuid::now_v7();
    let repo = MockVendorMemberRepo::empty();
    let members = repo.handle();
    let usecase = VendorMemberSignupUseCase {
        repo,
        signer: test_signer(),
    };

    let out = usecase
        .execute(member_input(vendor_id, "m@example.com", "9111111111"))
        .await
        .unwrap();

    let stored = members.lock().unwrap()[0].clone();
    assert_eq!(stored.vendor_id, vendor_id);
    assert_eq!(
        test_signer().verify(&out.token, Role::VendorMember).unwrap(),
        out.id
    );
}
