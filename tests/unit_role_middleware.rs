use film_api::middleware::auth::AuthUser;
use film_api::middleware::role::check_role;
use film_auth::{Claims, SessionUser};
use film_core::ErrorKind;
use film_models::{RecordId, Role};

fn create_test_auth_user(role: Role) -> AuthUser {
    AuthUser(Claims {
        user: SessionUser {
            id: RecordId::Int(1),
            username: "tester".to_string(),
            role,
        },
        exp: 9999999999,
        iat: 1234567890,
    })
}

#[test]
fn test_check_role_exact_match() {
    assert!(check_role(&create_test_auth_user(Role::Admin), Role::Admin).is_ok());
    assert!(check_role(&create_test_auth_user(Role::User), Role::User).is_ok());
}

#[test]
fn test_check_role_no_match() {
    let err = check_role(&create_test_auth_user(Role::User), Role::Admin).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Forbidden);
    assert_eq!(err.error.to_string(), "Akses Dilarang: Peran tidak memadai");
}

#[test]
fn test_admin_does_not_satisfy_user_gate() {
    // No hierarchy: roles must match exactly.
    assert!(check_role(&create_test_auth_user(Role::Admin), Role::User).is_err());
}

#[test]
fn test_auth_user_accessors() {
    let auth_user = create_test_auth_user(Role::Admin);
    assert_eq!(auth_user.username(), "tester");
    assert_eq!(auth_user.role(), Role::Admin);
    assert_eq!(auth_user.user().id, RecordId::Int(1));
}
