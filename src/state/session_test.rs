use std::rc::Rc;

use super::*;

fn store_with_backend() -> (SessionStore, Rc<MemoryStorage>) {
    let backend = Rc::new(MemoryStorage::default());
    let store = SessionStore::new(backend.clone());
    (store, backend)
}

fn standard_user() -> UserProfile {
    UserProfile {
        id: 7,
        name: "Li Wei".to_owned(),
        email: "liwei@example.com".to_owned(),
        user_type: UserType::Standard,
    }
}

// =============================================================
// Reads
// =============================================================

#[test]
fn get_on_empty_store_is_absent_not_an_error() {
    let (store, _) = store_with_backend();
    assert_eq!(store.get(), Ok(Session::default()));
}

#[test]
fn get_returns_stored_token_and_user() {
    let (store, _) = store_with_backend();
    let session = Session {
        token: Some("abc".to_owned()),
        user: Some(standard_user()),
    };
    store.set(&session);
    assert_eq!(store.get(), Ok(session));
}

#[test]
fn token_reads_credential_without_parsing_profile() {
    let (store, backend) = store_with_backend();
    backend.set_item(TOKEN_KEY, "abc");
    backend.set_item(USER_KEY, "{not json");
    assert_eq!(store.token(), Some("abc".to_owned()));
}

#[test]
fn get_with_malformed_profile_is_an_error() {
    let (store, backend) = store_with_backend();
    backend.set_item(USER_KEY, "{not json");
    assert!(matches!(
        store.get(),
        Err(SessionError::MalformedProfile(_))
    ));
}

// =============================================================
// Writes
// =============================================================

#[test]
fn set_with_absent_fields_removes_keys() {
    let (store, backend) = store_with_backend();
    store.set(&Session {
        token: Some("abc".to_owned()),
        user: Some(standard_user()),
    });
    store.set(&Session::default());
    assert_eq!(backend.get_item(TOKEN_KEY), None);
    assert_eq!(backend.get_item(USER_KEY), None);
}

#[test]
fn clear_removes_both_keys() {
    let (store, backend) = store_with_backend();
    store.set(&Session {
        token: Some("abc".to_owned()),
        user: Some(standard_user()),
    });
    store.clear();
    assert_eq!(backend.get_item(TOKEN_KEY), None);
    assert_eq!(backend.get_item(USER_KEY), None);
}

#[test]
fn clear_on_cleared_store_is_a_noop() {
    let (store, _) = store_with_backend();
    store.clear();
    store.clear();
    assert_eq!(store.get(), Ok(Session::default()));
}

#[test]
fn remove_user_keeps_the_credential() {
    let (store, backend) = store_with_backend();
    store.set(&Session {
        token: Some("abc".to_owned()),
        user: Some(standard_user()),
    });
    store.remove_user();
    assert_eq!(backend.get_item(TOKEN_KEY), Some("abc".to_owned()));
    assert_eq!(backend.get_item(USER_KEY), None);
}

// =============================================================
// UserType wire format
// =============================================================

#[test]
fn user_type_serializes_as_number() {
    let value = serde_json::to_value(standard_user()).expect("serialize profile");
    assert_eq!(value["userType"], serde_json::json!(0));

    let admin = UserProfile {
        user_type: UserType::Admin,
        ..standard_user()
    };
    let value = serde_json::to_value(admin).expect("serialize profile");
    assert_eq!(value["userType"], serde_json::json!(1));
}

#[test]
fn user_type_one_is_admin_anything_else_is_standard() {
    let admin: UserProfile =
        serde_json::from_str(r#"{"userType": 1}"#).expect("parse admin");
    assert!(admin.is_admin());

    let standard: UserProfile =
        serde_json::from_str(r#"{"userType": 0}"#).expect("parse standard");
    assert!(!standard.is_admin());

    let unknown: UserProfile =
        serde_json::from_str(r#"{"userType": 7}"#).expect("parse unknown role");
    assert!(!unknown.is_admin());
}

#[test]
fn user_type_missing_defaults_to_standard() {
    let profile: UserProfile = serde_json::from_str("{}").expect("parse empty profile");
    assert_eq!(profile.user_type, UserType::Standard);
}

#[test]
fn user_type_rejects_non_numeric_values() {
    assert!(serde_json::from_str::<UserProfile>(r#"{"userType": "admin"}"#).is_err());
    assert!(serde_json::from_str::<UserProfile>(r#"{"userType": 1.5}"#).is_err());
}

#[test]
fn profile_ignores_unknown_fields() {
    let profile: UserProfile =
        serde_json::from_str(r#"{"userType": 1, "status": 1, "password": "x"}"#)
            .expect("parse profile with extras");
    assert!(profile.is_admin());
}
