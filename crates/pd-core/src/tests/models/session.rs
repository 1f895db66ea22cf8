use crate::tests::created;
use crate::{Session, SessionUser, UserMetadata};

use uuid::Uuid;

fn session(email: Option<&str>, full_name: Option<&str>) -> Session {
    Session {
        user: SessionUser {
            id: Uuid::new_v4(),
            email: email.map(String::from),
            metadata: UserMetadata {
                full_name: full_name.map(String::from),
            },
        },
        access_token: "access".to_string(),
        refresh_token: None,
        token_type: "bearer".to_string(),
        expires_at: None,
    }
}

#[test]
fn test_display_name_prefers_full_name() {
    let session = session(Some("ada@example.com"), Some("Ada Lovelace"));

    assert_eq!(session.display_name(), "Ada Lovelace");
    assert_eq!(session.initial(), Some('A'));
}

#[test]
fn test_display_name_falls_back_to_email() {
    let session = session(Some("grace@example.com"), None);

    assert_eq!(session.display_name(), "grace@example.com");
    assert_eq!(session.initial(), Some('G'));
}

#[test]
fn test_display_name_ignores_blank_full_name() {
    let session = session(Some("li@example.com"), Some("  "));

    assert_eq!(session.display_name(), "li@example.com");
}

#[test]
fn test_display_name_empty_without_email_or_name() {
    let session = session(None, None);

    assert_eq!(session.display_name(), "");
    assert_eq!(session.initial(), None);
}

#[test]
fn test_session_without_expiry_never_expires() {
    let session = session(None, None);

    assert!(!session.is_expired_at(created(1_000_000)));
}

#[test]
fn test_session_expired_at_boundary() {
    let mut session = session(None, None);
    session.expires_at = Some(created(10));

    assert!(!session.is_expired_at(created(9)));
    assert!(session.is_expired_at(created(10)));
    assert!(session.is_expired_at(created(11)));
}

#[test]
fn test_session_deserializes_identity_service_user_shape() {
    let json = r#"{
        "user": {
            "id": "00000000-0000-0000-0000-000000000001",
            "email": "ada@example.com",
            "user_metadata": { "full_name": "Ada" }
        },
        "access_token": "token"
    }"#;

    let session: Session = serde_json::from_str(json).unwrap();

    assert_eq!(session.user.metadata.full_name.as_deref(), Some("Ada"));
    assert_eq!(session.token_type, "bearer");
    assert!(session.refresh_token.is_none());
    assert!(session.expires_at.is_none());
}
