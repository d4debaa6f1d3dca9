use tempfile::tempdir;
use thrive_core::models::therapist::TherapistRef;
use thrive_core::models::user::User;
use thrive_session::{SessionError, SessionStore};

fn test_user() -> User {
    User {
        id: 7,
        email: "amina@example.org".to_string(),
        first_name: "Amina".to_string(),
        last_name: "Okoye".to_string(),
        is_email_verified: true,
    }
}

fn test_therapist() -> TherapistRef {
    TherapistRef {
        id: 3,
        first_name: "Grace".to_string(),
        last_name: "Mensah".to_string(),
        title: "Counsellor".to_string(),
        avatar_url: None,
    }
}

#[test]
fn missing_file_opens_logged_out() {
    let dir = tempdir().unwrap();
    let store = SessionStore::open(dir.path().join("session.json")).unwrap();
    assert!(!store.snapshot().is_authenticated());
    assert!(store.assigned_therapist().is_none());
}

#[test]
fn login_persists_across_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");

    let mut store = SessionStore::open(&path).unwrap();
    store
        .login("tok-123".to_string(), test_user(), Some(test_therapist()))
        .unwrap();
    drop(store);

    let reopened = SessionStore::open(&path).unwrap();
    assert_eq!(reopened.token(), Some("tok-123"));
    assert_eq!(reopened.current_user().unwrap().email, "amina@example.org");
    assert_eq!(reopened.assigned_therapist().unwrap().id, 3);
}

#[test]
fn logout_clears_everything() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");

    let mut store = SessionStore::open(&path).unwrap();
    store
        .login("tok-123".to_string(), test_user(), Some(test_therapist()))
        .unwrap();
    store.logout().unwrap();

    assert!(store.token().is_none());
    assert!(store.current_user().is_none());
    assert!(store.assigned_therapist().is_none());

    let reopened = SessionStore::open(&path).unwrap();
    assert!(!reopened.snapshot().is_authenticated());
}

#[test]
fn writes_notify_subscribers() {
    let dir = tempdir().unwrap();
    let mut store = SessionStore::open(dir.path().join("session.json")).unwrap();
    let mut rx = store.subscribe();

    assert!(!rx.has_changed().unwrap());
    store.assign_therapist(test_therapist()).unwrap();
    assert!(rx.has_changed().unwrap());

    let snapshot = rx.borrow_and_update().clone();
    assert_eq!(snapshot.therapist.unwrap().id, 3);
}

#[test]
fn pending_verification_is_transient() {
    let dir = tempdir().unwrap();
    let mut store = SessionStore::open(dir.path().join("session.json")).unwrap();

    store
        .set_pending_verification("amina@example.org".to_string())
        .unwrap();
    assert_eq!(
        store.pending_verification_email(),
        Some("amina@example.org")
    );

    // Login clears it — verification completed.
    store.login("tok".to_string(), test_user(), None).unwrap();
    assert!(store.pending_verification_email().is_none());
}

#[test]
fn migrates_pre_versioned_coach_field() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(
        &path,
        serde_json::json!({
            "token": "tok-old",
            "user": {
                "id": 7,
                "email": "amina@example.org",
                "first_name": "Amina",
                "last_name": "Okoye",
                "is_email_verified": true
            },
            "coach": {
                "id": 3,
                "first_name": "Grace",
                "last_name": "Mensah",
                "title": "Counsellor",
                "avatar_url": null
            }
        })
        .to_string(),
    )
    .unwrap();

    let store = SessionStore::open(&path).unwrap();
    assert_eq!(store.assigned_therapist().unwrap().id, 3);
}

#[test]
fn rejects_session_file_from_the_future() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, r#"{"session_version": 99}"#).unwrap();

    match SessionStore::open(&path) {
        Err(SessionError::UnsupportedVersion { found, .. }) => assert_eq!(found, 99),
        Err(e) => panic!("unexpected error: {e}"),
        Ok(_) => panic!("expected UnsupportedVersion"),
    }
}
