// Wire-format tests for the auth models.

use serde_json::json;

use super::models::{AuthPayload, UpdateProfileRequest, User};

#[test]
fn user_deserializes_from_backend_shape() {
    let body = json!({
        "_id": "u-123",
        "username": "nia",
        "email": "nia@example.com",
        "profilePicture": "/api/avatars/nia.png",
        "createdAt": "2026-01-15T10:30:00Z"
    });

    let user: User = serde_json::from_value(body).expect("user should deserialize");
    assert_eq!(user.id, "u-123");
    assert_eq!(user.profile_picture.as_deref(), Some("/api/avatars/nia.png"));
    assert!(user.created_at.is_some());
}

#[test]
fn user_tolerates_missing_optional_fields() {
    let body = json!({
        "_id": "u-123",
        "username": "nia",
        "email": "nia@example.com"
    });

    let user: User = serde_json::from_value(body).expect("user should deserialize");
    assert!(user.profile_picture.is_none());
    assert!(user.created_at.is_none());
}

#[test]
fn auth_payload_flattens_user_next_to_token() {
    // Login and register responses carry the user fields alongside the token.
    let body = json!({
        "token": "tok-abc",
        "_id": "u-123",
        "username": "nia",
        "email": "nia@example.com"
    });

    let payload: AuthPayload = serde_json::from_value(body).expect("payload should deserialize");
    assert_eq!(payload.token, "tok-abc");
    assert_eq!(payload.user.username, "nia");
}

#[test]
fn profile_update_skips_unset_fields() {
    let request = UpdateProfileRequest {
        username: Some("nia".to_string()),
        email: Some("nia@example.com".to_string()),
        ..Default::default()
    };

    let body = serde_json::to_value(&request).expect("request should serialize");
    assert_eq!(body["username"], "nia");
    assert!(body.get("currentPassword").is_none());
    assert!(body.get("newPassword").is_none());
}
