mod helpers;

use axum::http::StatusCode;
use db::{models::user::Model as UserModel, test_utils::setup_test_db};
use helpers::{create_user_with_token, get_json_body, get_request, json_request, make_app};
use serde_json::json;
use serial_test::serial;
use tower::ServiceExt;

#[tokio::test]
#[serial]
async fn signup_creates_user_and_returns_token() {
    let db = setup_test_db().await;
    let app = make_app(db.clone());

    let payload = json!({
        "name": "Alice Example",
        "email": "alice@example.com",
        "password": "securepassword"
    });
    let response = app
        .oneshot(json_request("POST", "/api/auth/signup", None, &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = get_json_body(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "User registered successfully");
    assert!(json["data"]["token"].as_str().is_some());
    assert!(json["data"]["expires_at"].as_str().is_some());
    assert_eq!(json["data"]["user"]["email"], "alice@example.com");
    assert_eq!(json["data"]["user"]["admin"], false);
    assert!(json["data"]["user"].get("password_hash").is_none());
}

#[tokio::test]
#[serial]
async fn signup_lowercases_email() {
    let db = setup_test_db().await;
    let app = make_app(db.clone());

    let payload = json!({
        "name": "Bob",
        "email": "Bob@Example.COM",
        "password": "securepassword"
    });
    let response = app
        .oneshot(json_request("POST", "/api/auth/signup", None, &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = get_json_body(response).await;
    assert_eq!(json["data"]["user"]["email"], "bob@example.com");
}

#[tokio::test]
#[serial]
async fn signup_rejects_invalid_email() {
    let db = setup_test_db().await;
    let app = make_app(db.clone());

    let payload = json!({
        "name": "Bad Email",
        "email": "not-an-email",
        "password": "securepassword"
    });
    let response = app
        .oneshot(json_request("POST", "/api/auth/signup", None, &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = get_json_body(response).await;
    assert_eq!(json["success"], false);
    assert!(json["message"].as_str().unwrap().contains("email"));
}

#[tokio::test]
#[serial]
async fn signup_rejects_short_password() {
    let db = setup_test_db().await;
    let app = make_app(db.clone());

    let payload = json!({
        "name": "Short Pass",
        "email": "shortpass@example.com",
        "password": "abc"
    });
    let response = app
        .oneshot(json_request("POST", "/api/auth/signup", None, &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = get_json_body(response).await;
    assert!(
        json["message"]
            .as_str()
            .unwrap()
            .contains("Password must be at least 6 characters")
    );
}

#[tokio::test]
#[serial]
async fn signup_duplicate_email_conflicts() {
    let db = setup_test_db().await;
    let app = make_app(db.clone());

    let (_, _) = create_user_with_token(&db, "Existing", "taken@example.com", false).await;

    let payload = json!({
        "name": "Second",
        "email": "taken@example.com",
        "password": "securepassword"
    });
    let response = app
        .oneshot(json_request("POST", "/api/auth/signup", None, &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = get_json_body(response).await;
    assert_eq!(json["message"], "Email already in use");
}

#[tokio::test]
#[serial]
async fn signin_succeeds_with_correct_credentials() {
    let db = setup_test_db().await;
    let app = make_app(db.clone());

    create_user_with_token(&db, "Alice", "alice@example.com", false).await;

    let payload = json!({"email": "alice@example.com", "password": "password123"});
    let response = app
        .oneshot(json_request("POST", "/api/auth/signin", None, &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    assert_eq!(json["message"], "Login successful");
    assert!(json["data"]["token"].as_str().is_some());
    assert_eq!(json["data"]["user"]["email"], "alice@example.com");
}

#[tokio::test]
#[serial]
async fn signin_failures_are_indistinguishable() {
    let db = setup_test_db().await;

    create_user_with_token(&db, "Alice", "alice@example.com", false).await;

    let unknown_email = json!({"email": "nobody@example.com", "password": "password123"});
    let wrong_password = json!({"email": "alice@example.com", "password": "wrongpassword"});

    let mut bodies = Vec::new();
    for payload in [unknown_email, wrong_password] {
        let app = make_app(db.clone());
        let response = app
            .oneshot(json_request("POST", "/api/auth/signin", None, &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        bodies.push(get_json_body(response).await);
    }

    assert_eq!(bodies[0], bodies[1]);
    assert_eq!(bodies[0]["message"], "Invalid credentials");
}

#[tokio::test]
#[serial]
async fn signin_requires_email_and_password() {
    let db = setup_test_db().await;
    let app = make_app(db.clone());

    let payload = json!({"email": "", "password": ""});
    let response = app
        .oneshot(json_request("POST", "/api/auth/signin", None, &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = get_json_body(response).await;
    assert!(
        json["message"]
            .as_str()
            .unwrap()
            .contains("Please provide an email and password")
    );
}

#[tokio::test]
#[serial]
async fn me_returns_authenticated_user() {
    let db = setup_test_db().await;
    let app = make_app(db.clone());

    let (user, token) = create_user_with_token(&db, "Alice", "alice@example.com", false).await;

    let response = app
        .oneshot(get_request("/api/auth/me", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    assert_eq!(json["data"]["id"], user.id);
    assert_eq!(json["data"]["email"], "alice@example.com");
}

#[tokio::test]
#[serial]
async fn me_rejects_missing_and_garbage_tokens() {
    let db = setup_test_db().await;

    let response = make_app(db.clone())
        .oneshot(get_request("/api/auth/me", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = make_app(db.clone())
        .oneshot(get_request("/api/auth/me", Some("not-a-jwt")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[serial]
async fn make_admin_promotes_user_outside_production() {
    let db = setup_test_db().await;
    let app = make_app(db.clone());

    let (user, _) = create_user_with_token(&db, "Future Admin", "admin@example.com", false).await;

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/auth/make-admin/{}", user.id),
            None,
            &json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    assert_eq!(json["data"]["admin"], true);

    let stored = UserModel::find_by_id(&db, user.id).await.unwrap().unwrap();
    assert!(stored.admin);
}

#[tokio::test]
#[serial]
async fn make_admin_unknown_user_is_404() {
    let db = setup_test_db().await;
    let app = make_app(db.clone());

    let response = app
        .oneshot(json_request("PUT", "/api/auth/make-admin/9999", None, &json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
