mod helpers;

use axum::http::StatusCode;
use db::{models::user::Model as UserModel, test_utils::setup_test_db};
use helpers::{create_user_with_token, get_json_body, get_request, json_request, make_app};
use serde_json::json;
use serial_test::serial;
use tower::ServiceExt;

#[tokio::test]
#[serial]
async fn get_user_returns_profile_without_password_hash() {
    let db = setup_test_db().await;
    let app = make_app(db.clone());

    let (user, token) = create_user_with_token(&db, "Alice", "alice@example.com", false).await;

    let response = app
        .oneshot(get_request(&format!("/api/users/{}", user.id), Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    assert_eq!(json["data"]["name"], "Alice");
    assert_eq!(json["data"]["grade"], "Beginner");
    assert!(json["data"].get("password_hash").is_none());
    assert!(json["data"].get("avatar_path").is_none());
}

#[tokio::test]
#[serial]
async fn get_user_requires_authentication() {
    let db = setup_test_db().await;
    let app = make_app(db.clone());

    let (user, _) = create_user_with_token(&db, "Alice", "alice@example.com", false).await;

    let response = app
        .oneshot(get_request(&format!("/api/users/{}", user.id), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[serial]
async fn get_points_reports_derived_fields() {
    let db = setup_test_db().await;
    let app = make_app(db.clone());

    let (user, token) = create_user_with_token(&db, "Alice", "alice@example.com", false).await;
    user.clone().award_points(&db, 150).await.unwrap();

    let response = app
        .oneshot(get_request(
            &format!("/api/users/{}/points", user.id),
            Some(&token),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    assert_eq!(json["data"]["points"], 150);
    assert_eq!(json["data"]["academic_level"], 2);
    assert_eq!(json["data"]["level_progress"], 50);
}

#[tokio::test]
#[serial]
async fn add_points_updates_totals() {
    let db = setup_test_db().await;
    let app = make_app(db.clone());

    let (user, token) = create_user_with_token(&db, "Alice", "alice@example.com", false).await;

    let response = app
        .oneshot(json_request(
            "POST",
            &format!("/api/users/{}/add-points", user.id),
            Some(&token),
            &json!({"points": 40}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    assert_eq!(json["message"], "+40 points awarded!");
    assert_eq!(json["data"]["points"], 40);
    assert_eq!(json["data"]["academic_level"], 1);
    assert_eq!(json["data"]["level_progress"], 40);
    assert_eq!(json["data"]["achievements"].as_array().unwrap().len(), 0);
}

#[tokio::test]
#[serial]
async fn add_points_crossing_a_level_unlocks_achievement() {
    let db = setup_test_db().await;

    let (user, token) = create_user_with_token(&db, "Alice", "alice@example.com", false).await;

    let response = make_app(db.clone())
        .oneshot(json_request(
            "POST",
            &format!("/api/users/{}/add-points", user.id),
            Some(&token),
            &json!({"points": 120}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    assert_eq!(json["data"]["points"], 120);
    assert_eq!(json["data"]["academic_level"], 2);
    assert_eq!(json["data"]["level_progress"], 20);
    assert_eq!(json["data"]["achievements"][0], "Reached Level 2");

    // Crossing the same boundary again must not duplicate the label.
    let stored = UserModel::find_by_id(&db, user.id).await.unwrap().unwrap();
    let stored = stored.award_points(&db, 100).await.unwrap().0;
    assert_eq!(
        stored.achievements.0,
        vec!["Reached Level 2".to_owned(), "Reached Level 3".to_owned()]
    );
}

#[tokio::test]
#[serial]
async fn add_points_rejects_missing_zero_and_negative() {
    let db = setup_test_db().await;

    let (user, token) = create_user_with_token(&db, "Alice", "alice@example.com", false).await;

    for payload in [json!({}), json!({"points": 0}), json!({"points": -5})] {
        let response = make_app(db.clone())
            .oneshot(json_request(
                "POST",
                &format!("/api/users/{}/add-points", user.id),
                Some(&token),
                &payload,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_json_body(response).await;
        assert_eq!(json["message"], "Please provide valid points");
    }

    let stored = UserModel::find_by_id(&db, user.id).await.unwrap().unwrap();
    assert_eq!(stored.points, 0);
}

#[tokio::test]
#[serial]
async fn add_points_unknown_user_is_404() {
    let db = setup_test_db().await;
    let app = make_app(db.clone());

    let (_, token) = create_user_with_token(&db, "Alice", "alice@example.com", false).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/users/9999/add-points",
            Some(&token),
            &json!({"points": 10}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial]
async fn add_achievement_is_idempotent() {
    let db = setup_test_db().await;

    let (user, token) = create_user_with_token(&db, "Alice", "alice@example.com", false).await;

    for _ in 0..2 {
        let response = make_app(db.clone())
            .oneshot(json_request(
                "POST",
                &format!("/api/users/{}/add-achievement", user.id),
                Some(&token),
                &json!({"achievement": "Quiz Master"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["message"], "Achievement unlocked!");
        assert_eq!(json["data"].as_array().unwrap().len(), 1);
        assert_eq!(json["data"][0], "Quiz Master");
    }
}

#[tokio::test]
#[serial]
async fn add_achievement_rejects_blank_label() {
    let db = setup_test_db().await;
    let app = make_app(db.clone());

    let (user, token) = create_user_with_token(&db, "Alice", "alice@example.com", false).await;

    let response = app
        .oneshot(json_request(
            "POST",
            &format!("/api/users/{}/add-achievement", user.id),
            Some(&token),
            &json!({"achievement": "   "}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = get_json_body(response).await;
    assert_eq!(json["message"], "Please provide an achievement");
}

#[tokio::test]
#[serial]
async fn update_own_profile_succeeds() {
    let db = setup_test_db().await;
    let app = make_app(db.clone());

    let (user, token) = create_user_with_token(&db, "Alice", "alice@example.com", false).await;

    let payload = json!({
        "name": "Alice Renamed",
        "grade": "Intermediate",
        "class_name": "10B"
    });
    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/users/{}", user.id),
            Some(&token),
            &payload,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    assert_eq!(json["message"], "Profile updated successfully");
    assert_eq!(json["data"]["name"], "Alice Renamed");
    assert_eq!(json["data"]["grade"], "Intermediate");
    assert_eq!(json["data"]["class_name"], "10B");
}

#[tokio::test]
#[serial]
async fn update_other_profile_requires_admin() {
    let db = setup_test_db().await;

    let (target, _) = create_user_with_token(&db, "Target", "target@example.com", false).await;
    let (_, peer_token) = create_user_with_token(&db, "Peer", "peer@example.com", false).await;
    let (_, admin_token) = create_user_with_token(&db, "Admin", "admin@example.com", true).await;

    let payload = json!({"name": "Renamed By Someone"});

    let response = make_app(db.clone())
        .oneshot(json_request(
            "PUT",
            &format!("/api/users/{}", target.id),
            Some(&peer_token),
            &payload,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = get_json_body(response).await;
    assert_eq!(json["message"], "Not authorized to update this profile");

    let response = make_app(db.clone())
        .oneshot(json_request(
            "PUT",
            &format!("/api/users/{}", target.id),
            Some(&admin_token),
            &payload,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_json_body(response).await;
    assert_eq!(json["data"]["name"], "Renamed By Someone");
}

fn multipart_avatar_request(uri: &str, token: &str, bytes: &[u8]) -> axum::http::Request<axum::body::Body> {
    let boundary = "avatar-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        b"Content-Disposition: form-data; name=\"avatar\"; filename=\"me.png\"\r\n",
    );
    body.extend_from_slice(b"Content-Type: image/png\r\n\r\n");
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    axum::http::Request::builder()
        .method("POST")
        .uri(uri)
        .header("Authorization", format!("Bearer {token}"))
        .header(
            "Content-Type",
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(axum::body::Body::from(body))
        .unwrap()
}

#[tokio::test]
#[serial]
async fn upload_avatar_stores_file_and_serves_it_publicly() {
    let db = setup_test_db().await;

    let (user, token) = create_user_with_token(&db, "Alice", "alice@example.com", false).await;

    let png_bytes = b"\x89PNG\r\n\x1a\nfakeimagedata";
    let response = make_app(db.clone())
        .oneshot(multipart_avatar_request(
            &format!("/api/users/{}/upload-avatar", user.id),
            &token,
            png_bytes,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    assert_eq!(json["message"], "Avatar uploaded successfully");
    assert_eq!(
        json["data"]["avatar"],
        format!("/api/users/{}/avatar", user.id)
    );

    // Retrieval is public: no bearer token.
    let response = make_app(db.clone())
        .oneshot(get_request(&format!("/api/users/{}/avatar", user.id), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "image/png"
    );
    let served = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(served.as_ref(), png_bytes);
}

#[tokio::test]
#[serial]
async fn upload_avatar_is_self_only() {
    let db = setup_test_db().await;

    let (target, _) = create_user_with_token(&db, "Target", "target@example.com", false).await;
    let (_, peer_token) = create_user_with_token(&db, "Peer", "peer@example.com", false).await;

    let response = make_app(db.clone())
        .oneshot(multipart_avatar_request(
            &format!("/api/users/{}/upload-avatar", target.id),
            &peer_token,
            b"fake",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
#[serial]
async fn avatar_retrieval_without_upload_is_404() {
    let db = setup_test_db().await;

    let (user, _) = create_user_with_token(&db, "Alice", "alice@example.com", false).await;

    let response = make_app(db.clone())
        .oneshot(get_request(&format!("/api/users/{}/avatar", user.id), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial]
async fn update_unknown_profile_is_404_even_for_non_owner() {
    let db = setup_test_db().await;
    let app = make_app(db.clone());

    let (_, token) = create_user_with_token(&db, "Peer", "peer@example.com", false).await;

    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/users/9999",
            Some(&token),
            &json!({"name": "Ghost"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
