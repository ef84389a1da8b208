mod helpers;

use axum::http::StatusCode;
use db::{
    models::assignment::{Model as AssignmentModel, Priority},
    models::user::Model as UserModel,
    test_utils::setup_test_db,
};
use helpers::{
    create_user_with_token, delete_request, get_json_body, get_request, json_request, make_app,
};
use sea_orm::DatabaseConnection;
use serde_json::json;
use serial_test::serial;
use tower::ServiceExt;

async fn seed_assignment(
    db: &DatabaseConnection,
    user: &UserModel,
    title: &str,
    due: &str,
    points: i64,
) -> AssignmentModel {
    AssignmentModel::create(
        db,
        user.id,
        title,
        "Maths",
        due.parse().unwrap(),
        Priority::Medium,
        points,
        "",
    )
    .await
    .expect("Failed to create assignment")
}

#[tokio::test]
#[serial]
async fn create_assignment_defaults_status_and_owner() {
    let db = setup_test_db().await;
    let app = make_app(db.clone());

    let (user, token) = create_user_with_token(&db, "Alice", "alice@example.com", false).await;

    let payload = json!({
        "title": "Essay draft",
        "subject": "History",
        "due_date": "2026-09-10T00:00:00Z",
        "priority": "High",
        "points": 20
    });
    let response = app
        .oneshot(json_request("POST", "/api/assignments", Some(&token), &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = get_json_body(response).await;
    assert_eq!(json["message"], "Assignment created successfully");
    assert_eq!(json["data"]["user_id"], user.id);
    assert_eq!(json["data"]["status"], "Not Started");
    assert_eq!(json["data"]["priority"], "High");
    assert_eq!(json["data"]["points"], 20);
    assert!(json["data"]["completed_at"].is_null());
}

#[tokio::test]
#[serial]
async fn create_assignment_requires_title_and_subject() {
    let db = setup_test_db().await;
    let app = make_app(db.clone());

    let (_, token) = create_user_with_token(&db, "Alice", "alice@example.com", false).await;

    let payload = json!({
        "title": "",
        "subject": "",
        "due_date": "2026-09-10T00:00:00Z"
    });
    let response = app
        .oneshot(json_request("POST", "/api/assignments", Some(&token), &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = get_json_body(response).await;
    assert!(
        json["message"]
            .as_str()
            .unwrap()
            .contains("Please provide title, subject, and due date")
    );
}

#[tokio::test]
#[serial]
async fn list_assignments_is_scoped_and_sorted_by_due_date() {
    let db = setup_test_db().await;
    let app = make_app(db.clone());

    let (alice, token) = create_user_with_token(&db, "Alice", "alice@example.com", false).await;
    let (bob, _) = create_user_with_token(&db, "Bob", "bob@example.com", false).await;

    seed_assignment(&db, &alice, "Later", "2026-10-01T00:00:00Z", 0).await;
    seed_assignment(&db, &alice, "Sooner", "2026-09-01T00:00:00Z", 0).await;
    seed_assignment(&db, &bob, "Not Alice's", "2026-08-01T00:00:00Z", 0).await;

    let response = app
        .oneshot(get_request("/api/assignments", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    assert_eq!(json["data"]["count"], 2);
    assert_eq!(json["data"]["assignments"][0]["title"], "Sooner");
    assert_eq!(json["data"]["assignments"][1]["title"], "Later");
}

#[tokio::test]
#[serial]
async fn get_assignment_is_404_then_403() {
    let db = setup_test_db().await;

    let (alice, _) = create_user_with_token(&db, "Alice", "alice@example.com", false).await;
    let (_, bob_token) = create_user_with_token(&db, "Bob", "bob@example.com", false).await;

    let assignment = seed_assignment(&db, &alice, "Private", "2026-09-01T00:00:00Z", 0).await;

    let response = make_app(db.clone())
        .oneshot(get_request("/api/assignments/9999", Some(&bob_token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = make_app(db.clone())
        .oneshot(get_request(
            &format!("/api/assignments/{}", assignment.id),
            Some(&bob_token),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let json = get_json_body(response).await;
    assert_eq!(json["message"], "Not authorized to view this assignment");
}

#[tokio::test]
#[serial]
async fn completing_an_assignment_awards_its_points_once() {
    let db = setup_test_db().await;

    let (alice, token) = create_user_with_token(&db, "Alice", "alice@example.com", false).await;
    let assignment = seed_assignment(&db, &alice, "Worth 20", "2026-09-01T00:00:00Z", 20).await;

    let response = make_app(db.clone())
        .oneshot(json_request(
            "PUT",
            &format!("/api/assignments/{}", assignment.id),
            Some(&token),
            &json!({"status": "Completed"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    assert_eq!(json["data"]["points_awarded"], 20);
    assert_eq!(json["data"]["assignment"]["status"], "Completed");
    assert!(!json["data"]["assignment"]["completed_at"].is_null());

    let owner = UserModel::find_by_id(&db, alice.id).await.unwrap().unwrap();
    assert_eq!(owner.points, 20);

    // Round trip out of Completed and back in: no further award.
    for (status, expected_award) in [("In Progress", 0), ("Completed", 0)] {
        let response = make_app(db.clone())
            .oneshot(json_request(
                "PUT",
                &format!("/api/assignments/{}", assignment.id),
                Some(&token),
                &json!({"status": status}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["points_awarded"], expected_award);
    }

    let owner = UserModel::find_by_id(&db, alice.id).await.unwrap().unwrap();
    assert_eq!(owner.points, 20);
}

#[tokio::test]
#[serial]
async fn completed_at_is_stamped_only_on_first_completion() {
    let db = setup_test_db().await;

    let (alice, token) = create_user_with_token(&db, "Alice", "alice@example.com", false).await;
    let assignment = seed_assignment(&db, &alice, "Stamp once", "2026-09-01T00:00:00Z", 0).await;

    for status in ["Completed", "Review", "Completed"] {
        let response = make_app(db.clone())
            .oneshot(json_request(
                "PUT",
                &format!("/api/assignments/{}", assignment.id),
                Some(&token),
                &json!({"status": status}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let first = AssignmentModel::find_by_id(&db, assignment.id)
        .await
        .unwrap()
        .unwrap();
    assert!(first.completed_at.is_some());
}

#[tokio::test]
#[serial]
async fn zero_point_completion_awards_nothing() {
    let db = setup_test_db().await;

    let (alice, token) = create_user_with_token(&db, "Alice", "alice@example.com", false).await;
    let assignment = seed_assignment(&db, &alice, "Worthless", "2026-09-01T00:00:00Z", 0).await;

    let response = make_app(db.clone())
        .oneshot(json_request(
            "PUT",
            &format!("/api/assignments/{}", assignment.id),
            Some(&token),
            &json!({"status": "Completed"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    assert_eq!(json["data"]["points_awarded"], 0);

    let owner = UserModel::find_by_id(&db, alice.id).await.unwrap().unwrap();
    assert_eq!(owner.points, 0);
}

#[tokio::test]
#[serial]
async fn update_foreign_assignment_is_forbidden() {
    let db = setup_test_db().await;
    let app = make_app(db.clone());

    let (alice, _) = create_user_with_token(&db, "Alice", "alice@example.com", false).await;
    let (_, bob_token) = create_user_with_token(&db, "Bob", "bob@example.com", false).await;

    let assignment = seed_assignment(&db, &alice, "Private", "2026-09-01T00:00:00Z", 0).await;

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/assignments/{}", assignment.id),
            Some(&bob_token),
            &json!({"title": "Hijacked"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let json = get_json_body(response).await;
    assert_eq!(json["message"], "Not authorized to update this assignment");
}

#[tokio::test]
#[serial]
async fn delete_assignment_enforces_ownership() {
    let db = setup_test_db().await;

    let (alice, alice_token) = create_user_with_token(&db, "Alice", "alice@example.com", false).await;
    let (_, bob_token) = create_user_with_token(&db, "Bob", "bob@example.com", false).await;

    let assignment = seed_assignment(&db, &alice, "Doomed", "2026-09-01T00:00:00Z", 0).await;

    let response = make_app(db.clone())
        .oneshot(delete_request(
            &format!("/api/assignments/{}", assignment.id),
            Some(&bob_token),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = make_app(db.clone())
        .oneshot(delete_request(
            &format!("/api/assignments/{}", assignment.id),
            Some(&alice_token),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    assert!(
        AssignmentModel::find_by_id(&db, assignment.id)
            .await
            .unwrap()
            .is_none()
    );
}
