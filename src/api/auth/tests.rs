use axum::http::{Method, StatusCode};
use serde_json::json;
use time::{Duration, OffsetDateTime};

use crate::repositories;
use crate::api::router::App;
use crate::test_support::{self, send};

async fn register(
    app: &App,
    name: &str,
    email: &str,
    password: &str,
) -> serde_json::Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/auth/register",
        Some(json!({ "name": name, "email": email, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "register failed: {body}");
    body
}

#[tokio::test]
async fn register_fills_defaults_and_login_round_trips() {
    let ctx = test_support::setup_test_context().await;

    let body = register(&ctx.app, "Ada Lovelace", "ada@example.com", "hunter2").await;
    assert_eq!(body["success"], true);
    let user = &body["user"];
    let id = user["id"].as_str().expect("id");
    assert!(id.parse::<i64>().is_ok());
    assert_eq!(user["studentId"], format!("STU{id}"));
    assert_eq!(user["avatar"], "https://ui-avatars.com/api/?name=Ada%20Lovelace");
    assert_eq!(user["mode"], "student");
    assert_eq!(user["isVerified"], false);
    assert_eq!(user["isOnboardingComplete"], false);
    assert_eq!(user["enrolledCourses"], json!([]));
    assert!(user.get("password").is_none());

    let (status, body) = send(
        &ctx.app,
        Method::POST,
        "/api/auth/login",
        Some(json!({ "email": "ada@example.com", "password": "hunter2" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"], id);
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let ctx = test_support::setup_test_context().await;
    register(&ctx.app, "Ada", "ada@example.com", "hunter2").await;

    let (status, body) = send(
        &ctx.app,
        Method::POST,
        "/api/auth/login",
        Some(json!({ "email": "ada@example.com", "password": "Hunter2" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "Invalid credentials" }));
}

#[tokio::test]
async fn duplicate_email_conflicts() {
    let ctx = test_support::setup_test_context().await;
    register(&ctx.app, "Ada", "ada@example.com", "hunter2").await;

    let (status, body) = send(
        &ctx.app,
        Method::POST,
        "/api/auth/register",
        Some(json!({ "name": "Imposter", "email": "ada@example.com", "password": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "User already exists");
}

#[tokio::test]
async fn change_password_requires_current_password() {
    let ctx = test_support::setup_test_context().await;
    register(&ctx.app, "Ada", "ada@example.com", "old").await;

    let (status, body) = send(
        &ctx.app,
        Method::POST,
        "/api/auth/change-password",
        Some(json!({ "email": "ada@example.com", "currentPassword": "wrong", "newPassword": "new" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Current password is incorrect");

    let (status, body) = send(
        &ctx.app,
        Method::POST,
        "/api/auth/change-password",
        Some(json!({ "email": "ada@example.com", "currentPassword": "old", "newPassword": "new" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let (status, _) = send(
        &ctx.app,
        Method::POST,
        "/api/auth/login",
        Some(json!({ "email": "ada@example.com", "password": "new" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn storing_a_code_replaces_previous_codes_of_that_type() {
    let ctx = test_support::setup_test_context().await;
    let pool = ctx.state.db();

    for code in ["111111", "222222"] {
        let (status, _) = send(
            &ctx.app,
            Method::POST,
            "/api/auth/store-code",
            Some(json!({ "email": "ada@example.com", "code": code, "type": "reset" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
    send(
        &ctx.app,
        Method::POST,
        "/api/auth/store-code",
        Some(json!({ "email": "ada@example.com", "code": "333333", "type": "registration" })),
    )
    .await;

    let reset = repositories::verification_codes::list_for(pool, "ada@example.com", "reset")
        .await
        .expect("codes");
    assert_eq!(reset.len(), 1);
    assert_eq!(reset[0].code, "222222");
    assert!(!reset[0].used);
    let ttl = reset[0].expires_at - OffsetDateTime::now_utc();
    assert!(ttl > Duration::minutes(9) && ttl <= Duration::minutes(10));

    let registration =
        repositories::verification_codes::list_for(pool, "ada@example.com", "registration")
            .await
            .expect("codes");
    assert_eq!(registration.len(), 1);

    let (status, body) = send(
        &ctx.app,
        Method::POST,
        "/api/auth/verify-code",
        Some(json!({ "email": "ada@example.com", "code": "111111", "type": "reset" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid or expired code");

    let (status, _) = send(
        &ctx.app,
        Method::POST,
        "/api/auth/verify-code",
        Some(json!({ "email": "ada@example.com", "code": "222222", "type": "reset" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn registration_code_verifies_user_exactly_once() {
    let ctx = test_support::setup_test_context().await;
    register(&ctx.app, "Ada", "ada@example.com", "pw").await;
    let code = json!({ "email": "ada@example.com", "code": "123456", "type": "registration" });
    send(&ctx.app, Method::POST, "/api/auth/store-code", Some(code.clone())).await;

    let (status, body) =
        send(&ctx.app, Method::POST, "/api/auth/verify-code", Some(code.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "verified": true }));

    let (_, body) = send(&ctx.app, Method::GET, "/api/users/ada@example.com", None).await;
    assert_eq!(body["user"]["isVerified"], true);

    let (status, body) = send(&ctx.app, Method::POST, "/api/auth/verify-code", Some(code)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid or expired code");
}

#[tokio::test]
async fn expired_or_mismatched_codes_are_rejected() {
    let ctx = test_support::setup_test_context().await;
    let pool = ctx.state.db();
    repositories::verification_codes::create(
        pool,
        repositories::verification_codes::CreateCode {
            email: "ada@example.com",
            code: "999999",
            kind: "reset",
            expires_at: OffsetDateTime::now_utc() - Duration::seconds(1),
        },
    )
    .await
    .expect("insert code");

    let (status, _) = send(
        &ctx.app,
        Method::POST,
        "/api/auth/verify-code",
        Some(json!({ "email": "ada@example.com", "code": "999999", "type": "reset" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    send(
        &ctx.app,
        Method::POST,
        "/api/auth/store-code",
        Some(json!({ "email": "ada@example.com", "code": "123456", "type": "reset" })),
    )
    .await;
    let (status, _) = send(
        &ctx.app,
        Method::POST,
        "/api/auth/verify-code",
        Some(json!({ "email": "ada@example.com", "code": "123456", "type": "registration" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn concurrent_verification_consumes_code_once() {
    let ctx = test_support::setup_test_context().await;
    let code = json!({ "email": "ada@example.com", "code": "424242", "type": "reset" });
    send(&ctx.app, Method::POST, "/api/auth/store-code", Some(code.clone())).await;

    let (first, second) = tokio::join!(
        send(&ctx.app, Method::POST, "/api/auth/verify-code", Some(code.clone())),
        send(&ctx.app, Method::POST, "/api/auth/verify-code", Some(code.clone())),
    );
    let successes =
        [first.0, second.0].iter().filter(|status| **status == StatusCode::OK).count();
    assert_eq!(successes, 1);
}

#[tokio::test]
async fn reset_password_clears_codes_and_requires_user() {
    let ctx = test_support::setup_test_context().await;
    let pool = ctx.state.db();

    let (status, body) = send(
        &ctx.app,
        Method::POST,
        "/api/auth/reset-password",
        Some(json!({ "email": "nobody@example.com", "newPassword": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");

    register(&ctx.app, "Ada", "ada@example.com", "old").await;
    send(
        &ctx.app,
        Method::POST,
        "/api/auth/store-code",
        Some(json!({ "email": "ada@example.com", "code": "123456", "type": "reset" })),
    )
    .await;

    let (status, _) = send(
        &ctx.app,
        Method::POST,
        "/api/auth/reset-password",
        Some(json!({ "email": "ada@example.com", "newPassword": "fresh" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(repositories::verification_codes::list_for(pool, "ada@example.com", "reset")
        .await
        .expect("codes")
        .is_empty());
    assert!(repositories::users::password_matches(pool, "ada@example.com", "fresh")
        .await
        .expect("password"));
}
