//! API Integration Tests
//!
//! Every test spawns the real server on an ephemeral port over the
//! in-memory store, except the PostgreSQL smoke test, which requires
//! DATABASE_URL, JWT_SECRET and POLKA_KEY and is skipped without them.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use chrono::{Duration, Utc};
use integration_tests::{
    assert_json, assert_status, check_postgres_env, fixtures::*, TestServer, TEST_POLKA_KEY,
};
use reqwest::StatusCode;
use uuid::Uuid;

async fn register(server: &TestServer, credentials: &Credentials) -> UserResponse {
    let response = server.post("/api/users", credentials).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn login(server: &TestServer, credentials: &Credentials) -> LoginResponse {
    let response = server
        .post("/api/login", &LoginRequest::from(credentials))
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

async fn signed_up(server: &TestServer) -> (Credentials, LoginResponse) {
    let credentials = Credentials::unique();
    register(server, &credentials).await;
    let session = login(server, &credentials).await;
    (credentials, session)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_healthz() {
    let server = TestServer::start("dev").await.expect("Failed to start server");
    let response = server.get("/api/healthz").await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "OK");
}

// ============================================================================
// User and Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_then_login() {
    let server = TestServer::start("dev").await.unwrap();
    let credentials = Credentials::unique();

    let user = register(&server, &credentials).await;
    assert_eq!(user.email, credentials.email);
    assert!(!user.is_chirpy_red);

    let session = login(&server, &credentials).await;
    assert_eq!(session.id, user.id);
    assert!(!session.token.is_empty());
    assert_eq!(session.refresh_token.len(), 43);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let server = TestServer::start("dev").await.unwrap();
    let credentials = Credentials::unique();
    register(&server, &credentials).await;

    let shouting = Credentials {
        email: credentials.email.to_uppercase(),
        password: "other".to_string(),
    };
    let response = server.post("/api/users", &shouting).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_wrong_password_is_unauthorized() {
    let server = TestServer::start("dev").await.unwrap();
    let (credentials, _) = signed_up(&server).await;

    let request = LoginRequest {
        email: credentials.email,
        password: "wrong".to_string(),
        expires_in_seconds: None,
    };
    let response = server.post("/api/login", &request).await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error.status, 401);
}

#[tokio::test]
async fn test_login_lifetime_is_clamped() {
    let server = TestServer::start("dev").await.unwrap();
    let (credentials, _) = signed_up(&server).await;
    let jwt = server.state.jwt_service();

    for (requested, expected) in [(Some(60), 60), (Some(7200), 3600), (Some(0), 3600), (None, 3600)] {
        let request = LoginRequest {
            expires_in_seconds: requested,
            ..LoginRequest::from(&credentials)
        };
        let response = server.post("/api/login", &request).await.unwrap();
        let session: LoginResponse = assert_json(response, StatusCode::OK).await.unwrap();

        let claims = jwt.decode_claims(&session.token).unwrap();
        assert_eq!(claims.exp - claims.iat, expected, "requested {requested:?}");
    }
}

#[tokio::test]
async fn test_update_credentials() {
    let server = TestServer::start("dev").await.unwrap();
    let (_, session) = signed_up(&server).await;
    let replacement = Credentials::unique();

    let response = server
        .put_auth("/api/users", &session.token, &replacement)
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(user.id, session.id);
    assert_eq!(user.email, replacement.email);

    login(&server, &replacement).await;
}

// ============================================================================
// Chirp Tests
// ============================================================================

#[tokio::test]
async fn test_chirp_ownership_flow() {
    let server = TestServer::start("dev").await.unwrap();
    let (_, alice) = signed_up(&server).await;
    let (_, bob) = signed_up(&server).await;

    let response = server
        .post_auth("/api/chirps", &alice.token, &CreateChirpRequest::new("hello"))
        .await
        .unwrap();
    let chirp: ChirpResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(chirp.user_id, alice.id);
    let path = format!("/api/chirps/{}", chirp.id);

    let response = server.delete_auth(&path, &bob.token).await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body.error.code, "FORBIDDEN");

    let response = server.delete_auth(&path, &alice.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_chirp_profanity_and_length() {
    let server = TestServer::start("dev").await.unwrap();
    let (_, session) = signed_up(&server).await;

    let response = server
        .post_auth(
            "/api/chirps",
            &session.token,
            &CreateChirpRequest::new("Sharbert! is not fornax, Kerfuffle"),
        )
        .await
        .unwrap();
    let chirp: ChirpResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(chirp.body, "Sharbert! is not fornax, ****");

    let response = server
        .post_auth("/api/chirps", &session.token, &CreateChirpRequest::new("a".repeat(141)))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_list_chirps_by_author() {
    let server = TestServer::start("dev").await.unwrap();
    let (_, alice) = signed_up(&server).await;
    let (_, bob) = signed_up(&server).await;

    for (session, body) in [(&alice, "one"), (&bob, "two"), (&alice, "three")] {
        let response = server
            .post_auth("/api/chirps", &session.token, &CreateChirpRequest::new(body))
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server.get("/api/chirps").await.unwrap();
    let all: Vec<ChirpResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(all.len(), 3);

    let response = server
        .get(&format!("/api/chirps?author_id={}", alice.id))
        .await
        .unwrap();
    let mine: Vec<ChirpResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        mine.iter().map(|c| c.body.as_str()).collect::<Vec<_>>(),
        ["one", "three"]
    );

    let response = server.get("/api/chirps?author_id=bogus").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_expired_access_token() {
    let server = TestServer::start("dev").await.unwrap();
    let (_, session) = signed_up(&server).await;
    let user_id: Uuid = session.id.parse().unwrap();

    let token = server
        .state
        .jwt_service()
        .issue_at(user_id, Duration::seconds(1), Utc::now() - Duration::seconds(2))
        .unwrap();

    let response = server
        .post_auth("/api/chirps", &token, &CreateChirpRequest::new("late"))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Refresh Token Tests
// ============================================================================

#[tokio::test]
async fn test_refresh_then_revoke() {
    let server = TestServer::start("dev").await.unwrap();
    let (_, session) = signed_up(&server).await;

    let response = server
        .post_bearer("/api/refresh", &session.refresh_token)
        .await
        .unwrap();
    let refreshed: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_auth("/api/chirps", &refreshed.token, &CreateChirpRequest::new("fresh"))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_bearer("/api/revoke", &session.refresh_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .post_bearer("/api/refresh", &session.refresh_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_access_token_is_not_a_refresh_token() {
    let server = TestServer::start("dev").await.unwrap();
    let (_, session) = signed_up(&server).await;

    let response = server.post_bearer("/api/refresh", &session.token).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_second_login_revokes_first_refresh_token() {
    let server = TestServer::start("dev").await.unwrap();
    let (credentials, first) = signed_up(&server).await;
    let second = login(&server, &credentials).await;

    let response = server
        .post_bearer("/api/refresh", &first.refresh_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .post_bearer("/api/refresh", &second.refresh_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Webhook Tests
// ============================================================================

#[tokio::test]
async fn test_webhook_upgrade_is_idempotent() {
    let server = TestServer::start("dev").await.unwrap();
    let (credentials, session) = signed_up(&server).await;
    let upgrade = WebhookRequest::new("user.upgraded", &session.id);

    for _ in 0..2 {
        let response = server.post_webhook(TEST_POLKA_KEY, &upgrade).await.unwrap();
        assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    }

    let again = login(&server, &credentials).await;
    assert!(again.is_chirpy_red);
}

#[tokio::test]
async fn test_webhook_other_events_are_no_ops() {
    let server = TestServer::start("dev").await.unwrap();
    let (credentials, session) = signed_up(&server).await;

    let response = server
        .post_webhook(
            TEST_POLKA_KEY,
            &WebhookRequest::new("user.payment_failed", &session.id),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let again = login(&server, &credentials).await;
    assert!(!again.is_chirpy_red);
}

#[tokio::test]
async fn test_webhook_rejects_wrong_key() {
    let server = TestServer::start("dev").await.unwrap();
    let (_, session) = signed_up(&server).await;

    let response = server
        .post_webhook("not-the-key", &WebhookRequest::new("user.upgraded", &session.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_webhook_unknown_user() {
    let server = TestServer::start("dev").await.unwrap();
    let missing = Uuid::new_v4().to_string();

    let response = server
        .post_webhook(TEST_POLKA_KEY, &WebhookRequest::new("user.upgraded", &missing))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Admin Tests
// ============================================================================

#[tokio::test]
async fn test_metrics_count_app_hits() {
    let server = TestServer::start("production").await.unwrap();

    for _ in 0..2 {
        let response = server.get("/app/Cargo.toml").await.unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let page = server.get("/admin/metrics").await.unwrap().text().await.unwrap();
    assert!(page.contains("Chirpy has been visited 2 times!"), "{page}");
}

#[tokio::test]
async fn test_reset_forbidden_outside_dev() {
    let server = TestServer::start("production").await.unwrap();
    let (credentials, _) = signed_up(&server).await;

    let response = server
        .post("/admin/reset", &serde_json::json!({}))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    login(&server, &credentials).await;
}

#[tokio::test]
async fn test_reset_in_dev_clears_users() {
    let server = TestServer::start("dev").await.unwrap();
    let (credentials, _) = signed_up(&server).await;
    server.get("/app/Cargo.toml").await.unwrap();

    let response = server
        .post("/admin/reset", &serde_json::json!({}))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    assert_eq!(server.state.service_context().hits(), 0);

    let response = server
        .post("/api/login", &LoginRequest::from(&credentials))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// PostgreSQL
// ============================================================================

#[tokio::test]
async fn test_postgres_round_trip() {
    if !check_postgres_env() {
        return;
    }

    let server = TestServer::start_postgres().await.expect("Failed to start server");
    let (_, session) = signed_up(&server).await;

    let response = server
        .post_auth("/api/chirps", &session.token, &CreateChirpRequest::new("stored"))
        .await
        .unwrap();
    let chirp: ChirpResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.get(&format!("/api/chirps/{}", chirp.id)).await.unwrap();
    let fetched: ChirpResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.body, "stored");
}
