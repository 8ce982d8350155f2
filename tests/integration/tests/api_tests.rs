//! API Integration Tests
//!
//! Most tests run against the in-memory store and need no services. The
//! PostgreSQL test requires `DATABASE_URL` and is skipped without it.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, fixtures::*, test_database_url, TestServer,
};
use reqwest::StatusCode;

async fn open(server: &TestServer, request: &OpenRosterRequest) -> OpenRosterResponse {
    let response = server.post("/api/v1/rosters", request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn press(
    server: &TestServer,
    request: &InteractionRequest,
    expected: StatusCode,
) -> reqwest::Response {
    let response = server.post("/api/v1/interactions", request).await.unwrap();
    assert_eq!(response.status(), expected, "{request:?}");
    response
}

async fn status_changed(
    server: &TestServer,
    request: &InteractionRequest,
) -> (String, Option<String>, RosterResponse, Option<serde_json::Value>) {
    let response = press(server, request, StatusCode::OK).await;
    match response.json::<InteractionResponse>().await.unwrap() {
        InteractionResponse::StatusChanged {
            status,
            previous_status,
            roster,
            follow_up,
        } => (status, previous_status, roster, follow_up),
        other => panic!("expected a status change, got {other:?}"),
    }
}

async fn refused(server: &TestServer, request: &InteractionRequest, expected: StatusCode) -> ErrorDetail {
    let response = press(server, request, expected).await;
    response.json::<ErrorBody>().await.unwrap().error
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Roster Tests
// ============================================================================

#[tokio::test]
async fn test_open_roster() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = OpenRosterRequest::unique(3);

    let opened = open(&server, &request).await;
    assert_eq!(opened.roster.message_id, request.message_id);
    assert_eq!(opened.roster.status, "opened");
    assert_eq!(opened.roster.max_capacity, 3);
    assert_eq!(opened.roster.joined_users, vec![request.author_id.clone()]);
    assert_eq!(opened.roster.remaining_slots, 3);
    assert_eq!(opened.buttons.join, "8:customID11:roster/join");
    assert_eq!(opened.buttons.decline, "8:customID14:roster/decline");

    let response = server.get(&request.roster_path()).await.unwrap();
    let roster: RosterResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(roster.id, opened.roster.id);
    assert_eq!(roster.channel_id, request.channel_id);
    assert_eq!(roster.author_id, request.author_id);
}

#[tokio::test]
async fn test_open_roster_validation_and_conflict() {
    let server = TestServer::start().await.expect("Failed to start server");

    let invalid = OpenRosterRequest::unique(0);
    let response = server.post("/api/v1/rosters", &invalid).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "VALIDATION_ERROR");

    let response = server.get(&invalid.roster_path()).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let request = OpenRosterRequest::unique(2);
    open(&server, &request).await;
    let response = server.post("/api/v1/rosters", &request).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(body.error.code, "ROSTER_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_open_roster_rejects_bad_body() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/v1/rosters", &serde_json::json!({ "capacity": 2 }))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_REQUEST_BODY");
}

// ============================================================================
// Interaction Tests
// ============================================================================

#[tokio::test]
async fn test_join_then_cancel_from_panel() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = OpenRosterRequest::unique(3);
    let opened = open(&server, &request).await;
    let member = unique_snowflake();

    let (status, previous, roster, follow_up) =
        status_changed(&server, &request.press(&opened.buttons.join, &member)).await;
    assert_eq!(status, "joined");
    assert_eq!(previous, None);
    assert_eq!(roster.joined_users, vec![request.author_id.clone(), member.clone()]);
    assert_eq!(
        follow_up,
        Some(serde_json::json!({ "kind": "joined", "remaining": 2 }))
    );

    // pressing join again offers a cancel button instead
    let error = refused(
        &server,
        &request.press(&opened.buttons.join, &member),
        StatusCode::CONFLICT,
    )
    .await;
    assert_eq!(error.code, "ALREADY_JOINED");
    let cancel = error.custom_id().expect("cancel panel token").to_string();

    let panel_message = unique_snowflake();
    let (status, previous, roster, follow_up) =
        status_changed(&server, &request.press_on(&cancel, &panel_message, &member)).await;
    assert_eq!(status, "canceled");
    assert_eq!(previous.as_deref(), Some("joined"));
    assert_eq!(roster.joined_users, vec![request.author_id.clone()]);
    assert_eq!(
        follow_up,
        Some(serde_json::json!({ "kind": "withdrawn", "remaining": 3 }))
    );
}

#[tokio::test]
async fn test_decline_is_silent_and_guarded() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = OpenRosterRequest::unique(3);
    let opened = open(&server, &request).await;
    let member = unique_snowflake();

    let (status, _, roster, follow_up) =
        status_changed(&server, &request.press(&opened.buttons.decline, &member)).await;
    assert_eq!(status, "declined");
    assert_eq!(roster.declined_users, vec![member.clone()]);
    assert_eq!(follow_up, None);

    let error = refused(
        &server,
        &request.press(&opened.buttons.decline, &member),
        StatusCode::CONFLICT,
    )
    .await;
    assert_eq!(error.code, "ALREADY_DECLINED");
    assert!(error.custom_id().is_some_and(|t| t.contains("roster/cancel")));
}

#[tokio::test]
async fn test_filling_and_overflowing() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = OpenRosterRequest::unique(1);
    let opened = open(&server, &request).await;
    let (first, second) = (unique_snowflake(), unique_snowflake());

    let (_, _, roster, follow_up) =
        status_changed(&server, &request.press(&opened.buttons.join, &first)).await;
    assert!(roster.is_full);
    assert_eq!(
        follow_up,
        Some(serde_json::json!({
            "kind": "filled",
            "members": [request.author_id.clone(), first.clone()],
        }))
    );

    let (_, _, roster, follow_up) =
        status_changed(&server, &request.press(&opened.buttons.join, &second)).await;
    assert_eq!(roster.extra_count, 1);
    assert_eq!(roster.remaining_slots, 0);
    assert_eq!(follow_up, Some(serde_json::json!({ "kind": "overflow" })));
}

#[tokio::test]
async fn test_author_closes_from_panel() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = OpenRosterRequest::unique(2);
    let opened = open(&server, &request).await;

    let error = refused(
        &server,
        &request.press(&opened.buttons.join, &request.author_id),
        StatusCode::FORBIDDEN,
    )
    .await;
    assert_eq!(error.code, "AUTHOR_CANNOT_ACT");
    let close = error.custom_id().expect("close panel token").to_string();

    // only the author may use it
    let panel_message = unique_snowflake();
    let error = refused(
        &server,
        &request.press_on(&close, &panel_message, &unique_snowflake()),
        StatusCode::FORBIDDEN,
    )
    .await;
    assert_eq!(error.code, "NOT_ROSTER_AUTHOR");
    assert!(error.details.is_none());

    let response = press(
        &server,
        &request.press_on(&close, &panel_message, &request.author_id),
        StatusCode::OK,
    )
    .await;
    match response.json::<InteractionResponse>().await.unwrap() {
        InteractionResponse::Closed {
            channel_id,
            message_id,
        } => {
            assert_eq!(channel_id, request.channel_id);
            assert_eq!(message_id, request.message_id);
        }
        other => panic!("expected the roster to close, got {other:?}"),
    }

    let response = server.get(&request.roster_path()).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let error = refused(
        &server,
        &request.press(&opened.buttons.join, &unique_snowflake()),
        StatusCode::NOT_FOUND,
    )
    .await;
    assert_eq!(error.code, "UNKNOWN_ROSTER");
}

#[tokio::test]
async fn test_malformed_tokens() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = OpenRosterRequest::unique(2);
    open(&server, &request).await;
    let actor = unique_snowflake();

    for token in ["garbage", "8:customID12:roster/leave", "8:customID13:roster/cancel"] {
        let error = refused(&server, &request.press(token, &actor), StatusCode::BAD_REQUEST).await;
        assert_eq!(error.code, "MALFORMED_TOKEN", "{token}");
    }
}

// ============================================================================
// PostgreSQL
// ============================================================================

#[tokio::test]
async fn test_roster_lifecycle_on_postgres() {
    let Some(database_url) = test_database_url() else {
        return;
    };

    let server = TestServer::start_postgres(&database_url)
        .await
        .expect("Failed to start server");
    let request = OpenRosterRequest::unique(2);
    let opened = open(&server, &request).await;
    let member = unique_snowflake();

    let (_, _, roster, _) =
        status_changed(&server, &request.press(&opened.buttons.join, &member)).await;
    assert_eq!(roster.joined_users, vec![request.author_id.clone(), member.clone()]);

    let error = refused(
        &server,
        &request.press(&opened.buttons.join, &request.author_id),
        StatusCode::FORBIDDEN,
    )
    .await;
    let close = error.custom_id().expect("close panel token").to_string();

    press(
        &server,
        &request.press_on(&close, &unique_snowflake(), &request.author_id),
        StatusCode::OK,
    )
    .await;

    let response = server.get(&request.roster_path()).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
