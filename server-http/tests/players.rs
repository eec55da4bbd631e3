//! Player CRUD, driven through the full router with caching disabled,
//! mirroring the service's observable JSON bodies exactly.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use cache_store::MemoryStore;
use serde_json::json;
use server_http::{build_router, AppState};
use shared::config::Config;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

fn test_config(disable_cache: bool) -> Config {
    Config {
        address: "127.0.0.1:0".to_string(),
        redis_url: String::new(),
        disable_cache,
        players_cache_ttl: Duration::from_secs(5),
        lineup_cache_ttl: Duration::from_secs(10),
    }
}

fn test_app() -> Router {
    build_router(
        AppState::new(Arc::new(MemoryStore::new())),
        &test_config(true),
    )
}

async fn send(
    router: &Router,
    method: &str,
    target: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, String) {
    let builder = Request::builder().method(method).uri(target);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn player_crud() {
    let app = test_app();

    struct Step {
        name: &'static str,
        method: &'static str,
        target: &'static str,
        body: Option<serde_json::Value>,
        expected_status: StatusCode,
        expected_body: &'static str,
    }

    let steps = vec![
        Step {
            name: "`player_id` explicitly set on create",
            method: "POST",
            target: "/players",
            body: Some(json!({
                "player_id": 1,
                "display_name": "Foo",
                "number": 23,
                "position": "POSITION_RIGHT_WING",
            })),
            expected_status: StatusCode::UNPROCESSABLE_ENTITY,
            expected_body: "",
        },
        Step {
            name: "Create first player",
            method: "POST",
            target: "/players",
            body: Some(json!({
                "display_name": "Foo",
                "number": 1,
                "position": "POSITION_GOALKEEPER",
            })),
            expected_status: StatusCode::OK,
            expected_body: r#"{"player_id":1}"#,
        },
        Step {
            name: "Create second player",
            method: "POST",
            target: "/players",
            body: Some(json!({
                "display_name": "Bar",
                "number": 7,
                "position": "POSITION_STRIKER",
            })),
            expected_status: StatusCode::OK,
            expected_body: r#"{"player_id":2}"#,
        },
        Step {
            name: "List both players",
            method: "GET",
            target: "/players",
            body: None,
            expected_status: StatusCode::OK,
            expected_body: r#"[{"player_id":1,"display_name":"Foo","number":1,"position":"POSITION_GOALKEEPER"},{"player_id":2,"display_name":"Bar","number":7,"position":"POSITION_STRIKER"}]"#,
        },
        Step {
            name: "List only strikers",
            method: "GET",
            target: "/players?position=POSITION_STRIKER",
            body: None,
            expected_status: StatusCode::OK,
            expected_body: r#"[{"player_id":2,"display_name":"Bar","number":7,"position":"POSITION_STRIKER"}]"#,
        },
        Step {
            name: "Pagination `limit` param exceeds",
            method: "GET",
            target: "/players?limit=101",
            body: None,
            expected_status: StatusCode::UNPROCESSABLE_ENTITY,
            expected_body: r#"{"message":"`limit` cannot be greater than 100"}"#,
        },
        Step {
            name: "Pagination: page 1",
            method: "GET",
            target: "/players?limit=2&page=1",
            body: None,
            expected_status: StatusCode::OK,
            expected_body: r#"[{"player_id":1,"display_name":"Foo","number":1,"position":"POSITION_GOALKEEPER"},{"player_id":2,"display_name":"Bar","number":7,"position":"POSITION_STRIKER"}]"#,
        },
        Step {
            name: "Pagination: page 2",
            method: "GET",
            target: "/players?limit=2&page=2",
            body: None,
            expected_status: StatusCode::OK,
            expected_body: "[]",
        },
        Step {
            name: "Make first player a striker too",
            method: "PUT",
            target: "/players/1",
            body: Some(json!({ "position": "POSITION_STRIKER" })),
            expected_status: StatusCode::OK,
            expected_body: "",
        },
        Step {
            name: "List shows the updated position",
            method: "GET",
            target: "/players",
            body: None,
            expected_status: StatusCode::OK,
            expected_body: r#"[{"player_id":1,"display_name":"Foo","number":1,"position":"POSITION_STRIKER"},{"player_id":2,"display_name":"Bar","number":7,"position":"POSITION_STRIKER"}]"#,
        },
        Step {
            name: "Delete player 1",
            method: "DELETE",
            target: "/players/1",
            body: None,
            expected_status: StatusCode::OK,
            expected_body: "",
        },
        Step {
            name: "Delete player 2",
            method: "DELETE",
            target: "/players/2",
            body: None,
            expected_status: StatusCode::OK,
            expected_body: "",
        },
        Step {
            name: "Check there are no players",
            method: "GET",
            target: "/players",
            body: None,
            expected_status: StatusCode::OK,
            expected_body: "[]",
        },
    ];

    for step in steps {
        let (status, body) = send(&app, step.method, step.target, step.body).await;
        assert_eq!(status, step.expected_status, "{}", step.name);
        assert_eq!(body, step.expected_body, "{}", step.name);
    }
}

#[tokio::test]
async fn updating_a_missing_player_is_not_found() {
    let app = test_app();
    let (status, body) = send(
        &app,
        "PUT",
        "/players/42",
        Some(json!({ "number": 10 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, r#"{"message":"player not found"}"#);
}

#[tokio::test]
async fn cached_player_list_is_stale_until_expiry() {
    // No route invalidates /players, so a fresh player only shows up once
    // the entry expires. The original wires it the same way.
    let config = Config {
        players_cache_ttl: Duration::from_millis(200),
        ..test_config(false)
    };
    let state = AppState::new(Arc::new(MemoryStore::new()));
    let db = state.db.clone();
    let app = build_router(state, &config);

    db.create_player("Foo".into(), 1, server_http::models::Position::Goalkeeper);

    let (_, first) = send(&app, "GET", "/players", None).await;
    db.create_player("Bar".into(), 7, server_http::models::Position::Striker);

    let (_, cached) = send(&app, "GET", "/players", None).await;
    assert_eq!(cached, first);

    tokio::time::sleep(Duration::from_millis(300)).await;
    let (_, fresh) = send(&app, "GET", "/players", None).await;
    assert_ne!(fresh, first);
    assert!(fresh.contains("\"player_id\":2"));
}
