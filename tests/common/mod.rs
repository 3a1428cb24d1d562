#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use linkboards::api::{self, ServerOption};
use linkboards::component::{Component, ComponentConfig};
use linkboards::endpoint::middleware::RequireUser;
use serde_json::{Value, json};
use std::sync::Arc;

pub const USER_HEADER: &str = "x-user-id";

/// In-memory component wired the way the server binary wires it, minus
/// metrics and rate limiting.
pub fn in_memory_component() -> Component {
    Component::new(&ComponentConfig {
        use_in_memory_data_store: true,
        auth_middleware: Some(Arc::new(RequireUser)),
        ..Default::default()
    })
    .unwrap()
}

pub fn make_server_with(component: &Component, options: &[ServerOption]) -> TestServer {
    let app = component
        .register_http_handlers(Router::new(), options)
        .merge(api::health_routes(component.data_store().clone()));
    TestServer::new(app).unwrap()
}

pub fn make_server() -> TestServer {
    make_server_with(&in_memory_component(), &[])
}

pub async fn create_board(server: &TestServer, owner: &str, name: &str) -> Value {
    let response = server
        .post("/boards")
        .add_header(USER_HEADER, owner)
        .json(&json!({ "name": name }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}

/// Invites `user` with `role` and accepts on their behalf.
pub async fn add_member(server: &TestServer, owner: &str, board_id: &str, user: &str, role: &str) {
    let invite = server
        .post(&format!("/boards/{board_id}/invites"))
        .add_header(USER_HEADER, owner)
        .json(&json!({ "user_id": user, "role": role }))
        .await
        .json::<Value>();
    let invite_id = invite["id"].as_str().unwrap();

    server
        .post(&format!("/boards/{board_id}/invites/{invite_id}"))
        .add_header(USER_HEADER, user)
        .json(&json!({ "response": "accept" }))
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);
}
