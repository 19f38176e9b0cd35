//! Endpoint tests for the agents routes: validation short-circuiting, stub
//! write confirmations, and pool discipline around each request.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::{test, web};
use serde_json::{Value, json};

use sales_backend::inbound::http::health::HealthState;
use sales_backend::server::build_app;

mod support;

use support::{StubStore, agent, http_state};

async fn call(
    store: &Arc<StubStore>,
    req: test::TestRequest,
) -> ServiceResponse<impl MessageBody> {
    let app = test::init_service(build_app(
        web::Data::new(HealthState::new()),
        http_state(store),
    ))
    .await;
    test::call_service(&app, req.to_request()).await
}

#[actix_web::test]
async fn list_agents_returns_empty_array_for_empty_table() {
    let store = Arc::new(StubStore::empty());
    let resp = call(&store, test::TestRequest::get().uri("/agents")).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn list_agents_serializes_column_style_field_names() {
    let store = Arc::new(StubStore::with_agents(vec![agent("A001", "Alex")]));
    let resp = call(&store, test::TestRequest::get().uri("/agents")).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body[0]["AGENT_CODE"], "A001");
    assert_eq!(body[0]["AGENT_NAME"], "Alex");
}

#[actix_web::test]
async fn create_agent_with_missing_field_never_reaches_the_store() {
    let store = Arc::new(StubStore::empty());
    let resp = call(
        &store,
        test::TestRequest::post()
            .uri("/agents")
            .set_json(json!({ "AGENT_CODE": "A013" })),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["errors"][0]["field"], "AGENT_NAME");
    assert_eq!(
        body["details"]["errors"][0]["message"],
        "AGENT_NAME is required"
    );
    assert_eq!(store.checkouts(), 0);
    assert_eq!(store.writes(), 0);
}

#[actix_web::test]
async fn create_agent_reports_every_violation_in_rule_order() {
    let store = Arc::new(StubStore::empty());
    let resp = call(
        &store,
        test::TestRequest::post()
            .uri("/agents")
            .set_json(json!({ "AGENT_CODE": 13, "AGENT_NAME": null })),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    let errors = body["details"]["errors"]
        .as_array()
        .expect("errors should be an array");
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0]["field"], "AGENT_CODE");
    assert_eq!(errors[0]["message"], "AGENT_CODE must be a string");
    assert_eq!(errors[1]["field"], "AGENT_NAME");
    assert_eq!(errors[1]["message"], "AGENT_NAME is required");
    assert_eq!(store.checkouts(), 0);
}

#[actix_web::test]
async fn create_agent_with_valid_body_reaches_the_stub_once() {
    let store = Arc::new(StubStore::empty());
    let resp = call(
        &store,
        test::TestRequest::post()
            .uri("/agents")
            .set_json(json!({ "AGENT_CODE": "A013", "AGENT_NAME": "Benjamin" })),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "agent record accepted");
    assert_eq!(store.writes(), 1);
    assert_eq!(store.checkouts(), 1);
    assert_eq!(store.releases(), 1);
}

#[actix_web::test]
async fn update_agent_requires_a_name() {
    let store = Arc::new(StubStore::empty());
    let resp = call(
        &store,
        test::TestRequest::patch()
            .uri("/agents/A013")
            .set_json(json!({})),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["details"]["errors"][0]["field"], "AGENT_NAME");
    assert_eq!(store.checkouts(), 0);
    assert_eq!(store.writes(), 0);
}

#[actix_web::test]
async fn update_agent_with_valid_body_confirms() {
    let store = Arc::new(StubStore::empty());
    let resp = call(
        &store,
        test::TestRequest::patch()
            .uri("/agents/A013")
            .set_json(json!({ "AGENT_NAME": "Benjamin" })),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "agent record updated");
    assert_eq!(store.writes(), 1);
}

#[actix_web::test]
async fn replace_agent_applies_the_same_rules_as_update() {
    let store = Arc::new(StubStore::empty());
    let rejected = call(
        &store,
        test::TestRequest::put()
            .uri("/agents/A013")
            .set_json(json!({ "AGENT_NAME": 7 })),
    )
    .await;
    assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);
    assert_eq!(store.writes(), 0);

    let accepted = call(
        &store,
        test::TestRequest::put()
            .uri("/agents/A013")
            .set_json(json!({ "AGENT_NAME": "Benjamin" })),
    )
    .await;
    assert_eq!(accepted.status(), StatusCode::OK);
    assert_eq!(test::read_body(accepted).await, "agent record updated");
    assert_eq!(store.writes(), 1);
}

#[actix_web::test]
async fn delete_agent_confirms_and_releases() {
    let store = Arc::new(StubStore::empty());
    let resp = call(&store, test::TestRequest::delete().uri("/agents/A013")).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "agent record deleted");
    assert_eq!(store.writes(), 1);
    assert_eq!(store.checkouts(), store.releases());
}
