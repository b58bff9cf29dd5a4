//! Integration tests against a mock chat-completion endpoint
//!
//! These tests verify the agent works without requiring Azure credentials.

use azchat::{AgentConfig, AgentError, ChatAgent};
use serde_json::json;
use wiremock::matchers::{any, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DEPLOYMENT: &str = "gpt-test";
const COMPLETIONS_PATH: &str = "/openai/deployments/gpt-test/chat/completions";

fn test_config(endpoint: &str) -> AgentConfig {
    AgentConfig::new(endpoint, "test-key", DEPLOYMENT)
}

fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "choices": [
            { "message": { "role": "assistant", "content": content } }
        ]
    })
}

#[tokio::test]
async fn initialize_makes_no_network_call() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut agent = ChatAgent::new(test_config(&server.uri())).unwrap();
    agent.initialize().unwrap();

    // Expectations are checked when the server drops.
}

#[tokio::test]
async fn missing_required_fields_fail_before_any_network_call() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let configs = [
        AgentConfig::new("", "test-key", DEPLOYMENT),
        AgentConfig::new(server.uri(), "", DEPLOYMENT),
        AgentConfig::new(server.uri(), "test-key", ""),
    ];

    for config in configs {
        let result = ChatAgent::new(config);
        assert!(matches!(result, Err(AgentError::Configuration(_))));
    }
}

#[tokio::test]
async fn happy_path_returns_reply_unmodified() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .and(query_param("api-version", "2024-02-15-preview"))
        .and(header("api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("pong")))
        .expect(1)
        .mount(&server)
        .await;

    let mut agent = ChatAgent::new(test_config(&server.uri())).unwrap();
    agent.initialize().unwrap();

    let response = agent.get_response("ping").await.unwrap();
    assert_eq!(response, "pong");
}

#[tokio::test]
async fn sequential_calls_are_independent_exchanges() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("ok")))
        .expect(2)
        .mount(&server)
        .await;

    let mut agent = ChatAgent::new(test_config(&server.uri())).unwrap();
    agent.initialize().unwrap();

    agent.get_response("first message A").await.unwrap();
    agent.get_response("second message B").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);

    let body_a = String::from_utf8(requests[0].body.clone()).unwrap();
    let body_b = String::from_utf8(requests[1].body.clone()).unwrap();

    assert!(body_a.contains("first message A"));
    assert!(!body_a.contains("second message B"));
    assert!(body_b.contains("second message B"));
    assert!(!body_b.contains("first message A"));
}

#[tokio::test]
async fn dispatch_failure_leaves_agent_usable() {
    let server = MockServer::start().await;

    // First request hits the exhaustible 500, the second falls through to
    // the healthy route.
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("backend unavailable"))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("recovered")))
        .mount(&server)
        .await;

    let mut agent = ChatAgent::new(test_config(&server.uri())).unwrap();
    agent.initialize().unwrap();

    let err = agent.get_response("ping").await.unwrap_err();
    match err {
        AgentError::Dispatch { cause } => {
            assert!(cause.contains("500"));
            assert!(cause.contains("backend unavailable"));
        }
        other => panic!("expected dispatch error, got {:?}", other),
    }

    assert!(agent.is_initialized());

    let response = agent.get_response("ping").await.unwrap();
    assert_eq!(response, "recovered");

    // One failed and one successful request reached the server; no retry
    // was attempted in between.
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
}

#[tokio::test]
async fn empty_completion_is_a_dispatch_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let mut agent = ChatAgent::new(test_config(&server.uri())).unwrap();
    agent.initialize().unwrap();

    let result = agent.get_response("ping").await;
    assert!(matches!(result, Err(AgentError::Dispatch { .. })));
}

#[tokio::test]
async fn instructions_ride_along_as_system_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("bonjour")))
        .mount(&server)
        .await;

    let config = test_config(&server.uri()).with_instructions("Answer in French.");
    let mut agent = ChatAgent::new(config).unwrap();
    agent.initialize().unwrap();

    agent.get_response("hello").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let messages = body["messages"].as_array().unwrap();

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[0]["content"], "Answer in French.");
    assert_eq!(messages[1]["role"], "user");
    assert_eq!(messages[1]["content"], "hello");
}
