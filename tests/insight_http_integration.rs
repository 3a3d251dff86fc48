//! Integration tests for the insight HTTP endpoints.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt;

use startup_panorama::adapters::ai::{MockAiProvider, MockError};
use startup_panorama::adapters::http::{build_router, AppState};
use startup_panorama::config::ServerConfig;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app(provider: &MockAiProvider) -> Router {
    build_router(
        AppState::new(Arc::new(provider.clone())),
        &ServerConfig::default(),
    )
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn question_route_answers() {
    let provider = MockAiProvider::new()
        .with_json_response(json!({"resposta": "O setor de tecnologia cresceu 10,5% em 2023."}));

    let response = app(&provider)
        .oneshot(post_json(
            "/api/ai/pergunta",
            json!({"question": "Como cresceu a indústria em 2023?"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["resposta"], "O setor de tecnologia cresceu 10,5% em 2023.");

    // The question must be embedded in the scope-guarded prompt.
    let calls = provider.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].prompt.contains("Como cresceu a indústria em 2023?"));
    assert!(calls[0].schema.is_some());
}

#[tokio::test]
async fn question_route_requires_question() {
    let provider = MockAiProvider::new();

    let response = app(&provider)
        .oneshot(post_json("/api/ai/pergunta", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "A pergunta é necessária para a requisição.");
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn question_route_rejects_blank_question() {
    let provider = MockAiProvider::new();

    let response = app(&provider)
        .oneshot(post_json("/api/ai/pergunta", json!({"question": "   "})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn question_route_maps_provider_failure_to_500() {
    let provider = MockAiProvider::new().with_error(MockError::Unavailable {
        message: "server error".to_string(),
    });

    let response = app(&provider)
        .oneshot(post_json("/api/ai/pergunta", json!({"question": "ODS 9?"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Não foi possível obter uma resposta da IA.");
}

#[tokio::test]
async fn summary_route_returns_free_text() {
    let provider = MockAiProvider::new()
        .with_text_response("O cenário brasileiro mostra forte concentração em SP.");

    let response = app(&provider)
        .oneshot(post_json(
            "/api/ai/resumointeligente",
            json!({
                "startups": [{"year": 2021, "count": 13374}],
                "investimento": [{"state": "SP", "public": 1.0, "private": 2.0}]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        json["resumo"],
        "O cenário brasileiro mostra forte concentração em SP."
    );

    // Free-text call: no response schema, fragments embedded in the prompt.
    let calls = provider.calls();
    assert!(calls[0].schema.is_none());
    assert!(calls[0].prompt.contains("13374"));
}

#[tokio::test]
async fn summary_route_requires_some_data() {
    let provider = MockAiProvider::new();

    let response = app(&provider)
        .oneshot(post_json("/api/ai/resumointeligente", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Dados para o resumo são obrigatórios.");
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn summary_route_accepts_partial_data() {
    let provider = MockAiProvider::new().with_text_response("Resumo parcial.");

    let response = app(&provider)
        .oneshot(post_json(
            "/api/ai/resumointeligente",
            json!({"industria": [{"year": 2020, "value_percent": 3.1}]}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn summary_route_maps_provider_failure_to_500() {
    let provider = MockAiProvider::new().with_error(MockError::Timeout { timeout_secs: 60 });

    let response = app(&provider)
        .oneshot(post_json(
            "/api/ai/resumointeligente",
            json!({"startups": []}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Erro interno no servidor.");
}
