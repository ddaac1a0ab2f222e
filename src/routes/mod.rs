pub mod error;
pub mod health;
pub mod puzzles;
pub mod scores;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes())
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/puzzles", post(puzzles::create_puzzle))
        .route("/scores", get(scores::get_scores).delete(scores::clear_scores))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use chrono::Utc;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::{
        dictionary::WordPool,
        game::SessionSettings,
        models::{PuzzleConfig, ScoreRecord},
        scores::{MemoryScoreStore, ScoreStore},
    };

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState::new(
            WordPool::builtin(),
            SessionSettings::default(),
            Arc::new(MemoryScoreStore::new(10)),
        ))
    }

    async fn send(state: Arc<AppState>, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = create_routes().with_state(state).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_health_check() {
        let (status, body) = send(test_state(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "word-search-backend");
        assert_eq!(body["connections"], 0);
    }

    #[tokio::test]
    async fn test_create_puzzle_with_seed_is_reproducible() {
        let request = r#"{"gridSize": 8, "wordCount": 4, "difficulty": "easy", "seed": 99}"#;

        let (status, first) = send(test_state(), Method::POST, "/api/puzzles", Some(request)).await;
        let (_, second) = send(test_state(), Method::POST, "/api/puzzles", Some(request)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(first, second, "same seed should produce the same puzzle");
        assert_eq!(first["grid"]["rows"].as_array().unwrap().len(), 8);
        assert_eq!(first["words"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_create_puzzle_uses_defaults() {
        let (status, body) = send(test_state(), Method::POST, "/api/puzzles", Some("{}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["grid"]["size"], 10);
    }

    #[tokio::test]
    async fn test_create_puzzle_rejects_bad_config() {
        let (status, body) =
            send(test_state(), Method::POST, "/api/puzzles", Some(r#"{"gridSize": 50}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("grid size 50"));
    }

    #[tokio::test]
    async fn test_scores_list_and_clear() {
        let state = test_state();
        let config = PuzzleConfig::default();
        state.scores.record(ScoreRecord::new(120, &config, Utc::now())).await.unwrap();
        state.scores.record(ScoreRecord::new(340, &config, Utc::now())).await.unwrap();

        let (status, body) = send(state.clone(), Method::GET, "/api/scores", None).await;
        assert_eq!(status, StatusCode::OK);
        let scores = body.as_array().unwrap();
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0]["score"], 340);
        assert_eq!(scores[0]["gridSize"], 10);

        let (status, _) = send(state.clone(), Method::DELETE, "/api/scores", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(state.scores.load().await.is_empty());
    }
}
