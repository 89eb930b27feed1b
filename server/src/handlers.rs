use axum::{
    Router,
    routing::{get, post},
};

use crate::services::{FetchWord, SavePracticeSessions, ValidateSentences};

pub(crate) mod sessions;
pub(crate) mod words;

pub(crate) fn word_routes<Service>(service: Service) -> Router
where
    Service: FetchWord + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/api/word", get(words::random_word::<Service>))
        .with_state(service)
}

pub(crate) fn session_routes<Service>(service: Service) -> Router
where
    Service: ValidateSentences + SavePracticeSessions + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/api/validate-sentence",
            post(sessions::validate_sentence::<Service>),
        )
        .route(
            "/api/practice-session",
            post(sessions::save_session::<Service>),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use vocab::{
        Difficulty, PracticeSession, ValidateSentence, Validation, Word, WordEnvelope, WordId,
    };

    use super::*;
    use crate::services::{ServiceError, local::LocalWords, upstream::Upstream};

    #[derive(Clone, Default)]
    struct Fake {
        fail_with: Option<u16>,
        saved: Arc<Mutex<Vec<PracticeSession>>>,
    }

    impl Fake {
        fn failing(status: u16) -> Self {
            Self {
                fail_with: Some(status),
                ..Default::default()
            }
        }

        fn result<T>(&self, ok: T) -> Result<T, ServiceError> {
            match self.fail_with {
                Some(status) => Err(ServiceError::Status {
                    status,
                    message: "upstream said no".to_owned(),
                }),
                None => Ok(ok),
            }
        }
    }

    impl FetchWord for Fake {
        fn fetch_word(&self) -> impl Future<Output = Result<Word, ServiceError>> + Send {
            std::future::ready(self.result(Word {
                id: WordId::Text("w-1".to_owned()),
                word: "candid".to_owned(),
                definition: "frank".to_owned(),
                difficulty_level: Difficulty::Beginner,
            }))
        }
    }

    impl ValidateSentences for Fake {
        fn validate(
            &self,
            request: &ValidateSentence,
        ) -> impl Future<Output = Result<Validation, ServiceError>> + Send {
            std::future::ready(self.result(Validation {
                score: 6.0,
                suggestion: "Add more detail.".to_owned(),
                corrected_sentence: request.sentence.trim().to_owned(),
            }))
        }
    }

    impl SavePracticeSessions for Fake {
        fn save(
            &self,
            session: &PracticeSession,
        ) -> impl Future<Output = Result<(), ServiceError>> + Send {
            let result = self.result(());
            if result.is_ok() {
                self.saved.lock().unwrap().push(session.clone());
            }
            std::future::ready(result)
        }
    }

    fn app(service: Fake) -> Router {
        word_routes(service.clone()).merge(session_routes(service))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn word_route_wraps_word_in_data() {
        let response = app(Fake::default())
            .oneshot(Request::builder().uri("/api/word").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let envelope: WordEnvelope = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(envelope.data.word, "candid");
        assert_eq!(envelope.data.id, WordId::Text("w-1".to_owned()));
    }

    #[tokio::test]
    async fn word_route_passes_upstream_status_through() {
        let response = app(Fake::failing(404))
            .oneshot(Request::builder().uri("/api/word").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert!(body["message"].as_str().unwrap().contains("upstream said no"));
    }

    #[tokio::test]
    async fn validate_returns_grade() {
        let response = app(Fake::default())
            .oneshot(post_json(
                "/api/validate-sentence",
                json!({ "word_id": "w-1", "sentence": " a candid reply " }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "score": 6.0,
                "suggestion": "Add more detail.",
                "corrected_sentence": "a candid reply",
            })
        );
    }

    #[tokio::test]
    async fn validate_rejects_blank_sentence() {
        let response = app(Fake::default())
            .oneshot(post_json(
                "/api/validate-sentence",
                json!({ "word_id": 1, "sentence": "   " }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn validate_maps_upstream_failure() {
        let response = app(Fake::failing(500))
            .oneshot(post_json(
                "/api/validate-sentence",
                json!({ "word_id": 1, "sentence": "hello" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn practice_session_is_forwarded() {
        let service = Fake::default();
        let response = app(service.clone())
            .oneshot(post_json(
                "/api/practice-session",
                json!({
                    "word_id": 3,
                    "user_sentence": "a candid reply",
                    "score": 6.0,
                    "feedback": "Add more detail.",
                    "corrected_sentence": "A candid reply.",
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let saved = service.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].word_id, WordId::Number(3));
        assert_eq!(saved[0].feedback, "Add more detail.");
    }

    #[tokio::test]
    async fn malformed_session_is_rejected() {
        let service = Fake::default();
        let response = app(service.clone())
            .oneshot(post_json("/api/practice-session", json!({ "word_id": 3 })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert!(body["message"].as_str().unwrap().contains("missing field"));
        assert!(service.saved.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejected_bodies_use_the_json_error_shape() {
        let response = app(Fake::default())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/validate-sentence")
                    .header("content-type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["message"].is_string());

        let response = app(Fake::default())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/practice-session")
                    .body(Body::from("word_id=3"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert!(body_json(response).await["message"].is_string());
    }

    fn get_word() -> Request<Body> {
        Request::builder().uri("/api/word").body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn unreachable_upstream_is_bad_gateway() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let upstream = Upstream::new(&format!("http://{}", addr), Duration::from_secs(5)).unwrap();
        let response = word_routes(upstream).oneshot(get_word()).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert!(body_json(response).await["message"].is_string());
    }

    #[tokio::test]
    async fn non_json_upstream_word_is_bad_gateway() {
        let backend =
            Router::new().route("/api/word", get(|| async { "<html>maintenance</html>" }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, backend).await.unwrap() });

        let upstream = Upstream::new(&format!("http://{}", addr), Duration::from_secs(5)).unwrap();
        let response = word_routes(upstream).oneshot(get_word()).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn empty_local_word_list_is_unavailable() {
        let response = word_routes(LocalWords::new(vec![]))
            .oneshot(get_word())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body_json(response).await["message"], "Word list is empty");
    }
}
