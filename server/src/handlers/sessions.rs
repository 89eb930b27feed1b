use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use vocab::{PracticeSession, ValidateSentence};

use crate::services::{SavePracticeSessions, ValidateSentences};

pub(crate) async fn validate_sentence<Service>(
    State(service): State<Service>,
    body: Result<Json<ValidateSentence>, JsonRejection>,
) -> impl IntoResponse
where
    Service: ValidateSentences,
{
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => return crate::responses::Error::from(rejection).into_response(),
    };

    if request.sentence.trim().is_empty() {
        return crate::responses::Error::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Sentence must not be empty.".to_owned(),
        )
        .into_response();
    }

    match service.validate(&request).await {
        Ok(validation) => {
            tracing::info!(word_id = %request.word_id, score = validation.score, "sentence graded");
            (StatusCode::OK, Json(validation)).into_response()
        }
        Err(e) => {
            tracing::error!(word_id = %request.word_id, error = %e, "Validation failed");
            crate::responses::Error::from(e).into_response()
        }
    }
}

pub(crate) async fn save_session<Service>(
    State(service): State<Service>,
    body: Result<Json<PracticeSession>, JsonRejection>,
) -> impl IntoResponse
where
    Service: SavePracticeSessions,
{
    let Json(session) = match body {
        Ok(body) => body,
        Err(rejection) => return crate::responses::Error::from(rejection).into_response(),
    };

    match service.save(&session).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::error!(
                word_id = %session.word_id,
                error = %e,
                "Error saving practice session"
            );
            crate::responses::Error::from(e).into_response()
        }
    }
}
