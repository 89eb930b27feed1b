use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use vocab::WordEnvelope;

use crate::services::FetchWord;

pub(crate) async fn random_word<Service>(State(service): State<Service>) -> impl IntoResponse
where
    Service: FetchWord,
{
    match service.fetch_word().await {
        Ok(word) => {
            tracing::debug!(word = %word.word, id = %word.id, "fetched word");
            (StatusCode::OK, Json(WordEnvelope { data: word })).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Error fetching random word");
            crate::responses::Error::from(e).into_response()
        }
    }
}
