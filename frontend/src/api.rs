use gloo_net::http::{Request, Response};
use vocab::{PracticeSession, ValidateSentence, Validation, Word, WordEnvelope};

/// Base URL of the word challenge API. Empty means same origin, i.e. the
/// companion server's proxy routes.
const API_BASE: &str = match option_env!("WORD_CHALLENGE_API") {
    Some(base) => base,
    None => "",
};

fn url(path: &str) -> String {
    format!("{}{}", API_BASE.trim_end_matches('/'), path)
}

#[derive(Debug, Clone)]
pub(crate) enum AppError {
    Network(String),
    Status { what: &'static str, status: u16 },
}

impl std::fmt::Display for AppError {
    fn fmt(&self, w: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Network(cause) => write!(w, "Request failed due to: {}", cause),
            AppError::Status { what, status } => write!(w, "{} (status {})", what, status),
        }
    }
}

impl std::error::Error for AppError {}

impl From<gloo_net::Error> for AppError {
    fn from(e: gloo_net::Error) -> Self {
        Self::Network(e.to_string())
    }
}

fn ensure_ok(resp: Response, what: &'static str) -> Result<Response, AppError> {
    if resp.ok() {
        Ok(resp)
    } else {
        Err(AppError::Status {
            what,
            status: resp.status(),
        })
    }
}

pub(crate) async fn fetch_word() -> Result<Word, AppError> {
    let resp = Request::get(&url("/api/word"))
        .header("accept", "application/json")
        .send()
        .await?;
    let envelope: WordEnvelope = ensure_ok(resp, "Fetching word failed")?.json().await?;
    Ok(envelope.data)
}

pub(crate) async fn validate_sentence(request: &ValidateSentence) -> Result<Validation, AppError> {
    let resp = Request::post(&url("/api/validate-sentence"))
        .json(request)?
        .send()
        .await?;
    Ok(ensure_ok(resp, "Validation failed")?.json().await?)
}

pub(crate) async fn save_practice_session(session: &PracticeSession) -> Result<(), AppError> {
    let resp = Request::post(&url("/api/practice-session"))
        .json(session)?
        .send()
        .await?;
    ensure_ok(resp, "Saving practice session failed").map(|_| ())
}
