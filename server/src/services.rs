use vocab::{PracticeSession, ValidateSentence, Validation, Word};

#[derive(Debug, thiserror::Error)]
pub(crate) enum ServiceError {
    #[error("Upstream request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Upstream responded with {status}: {message}")]
    Status { status: u16, message: String },
    #[error("{0}")]
    Unavailable(String),
}

pub(crate) trait FetchWord {
    fn fetch_word(&self) -> impl Future<Output = Result<Word, ServiceError>> + Send;
}

pub(crate) trait ValidateSentences {
    fn validate(
        &self,
        request: &ValidateSentence,
    ) -> impl Future<Output = Result<Validation, ServiceError>> + Send;
}

pub(crate) trait SavePracticeSessions {
    fn save(
        &self,
        session: &PracticeSession,
    ) -> impl Future<Output = Result<(), ServiceError>> + Send;
}

/// The scoring backend that owns the word dataset, grading and persistence.
pub(crate) mod upstream {
    use std::time::Duration;

    use vocab::{PracticeSession, ValidateSentence, Validation, Word};

    use super::ServiceError;

    #[derive(Clone)]
    pub(crate) struct Upstream {
        client: reqwest::Client,
        base_url: String,
    }

    impl Upstream {
        pub(crate) fn new(base_url: &str, timeout: Duration) -> Result<Self, ServiceError> {
            let client = reqwest::Client::builder().timeout(timeout).build()?;
            Ok(Self {
                client,
                base_url: base_url.trim_end_matches('/').to_owned(),
            })
        }

        fn url(&self, path: &str) -> String {
            format!("{}{}", self.base_url, path)
        }
    }

    async fn check(resp: reqwest::Response) -> Result<reqwest::Response, ServiceError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let message = resp.text().await.unwrap_or_default();
        Err(ServiceError::Status {
            status: status.as_u16(),
            message,
        })
    }

    impl super::FetchWord for Upstream {
        async fn fetch_word(&self) -> Result<Word, ServiceError> {
            let resp = self
                .client
                .get(self.url("/api/word"))
                .header("accept", "application/json")
                .send()
                .await?;
            Ok(check(resp).await?.json().await?)
        }
    }

    impl super::ValidateSentences for Upstream {
        async fn validate(&self, request: &ValidateSentence) -> Result<Validation, ServiceError> {
            let resp = self
                .client
                .post(self.url("/api/validate-sentence"))
                .json(request)
                .send()
                .await?;
            Ok(check(resp).await?.json().await?)
        }
    }

    impl super::SavePracticeSessions for Upstream {
        async fn save(&self, session: &PracticeSession) -> Result<(), ServiceError> {
            let resp = self
                .client
                .post(self.url("/api/practice-session"))
                .json(session)
                .send()
                .await?;
            check(resp).await.map(|_| ())
        }
    }
}

/// Word list compiled into the binary, for running without a word service.
pub(crate) mod local {
    use std::sync::Arc;

    use rand::seq::IndexedRandom;
    use vocab::Word;

    use super::ServiceError;

    const WORDS: &str = include_str!("../data/words.json");

    #[derive(Clone)]
    pub(crate) struct LocalWords(Arc<Vec<Word>>);

    impl LocalWords {
        pub(crate) fn new(words: Vec<Word>) -> Self {
            Self(Arc::new(words))
        }

        pub(crate) fn bundled() -> Result<Self, serde_json::Error> {
            serde_json::from_str(WORDS).map(Self::new)
        }
    }

    impl super::FetchWord for LocalWords {
        fn fetch_word(&self) -> impl Future<Output = Result<Word, ServiceError>> + Send {
            let word = self
                .0
                .choose(&mut rand::rng())
                .cloned()
                .ok_or_else(|| ServiceError::Unavailable("Word list is empty".to_owned()));
            std::future::ready(word)
        }
    }
}
