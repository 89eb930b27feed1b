use serde::{Deserialize, Serialize};

/// Identifier assigned to a word by the scoring backend.
///
/// The backend is free to use numeric or textual ids; whichever it sends is
/// echoed back unchanged in later requests.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WordId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for WordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WordId::Number(n) => write!(f, "{}", n),
            WordId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub id: WordId,
    pub word: String,
    pub definition: String,
    pub difficulty_level: Difficulty,
}

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Other(String),
}

impl Difficulty {
    pub fn label(&self) -> &str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
            Difficulty::Other(label) => label,
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "bg-green-200 text-green-800",
            Difficulty::Intermediate => "bg-yellow-200 text-yellow-800",
            Difficulty::Advanced => "bg-red-200 text-red-800",
            Difficulty::Other(_) => "bg-gray-200 text-gray-800",
        }
    }
}

impl From<String> for Difficulty {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Beginner" => Difficulty::Beginner,
            "Intermediate" => Difficulty::Intermediate,
            "Advanced" => Difficulty::Advanced,
            _ => Difficulty::Other(s),
        }
    }
}

impl From<Difficulty> for String {
    fn from(d: Difficulty) -> Self {
        match d {
            Difficulty::Other(s) => s,
            known => known.label().to_owned(),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Body of the proxy word route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordEnvelope {
    pub data: Word,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidateSentence {
    pub word_id: WordId,
    pub sentence: String,
}

/// Grade returned by the scoring backend for a sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Validation {
    pub score: f64,
    pub suggestion: String,
    pub corrected_sentence: String,
}

/// Record persisted after a sentence has been graded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeSession {
    pub word_id: WordId,
    pub user_sentence: String,
    pub score: f64,
    pub feedback: String,
    pub corrected_sentence: String,
}

impl PracticeSession {
    pub fn new(word_id: WordId, user_sentence: String, validation: &Validation) -> Self {
        Self {
            word_id,
            user_sentence,
            score: validation.score,
            feedback: validation.suggestion.clone(),
            corrected_sentence: validation.corrected_sentence.clone(),
        }
    }
}
