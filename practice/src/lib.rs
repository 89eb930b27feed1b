//! View state of the word challenge page.
//!
//! [`Practice`] holds everything the page shows between network calls. It
//! performs no I/O itself: the page asks it for request bodies and feeds the
//! responses back in.

use vocab::{PracticeSession, ValidateSentence, Validation, Word};

pub mod history;

/// Identifies one call to [`Practice::begin_submit`]. Only the newest ticket
/// can complete or fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// A sentence handed off for grading.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub ticket: Ticket,
    pub request: ValidateSentence,
}

#[derive(Debug, Clone, PartialEq, Default)]
enum Phase {
    #[default]
    Composing,
    Submitting(Ticket),
    Submitted(Validation),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Practice {
    word: Option<Word>,
    sentence: String,
    phase: Phase,
    issued: u64,
}

impl Practice {
    pub fn load_word(&mut self, word: Word) {
        self.word = Some(word);
        self.sentence.clear();
        self.phase = Phase::Composing;
    }

    /// Replace the typed sentence. Editing a graded sentence discards its grade.
    pub fn edit(&mut self, sentence: String) {
        if self.is_submitting() {
            return;
        }
        self.sentence = sentence;
        self.phase = Phase::Composing;
    }

    pub fn can_submit(&self) -> bool {
        self.word.is_some()
            && matches!(self.phase, Phase::Composing)
            && !self.sentence.trim().is_empty()
    }

    pub fn begin_submit(&mut self) -> Option<Submission> {
        if !self.can_submit() {
            return None;
        }
        let word = self.word.as_ref()?;
        let request = ValidateSentence {
            word_id: word.id.clone(),
            sentence: self.sentence.clone(),
        };
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.phase = Phase::Submitting(ticket);
        Some(Submission { ticket, request })
    }

    /// Store the grade for the in-flight submission and return the session to
    /// persist. Grades for any other submission are dropped, even when the
    /// same word has been loaded again since.
    pub fn complete_submit(
        &mut self,
        ticket: Ticket,
        validation: Validation,
    ) -> Option<PracticeSession> {
        if self.phase != Phase::Submitting(ticket) {
            return None;
        }
        let word_id = self.word.as_ref()?.id.clone();
        let session = PracticeSession::new(word_id, self.sentence.clone(), &validation);
        self.phase = Phase::Submitted(validation);
        Some(session)
    }

    pub fn fail_submit(&mut self, ticket: Ticket) {
        if self.phase == Phase::Submitting(ticket) {
            self.phase = Phase::Composing;
        }
    }

    pub fn retry(&mut self) {
        self.sentence.clear();
        self.phase = Phase::Composing;
    }

    pub fn word(&self) -> Option<&Word> {
        self.word.as_ref()
    }

    pub fn sentence(&self) -> &str {
        &self.sentence
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.phase, Phase::Submitted(_))
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting(_))
    }

    /// The textarea is locked while a sentence is being graded or has a grade.
    pub fn is_locked(&self) -> bool {
        !matches!(self.phase, Phase::Composing)
    }

    fn validation(&self) -> Option<&Validation> {
        match &self.phase {
            Phase::Submitted(validation) => Some(validation),
            _ => None,
        }
    }

    pub fn score(&self) -> Option<f64> {
        self.validation().map(|v| v.score)
    }

    pub fn score_text(&self) -> Option<String> {
        self.score().map(|score| format!("{:.1}", score))
    }

    pub fn feedback(&self) -> Option<&str> {
        self.validation().map(|v| v.suggestion.as_str())
    }

    pub fn corrected(&self) -> Option<&str> {
        self.validation().map(|v| v.corrected_sentence.as_str())
    }
}
