use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One topic quota in a session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRequest {
    pub topic_label: String,
    pub requested_count: usize,
}

impl SelectionRequest {
    pub fn new(topic_label: impl Into<String>, requested_count: usize) -> Self {
        Self {
            topic_label: topic_label.into(),
            requested_count,
        }
    }
}

/// A generated question and the candidate's (possibly empty) answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionAnswerPair {
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

impl QuestionAnswerPair {
    pub fn unanswered(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: String::new(),
        }
    }

    pub fn is_answered(&self) -> bool {
        !self.answer.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerQuestionScore {
    pub technical_score: f64,
    pub communication_score: f64,
    pub feedback: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionScore {
    pub technical: f64,
    pub communication: f64,
    pub overall: f64,
    pub per_question: Vec<PerQuestionScore>,
}

/// Every question already put in front of a candidate.
///
/// Serialized as a plain list in first-asked order. Inserts are idempotent and
/// nothing is ever removed here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct AskedQuestionHistory {
    asked: Vec<String>,
    seen: HashSet<String>,
}

impl AskedQuestionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, question: &str) -> bool {
        self.seen.contains(question)
    }

    /// Records a question. Returns `false` if it was already present.
    pub fn record(&mut self, question: &str) -> bool {
        if self.seen.insert(question.to_string()) {
            self.asked.push(question.to_string());
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.asked.len()
    }
}

impl From<Vec<String>> for AskedQuestionHistory {
    fn from(questions: Vec<String>) -> Self {
        let mut history = Self::new();
        for q in &questions {
            history.record(q);
        }
        history
    }
}

impl From<AskedQuestionHistory> for Vec<String> {
    fn from(history: AskedQuestionHistory) -> Self {
        history.asked
    }
}

/// A freshly generated practice-interview session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub questions: Vec<QuestionAnswerPair>,
    /// Updated history; the caller persists it for the candidate.
    pub history: AskedQuestionHistory,
}
