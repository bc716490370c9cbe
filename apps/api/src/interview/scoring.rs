//! Answer Scoring: pluggable, trait-based scorer for practice-interview answers.
//!
//! Default: `LexicalAnswerScorer` (word counts, question/answer token overlap,
//! punctuation). Pure and idempotent: re-scoring unchanged pairs yields the same output.
//!
//! `AppState` holds an `Arc<dyn AnswerScorer>`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::interview::{PerQuestionScore, QuestionAnswerPair, SessionScore};

pub const TECHNICAL_WEIGHT: f64 = 0.6;
pub const COMMUNICATION_WEIGHT: f64 = 0.4;

const MAX_SCORE: f64 = 100.0;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

pub trait AnswerScorer: Send + Sync {
    fn score(&self, pairs: &[QuestionAnswerPair]) -> SessionScore;
}

// ────────────────────────────────────────────────────────────────────────────
// Feedback tiers
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackTier {
    NoAnswer,
    VeryBrief,
    GoodStart,
    WellStructured,
    Excellent,
}

impl FeedbackTier {
    /// Thresholds: <15 very brief, <30 good start, <60 well structured, else excellent.
    pub fn for_word_count(word_count: usize) -> Self {
        match word_count {
            0 => Self::NoAnswer,
            1..=14 => Self::VeryBrief,
            15..=29 => Self::GoodStart,
            30..=59 => Self::WellStructured,
            _ => Self::Excellent,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::NoAnswer => "no answer provided",
            Self::VeryBrief => "very brief",
            Self::GoodStart => "good start",
            Self::WellStructured => "good, well structured",
            Self::Excellent => "excellent, detailed",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LexicalAnswerScorer: default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Deterministic lexical scorer.
///
/// Per answered question:
/// - technical = min(100, words × 4 + overlap × 5)
/// - communication = min(100, words × 3 + 10 if '.' + 10 if ',')
///
/// Session: means rounded to 1 dp, overall = round(0.6 × technical + 0.4 × communication, 1).
pub struct LexicalAnswerScorer;

impl AnswerScorer for LexicalAnswerScorer {
    fn score(&self, pairs: &[QuestionAnswerPair]) -> SessionScore {
        score_session(pairs)
    }
}

pub fn score_answer(pair: &QuestionAnswerPair) -> PerQuestionScore {
    let answer = pair.answer.trim();
    if answer.is_empty() {
        return PerQuestionScore {
            technical_score: 0.0,
            communication_score: 0.0,
            feedback: FeedbackTier::NoAnswer.message().to_string(),
        };
    }

    let word_count = answer.split_whitespace().count();
    let overlap = token_overlap(&pair.question, answer);

    let technical = ((word_count * 4 + overlap * 5) as f64).min(MAX_SCORE);
    let structure_bonus = if answer.contains('.') { 10 } else { 0 }
        + if answer.contains(',') { 10 } else { 0 };
    let communication = ((word_count * 3 + structure_bonus) as f64).min(MAX_SCORE);

    PerQuestionScore {
        technical_score: technical,
        communication_score: communication,
        feedback: FeedbackTier::for_word_count(word_count).message().to_string(),
    }
}

pub fn score_session(pairs: &[QuestionAnswerPair]) -> SessionScore {
    let per_question: Vec<PerQuestionScore> = pairs.iter().map(score_answer).collect();

    let technical = round1(mean(per_question.iter().map(|s| s.technical_score)));
    let communication = round1(mean(per_question.iter().map(|s| s.communication_score)));

    SessionScore {
        technical,
        communication,
        overall: overall_score(technical, communication),
        per_question,
    }
}

/// Weighted overall score, rounded to one decimal place.
pub fn overall_score(technical: f64, communication: f64) -> f64 {
    round1(technical * TECHNICAL_WEIGHT + communication * COMMUNICATION_WEIGHT)
}

/// Distinct lower-cased whitespace tokens shared by question and answer.
fn token_overlap(question: &str, answer: &str) -> usize {
    let question_tokens: HashSet<String> =
        question.split_whitespace().map(str::to_lowercase).collect();
    let answer_tokens: HashSet<String> = answer.split_whitespace().map(str::to_lowercase).collect();
    question_tokens.intersection(&answer_tokens).count()
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}

/// Rounds to one decimal place, halves away from zero (`f64::round`).
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
