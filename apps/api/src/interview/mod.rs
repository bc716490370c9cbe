// Practice Interviews
// Implements: question bank, topic resolution, non-repeating selection, answer scoring, reports.
// Selection takes the RNG as a parameter; nothing here touches a global generator.

pub mod bank;
pub mod handlers;
pub mod report;
pub mod scoring;
pub mod selector;
pub mod topics;

pub use scoring::{AnswerScorer, LexicalAnswerScorer};
