//! Session report: verdict and human-readable summary for a scored session.

use serde::{Deserialize, Serialize};

use crate::models::interview::{QuestionAnswerPair, SessionScore};

/// Overall score at or above which a session counts as passed.
pub const PASS_THRESHOLD: f64 = 60.0;

/// Below this, the technical / communication lines turn into advice.
const WEAK_DIMENSION: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionVerdict {
    Selected,
    Rejected,
}

impl SessionVerdict {
    pub fn from_overall(overall: f64) -> Self {
        if overall >= PASS_THRESHOLD {
            Self::Selected
        } else {
            Self::Rejected
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    pub answered: usize,
    pub total: usize,
    pub verdict: SessionVerdict,
    pub summary: String,
}

impl SessionReport {
    /// `score.per_question` is expected to line up with `pairs`.
    pub fn build(pairs: &[QuestionAnswerPair], score: &SessionScore) -> Self {
        let total = pairs.len();
        let answered = pairs.iter().filter(|p| p.is_answered()).count();

        let mut lines = vec![
            format!("You answered {answered}/{total} questions."),
            format!("Overall score: {:.1}%", score.overall),
            String::new(),
            "Performance summary:".to_string(),
        ];

        lines.push(if score.technical < WEAK_DIMENSION {
            "- Technical knowledge needs improvement. Review core concepts.".to_string()
        } else {
            "- Good technical understanding demonstrated.".to_string()
        });
        lines.push(if score.communication < WEAK_DIMENSION {
            "- Work on structuring answers with more clarity.".to_string()
        } else {
            "- Clear communication style.".to_string()
        });
        if answered < total {
            lines.push(format!("- {} questions left unanswered.", total - answered));
        }

        lines.push(String::new());
        lines.push("Detailed feedback:".to_string());
        for (i, (pair, q)) in pairs.iter().zip(&score.per_question).enumerate() {
            let mark = if pair.is_answered() { '✓' } else { '✗' };
            lines.push(format!(
                "Q{} {mark} [Tech: {:.1}% | Comm: {:.1}%]: {}",
                i + 1,
                q.technical_score,
                q.communication_score,
                q.feedback
            ));
        }

        Self {
            answered,
            total,
            verdict: SessionVerdict::from_overall(score.overall),
            summary: lines.join("\n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::scoring::score_session;

    fn pair(question: &str, answer: &str) -> QuestionAnswerPair {
        QuestionAnswerPair {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert_eq!(SessionVerdict::from_overall(60.0), SessionVerdict::Selected);
        assert_eq!(SessionVerdict::from_overall(59.9), SessionVerdict::Rejected);
    }

    #[test]
    fn test_weak_session_report() {
        let pairs = vec![
            pair("What is a variable?", "a variable stores a value"),
            pair("What is a loop?", ""),
        ];
        let score = score_session(&pairs);
        let report = SessionReport::build(&pairs, &score);

        assert_eq!(report.answered, 1);
        assert_eq!(report.total, 2);
        assert_eq!(report.verdict, SessionVerdict::Rejected);
        assert!(report.summary.contains("You answered 1/2 questions."));
        assert!(report.summary.contains("Overall score: 12.0%"));
        assert!(report.summary.contains("needs improvement"));
        assert!(report.summary.contains("more clarity"));
        assert!(report.summary.contains("- 1 questions left unanswered."));
        assert!(report
            .summary
            .contains("Q1 ✓ [Tech: 30.0% | Comm: 15.0%]: very brief"));
        assert!(report
            .summary
            .contains("Q2 ✗ [Tech: 0.0% | Comm: 0.0%]: no answer provided"));
    }

    #[test]
    fn test_strong_session_report() {
        let answer = format!("{}, and more. {}", vec!["word"; 40].join(" "), vec!["word"; 38].join(" "));
        let pairs = vec![pair("Describe a project", &answer)];
        let score = score_session(&pairs);
        let report = SessionReport::build(&pairs, &score);

        assert_eq!(report.verdict, SessionVerdict::Selected);
        assert!(report.summary.contains("Good technical understanding"));
        assert!(report.summary.contains("Clear communication style."));
        assert!(!report.summary.contains("unanswered"));
    }

    #[test]
    fn test_empty_session() {
        let report = SessionReport::build(&[], &SessionScore::default());
        assert_eq!(report.total, 0);
        assert_eq!(report.verdict, SessionVerdict::Rejected);
        assert!(report.summary.contains("You answered 0/0 questions."));
    }
}
