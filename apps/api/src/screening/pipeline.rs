//! Screening pipeline: text → acceptance gate → skill extraction.
//!
//! Rejections carry no skills at all, so a caller cannot persist them by accident.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::screening::acceptance::{has_enough_text, looks_like_resume};
use crate::screening::extractor::extract_skills;
use crate::screening::signals::SkillSignalTable;

/// Upper bound on skills kept for one candidate profile.
pub const MAX_PROFILE_SKILLS: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    /// Too little text to judge (scanned, image-only or protected document).
    Unreadable,
    /// Enough text, but not enough resume indicators.
    NotAResume,
}

impl RejectionReason {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Unreadable => {
                "Could not read text from this document. It may be scanned, image-based, or password-protected."
            }
            Self::NotAResume => {
                "This document does not appear to be a resume. It should contain sections like Skills, Education, Experience, Projects."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScreeningOutcome {
    Accepted {
        matched_keywords: Vec<String>,
        skills: Vec<String>,
    },
    Rejected {
        reason: RejectionReason,
        matched_keywords: Vec<String>,
    },
}

impl ScreeningOutcome {
    /// `None` when the document was accepted.
    pub fn rejection_reason(&self) -> Option<RejectionReason> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected { reason, .. } => Some(*reason),
        }
    }

    pub fn matched_keywords(&self) -> &[String] {
        match self {
            Self::Accepted {
                matched_keywords, ..
            }
            | Self::Rejected {
                matched_keywords, ..
            } => matched_keywords,
        }
    }

    /// Skills safe to store; empty for every rejection.
    pub fn skills(&self) -> &[String] {
        match self {
            Self::Accepted { skills, .. } => skills,
            Self::Rejected { .. } => &[],
        }
    }
}

/// Screens extracted document text and, only if it passes, extracts skills.
pub fn screen_text(text: &str, table: &SkillSignalTable) -> ScreeningOutcome {
    if !has_enough_text(text) {
        return ScreeningOutcome::Rejected {
            reason: RejectionReason::Unreadable,
            matched_keywords: Vec::new(),
        };
    }

    let acceptance = looks_like_resume(text);
    if !acceptance.accepted {
        info!(
            "Text rejected as non-resume ({} indicator keywords)",
            acceptance.matched_keywords.len()
        );
        return ScreeningOutcome::Rejected {
            reason: RejectionReason::NotAResume,
            matched_keywords: acceptance.matched_keywords,
        };
    }

    let mut skills = extract_skills(text, table);
    skills.truncate(MAX_PROFILE_SKILLS);
    info!("Resume accepted with {} skills", skills.len());

    ScreeningOutcome::Accepted {
        matched_keywords: acceptance.matched_keywords,
        skills,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> SkillSignalTable {
        SkillSignalTable::builtin().unwrap()
    }

    const RESUME: &str = "John Smith, john@example.com\n\
        Professional Summary: Full-stack engineer.\n\
        Experience: Built services in Python and Django, deployed with Docker on AWS.\n\
        Education: Bachelor of Engineering, City College.\n\
        Skills: leadership, teamwork, agile.";

    #[test]
    fn test_resume_is_accepted_with_skills() {
        let outcome = screen_text(RESUME, &table());
        assert_eq!(outcome.rejection_reason(), None);
        let skills = outcome.skills();
        for expected in ["python", "django", "docker", "aws", "leadership", "teamwork", "agile"] {
            assert!(skills.contains(&expected.to_string()), "missing {expected}");
        }
    }

    #[test]
    fn test_short_text_is_unreadable() {
        let outcome = screen_text("python", &table());
        assert_eq!(
            outcome,
            ScreeningOutcome::Rejected {
                reason: RejectionReason::Unreadable,
                matched_keywords: vec![],
            }
        );
    }

    #[test]
    fn test_non_resume_discards_skills() {
        let text = "Recipe: mix python-shaped pasta with java coffee and rust-colored sauce for dinner tonight.";
        let outcome = screen_text(text, &table());
        assert_eq!(outcome.rejection_reason(), Some(RejectionReason::NotAResume));
        assert!(outcome.skills().is_empty());
    }

    #[test]
    fn test_rejection_keeps_matched_keywords() {
        let text = "Experience: none to speak of, just a shopping list of bread, eggs and milk.";
        let outcome = screen_text(text, &table());
        assert_eq!(outcome.rejection_reason(), Some(RejectionReason::NotAResume));
        assert_eq!(outcome.matched_keywords(), &["experience".to_string()]);
    }

    #[test]
    fn test_skills_are_capped() {
        let mut text = String::from("experience education skills ");
        for entry in table().entries() {
            text.push_str(&entry.skill_id.replace('_', " "));
            text.push_str(" , ");
        }
        let outcome = screen_text(&text, &table());
        assert_eq!(outcome.skills().len(), MAX_PROFILE_SKILLS);
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let outcome = screen_text("", &table());
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "rejected");
        assert_eq!(json["reason"], "unreadable");
    }
}
