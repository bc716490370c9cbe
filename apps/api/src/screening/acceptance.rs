//! Resume acceptance: keyword-count gate deciding whether text is resume-shaped.
//!
//! Recall-oriented: the threshold is low and the keyword list broad. A rejection
//! is a hard stop; skills extracted from rejected text must never be stored.

use serde::{Deserialize, Serialize};

/// Minimum trimmed length (in characters) before the text is judged at all.
pub const MIN_TEXT_CHARS: usize = 50;

/// Minimum number of distinct indicator keywords required to accept.
pub const MIN_RESUME_KEYWORDS: usize = 3;

const RESUME_KEYWORDS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "work history",
    "employment",
    "qualifications",
    "summary",
    "objective",
    "profile",
    "projects",
    "achievements",
    "certifications",
    "contact",
    "email",
    "phone",
    "linkedin",
    "github",
    "professional",
    "technical skills",
    "soft skills",
    "internship",
    "intern",
    "degree",
    "university",
    "college",
    "btech",
    "bca",
    "mca",
    "mba",
    "bachelor",
    "master",
    "gpa",
    "cgpa",
    "languages",
    "frameworks",
    "tools",
    "references",
    "declaration",
    "hobbies",
    "interests",
    "career",
    "position",
    "role",
    "responsibilities",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptanceResult {
    pub accepted: bool,
    /// Indicator keywords found, in keyword-list order.
    pub matched_keywords: Vec<String>,
}

impl AcceptanceResult {
    fn rejected_unjudged() -> Self {
        Self {
            accepted: false,
            matched_keywords: Vec::new(),
        }
    }
}

/// Returns true when the trimmed text is long enough to be judged.
pub fn has_enough_text(text: &str) -> bool {
    text.trim().chars().count() >= MIN_TEXT_CHARS
}

/// Classifies `text` as resume-shaped or not.
///
/// Text under [`MIN_TEXT_CHARS`] is rejected with no matches ("too short to judge").
/// Otherwise keywords are tested as case-insensitive substrings.
pub fn looks_like_resume(text: &str) -> AcceptanceResult {
    if !has_enough_text(text) {
        return AcceptanceResult::rejected_unjudged();
    }

    let text_lower = text.to_lowercase();
    let matched_keywords: Vec<String> = RESUME_KEYWORDS
        .iter()
        .filter(|kw| text_lower.contains(*kw))
        .map(|kw| kw.to_string())
        .collect();

    AcceptanceResult {
        accepted: matched_keywords.len() >= MIN_RESUME_KEYWORDS,
        matched_keywords,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILLER: &str = "lorem ipsum dolor sit amet consectetur adipiscing elit sed";

    #[test]
    fn test_empty_text_rejected_without_matches() {
        let r = looks_like_resume("");
        assert!(!r.accepted);
        assert!(r.matched_keywords.is_empty());
    }

    #[test]
    fn test_short_text_rejected_even_with_keywords() {
        let text = "experience education skills";
        assert!(text.len() < MIN_TEXT_CHARS);
        let r = looks_like_resume(text);
        assert!(!r.accepted);
        assert!(r.matched_keywords.is_empty());
    }

    #[test]
    fn test_padding_whitespace_does_not_count_toward_length() {
        let text = format!("{:>80}", "experience education skills");
        assert!(!looks_like_resume(&text).accepted);
    }

    #[test]
    fn test_exactly_three_keywords_accepted() {
        let text = format!("experience education skills {FILLER}");
        let r = looks_like_resume(&text);
        assert!(r.accepted, "matched: {:?}", r.matched_keywords);
        assert_eq!(
            r.matched_keywords,
            vec!["experience", "education", "skills"]
        );
    }

    #[test]
    fn test_two_keywords_rejected() {
        let text = format!("experience education {FILLER}");
        let r = looks_like_resume(&text);
        assert!(!r.accepted);
        assert_eq!(r.matched_keywords.len(), 2);
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        let text = format!("EXPERIENCE Education SkIlLs {FILLER}");
        assert!(looks_like_resume(&text).accepted);
    }

    #[test]
    fn test_realistic_resume_accepted() {
        let text = "Jane Doe | jane@example.com | LinkedIn\n\
                    Summary: Backend engineer.\n\
                    Experience: Acme Corp, 2019-2024.\n\
                    Education: B.Tech, State University.\n\
                    Technical Skills: Rust, Python, PostgreSQL.";
        let r = looks_like_resume(text);
        assert!(r.accepted);
        assert!(r.matched_keywords.contains(&"technical skills".to_string()));
    }

    #[test]
    fn test_prose_rejected() {
        let text = "The quick brown fox jumps over the lazy dog while the cat sleeps by the fire.";
        assert!(!looks_like_resume(text).accepted);
    }
}
