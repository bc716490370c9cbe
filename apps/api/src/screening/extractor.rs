//! Skill Extractor: scans text against the signal table.

use std::collections::HashSet;

use crate::screening::signals::SkillSignalTable;

/// Returns the skills whose signals occur in `text`, in table order, without duplicates.
///
/// Text is lower-cased here; callers may pass raw extracted text. A skill
/// contributes at most once: scanning its signals stops at the first hit.
pub fn extract_skills(text: &str, table: &SkillSignalTable) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let text_lower = text.to_lowercase();
    let mut seen = HashSet::new();
    let mut found = Vec::new();

    for entry in table.entries() {
        let hit = entry.matchers().iter().any(|m| m.is_match(&text_lower));
        if hit && seen.insert(entry.skill_id.as_str()) {
            found.push(entry.skill_id.clone());
        }
    }

    found
}
