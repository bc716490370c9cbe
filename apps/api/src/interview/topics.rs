//! Topic resolution: maps user-facing skill labels to question-bank topic keys.
//!
//! Order, first success wins:
//! 1. direct topic key with a non-empty pool
//! 2. alias table (`Unsupported` short-circuits to empty, no fallbacks)
//! 3. space ↔ underscore variants of the label
//! 4. empty: the selector falls back to templated questions

use std::collections::HashMap;

use crate::interview::bank::QuestionBank;

/// What an alias label maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AliasTarget {
    NotFound,
    /// Deliberately skipped; resolution must return empty.
    Unsupported,
    Single(String),
    FanOut(Vec<String>),
}

static NOT_FOUND: AliasTarget = AliasTarget::NotFound;

/// Alias table keyed by normalized label (lower-case, trimmed, `_` → space).
#[derive(Debug, Clone, Default)]
pub struct TopicAliases {
    entries: HashMap<String, AliasTarget>,
}

fn alias_key(label: &str) -> String {
    label.trim().to_lowercase().replace('_', " ")
}

impl TopicAliases {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: &str, target: AliasTarget) {
        self.entries.insert(alias_key(label), target);
    }

    pub fn single(mut self, label: &str, topic: &str) -> Self {
        self.insert(label, AliasTarget::Single(topic.to_string()));
        self
    }

    pub fn fan_out(mut self, label: &str, topics: &[&str]) -> Self {
        self.insert(
            label,
            AliasTarget::FanOut(topics.iter().map(|t| t.to_string()).collect()),
        );
        self
    }

    pub fn unsupported(mut self, label: &str) -> Self {
        self.insert(label, AliasTarget::Unsupported);
        self
    }

    pub fn lookup(&self, label: &str) -> &AliasTarget {
        self.entries.get(&alias_key(label)).unwrap_or(&NOT_FOUND)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The curated skill → topic aliases shipped with the service.
    pub fn builtin() -> Self {
        let same_named = [
            "critical_thinking",
            "time_management",
            "teamwork",
            "leadership",
            "communication",
            "adaptability",
            "emotional_intelligence",
            "work_ethic",
            "creativity",
            "negotiation",
            "stress_management",
            "recruitment",
            "risk_management",
            "project_management",
            "team_management",
            "strategic_planning",
            "decision_making",
            "conflict_resolution",
            "performance_management",
            "change_management",
            "employee_relations",
            "interpersonal_skills",
            "cultural_awareness",
            "ethics",
            "dependability",
            "initiative",
        ];

        let mut aliases = same_named
            .iter()
            .fold(Self::new(), |acc, topic| acc.single(topic, topic));

        for ml in ["machine learning", "deep learning"] {
            aliases = aliases.single(ml, "problem_solving_soft");
        }
        for lib in ["numpy", "pandas", "tensorflow", "pytorch", "keras"] {
            aliases = aliases.single(lib, "python");
        }

        aliases
            .fan_out(
                "problem_solving",
                &["problem_solving_soft", "problem_solving_mgmt"],
            )
            .single("training", "training_development")
            .single("training_development", "training_development")
            .single("node", "nodejs")
            .single("express", "express")
            .single("c++", "cpp")
            .single("cpp", "cpp")
            .single("c#", "csharp")
            .single("csharp", "csharp")
            .unsupported("r")
    }
}

/// Resolves labels against a bank and alias table. Cheap to construct per request.
#[derive(Debug, Clone, Copy)]
pub struct TopicResolver<'a> {
    bank: &'a QuestionBank,
    aliases: &'a TopicAliases,
}

impl<'a> TopicResolver<'a> {
    pub fn new(bank: &'a QuestionBank, aliases: &'a TopicAliases) -> Self {
        Self { bank, aliases }
    }

    pub fn bank(&self) -> &'a QuestionBank {
        self.bank
    }

    /// Returns the topic keys for `label`, possibly empty. Never an error.
    pub fn resolve(&self, label: &str) -> Vec<String> {
        let label = label.trim().to_lowercase();
        if label.is_empty() {
            return Vec::new();
        }

        if self.bank.has_questions(&label) {
            return vec![label];
        }

        let aliased: Vec<String> = match self.aliases.lookup(&label) {
            AliasTarget::Unsupported => return Vec::new(),
            AliasTarget::NotFound => Vec::new(),
            AliasTarget::Single(topic) => self.keep_populated(std::slice::from_ref(topic)),
            AliasTarget::FanOut(topics) => self.keep_populated(topics),
        };
        if !aliased.is_empty() {
            return aliased;
        }

        [label.replace(' ', "_"), label.replace('_', " ")]
            .into_iter()
            .find(|variant| self.bank.has_questions(variant))
            .map(|variant| vec![variant])
            .unwrap_or_default()
    }

    fn keep_populated(&self, topics: &[String]) -> Vec<String> {
        topics
            .iter()
            .filter(|t| self.bank.has_questions(t))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank() -> QuestionBank {
        QuestionBank::from_rows([
            ("python", "What is a decorator?"),
            ("cpp", "What is RAII?"),
            ("csharp", "What is LINQ?"),
            ("problem_solving_soft", "Describe a hard bug."),
            ("problem_solving_mgmt", "How do you triage?"),
            ("time_management", "How do you prioritise?"),
            ("data structures", "What is a heap?"),
            ("r", "What is a data frame?"),
        ])
    }

    #[test]
    fn test_direct_topic_key() {
        let bank = bank();
        let aliases = TopicAliases::builtin();
        let resolver = TopicResolver::new(&bank, &aliases);
        assert_eq!(resolver.resolve("  Python "), vec!["python"]);
    }

    #[test]
    fn test_cpp_spellings_agree() {
        let bank = bank();
        let aliases = TopicAliases::builtin();
        let resolver = TopicResolver::new(&bank, &aliases);
        assert_eq!(resolver.resolve("c++"), resolver.resolve("cpp"));
        assert_eq!(resolver.resolve("C++"), vec!["cpp"]);
        assert_eq!(resolver.resolve("c#"), vec!["csharp"]);
    }

    #[test]
    fn test_fan_out_keeps_order() {
        let bank = bank();
        let aliases = TopicAliases::builtin();
        let resolver = TopicResolver::new(&bank, &aliases);
        let expected = vec!["problem_solving_soft", "problem_solving_mgmt"];
        assert_eq!(resolver.resolve("problem solving"), expected);
        assert_eq!(resolver.resolve("Problem_Solving"), expected);
    }

    #[test]
    fn test_fan_out_drops_missing_topics() {
        let bank = QuestionBank::from_rows([("problem_solving_mgmt", "How do you triage?")]);
        let aliases = TopicAliases::builtin();
        let resolver = TopicResolver::new(&bank, &aliases);
        assert_eq!(resolver.resolve("problem_solving"), vec!["problem_solving_mgmt"]);
    }

    #[test]
    fn test_alias_to_library_topic() {
        let bank = bank();
        let aliases = TopicAliases::builtin();
        let resolver = TopicResolver::new(&bank, &aliases);
        assert_eq!(resolver.resolve("pandas"), vec!["python"]);
        assert_eq!(resolver.resolve("machine_learning"), vec!["problem_solving_soft"]);
    }

    #[test]
    fn test_unsupported_alias_short_circuits() {
        // the space variant exists in the bank; the fallback must never be tried
        let bank = QuestionBank::from_rows([("r language", "What is a vector?")]);
        let aliases = TopicAliases::new().unsupported("r language");
        let resolver = TopicResolver::new(&bank, &aliases);
        assert_eq!(resolver.resolve("r_language"), Vec::<String>::new());
    }

    #[test]
    fn test_builtin_unsupported_r_is_empty_without_direct_key() {
        let bank = QuestionBank::from_rows([("python", "What is a decorator?")]);
        let aliases = TopicAliases::builtin();
        let resolver = TopicResolver::new(&bank, &aliases);
        assert!(resolver.resolve("R").is_empty());
        assert!(matches!(aliases.lookup("r"), AliasTarget::Unsupported));
    }

    #[test]
    fn test_underscore_and_space_fallbacks() {
        let bank = bank();
        let aliases = TopicAliases::new();
        let resolver = TopicResolver::new(&bank, &aliases);
        assert_eq!(resolver.resolve("time management"), vec!["time_management"]);
        assert_eq!(resolver.resolve("data_structures"), vec!["data structures"]);
    }

    #[test]
    fn test_alias_to_missing_topic_falls_through() {
        let bank = QuestionBank::from_rows([("time_management", "How do you prioritise?")]);
        let aliases = TopicAliases::new().single("time management", "scheduling");
        let resolver = TopicResolver::new(&bank, &aliases);
        assert_eq!(resolver.resolve("time management"), vec!["time_management"]);
    }

    #[test]
    fn test_unknown_label_is_empty() {
        let bank = bank();
        let aliases = TopicAliases::builtin();
        let resolver = TopicResolver::new(&bank, &aliases);
        assert!(resolver.resolve("underwater basket weaving").is_empty());
        assert!(resolver.resolve("   ").is_empty());
    }

    #[test]
    fn test_lookup_is_space_underscore_and_case_insensitive() {
        let aliases = TopicAliases::builtin();
        assert_eq!(
            aliases.lookup("Deep_Learning"),
            &AliasTarget::Single("problem_solving_soft".to_string())
        );
        assert_eq!(aliases.lookup("nothing here"), &AliasTarget::NotFound);
    }
}
