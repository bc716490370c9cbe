//! Question Bank: topic key → ordered questions, loaded once from CSV.
//!
//! Loading never fails from the caller's point of view: a missing, unreadable or
//! empty source degrades to the built-in default bank.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum BankError {
    #[error("failed to read question bank: {0}")]
    Csv(#[from] csv::Error),

    #[error("question bank is missing the '{0}' column")]
    MissingColumn(&'static str),

    #[error("question bank contains no questions")]
    Empty,
}

/// Summary row for topic listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicSummary {
    pub topic: String,
    pub question_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionBank {
    topics: BTreeMap<String, Vec<String>>,
}

impl QuestionBank {
    /// Builds a bank from `(topic, question)` rows, folding topic keys.
    pub fn from_rows<I, T, Q>(rows: I) -> Self
    where
        I: IntoIterator<Item = (T, Q)>,
        T: AsRef<str>,
        Q: AsRef<str>,
    {
        let mut bank = Self::default();
        for (topic, question) in rows {
            bank.push(topic.as_ref(), question.as_ref());
        }
        bank
    }

    /// Parses CSV with `Topic` and `Question` columns. Bad rows are skipped.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, BankError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let topic_idx = column_index(&headers, "topic").ok_or(BankError::MissingColumn("Topic"))?;
        let question_idx =
            column_index(&headers, "question").ok_or(BankError::MissingColumn("Question"))?;

        let mut bank = Self::default();
        for (line, record) in csv_reader.records().enumerate() {
            let record = match record {
                Ok(r) => r,
                Err(e) => {
                    debug!("Skipping malformed question bank row {}: {e}", line + 2);
                    continue;
                }
            };
            match (record.get(topic_idx), record.get(question_idx)) {
                (Some(topic), Some(question)) => bank.push(topic, question),
                _ => debug!("Skipping incomplete question bank row {}", line + 2),
            }
        }

        if bank.question_count() == 0 {
            return Err(BankError::Empty);
        }
        Ok(bank)
    }

    /// Loads the bank from `path`, falling back to [`QuestionBank::builtin_default`].
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let loaded = std::fs::File::open(path)
            .map_err(|e| BankError::Csv(csv::Error::from(e)))
            .and_then(Self::from_csv_reader);

        match loaded {
            Ok(bank) => {
                info!(
                    "Loaded {} questions across {} topics from {}",
                    bank.question_count(),
                    bank.topic_count(),
                    path.display()
                );
                bank
            }
            Err(e) => {
                warn!(
                    "Question bank at {} unavailable ({e}); using built-in defaults",
                    path.display()
                );
                Self::builtin_default()
            }
        }
    }

    /// Small built-in bank used when no CSV source is usable.
    pub fn builtin_default() -> Self {
        Self::from_rows(DEFAULT_QUESTIONS.iter().flat_map(|(topic, questions)| {
            questions.iter().map(move |q| (*topic, *q))
        }))
    }

    fn push(&mut self, topic: &str, question: &str) {
        let topic = topic.trim().to_lowercase();
        let question = clean_question(question);
        if topic.is_empty() || question.is_empty() {
            return;
        }
        self.topics.entry(topic).or_default().push(question);
    }

    /// Questions for a topic key; empty if the key is unknown.
    pub fn questions(&self, topic: &str) -> &[String] {
        self.topics.get(topic).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True if `topic` is a key with at least one question.
    pub fn has_questions(&self, topic: &str) -> bool {
        !self.questions(topic).is_empty()
    }

    pub fn topics(&self) -> Vec<TopicSummary> {
        self.topics
            .iter()
            .map(|(topic, questions)| TopicSummary {
                topic: topic.clone(),
                question_count: questions.len(),
            })
            .collect()
    }

    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    pub fn question_count(&self) -> usize {
        self.topics.values().map(Vec::len).sum()
    }
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
}

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));
static NUMERIC_ENTITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&#(\d{1,7});").expect("valid entity regex"));

/// Unescapes common HTML entities, strips tags and collapses whitespace.
pub fn clean_question(raw: &str) -> String {
    let unescaped = NUMERIC_ENTITY_RE.replace_all(raw, |caps: &regex::Captures| {
        caps[1]
            .parse::<u32>()
            .ok()
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_default()
    });
    let unescaped = unescaped
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&");
    let stripped = TAG_RE.replace_all(&unescaped, "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

const DEFAULT_QUESTIONS: &[(&str, &[&str])] = &[
    ("python", &["What is Python?", "What are lists and tuples?"]),
    ("java", &["What is JVM?", "What is inheritance?"]),
    ("javascript", &["What is closure?", "What is event loop?"]),
    ("html", &["What is HTML?", "What are semantic tags?"]),
    ("css", &["What is CSS box model?", "What is flexbox?"]),
    ("sql", &["What is JOIN?", "What is primary key?"]),
    ("leadership", &["How do you lead a team?", "How do you handle conflicts?"]),
    ("communication", &["How do you handle difficult conversations?"]),
    ("problem_solving", &["How do you approach complex problems?"]),
    ("teamwork", &["How do you handle team conflicts?"]),
    ("percentages", &["What is 20% of 150?", "If 30% of a number is 60, what is the number?"]),
    ("averages", &["Find average of 5,10,15,20", "The average of 4 numbers is 15."]),
    ("probability", &["What is probability of getting heads?"]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CSV: &str = "Topic,Question\n\
        Python,What is a decorator?\n\
        python ,What is the GIL?\n\
        SQL,What is a JOIN?\n\
        ,Orphan question\n\
        Rust,\n\
        Python,What is a generator?\n";

    #[test]
    fn test_topics_are_folded_and_ordered() {
        let bank = QuestionBank::from_csv_reader(CSV.as_bytes()).unwrap();
        assert_eq!(
            bank.questions("python"),
            &[
                "What is a decorator?".to_string(),
                "What is the GIL?".to_string(),
                "What is a generator?".to_string(),
            ]
        );
        assert_eq!(bank.questions("sql").len(), 1);
    }

    #[test]
    fn test_blank_fields_are_skipped() {
        let bank = QuestionBank::from_csv_reader(CSV.as_bytes()).unwrap();
        assert!(!bank.has_questions("rust"));
        assert!(!bank.has_questions(""));
        assert_eq!(bank.question_count(), 4);
    }

    #[test]
    fn test_extra_columns_and_header_case_are_tolerated() {
        let csv = "id,question,TOPIC\n1,What is ownership?,rust\n2,What is a trait?,rust,extra\n";
        let bank = QuestionBank::from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(bank.questions("rust").len(), 2);
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let err = QuestionBank::from_csv_reader("Topic,Prompt\npython,x\n".as_bytes()).unwrap_err();
        assert!(matches!(err, BankError::MissingColumn("Question")));
    }

    #[test]
    fn test_header_only_is_empty() {
        let err = QuestionBank::from_csv_reader("Topic,Question\n".as_bytes()).unwrap_err();
        assert!(matches!(err, BankError::Empty));
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let bank = QuestionBank::load_or_default(dir.path().join("nope.csv"));
        assert_eq!(bank, QuestionBank::builtin_default());
        assert!(bank.has_questions("python"));
    }

    #[test]
    fn test_malformed_file_falls_back_to_default() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "just,some,columns").unwrap();
        writeln!(file, "a,b,c").unwrap();
        let bank = QuestionBank::load_or_default(file.path());
        assert_eq!(bank, QuestionBank::builtin_default());
    }

    #[test]
    fn test_valid_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CSV.as_bytes()).unwrap();
        let bank = QuestionBank::load_or_default(file.path());
        assert_eq!(bank.topic_count(), 2);
    }

    #[test]
    fn test_builtin_default_shape() {
        let bank = QuestionBank::builtin_default();
        assert_eq!(bank.topic_count(), 13);
        assert_eq!(bank.questions("averages").len(), 2);
    }

    #[test]
    fn test_clean_question_unescapes_and_strips() {
        assert_eq!(
            clean_question("  What is <b>a&nbsp;closure</b>?  &amp; why&#39;s it   useful&#63;"),
            "What is a closure? & why's it useful?"
        );
    }

    #[test]
    fn test_clean_question_of_markup_only_is_empty() {
        assert_eq!(clean_question("<br/> <p></p>"), "");
    }
}
