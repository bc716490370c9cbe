use std::sync::Arc;

use crate::config::Config;
use crate::interview::bank::QuestionBank;
use crate::interview::AnswerScorer;
use crate::interview::topics::{TopicAliases, TopicResolver};
use crate::screening::signals::SkillSignalTable;

/// Read-only reference data, built once at startup and shared by every request.
#[derive(Debug)]
pub struct Catalog {
    pub signals: SkillSignalTable,
    pub bank: QuestionBank,
    pub aliases: TopicAliases,
}

impl Catalog {
    pub fn resolver(&self) -> TopicResolver<'_> {
        TopicResolver::new(&self.bank, &self.aliases)
    }
}

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<Catalog>,
    /// Pluggable answer scorer. Default: LexicalAnswerScorer.
    pub scorer: Arc<dyn AnswerScorer>,
}
