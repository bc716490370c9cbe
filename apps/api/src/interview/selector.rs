//! Question Selector: draws non-repeating questions per topic quota.
//!
//! Guarantee: the result length is exactly the sum of requested counts.
//! Shortfalls are backfilled by wrapping around the topic pool, or with
//! templated prompts when the label resolves to nothing.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::interview::topics::TopicResolver;
use crate::models::interview::{AskedQuestionHistory, SelectionRequest};

const FALLBACK_TEMPLATE_COUNT: usize = 5;

#[derive(Debug, Clone)]
pub struct SelectionOutcome {
    pub questions: Vec<String>,
    pub history: AskedQuestionHistory,
}

pub struct QuestionSelector<'a> {
    resolver: TopicResolver<'a>,
}

impl<'a> QuestionSelector<'a> {
    pub fn new(resolver: TopicResolver<'a>) -> Self {
        Self { resolver }
    }

    /// Selects questions for every request and returns them with the grown history.
    ///
    /// The input history is not modified; the caller persists the returned one.
    pub fn select<R: Rng + ?Sized>(
        &self,
        requests: &[SelectionRequest],
        history: &AskedQuestionHistory,
        rng: &mut R,
    ) -> SelectionOutcome {
        let mut history = history.clone();
        let mut questions = Vec::new();

        for request in requests.iter().filter(|r| r.requested_count > 0) {
            let picked = self.select_for_request(request, &history, rng);
            for q in &picked {
                history.record(q);
            }
            questions.extend(picked);
        }

        questions.shuffle(rng);
        info!(
            "Selected {} questions for {} topic requests",
            questions.len(),
            requests.len()
        );

        SelectionOutcome { questions, history }
    }

    fn select_for_request<R: Rng + ?Sized>(
        &self,
        request: &SelectionRequest,
        history: &AskedQuestionHistory,
        rng: &mut R,
    ) -> Vec<String> {
        let count = request.requested_count;
        let topics = self.resolver.resolve(&request.topic_label);

        let pool: Vec<&String> = topics
            .iter()
            .flat_map(|t| self.resolver.bank().questions(t))
            .collect();

        if pool.is_empty() {
            debug!(
                "No bank topic for '{}', using templated questions",
                request.topic_label
            );
            return fallback_questions(&request.topic_label, count);
        }

        let mut available: Vec<&String> = pool
            .iter()
            .copied()
            .filter(|q| !history.contains(q))
            .collect();
        available.shuffle(rng);

        if available.len() >= count {
            return available.into_iter().take(count).cloned().collect();
        }

        let shortfall = count - available.len();
        debug!(
            "Pool for '{}' exhausted ({} fresh of {} requested), backfilling {}",
            request.topic_label,
            available.len(),
            count,
            shortfall
        );

        available
            .into_iter()
            .chain((0..shortfall).map(|i| pool[i % pool.len()]))
            .cloned()
            .collect()
    }
}

/// Title-cases a label for templated prompts (`"problem_solving"` → `"Problem Solving"`).
fn display_label(label: &str) -> String {
    label
        .replace('_', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn fallback_template(index: usize, label: &str) -> String {
    match index % FALLBACK_TEMPLATE_COUNT {
        0 => format!("Describe your experience with {label}."),
        1 => format!("What are best practices in {label}?"),
        2 => format!("Give an example of applying {label} in a real project."),
        3 => format!("What challenges have you faced with {label}?"),
        _ => format!("How have you improved your {label} skills?"),
    }
}

fn fallback_questions(label: &str, count: usize) -> Vec<String> {
    let label = display_label(label);
    (0..count).map(|i| fallback_template(i, &label)).collect()
}
