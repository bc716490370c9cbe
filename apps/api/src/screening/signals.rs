//! Skill Signal Table: declarative skill → signal mapping, compiled once at startup.
//!
//! Each signal becomes a matcher:
//! - contains a space or is ≤ 2 chars → raw substring test
//! - otherwise → whole-word regex (`\bjava\b` must not hit "javascript")

use std::collections::HashSet;

use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SignalTableError {
    #[error("skill '{0}' appears more than once in the signal table")]
    DuplicateSkill(String),

    #[error("skill '{skill}' has no signals")]
    EmptySignals { skill: String },

    #[error("signal '{signal}' for skill '{skill}' failed to compile: {source}")]
    InvalidSignal {
        skill: String,
        signal: String,
        #[source]
        source: regex::Error,
    },
}

/// How a single signal is tested against lower-cased text.
#[derive(Debug, Clone)]
pub enum SignalMatcher {
    Substring(String),
    WholeWord(Regex),
}

impl SignalMatcher {
    fn compile(signal: &str) -> Result<Self, regex::Error> {
        let signal = signal.to_lowercase();
        if signal.contains(' ') || signal.chars().count() <= 2 {
            Ok(Self::Substring(signal))
        } else {
            let pattern = format!(r"\b{}\b", regex::escape(&signal));
            Ok(Self::WholeWord(Regex::new(&pattern)?))
        }
    }

    pub fn is_match(&self, text_lower: &str) -> bool {
        match self {
            Self::Substring(s) => text_lower.contains(s.as_str()),
            Self::WholeWord(re) => re.is_match(text_lower),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SkillSignal {
    pub skill_id: String,
    matchers: Vec<SignalMatcher>,
}

impl SkillSignal {
    pub fn matchers(&self) -> &[SignalMatcher] {
        &self.matchers
    }
}

/// Immutable, ordered table of skills and their compiled matchers.
#[derive(Debug, Clone)]
pub struct SkillSignalTable {
    entries: Vec<SkillSignal>,
}

impl SkillSignalTable {
    /// Builds a table, rejecting duplicate skill ids and uncompilable signals.
    pub fn new<I, S, T>(entries: I) -> Result<Self, SignalTableError>
    where
        I: IntoIterator<Item = (S, Vec<T>)>,
        S: Into<String>,
        T: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut compiled = Vec::new();

        for (skill_id, signals) in entries {
            let skill_id: String = skill_id.into();
            if !seen.insert(skill_id.clone()) {
                return Err(SignalTableError::DuplicateSkill(skill_id));
            }
            let signals: Vec<String> = signals.into_iter().map(Into::into).collect();
            if signals.is_empty() {
                return Err(SignalTableError::EmptySignals { skill: skill_id });
            }
            let matchers = signals
                .iter()
                .map(|signal| {
                    SignalMatcher::compile(signal).map_err(|source| {
                        SignalTableError::InvalidSignal {
                            skill: skill_id.clone(),
                            signal: signal.clone(),
                            source,
                        }
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            compiled.push(SkillSignal { skill_id, matchers });
        }

        Ok(Self { entries: compiled })
    }

    /// The built-in table of technical and management skills.
    pub fn builtin() -> Result<Self, SignalTableError> {
        Self::new(
            BUILTIN_SKILL_SIGNALS
                .iter()
                .map(|(skill, signals)| (*skill, signals.to_vec())),
        )
    }

    pub fn entries(&self) -> &[SkillSignal] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Built-in signals
// ────────────────────────────────────────────────────────────────────────────

const BUILTIN_SKILL_SIGNALS: &[(&str, &[&str])] = &[
    // Technical
    ("python", &["python", "django", "flask", "fastapi", "pandas", "numpy", "tensorflow", "pytorch", "scikit"]),
    ("java", &["java", "spring", "hibernate", "maven", "gradle", "jvm", "junit"]),
    ("javascript", &["javascript", "js", "node.js", "nodejs", "es6", "ecmascript"]),
    ("typescript", &["typescript", "ts"]),
    ("c", &["c programming", "c language"]),
    ("cpp", &["c++", "cpp"]),
    ("csharp", &["c#", "csharp", ".net", "dotnet", "asp.net"]),
    ("go", &["golang", "go language", " go "]),
    ("ruby", &["ruby", "rails", "ruby on rails"]),
    ("php", &["php", "laravel", "symfony", "codeigniter"]),
    ("kotlin", &["kotlin"]),
    ("swift", &["swift", "swiftui", "ios development"]),
    ("scala", &["scala", "akka", "spark"]),
    ("rust", &["rust", "cargo"]),
    ("r", &["r programming", "rstudio", "r language", "tidyverse"]),
    ("dart", &["dart", "flutter"]),
    ("html", &["html", "html5"]),
    ("css", &["css", "css3", "sass", "scss", "less"]),
    ("react", &["react", "reactjs", "react.js", "redux", "next.js", "nextjs"]),
    ("angular", &["angular", "angularjs"]),
    ("vue", &["vue", "vuejs", "vue.js", "nuxt"]),
    ("spring", &["spring boot", "spring mvc", "spring framework", "spring security"]),
    ("django", &["django"]),
    ("flask", &["flask"]),
    ("nodejs", &["node.js", "nodejs", "express.js", "express"]),
    ("bootstrap", &["bootstrap"]),
    ("tailwind", &["tailwind"]),
    ("sql", &["sql", "structured query", "database query"]),
    ("mysql", &["mysql"]),
    ("postgresql", &["postgresql", "postgres"]),
    ("mongodb", &["mongodb", "mongoose"]),
    ("redis", &["redis"]),
    ("sqlite", &["sqlite"]),
    ("oracle", &["oracle db", "oracle database", "pl/sql"]),
    ("nosql", &["nosql"]),
    ("firebase", &["firebase", "firestore"]),
    ("elasticsearch", &["elasticsearch", "elastic search", "kibana"]),
    ("aws", &["aws", "amazon web services", "ec2", "s3", "lambda", "rds"]),
    ("azure", &["azure", "microsoft azure"]),
    ("gcp", &["gcp", "google cloud", "cloud platform"]),
    ("docker", &["docker", "containerization", "dockerfile"]),
    ("kubernetes", &["kubernetes", "k8s", "kubectl"]),
    ("git", &["git", "github", "gitlab", "version control"]),
    ("linux", &["linux", "ubuntu", "centos", "unix", "bash scripting"]),
    ("jenkins", &["jenkins", "ci/cd", "pipeline"]),
    ("terraform", &["terraform", "infrastructure as code"]),
    ("machine learning", &[
        "machine learning", "ml", "neural network", "deep learning", "ai model",
        "tensorflow", "pytorch", "scikit-learn", "sklearn", "keras",
    ]),
    ("data science", &[
        "data science", "data scientist", "data analysis", "pandas", "numpy",
        "matplotlib", "seaborn", "tableau", "power bi", "powerbi",
    ]),
    ("android", &["android", "android studio", "android development"]),
    ("flutter", &["flutter", "dart"]),
    ("react native", &["react native"]),
    // Management
    ("leadership", &["leadership", "leader", "led a team", "team lead", "managing team"]),
    ("team_management", &["team management", "managed team", "team of", "supervised", "oversaw"]),
    ("project_management", &["project management", "project manager", "pmp", "agile", "scrum", "kanban", "jira"]),
    ("communication", &[
        "communication", "presented", "presentation", "verbal", "written communication",
        "stakeholder", "client communication",
    ]),
    ("problem_solving", &[
        "problem solving", "problem-solving", "troubleshooting", "analytical",
        "root cause", "debugging",
    ]),
    ("teamwork", &["teamwork", "team player", "collaboration", "collaborated", "cross-functional"]),
    ("time_management", &["time management", "deadline", "prioritization", "organized"]),
    ("adaptability", &["adaptability", "adaptable", "flexible", "quick learner", "fast learner"]),
    ("critical_thinking", &["critical thinking", "analytical thinking", "logical thinking"]),
    ("decision_making", &["decision making", "decision-making", "strategic decisions"]),
    ("training", &["training", "mentoring", "mentor", "coached", "onboarding"]),
    ("recruitment", &["recruitment", "hiring", "talent acquisition", "hr", "human resources"]),
    ("agile", &["agile", "scrum", "sprint", "retrospective", "standup"]),
    ("conflict_resolution", &["conflict resolution", "conflict management", "mediation"]),
    ("strategic_planning", &["strategic planning", "strategy", "roadmap", "long-term"]),
    ("risk_management", &["risk management", "risk assessment", "mitigation"]),
    ("negotiation", &["negotiation", "negotiated", "vendor negotiation"]),
    ("change_management", &["change management", "organizational change", "transformation"]),
];
