use anyhow::{Context, Result};

const BYTES_PER_MB: usize = 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub question_bank_path: String,
    pub max_upload_mb: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            question_bank_path: "interview_questions_complete.csv".to_string(),
            max_upload_mb: 10,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: parse_env("PORT", defaults.port).context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            question_bank_path: std::env::var("QUESTION_BANK_PATH")
                .unwrap_or(defaults.question_bank_path),
            max_upload_mb: parse_env("MAX_UPLOAD_MB", defaults.max_upload_mb)
                .context("MAX_UPLOAD_MB must be a whole number of megabytes")?,
        })
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb * BYTES_PER_MB
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid value '{raw}' for '{key}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.question_bank_path, "interview_questions_complete.csv");
        assert_eq!(config.max_upload_bytes(), 10 * 1024 * 1024);
    }

    #[test]
    fn test_parse_env_falls_back_when_unset() {
        let value: u16 = parse_env("SCREENING_API_TEST_UNSET_VAR", 42).unwrap();
        assert_eq!(value, 42);
    }
}
