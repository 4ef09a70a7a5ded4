use chrono::{DateTime, FixedOffset};

/// Errors raised while loading a dictionary. Analysis itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read dictionary snapshot: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid dictionary snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error("dictionary snapshot from {updated_at} is older than the minimum supported {minimum}")]
    Outdated { updated_at: DateTime<FixedOffset>, minimum: DateTime<FixedOffset> },
    #[error("failed to build tokenizer pattern: {0}")]
    Pattern(#[from] regex::Error),
}
