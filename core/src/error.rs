use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CpvError>;

#[derive(Debug, Error)]
pub enum CpvError {
    #[error("could not open `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not read CSV `{path}`: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A non-empty field that does not hold a valid value.
    #[error("line {line}: invalid {field} `{value}`: {reason}")]
    Parse {
        line: u64,
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("could not render report: {0}")]
    Render(#[from] serde_json::Error),
}

impl CpvError {
    pub fn parse(line: u64, field: &'static str, value: &str, reason: impl ToString) -> Self {
        CpvError::Parse {
            line,
            field,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}
