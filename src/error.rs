//! Error type shared by every stage of the pipeline.
//!
//! Every variant is fatal for the current run: nothing is retried and no
//! partial report is rendered.

use std::path::PathBuf;
use std::{error::Error, fmt, io};

#[derive(Debug)]
pub enum ContribError {
    /// Bad repository root, ignore file, glob, config file or output directory.
    Config(String),
    /// The language classifier is missing, failed, or produced garbage.
    Classifier(String),
    /// Line attribution failed for one file.
    Attribution { path: PathBuf, reason: String },
    /// The repository cannot be opened or the revision cannot be resolved.
    Repository(String),
    /// An error raised while processing one language bucket.
    InLanguage {
        language: String,
        source: Box<ContribError>,
    },
    Io(io::Error),
}

impl ContribError {
    /// Annotate this error with the language bucket being processed.
    pub fn in_language(self, language: &str) -> Self {
        Self::InLanguage {
            language: language.to_string(),
            source: Box::new(self),
        }
    }
}

impl fmt::Display for ContribError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(message) => write!(f, "config error: {message}"),
            Self::Classifier(message) => write!(f, "classifier error: {message}"),
            Self::Attribution { path, reason } => {
                write!(f, "attribution error: {}: {reason}", path.display())
            }
            Self::Repository(message) => write!(f, "repository error: {message}"),
            Self::InLanguage { language, source } => write!(f, "{language}: {source}"),
            Self::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl Error for ContribError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InLanguage { source, .. } => Some(source.as_ref()),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ContribError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<git2::Error> for ContribError {
    fn from(value: git2::Error) -> Self {
        Self::Repository(value.message().to_string())
    }
}

pub type Result<T> = std::result::Result<T, ContribError>;
