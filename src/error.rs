use std::path::PathBuf;

/// Failures at the edges of the engine: files, config, the extraction
/// service. The resolution core itself never fails; it only declines to
/// write.
#[derive(Debug, thiserror::Error)]
pub enum AutofillError {
    /// Reading or writing a local file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing or serialization failed
    #[error("JSON error ({context}): {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// YAML parsing failed
    #[error("YAML error ({context}): {source}")]
    Yaml {
        context: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// The extraction service could not be reached or the request failed
    #[error("extraction request to {endpoint} failed: {source}")]
    ExtractionTransport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The extraction service answered with a non-success status
    #[error("extraction service returned {status}: {body}")]
    ExtractionStatus { status: u16, body: String },

    /// The extraction service answered with something that is not a label map
    #[error("unexpected extraction response: {0}")]
    ExtractionShape(String),

    /// A malformed command-line value
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl AutofillError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AutofillError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        AutofillError::Json {
            context: context.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, AutofillError>;
