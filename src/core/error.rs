use std::fmt;
use std::path::PathBuf;

/// Error types for headerstrip operations
#[derive(Debug)]
pub enum HeaderStripError {
    /// IO error not tied to a specific candidate file
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Removal pattern compilation error
    Regex(regex::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// JSON serialization error
    Json(serde_json::Error),

    /// Directory walking error
    FileWalking(ignore::Error),

    /// Root directory not found
    FileNotFound(String),

    /// Invalid argument error
    InvalidArgument(String),

    /// Candidate file is not valid UTF-8
    Encoding(String),

    /// Reading or writing a candidate file failed
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl HeaderStripError {
    /// Attach a path to an IO error raised while touching a candidate file.
    ///
    /// Invalid UTF-8 becomes [`HeaderStripError::Encoding`] so callers can
    /// tell unreadable bytes apart from permission and disk failures.
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::InvalidData {
            HeaderStripError::Encoding(path.display().to_string())
        } else {
            HeaderStripError::FileAccess { path, source }
        }
    }
}

impl fmt::Display for HeaderStripError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderStripError::Io(err) => write!(f, "IO error: {err}"),
            HeaderStripError::Config(msg) => write!(f, "Configuration error: {msg}"),
            HeaderStripError::Regex(err) => write!(f, "Regex error: {err}"),
            HeaderStripError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            HeaderStripError::Json(err) => write!(f, "JSON error: {err}"),
            HeaderStripError::FileWalking(err) => write!(f, "File walking error: {err}"),
            HeaderStripError::FileNotFound(path) => write!(f, "File not found: {path}"),
            HeaderStripError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            HeaderStripError::Encoding(path) => {
                write!(f, "Encoding error: {path} is not valid UTF-8")
            }
            HeaderStripError::FileAccess { path, source } => {
                write!(f, "File access error: {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for HeaderStripError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HeaderStripError::Io(err) => Some(err),
            HeaderStripError::Regex(err) => Some(err),
            HeaderStripError::TomlParsing(err) => Some(err),
            HeaderStripError::Json(err) => Some(err),
            HeaderStripError::FileWalking(err) => Some(err),
            HeaderStripError::FileAccess { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for HeaderStripError {
    fn from(err: std::io::Error) -> Self {
        HeaderStripError::Io(err)
    }
}

impl From<regex::Error> for HeaderStripError {
    fn from(err: regex::Error) -> Self {
        HeaderStripError::Regex(err)
    }
}

impl From<toml::de::Error> for HeaderStripError {
    fn from(err: toml::de::Error) -> Self {
        HeaderStripError::TomlParsing(err)
    }
}

impl From<serde_json::Error> for HeaderStripError {
    fn from(err: serde_json::Error) -> Self {
        HeaderStripError::Json(err)
    }
}

impl From<ignore::Error> for HeaderStripError {
    fn from(err: ignore::Error) -> Self {
        HeaderStripError::FileWalking(err)
    }
}

/// Type alias for Results using HeaderStripError
pub type Result<T> = std::result::Result<T, HeaderStripError>;
