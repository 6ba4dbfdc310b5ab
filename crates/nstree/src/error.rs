pub type Result<T> = std::result::Result<T, Error>;

/// Represents errors that can occur in namespace operations.
///
/// Lookups and removals report absence through `NotFound`; only reads
/// report `FileNotFound`, carrying the path exactly as the caller wrote it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The path split to zero segments, so no folder can be addressed.
    #[error("Invalid path: {0:?} has no segments")]
    InvalidPath(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    /// A folder, file, name or stale handle is not present where it was sought.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("File content is not valid UTF-8: {0}")]
    InvalidUtf8(String),
}

impl Error {
    pub fn invalid_path<S: AsRef<str>>(path: S) -> Self {
        Error::InvalidPath(path.as_ref().to_string())
    }

    pub fn file_not_found<S: AsRef<str>>(path: S) -> Self {
        Error::FileNotFound(path.as_ref().to_string())
    }

    pub fn not_found<S: AsRef<str>>(what: S) -> Self {
        Error::NotFound(what.as_ref().to_string())
    }

    pub fn invalid_utf8<S: AsRef<str>>(path: S) -> Self {
        Error::InvalidUtf8(path.as_ref().to_string())
    }

    /// True for the benign "nothing there" outcomes of lookup and removal.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_) | Error::FileNotFound(_))
    }
}
