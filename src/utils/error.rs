//! Error handling for implgen

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Generator error
#[derive(Error, Debug, Clone)]
pub enum Error {
    // ==================== Input Errors ====================

    /// The requested type is not an implementable interface
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A type manifest could not be read or parsed
    #[error("Manifest error: {0}")]
    Manifest(String),

    // ==================== Pipeline Errors ====================

    #[error("Could not create path {}: {cause}", path.display())]
    PathCreation { path: PathBuf, cause: String },

    #[error("Could not compile class: {message}")]
    Compilation { message: String, diagnostics: String },

    #[error("Could not create jar file {}: {cause}", path.display())]
    Packaging { path: PathBuf, cause: String },
}

impl Error {
    pub fn path_creation(path: impl Into<PathBuf>, cause: impl ToString) -> Self {
        Self::PathCreation { path: path.into(), cause: cause.to_string() }
    }

    pub fn packaging(path: impl Into<PathBuf>, cause: impl ToString) -> Self {
        Self::Packaging { path: path.into(), cause: cause.to_string() }
    }

    /// Stable short name of the error kind (used in logs and JSON reports)
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::Manifest(_) => "manifest",
            Self::PathCreation { .. } => "path_creation",
            Self::Compilation { .. } => "compilation",
            Self::Packaging { .. } => "packaging",
        }
    }

    /// Compiler diagnostics attached to a compilation failure
    pub fn diagnostics(&self) -> Option<&str> {
        match self {
            Self::Compilation { diagnostics, .. } if !diagnostics.is_empty() => Some(diagnostics),
            _ => None,
        }
    }
}

/// A file or directory that could not be removed from a build workspace.
///
/// Never an error: cleanup is best-effort and only reported.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CleanupFailure {
    pub path: PathBuf,
    pub cause: String,
}

impl fmt::Display for CleanupFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Could not clear temp path {}: {}", self.path.display(), self.cause)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compilation_diagnostics() {
        let err = Error::Compilation {
            message: "javac exited with status 1".to_string(),
            diagnostics: "FooImpl.java:3: error: cannot find symbol".to_string(),
        };
        assert_eq!(err.kind(), "compilation");
        assert!(err.diagnostics().unwrap().contains("cannot find symbol"));
        assert_eq!(err.to_string(), "Could not compile class: javac exited with status 1");
    }

    #[test]
    fn test_empty_diagnostics_are_absent() {
        let err = Error::Compilation { message: "m".to_string(), diagnostics: String::new() };
        assert!(err.diagnostics().is_none());
        assert!(Error::InvalidInput("x".to_string()).diagnostics().is_none());
    }

    #[test]
    fn test_path_messages() {
        let err = Error::path_creation("/tmp/out", "permission denied");
        assert_eq!(err.kind(), "path_creation");
        assert_eq!(err.to_string(), "Could not create path /tmp/out: permission denied");
    }
}
