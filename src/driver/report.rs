//! Structured results of pipeline runs
//!
//! Reports serialize to JSON for `--format json`.

use std::path::PathBuf;

use serde::Serialize;

use crate::types::MethodSignature;
use crate::utils::{CleanupFailure, Error};

/// Result of the source-only entry point
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SourceOutcome {
    Written {
        path: PathBuf,
        class_name: String,
        method_count: usize,
    },
    /// The source could not be written; reported but not fatal
    WriteFailed {
        path: PathBuf,
        cause: String,
    },
}

impl SourceOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written { .. })
    }

    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Written { path, .. } | Self::WriteFailed { path, .. } => path,
        }
    }
}

/// Result of a successful archive build
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveReport {
    pub interface: String,
    pub artifact: PathBuf,
    /// Archive entry holding the compiled class, `/`-separated
    pub entry_name: String,
    pub source_bytes: usize,
    pub class_bytes: usize,
    /// Leftovers of workspace cleanup; never fatal
    pub cleanup_failures: Vec<CleanupFailure>,
}

/// Abstract surface of an interface, for `implgen methods`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodReport {
    pub interface: String,
    pub methods: Vec<MethodSignature>,
}

/// Serializable form of a fatal error
#[derive(Debug, Clone, Serialize)]
pub struct ErrorReport {
    pub kind: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<String>,
}

impl From<&Error> for ErrorReport {
    fn from(error: &Error) -> Self {
        Self {
            kind: error.kind(),
            message: error.to_string(),
            diagnostics: error.diagnostics().map(str::to_string),
        }
    }
}

/// Output as pretty JSON
pub fn to_json<T: Serialize>(report: &T) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_source_outcome_json() {
        let outcome = SourceOutcome::WriteFailed {
            path: PathBuf::from("out/geo/ShapeImpl.java"),
            cause: "read-only file system".to_string(),
        };
        let value: Value = serde_json::from_str(&to_json(&outcome)).unwrap();
        assert_eq!(value["status"], "write_failed");
        assert_eq!(value["cause"], "read-only file system");
        assert!(!outcome.is_written());
    }

    #[test]
    fn test_error_report() {
        let err = Error::Compilation {
            message: "javac exited with status 1".to_string(),
            diagnostics: "boom".to_string(),
        };
        let value = serde_json::to_value(ErrorReport::from(&err)).unwrap();
        assert_eq!(
            value,
            json!({
                "kind": "compilation",
                "message": "Could not compile class: javac exited with status 1",
                "diagnostics": "boom"
            })
        );

        let err = Error::InvalidInput("x".to_string());
        let value = serde_json::to_value(ErrorReport::from(&err)).unwrap();
        assert!(value.get("diagnostics").is_none());
    }

    #[test]
    fn test_method_report_types_are_strings() {
        use crate::types::{Parameter, TypeRef};
        let report = MethodReport {
            interface: "geo.Shape".to_string(),
            methods: vec![MethodSignature::new(
                "scale",
                TypeRef::VOID,
                vec![Parameter::new(TypeRef::DOUBLE, "f")],
            )],
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["methods"][0]["return_type"], "void");
        assert_eq!(value["methods"][0]["parameters"][0]["type"], "double");
    }
}
