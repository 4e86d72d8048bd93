//! External compiler invocation
//!
//! The compiler is a blocking call that reports its exit status and whatever
//! it printed. The pipeline decides what a failure means.

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::debug;

use crate::utils::{Error, Result};

/// Environment variable overriding the compiler binary
pub const JAVAC_ENV: &str = "IMPLGEN_JAVAC";

/// Exit status and captured output of one compiler run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOutcome {
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub diagnostics: String,
}

impl CompileOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Compiler backend trait
pub trait Compiler {
    /// Compile `source` against `classpath`, leaving output next to the source
    fn compile(&self, classpath: &[PathBuf], source: &Path) -> Result<CompileOutcome>;

    /// Get the backend name
    fn name(&self) -> &str;
}

/// The platform compiler run as a subprocess
#[derive(Debug, Clone)]
pub struct Javac {
    program: PathBuf,
}

impl Javac {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into() }
    }

    /// `$IMPLGEN_JAVAC` if set, otherwise `javac` from `PATH`
    pub fn from_env() -> Self {
        match env::var_os(JAVAC_ENV) {
            Some(program) if !program.is_empty() => Self::new(program),
            _ => Self::new("javac"),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for Javac {
    fn default() -> Self {
        Self::from_env()
    }
}

impl Compiler for Javac {
    fn compile(&self, classpath: &[PathBuf], source: &Path) -> Result<CompileOutcome> {
        let joined = env::join_paths(classpath).map_err(|e| Error::Compilation {
            message: format!("Invalid classpath entry: {}", e),
            diagnostics: String::new(),
        })?;
        debug!("{} -cp {:?} {}", self.program.display(), joined, source.display());

        let output = Command::new(&self.program)
            .arg("-cp")
            .arg(&joined)
            .arg(source)
            .output()
            .map_err(|e| Error::Compilation {
                message: format!("Could not run {}: {}", self.program.display(), e),
                diagnostics: String::new(),
            })?;

        let mut diagnostics = String::from_utf8_lossy(&output.stderr).to_string();
        diagnostics.push_str(&String::from_utf8_lossy(&output.stdout));

        Ok(CompileOutcome { exit_code: output.status.code(), diagnostics })
    }

    fn name(&self) -> &str {
        "javac"
    }
}
