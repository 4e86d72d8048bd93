//! Pipeline driver - from an interface name to a source file or a jar
//!
//! Stages of an archive build:
//! 1. resolve the interface and the destination paths
//! 2. generate and write the source into a fresh workspace
//! 3. compile it with the external compiler
//! 4. package the class file as the single entry of the jar
//! 5. remove the workspace, whatever happened before
//!
//! Concurrent builds writing the same archive path are not coordinated.

pub mod report;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::backend::synth::{self, CLASS_EXTENSION, SOURCE_EXTENSION};
use crate::backend::{BuildWorkspace, Compiler, GeneratedUnit, JarWriter};
use crate::frontend::{extract_abstract_methods, Introspector};
use crate::types::InterfaceDescriptor;
use crate::utils::{Error, Result};

pub use report::{ArchiveReport, ErrorReport, MethodReport, SourceOutcome};

/// Generates default implementations of interfaces
pub struct Implementor<I, C> {
    introspector: I,
    compiler: C,
}

impl<I: Introspector, C: Compiler> Implementor<I, C> {
    pub fn new(introspector: I, compiler: C) -> Self {
        Self { introspector, compiler }
    }

    /// Describe `identifier` and check that it can be implemented
    pub fn resolve(&self, identifier: &str) -> Result<InterfaceDescriptor> {
        InterfaceDescriptor::try_from(self.introspector.describe(identifier)?)
    }

    /// The abstract methods a generated class would implement
    pub fn methods(&self, identifier: &str) -> Result<MethodReport> {
        let descriptor = self.resolve(identifier)?;
        Ok(MethodReport {
            interface: descriptor.canonical_name().to_string(),
            methods: extract_abstract_methods(&descriptor),
        })
    }

    /// Write `<Name>Impl.java` under `output_root`, mirroring the package.
    ///
    /// Only an invalid interface is an error; failing to write the file is
    /// logged and reported through [`SourceOutcome::WriteFailed`].
    pub fn generate_source(&self, identifier: &str, output_root: &Path) -> Result<SourceOutcome> {
        let descriptor = self.resolve(identifier)?;
        let path = synth::impl_path(output_root, &descriptor, SOURCE_EXTENSION);

        match write_source(&descriptor, &path) {
            Ok(unit) => {
                info!("Generated {} ({} methods)", path.display(), unit.method_count);
                Ok(SourceOutcome::Written {
                    path,
                    class_name: unit.class_name,
                    method_count: unit.method_count,
                })
            }
            Err(e) => {
                warn!("Could not create file {}: {}", path.display(), e);
                Ok(SourceOutcome::WriteFailed { path, cause: e.to_string() })
            }
        }
    }

    /// Generate, compile and package the implementation into `archive_path`.
    ///
    /// Every stage failure is fatal. The workspace is removed on every path;
    /// cleanup problems are logged and listed in the report.
    pub fn generate_archive(&self, identifier: &str, archive_path: &Path) -> Result<ArchiveReport> {
        let descriptor = self.resolve(identifier)?;

        let archive_path = absolute(archive_path)?;
        let parent = match archive_path.parent() {
            Some(parent) => parent.to_path_buf(),
            None => return Err(Error::path_creation(&archive_path, "archive path has no parent")),
        };
        fs::create_dir_all(&parent).map_err(|e| Error::path_creation(&parent, e))?;

        let workspace = BuildWorkspace::acquire(&parent)?;
        debug!("Workspace {}", workspace.path().display());

        let built = self.build_in(&descriptor, workspace.path(), &archive_path);

        let cleanup_failures = workspace.cleanup();
        for failure in &cleanup_failures {
            warn!("{}", failure);
        }

        let (unit, entry_name, class_bytes) = built?;
        info!("Packaged {} into {}", entry_name, archive_path.display());
        Ok(ArchiveReport {
            interface: unit.interface,
            artifact: archive_path,
            entry_name,
            source_bytes: unit.text.len(),
            class_bytes,
            cleanup_failures,
        })
    }

    fn build_in(
        &self,
        descriptor: &InterfaceDescriptor,
        workspace: &Path,
        archive_path: &Path,
    ) -> Result<(GeneratedUnit, String, usize)> {
        let source = synth::impl_path(workspace, descriptor, SOURCE_EXTENSION);
        let unit = write_source(descriptor, &source)?;
        info!("Generated {} ({} methods)", unit.class_name, unit.method_count);

        let mut classpath = vec![workspace.to_path_buf()];
        if let Some(code_source) = descriptor.code_source() {
            classpath.push(code_source.to_path_buf());
        }

        let outcome = self.compiler.compile(&classpath, &source)?;
        if !outcome.success() {
            let status = match outcome.exit_code {
                Some(code) => code.to_string(),
                None => "signal".to_string(),
            };
            return Err(Error::Compilation {
                message: format!("{} exited with status {}", self.compiler.name(), status),
                diagnostics: outcome.diagnostics,
            });
        }
        info!("Compiled {} with {}", unit.class_name, self.compiler.name());

        let class_file = synth::impl_path(workspace, descriptor, CLASS_EXTENSION);
        let bytes = fs::read(&class_file).map_err(|e| {
            let cause = format!("could not read {}: {}", class_file.display(), e);
            Error::packaging(archive_path, cause)
        })?;

        let entry_name = synth::impl_file_name(descriptor, "/", CLASS_EXTENSION);
        let mut jar = JarWriter::create(archive_path)?;
        jar.add_entry(&entry_name, &bytes)?;
        jar.finish()?;

        Ok((unit, entry_name, bytes.len()))
    }
}

/// Synthesize the unit for `descriptor` and write it to `path`
fn write_source(descriptor: &InterfaceDescriptor, path: &Path) -> Result<GeneratedUnit> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::path_creation(parent, e))?;
    }
    let unit = synth::synthesize(descriptor);
    fs::write(path, &unit.text).map_err(|e| Error::path_creation(path, e))?;
    Ok(unit)
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|e| Error::path_creation(path, e))
}
