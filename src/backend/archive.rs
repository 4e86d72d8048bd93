//! Jar archive writer
//!
//! A jar is a zip file. Entries are stamped with a fixed timestamp so that
//! packaging the same class bytes twice yields identical entries.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::utils::{Error, Result};

/// Archive open for writing; entries are added in order
pub struct JarWriter {
    path: PathBuf,
    zip: ZipWriter<File>,
    entries: usize,
}

impl JarWriter {
    /// Create (or truncate) the archive at `path`
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|e| Error::packaging(path, e))?;
        Ok(Self { path: path.to_path_buf(), zip: ZipWriter::new(file), entries: 0 })
    }

    fn options() -> SimpleFileOptions {
        SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default())
            .unix_permissions(0o644)
    }

    /// Add `bytes` as entry `name`; names always use `/` separators
    pub fn add_entry(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        if name.is_empty() || name.starts_with('/') || name.contains('\\') {
            return Err(Error::packaging(&self.path, format!("Invalid entry name: {:?}", name)));
        }
        self.zip
            .start_file(name, Self::options())
            .map_err(|e| Error::packaging(&self.path, e))?;
        self.zip.write_all(bytes).map_err(|e| Error::packaging(&self.path, e))?;
        self.entries += 1;
        Ok(())
    }

    pub fn entry_count(&self) -> usize {
        self.entries
    }

    /// Write the central directory and close the file
    pub fn finish(self) -> Result<PathBuf> {
        let file = self.zip.finish().map_err(|e| Error::packaging(&self.path, e))?;
        file.sync_all().map_err(|e| Error::packaging(&self.path, e))?;
        Ok(self.path)
    }
}
