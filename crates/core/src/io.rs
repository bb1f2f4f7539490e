//! Font enumeration and stylesheet I/O.

use std::{
    fs::{create_dir_all, read_to_string, write},
    path::{Path, PathBuf},
};

use glob::{Pattern, glob};
use log::trace;

use crate::{
    config::ScanDepth,
    error::{Error, Result},
    styles::{FontFormat, derive_format},
};

/// A font file found while scanning a family directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFile {
    path: PathBuf,
    format: FontFormat,
    base_name: String,
}

impl FontFile {
    /// Returns `None` unless the path carries one of the accepted font extensions.
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let format = derive_format(&path)?;
        let base_name = path.file_stem()?.to_string_lossy().into_owned();
        Some(Self { path, format, base_name })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> FontFormat {
        self.format
    }

    /// File name without its extension.
    pub fn base_name(&self) -> &str {
        &self.base_name
    }
}

/// List font files under `dir` in glob enumeration order.
pub fn list_font_files(dir: &Path, depth: ScanDepth) -> Result<Vec<FontFile>> {
    let pattern = format!("{}/{}", Pattern::escape(&dir.to_string_lossy()), depth.pattern());

    let mut files = Vec::new();
    for entry in glob(&pattern)? {
        let path = entry?;
        if !path.is_file() {
            continue;
        }
        match FontFile::from_path(path) {
            Some(file) => files.push(file),
            None => trace!("Ignoring non-font entry under {}", dir.display()),
        }
    }
    Ok(files)
}

/// Read a stylesheet into memory.
pub fn read_stylesheet(path: &Path) -> Result<String> {
    read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Overwrite a stylesheet with `css`.
pub fn write_stylesheet(path: &Path, css: &str) -> Result<()> {
    write(path, css).map_err(|e| Error::io(path, e))
}

/// Create the parent directory of `path` if it doesn't exist.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    Ok(())
}
