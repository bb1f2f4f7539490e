//! Font family directories: discovery, selection and path validation.

use std::{
    fs::read_dir,
    path::{Path, PathBuf},
};

use crate::error::{Error, Result};

/// One font family, backed by a directory under the fonts root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFamily {
    name: String,
    dir_name: String,
    source_dir: PathBuf,
}

impl FontFamily {
    /// Derive the family from its directory; returns `None` for paths without a file name.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Option<Self> {
        let source_dir = dir.into();
        let dir_name = source_dir.file_name()?.to_string_lossy().into_owned();
        Some(Self { name: normalize_family_name(&dir_name), dir_name, source_dir })
    }

    /// CSS-facing name: lower-cased, whitespace and underscores turned into hyphens.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory name as found on disk.
    pub fn dir_name(&self) -> &str {
        &self.dir_name
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    fn matches(&self, requested: &str) -> bool {
        self.dir_name == requested
            || self.dir_name.eq_ignore_ascii_case(requested)
            || self.name == normalize_family_name(requested)
    }
}

/// CSS-facing family name: lower-cased, with runs of whitespace and
/// underscores turned into single hyphens (`Roboto Mono` gives `roboto-mono`).
pub fn normalize_family_name(raw: &str) -> String {
    raw.split(|c: char| c.is_whitespace() || c == '_')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

pub fn validate_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::NotFound { path: path.to_path_buf() });
    }
    if !path.is_dir() {
        return Err(Error::NotADirectory { path: path.to_path_buf() });
    }
    Ok(())
}

pub fn validate_file(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::NotFound { path: path.to_path_buf() });
    }
    if !path.is_file() {
        return Err(Error::NotAFile { path: path.to_path_buf() });
    }
    Ok(())
}

/// Immediate subdirectories of `fonts_root`, sorted by directory name.
pub fn discover_families(fonts_root: &Path) -> Result<Vec<FontFamily>> {
    validate_dir(fonts_root)?;

    let mut families = Vec::new();
    for entry in read_dir(fonts_root).map_err(|e| Error::io(fonts_root, e))? {
        let path = entry.map_err(|e| Error::io(fonts_root, e))?.path();
        if path.is_dir()
            && let Some(family) = FontFamily::from_dir(path)
        {
            families.push(family);
        }
    }
    families.sort_by(|a, b| a.dir_name.cmp(&b.dir_name));
    Ok(families)
}

/// Resolve requested family names against `fonts_root`; an empty request selects all.
///
/// Requested order is kept and repeated names are dropped.
pub fn select_families(fonts_root: &Path, requested: &[String]) -> Result<Vec<FontFamily>> {
    let available = discover_families(fonts_root)?;
    if requested.is_empty() {
        return Ok(available);
    }

    let mut selected: Vec<FontFamily> = Vec::new();
    for name in requested {
        let family = available
            .iter()
            .find(|f| f.dir_name == *name)
            .or_else(|| available.iter().find(|f| f.matches(name)))
            .ok_or_else(|| Error::UnknownFamily {
                name: name.clone(),
                root: fonts_root.to_path_buf(),
            })?;
        if !selected.contains(family) {
            selected.push(family.clone());
        }
    }
    Ok(selected)
}
