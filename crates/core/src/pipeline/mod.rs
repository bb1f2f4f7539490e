//! Run orchestration: scan families, infer styles, render and write stylesheets.

mod clean;
mod standard;
mod tailwind;

pub use clean::clean_tailwind;
pub use standard::standard_css;
pub use tailwind::tailwind_css;

use std::path::{Path, PathBuf, absolute};

use log::{info, warn};

use crate::{
    config::GenerateOptions,
    error::{Error, Result},
    family::{FontFamily, select_families, validate_dir},
    io::{ensure_parent_dir, list_font_files, write_stylesheet},
    styles::{FamilyStyles, infer_styles},
};

/// Paths and options shared by every step of a run.
///
/// All user-supplied paths resolve against `root` rather than the process
/// working directory.
#[derive(Debug, Clone)]
pub struct FontfaceContext {
    pub root: PathBuf,
    pub fonts_root: PathBuf,
    pub options: GenerateOptions,
}

impl FontfaceContext {
    pub fn new(root: &Path, fonts_root: &Path, options: GenerateOptions) -> Result<Self> {
        let root = absolute(root).map_err(|e| Error::io(root, e))?;
        validate_dir(&root)?;
        let fonts_root = root.join(fonts_root);
        validate_dir(&fonts_root)?;
        Ok(Self { root, fonts_root, options })
    }

    /// Join `path` onto the project root; absolute paths are kept as-is.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    /// Select family directories by name, or all of them when `requested` is empty.
    pub fn families(&self, requested: &[String]) -> Result<Vec<FontFamily>> {
        select_families(&self.fonts_root, requested)
    }
}

/// Counts reported after a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub families: usize,
    pub faces: usize,
}

impl RunSummary {
    fn of(families: &[FamilyStyles]) -> Self {
        Self { families: families.len(), faces: families.iter().map(|f| f.styles.len()).sum() }
    }
}

/// A stylesheet rendered in memory, ready to be written to `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub target: PathBuf,
    pub css: String,
    pub summary: RunSummary,
    create_parent: bool,
}

impl Rendered {
    /// Overwrite `target`. No backup is kept.
    pub fn write(&self) -> Result<()> {
        if self.create_parent {
            ensure_parent_dir(&self.target)?;
        }
        write_stylesheet(&self.target, &self.css)
    }
}

/// Scan each family and infer its styles, skipping families with nothing usable.
pub fn collect_families(ctx: &FontfaceContext, families: &[FontFamily]) -> Result<Vec<FamilyStyles>> {
    let mut collected = Vec::with_capacity(families.len());
    for family in families {
        let files = list_font_files(family.source_dir(), ctx.options.scan)?;
        if files.is_empty() {
            warn!("No font files found under {}", family.dir_name());
            continue;
        }

        let styles = infer_styles(family, files);
        if styles.is_empty() {
            warn!("No styles could be inferred for {}", family.dir_name());
            continue;
        }

        let tokens: Vec<_> = styles.tokens().map(|t| t.as_str()).collect();
        info!("[{}] styles: {}", family.name(), tokens.join(", "));
        collected.push(FamilyStyles { family: family.clone(), styles });
    }
    Ok(collected)
}
