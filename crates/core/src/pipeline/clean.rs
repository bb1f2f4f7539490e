use std::path::Path;

use log::info;

use super::{FontfaceContext, Rendered, RunSummary};
use crate::{
    css::clean_css,
    error::Result,
    family::{FontFamily, validate_file},
    io::read_stylesheet,
};

/// Remove the generated theme and the face sections of `families` from a Tailwind stylesheet.
pub fn clean_tailwind(ctx: &FontfaceContext, families: &[FontFamily], css_path: &Path) -> Result<Rendered> {
    let target = ctx.resolve(css_path);
    validate_file(&target)?;

    let existing = read_stylesheet(&target)?;
    let names: Vec<&str> = families.iter().map(|f| f.name()).collect();
    let css = clean_css(&existing, &names);
    if css == existing {
        info!("No generated blocks found in {}", target.display());
    }

    Ok(Rendered {
        target,
        css,
        summary: RunSummary { families: families.len(), faces: 0 },
        create_parent: false,
    })
}
