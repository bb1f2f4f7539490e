use std::path::Path;

use log::warn;

use super::{FontfaceContext, Rendered, RunSummary, collect_families};
use crate::{
    css::{CssSynthesizer, strip_generated},
    error::Result,
    family::{FontFamily, validate_file},
    io::read_stylesheet,
};

/// Regenerate the `@theme` and `@font-face` blocks of an existing Tailwind stylesheet.
///
/// Everything generated by an earlier run is stripped first, including
/// unmarked `@font-face` rules of the selected families, so repeated runs
/// with the same input produce the same file. The stylesheet must exist.
pub fn tailwind_css(ctx: &FontfaceContext, families: &[FontFamily], css_path: &Path) -> Result<Rendered> {
    let target = ctx.resolve(css_path);
    validate_file(&target)?;

    let existing = read_stylesheet(&target)?;
    let names: Vec<&str> = families.iter().map(FontFamily::name).collect();
    let base = strip_generated(&existing, &names);
    let collected = collect_families(ctx, families)?;

    let css = if collected.is_empty() {
        warn!("No fonts to generate; only removing previous output");
        base
    } else {
        let generated = CssSynthesizer::new(&target, &ctx.options).render(&collected);
        let blocks = format!("{}\n{}", generated.theme, generated.faces);
        // The single newline separator is what the cleaner removes again.
        if base.is_empty() { blocks } else { format!("{base}\n{blocks}") }
    };

    Ok(Rendered { target, css, summary: RunSummary::of(&collected), create_parent: false })
}
