use std::path::Path;

use super::{FontfaceContext, Rendered, RunSummary, collect_families};
use crate::{css::CssSynthesizer, error::Result, family::FontFamily};

/// Render a standalone stylesheet of `@font-face` rules (and utility classes when enabled).
pub fn standard_css(ctx: &FontfaceContext, families: &[FontFamily], out_path: &Path) -> Result<Rendered> {
    let target = ctx.resolve(out_path);
    let collected = collect_families(ctx, families)?;

    let css = if collected.is_empty() {
        String::new()
    } else {
        CssSynthesizer::new(&target, &ctx.options).render_faces(&collected)
    };

    Ok(Rendered { target, css, summary: RunSummary::of(&collected), create_parent: true })
}
