//! Tailwind and standard stylesheet generation.

use std::path::Path;

use anyhow::{Context, Result};
use fontface_core::{
    FontfaceContext, Rendered, ThemeTokenStyle, clean_tailwind, standard_css, tailwind_css,
};

use super::options;
use crate::cli::{RenderArgs, ScanArgs};

pub fn run_tailwind(
    root: &Path,
    scan: &ScanArgs,
    render: &RenderArgs,
    css: &Path,
    clean: bool,
    bare_tokens: bool,
) -> Result<()> {
    let mut options = options(scan, Some(render));
    if bare_tokens {
        options.token_style = ThemeTokenStyle::Bare;
    }

    let ctx = FontfaceContext::new(root, &scan.fonts_root, options)?;
    let families = ctx.families(&scan.families)?;

    if clean {
        let rendered = clean_tailwind(&ctx, &families, css)?;
        if emit(&rendered, render.dry_run)? {
            let names: Vec<_> = families.iter().map(|f| f.name()).collect();
            println!("Removed fonts for: {}", names.join(", "));
        }
        return Ok(());
    }

    let rendered = tailwind_css(&ctx, &families, css)?;
    if emit(&rendered, render.dry_run)? {
        println!(
            "Font generation completed: {} faces from {} families",
            rendered.summary.faces, rendered.summary.families
        );
    }
    Ok(())
}

pub fn run_standard(
    root: &Path,
    scan: &ScanArgs,
    render: &RenderArgs,
    out: &Path,
    classes: bool,
) -> Result<()> {
    let mut options = options(scan, Some(render));
    options.utility_classes = classes;

    let ctx = FontfaceContext::new(root, &scan.fonts_root, options)?;
    let families = ctx.families(&scan.families)?;

    let rendered = standard_css(&ctx, &families, out)?;
    if emit(&rendered, render.dry_run)? {
        println!(
            "Standard CSS generation completed: {} faces from {} families",
            rendered.summary.faces, rendered.summary.families
        );
    }
    Ok(())
}

/// Print or write the stylesheet; returns whether it was written.
fn emit(rendered: &Rendered, dry_run: bool) -> Result<bool> {
    if dry_run {
        print!("{}", rendered.css);
        return Ok(false);
    }
    rendered
        .write()
        .with_context(|| format!("Failed to update {}", rendered.target.display()))?;
    println!("Wrote {}", rendered.target.display());
    Ok(true)
}
