use std::path::Path;

use anyhow::Result;
use fontface_core::{FontfaceContext, collect_families};

use super::options;
use crate::cli::ScanArgs;

/// Print each selected family with its inferred styles.
pub fn list_families(root: &Path, scan: &ScanArgs) -> Result<()> {
    let ctx = FontfaceContext::new(root, &scan.fonts_root, options(scan, None))?;
    let families = ctx.families(&scan.families)?;
    let collected = collect_families(&ctx, &families)?;

    for family in &families {
        match collected.iter().find(|c| c.family == *family) {
            Some(entry) => {
                let tokens: Vec<_> = entry.styles.tokens().map(|t| t.as_str()).collect();
                println!("{} ({}): {}", family.name(), family.dir_name(), tokens.join(", "));
            }
            None => println!("{} ({}): no fonts", family.name(), family.dir_name()),
        }
    }
    Ok(())
}
