//! CLI command implementations.

mod families;
mod generate;

pub use families::list_families;
pub use generate::{run_standard, run_tailwind};

use fontface_core::{FormatPolicy, GenerateOptions, ScanDepth};

use crate::cli::{RenderArgs, ScanArgs};

fn options(scan: &ScanArgs, render: Option<&RenderArgs>) -> GenerateOptions {
    let mut options = GenerateOptions {
        scan: if scan.flat { ScanDepth::Flat } else { ScanDepth::Recursive },
        ..GenerateOptions::default()
    };
    if let Some(render) = render {
        options.fallback = render.fallback.clone();
        if render.raw_format {
            options.format_policy = FormatPolicy::RawExtension;
        }
    }
    options
}
