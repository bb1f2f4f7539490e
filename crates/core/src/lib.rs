//! Fontface Core - infer font styles from filenames and generate `@font-face`
//! rules and Tailwind `@theme` tokens for them.

pub mod config;
pub mod css;
pub mod error;
pub mod family;
pub mod io;
pub mod path;
pub mod pipeline;
pub mod styles;

pub use config::{FormatPolicy, GenerateOptions, ScanDepth, ThemeTokenStyle};
pub use css::{CssSynthesizer, GeneratedCss, clean_css, strip_generated};
pub use error::{Error, Result};
pub use family::{FontFamily, discover_families, select_families};
pub use io::FontFile;
pub use path::relative_url;
pub use pipeline::{
    FontfaceContext, Rendered, RunSummary, clean_tailwind, collect_families, standard_css,
    tailwind_css,
};
pub use styles::{FaceAttributes, FamilyStyles, Slant, StyleMap, StyleToken, Weight};
