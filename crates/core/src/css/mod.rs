//! Text-level CSS synthesis and cleanup for generated font blocks.
//!
//! Generated content is delimited by marker comments (see
//! [`crate::config::FACE_BLOCK_HEADER`] and [`crate::config::family_marker`])
//! and a single `@theme` block; the cleaner relies on nothing else, so no CSS
//! parser is involved.

mod clean;
mod synth;

pub use clean::{clean_css, strip_generated};
pub use synth::{CssSynthesizer, GeneratedCss};
