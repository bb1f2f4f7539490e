//! Style inference from font filenames and the CSS attributes derived from it.

mod attributes;
mod inference;

pub use attributes::{
    FaceAttributes, FaceWeight, FontFormat, Slant, Weight, derive_format, derive_style,
    derive_weight, is_variable,
};
pub use inference::{FamilyStyles, StyleMap, StyleToken, infer_style_token, infer_styles};
