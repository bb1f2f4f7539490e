//! Face attributes derived from a style token.

use std::{fmt, path::Path};

use crate::config::{FormatPolicy, VARIABLE_WEIGHT_RANGE};

/// Font slant (upright or italic).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slant {
    Upright,
    Italic,
}

impl Slant {
    /// Value of the CSS `font-style` descriptor.
    pub const fn as_css(self) -> &'static str {
        match self {
            Slant::Upright => "normal",
            Slant::Italic => "italic",
        }
    }
}

impl fmt::Display for Slant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

/// Numeric font weight as a newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Weight(pub u16);

impl Weight {
    pub const REGULAR: Weight = Weight(400);
    pub const MEDIUM: Weight = Weight(500);
    pub const BOLD: Weight = Weight(700);
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The `font-weight` descriptor of a generated face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceWeight {
    Fixed(Weight),
    /// Full `100 900` range of a variable font.
    VariableRange,
}

impl fmt::Display for FaceWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaceWeight::Fixed(weight) => write!(f, "{weight}"),
            FaceWeight::VariableRange => f.write_str(VARIABLE_WEIGHT_RANGE),
        }
    }
}

/// Container format, known from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFormat {
    Ttf,
    Otf,
    Woff,
    Woff2,
}

impl FontFormat {
    /// Match an extension (without dot) case-insensitively.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "ttf" => Some(FontFormat::Ttf),
            "otf" => Some(FontFormat::Otf),
            "woff" => Some(FontFormat::Woff),
            "woff2" => Some(FontFormat::Woff2),
            _ => None,
        }
    }

    pub const fn extension(self) -> &'static str {
        match self {
            FontFormat::Ttf => "ttf",
            FontFormat::Otf => "otf",
            FontFormat::Woff => "woff",
            FontFormat::Woff2 => "woff2",
        }
    }

    /// Argument of the CSS `format()` hint under the given policy.
    pub const fn css_format(self, policy: FormatPolicy) -> &'static str {
        match (policy, self) {
            (FormatPolicy::RawExtension, _) => self.extension(),
            (FormatPolicy::Canonical, FontFormat::Ttf) => "truetype",
            (FormatPolicy::Canonical, FontFormat::Otf) => "opentype",
            (FormatPolicy::Canonical, FontFormat::Woff) => "woff",
            (FormatPolicy::Canonical, FontFormat::Woff2) => "woff2",
        }
    }
}

/// Weight for a static face: bold > medium > regular.
pub fn derive_weight(token: &str) -> Weight {
    let token = token.to_ascii_lowercase();
    if token.contains("bold") {
        Weight::BOLD
    } else if token.contains("medium") {
        Weight::MEDIUM
    } else {
        Weight::REGULAR
    }
}

pub fn derive_style(token: &str) -> Slant {
    if token.to_ascii_lowercase().contains("italic") { Slant::Italic } else { Slant::Upright }
}

pub fn is_variable(token: &str) -> bool {
    token.to_ascii_lowercase().contains("variable")
}

pub fn derive_format(path: &Path) -> Option<FontFormat> {
    path.extension().and_then(|e| e.to_str()).and_then(FontFormat::from_extension)
}

/// Everything the synthesizer needs to know about one face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceAttributes {
    pub weight: FaceWeight,
    pub slant: Slant,
    pub variable: bool,
    pub format: FontFormat,
}

impl FaceAttributes {
    /// Variable faces always advertise the full weight range and an upright slant.
    pub fn derive(token: &str, format: FontFormat) -> Self {
        if is_variable(token) {
            Self { weight: FaceWeight::VariableRange, slant: Slant::Upright, variable: true, format }
        } else {
            Self {
                weight: FaceWeight::Fixed(derive_weight(token)),
                slant: derive_style(token),
                variable: false,
                format,
            }
        }
    }

    /// Single weight usable outside `@font-face`, e.g. in a utility class.
    pub fn class_weight(&self) -> Weight {
        match self.weight {
            FaceWeight::Fixed(weight) => weight,
            FaceWeight::VariableRange => Weight(crate::config::VARIABLE_DEFAULT_WGHT),
        }
    }
}
