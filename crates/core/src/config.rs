//! Configuration constants and generation options.

/// Font file extensions picked up by the scanner (compared case-insensitively).
pub const FONT_EXTENSIONS: &[&str] = &["ttf", "otf", "woff", "woff2"];

/// Default fonts root, relative to the project root.
pub const DEFAULT_FONTS_ROOT: &str = "src/Fonts";

/// Default Tailwind stylesheet updated in place.
pub const DEFAULT_TAILWIND_CSS: &str = "src/app.css";

/// Default output for standard CSS generation.
pub const DEFAULT_STANDARD_CSS: &str = "fonts.css";

/// Generic family appended after every generated face name.
pub const DEFAULT_FALLBACK: &str = "sans-serif";

/// Header comment opening the generated face block.
pub const FACE_BLOCK_HEADER: &str = "/* Custom @font-face rules */";

/// Prefix of the per-family marker comment; the family name and ` */` follow.
pub const FAMILY_MARKER_PREFIX: &str = "/* Custom @font-face rules for ";

/// Weight range advertised by variable faces.
pub const VARIABLE_WEIGHT_RANGE: &str = "100 900";

/// Default `wght` axis value for variable faces.
pub const VARIABLE_DEFAULT_WGHT: u16 = 400;

/// Marker comment for one family's generated section.
pub fn family_marker(family: &str) -> String {
    format!("{FAMILY_MARKER_PREFIX}{family} */")
}

/// How the `format()` hint of a `src` descriptor is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormatPolicy {
    /// Standard CSS keywords (`truetype`, `opentype`, `woff`, `woff2`).
    #[default]
    Canonical,
    /// The lower-cased file extension, as older stylesheets expect.
    RawExtension,
}

/// Shape of the tokens written inside `@theme`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeTokenStyle {
    /// `--font-<family>-<style>`
    #[default]
    CustomProperty,
    /// `font-<family>-<style>`
    Bare,
}

impl ThemeTokenStyle {
    pub fn prefix(self) -> &'static str {
        match self {
            ThemeTokenStyle::CustomProperty => "--font-",
            ThemeTokenStyle::Bare => "font-",
        }
    }
}

/// Whether family directories are searched recursively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanDepth {
    #[default]
    Recursive,
    Flat,
}

impl ScanDepth {
    pub(crate) fn pattern(self) -> &'static str {
        match self {
            ScanDepth::Recursive => "**/*",
            ScanDepth::Flat => "*",
        }
    }
}

/// Options controlling how font directories are scanned and CSS is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub format_policy: FormatPolicy,
    pub token_style: ThemeTokenStyle,
    pub scan: ScanDepth,
    pub fallback: String,
    /// Emit a `.font-<family>-<style>` class after each `@font-face` rule.
    pub utility_classes: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            format_policy: FormatPolicy::default(),
            token_style: ThemeTokenStyle::default(),
            scan: ScanDepth::default(),
            fallback: DEFAULT_FALLBACK.to_string(),
            utility_classes: false,
        }
    }
}
