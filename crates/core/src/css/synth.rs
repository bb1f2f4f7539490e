//! Rendering of `@theme` tokens, `@font-face` rules and utility classes.

use std::path::Path;

use crate::{
    config::{FACE_BLOCK_HEADER, GenerateOptions, VARIABLE_DEFAULT_WGHT, family_marker},
    path::relative_url,
    styles::{FaceAttributes, FamilyStyles},
};

/// Theme and face text produced by one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedCss {
    pub theme: String,
    pub faces: String,
}

/// Renders CSS for fonts referenced from the stylesheet at `css_path`.
#[derive(Debug, Clone, Copy)]
pub struct CssSynthesizer<'a> {
    css_path: &'a Path,
    options: &'a GenerateOptions,
}

impl<'a> CssSynthesizer<'a> {
    pub fn new(css_path: &'a Path, options: &'a GenerateOptions) -> Self {
        Self { css_path, options }
    }

    /// Families in caller order, styles in token order.
    pub fn render(&self, families: &[FamilyStyles]) -> GeneratedCss {
        GeneratedCss { theme: self.render_theme(families), faces: self.render_faces(families) }
    }

    pub fn render_theme(&self, families: &[FamilyStyles]) -> String {
        let prefix = self.options.token_style.prefix();
        let mut lines = vec!["@theme {".to_string()];
        for entry in families {
            lines.push(format!("  /* {} */", entry.family.name()));
            for token in entry.styles.tokens() {
                let face = entry.face_name(token);
                lines.push(format!("  {prefix}{face}: \"{face}\", {};", self.options.fallback));
            }
        }
        lines.push("}".to_string());
        finish(lines)
    }

    pub fn render_faces(&self, families: &[FamilyStyles]) -> String {
        let mut lines = vec![FACE_BLOCK_HEADER.to_string()];
        for entry in families {
            lines.push(String::new());
            lines.push(family_marker(entry.family.name()));
            for (i, (token, file)) in entry.styles.iter().enumerate() {
                if i > 0 {
                    lines.push(String::new());
                }
                let face = entry.face_name(token);
                let attrs = FaceAttributes::derive(token.as_str(), file.format());
                let url = relative_url(self.css_path, file.path());
                let format = attrs.format.css_format(self.options.format_policy);

                lines.push("@font-face {".to_string());
                lines.push(format!("  font-family: \"{face}\";"));
                lines.push(format!("  src: url(\"{url}\") format(\"{format}\");"));
                lines.push(format!("  font-weight: {};", attrs.weight));
                lines.push(format!("  font-style: {};", attrs.slant));
                if attrs.variable {
                    lines.push(format!("  font-variation-settings: \"wght\" {VARIABLE_DEFAULT_WGHT};"));
                }
                lines.push("}".to_string());

                if self.options.utility_classes {
                    lines.push(String::new());
                    lines.push(format!(".font-{face} {{"));
                    lines.push(format!("  font-family: \"{face}\", {};", self.options.fallback));
                    lines.push(format!("  font-weight: {};", attrs.class_weight()));
                    lines.push(format!("  font-style: {};", attrs.slant));
                    lines.push("}".to_string());
                }
            }
        }
        finish(lines)
    }
}

fn finish(lines: Vec<String>) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}
