//! Removal of previously generated theme and face blocks.
//!
//! Every removal takes one adjacent newline on each side with it, which is
//! exactly the separator the generator puts around its blocks. Content
//! outside the removed blocks is never rewritten, except that a blank-line
//! run left at the seam of a removal is collapsed to a single blank line.

use std::{ops::Range, sync::LazyLock};

use regex::Regex;

use crate::config::{FACE_BLOCK_HEADER, FAMILY_MARKER_PREFIX, family_marker};

#[allow(clippy::unwrap_used)] // literal patterns
static THEME_BLOCK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@theme\s*\{[^{}]*\}").unwrap());

// Captures the quoted family of any brace-free @font-face rule.
#[allow(clippy::unwrap_used)]
static FONT_FACE_RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"@font-face\s*\{[^{}]*?font-family:\s*"\s*([^"]*)"[^{}]*\}"#).unwrap()
});

#[allow(clippy::unwrap_used)]
static FAMILY_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{}(\S+) \*/", regex::escape(FAMILY_MARKER_PREFIX))).unwrap()
});

/// Placeholder left where a block was cut, resolved by [`Cutter::finish`].
const SEAM: char = '\0';

/// Remove generated blocks belonging to `families` from `css`.
///
/// The whole `@theme` block goes regardless of family, since the tool owns
/// it. For each family both its marker section and any stray `@font-face`
/// rule whose family starts with `<family>-` are removed. Input without any
/// generated content is returned untouched.
pub fn clean_css<S: AsRef<str>>(css: &str, families: &[S]) -> String {
    let mut cutter = Cutter::new(css);
    cutter.remove_theme();
    for family in families {
        let family = family.as_ref();
        cutter.remove_sections(&family_marker(family));
        cutter.remove_family_faces(family);
    }
    cutter.remove_orphan_header();
    cutter.finish()
}

/// Remove every generated block: the theme, all family sections, the face
/// header, and stray `@font-face` rules of `families` or of any family that
/// has a marker in `css`.
pub fn strip_generated<S: AsRef<str>>(css: &str, families: &[S]) -> String {
    let mut names: Vec<String> = families.iter().map(|f| f.as_ref().to_string()).collect();
    for caps in FAMILY_MARKER.captures_iter(css) {
        if !names.iter().any(|n| n == &caps[1]) {
            names.push(caps[1].to_string());
        }
    }

    let mut cutter = Cutter::new(css);
    cutter.remove_theme();
    cutter.remove_sections(FAMILY_MARKER_PREFIX);
    for name in &names {
        cutter.remove_family_faces(name);
    }
    cutter.remove_headers();
    cutter.finish()
}

/// Stylesheet text being cut; each cut leaves a [`SEAM`] behind.
struct Cutter {
    text: String,
    cuts: usize,
}

impl Cutter {
    fn new(css: &str) -> Self {
        Self { text: css.to_string(), cuts: 0 }
    }

    /// Remove `range` plus one directly adjacent newline on each side.
    /// Returns the offset of the seam.
    fn cut(&mut self, range: Range<usize>) -> usize {
        let start = if self.text[..range.start].ends_with('\n') { range.start - 1 } else { range.start };
        let end = if self.text[range.end..].starts_with('\n') { range.end + 1 } else { range.end };
        self.text.replace_range(start..end, SEAM.encode_utf8(&mut [0; 4]));
        self.cuts += 1;
        start
    }

    fn remove_theme(&mut self) {
        while let Some(range) = THEME_BLOCK.find(&self.text).map(|m| m.range()) {
            self.cut(range);
        }
    }

    /// Cut every section starting at `marker` up to the next generated boundary or the end.
    fn remove_sections(&mut self, marker: &str) {
        while let Some(start) = self.text.find(marker) {
            let rest = start + marker.len();
            let end = next_boundary(&self.text[rest..]).map_or(self.text.len(), |offset| rest + offset);
            let body = self.text[start..end].trim_end_matches(|c: char| c.is_whitespace() || c == SEAM);
            let end = start + body.len();
            self.cut(start..end);
        }
    }

    fn remove_family_faces(&mut self, family: &str) {
        let prefix = format!("{}-", family.to_lowercase());
        let mut pos = 0;
        loop {
            let found = FONT_FACE_RULE.captures_at(&self.text, pos).and_then(|caps| {
                let rule = caps.get(0)?;
                Some((rule.range(), caps[1].to_lowercase().starts_with(&prefix)))
            });
            let Some((range, owned)) = found else { break };
            pos = if owned { self.cut(range) } else { range.end };
        }
    }

    fn remove_headers(&mut self) {
        while let Some(start) = self.text.find(FACE_BLOCK_HEADER) {
            self.cut(start..start + FACE_BLOCK_HEADER.len());
        }
    }

    /// Drop the face header when no generated content follows it.
    fn remove_orphan_header(&mut self) {
        while let Some(start) = self.text.rfind(FACE_BLOCK_HEADER) {
            let tail = &self.text[start + FACE_BLOCK_HEADER.len()..];
            if !tail.chars().all(|c| c.is_whitespace() || c == SEAM) {
                break;
            }
            let end = self.text.len();
            self.cut(start..end);
        }
    }

    /// Resolve seams, collapsing blank-line runs that meet across one.
    fn finish(self) -> String {
        if self.cuts == 0 {
            return self.text;
        }

        let mut out = String::with_capacity(self.text.len());
        for (i, part) in self.text.split(SEAM).enumerate() {
            if i == 0 {
                out.push_str(part);
                continue;
            }
            if out.is_empty() {
                out.push_str(part.trim_start_matches('\n'));
                continue;
            }
            let left = out.len() - out.trim_end_matches('\n').len();
            let right = part.len() - part.trim_start_matches('\n').len();
            if left > 0 && right > 0 && left + right > 2 {
                out.truncate(out.len() - left);
                out.push_str("\n\n");
                out.push_str(&part[right..]);
            } else {
                out.push_str(part);
            }
        }
        out
    }
}

fn next_boundary(text: &str) -> Option<usize> {
    [FAMILY_MARKER_PREFIX, FACE_BLOCK_HEADER, "@theme"].iter().filter_map(|b| text.find(b)).min()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const USER_CSS: &str = "@import \"tailwindcss\";\n\nbody {\n  margin: 0;\n}\n";

    const GENERATED: &str = "@theme {
  /* inter */
  --font-inter-bold: \"inter-bold\", sans-serif;
  /* lora */
  --font-lora-italic: \"lora-italic\", sans-serif;
}

/* Custom @font-face rules */

/* Custom @font-face rules for inter */
@font-face {
  font-family: \"inter-bold\";
  src: url(\"./Fonts/Inter/Inter-Bold.ttf\") format(\"truetype\");
  font-weight: 700;
  font-style: normal;
}

/* Custom @font-face rules for lora */
@font-face {
  font-family: \"lora-italic\";
  src: url(\"./Fonts/Lora/Lora-Italic.ttf\") format(\"truetype\");
  font-weight: 400;
  font-style: italic;
}
";

    fn with_generated() -> String {
        format!("{USER_CSS}\n{GENERATED}")
    }

    #[test]
    fn test_clean_all_families_restores_user_css() {
        assert_eq!(clean_css(&with_generated(), &["inter", "lora"]), USER_CSS);
    }

    #[test]
    fn test_clean_one_family_keeps_others() {
        let cleaned = clean_css(&with_generated(), &["inter"]);
        assert!(!cleaned.contains("@theme"));
        assert!(!cleaned.contains("inter-bold"));
        assert!(cleaned.contains(FACE_BLOCK_HEADER));
        assert!(cleaned.contains("/* Custom @font-face rules for lora */"));
        assert!(cleaned.contains("font-family: \"lora-italic\";"));
        assert!(cleaned.starts_with(USER_CSS.trim_end()));
    }

    #[test]
    fn test_clean_without_generated_content_is_noop() {
        let css = "a {\n  color: red;\n}\n\n\n\nb {}";
        assert_eq!(clean_css(css, &["inter"]), css);
        assert_eq!(strip_generated(css, &["inter"]), css);
    }

    #[test]
    fn test_clean_is_idempotent() {
        let once = clean_css(&with_generated(), &["inter"]);
        assert_eq!(clean_css(&once, &["inter"]), once);
    }

    #[test]
    fn test_clean_standalone_faces() {
        let css = "@font-face {\n  font-family: \"inter-bold\";\n  src: url(\"a.ttf\");\n}\n\n\
                   @font-face {\n  font-family: \"interstate-bold\";\n  src: url(\"b.ttf\");\n}\n\n\
                   @font-face {\n  font-family: \"Inter-Light\";\n  src: url(\"c.ttf\");\n}\n";
        let cleaned = clean_css(css, &["inter"]);
        assert_eq!(
            cleaned,
            "@font-face {\n  font-family: \"interstate-bold\";\n  src: url(\"b.ttf\");\n}\n"
        );
    }

    #[test]
    fn test_theme_removed_unconditionally() {
        let css = "@theme {\n  --color-brand: #f00;\n}\n\nbody {}\n";
        assert_eq!(clean_css(css, &["inter"]), "body {}\n");
    }

    #[test]
    fn test_section_stops_at_next_marker() {
        let css = "/* Custom @font-face rules for inter */\n.a {}\n\
                   /* Custom @font-face rules for inter-display */\n.b {}\n";
        assert_eq!(
            clean_css(css, &["inter"]),
            "/* Custom @font-face rules for inter-display */\n.b {}\n"
        );
    }

    #[test]
    fn test_strip_generated_removes_every_family() {
        let none: &[&str] = &[];
        assert_eq!(strip_generated(&with_generated(), none), USER_CSS);
        assert_eq!(strip_generated(GENERATED, none), "");
    }

    #[test]
    fn test_blank_runs_collapsed() {
        let css = "a {}\n\n\n\n@theme {\n}\n\n\n\nb {}\n";
        assert_eq!(clean_css(css, &["x"]), "a {}\n\nb {}\n");
    }

    #[test]
    fn test_round_trip_keeps_missing_trailing_newline() {
        let user = "@import \"tailwindcss\";\nbody {}";
        let css = format!("{user}\n{GENERATED}");
        assert_eq!(clean_css(&css, &["inter", "lora"]), user);
        assert_eq!(strip_generated(&css, &["inter"]), user);
    }

    #[test]
    fn test_round_trip_keeps_outer_blank_lines() {
        let user = "\n\nbody {}\n\n\n";
        let css = format!("{user}\n{GENERATED}");
        assert_eq!(clean_css(&css, &["inter", "lora"]), user);
        assert_eq!(strip_generated(&css, &["lora"]), user);
    }

    #[test]
    fn test_strip_generated_handles_unmarked_faces() {
        // Layout written before per-family markers existed.
        let legacy = "@import \"tailwindcss\";\n\nbody {}\n\n@theme {
  --font-inter-bold: \"inter-bold\", sans-serif;
}

/* Custom @font-face rules */
@font-face {
  font-family: \"inter-bold\";
  src: url(\"./Fonts/Inter/Inter-Bold.ttf\") format(\"truetype\");
  font-weight: 700;
  font-style: normal;
}
";
        assert_eq!(strip_generated(legacy, &["inter"]), "@import \"tailwindcss\";\n\nbody {}\n");
    }

    #[test]
    fn test_strip_generated_uses_marker_families() {
        let stray = "@font-face {\n  font-family: \"lora-bold\";\n}\n";
        let css = format!("{USER_CSS}\n{stray}\n{GENERATED}");
        let none: &[&str] = &[];
        assert_eq!(strip_generated(&css, none), USER_CSS);
    }
}
