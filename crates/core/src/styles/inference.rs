//! Style tokens inferred from font filenames.
//!
//! A file named `<Family>-<Style...>.<ext>` yields the token `style...`.
//! The family prefix is stripped only when it matches the family name, in
//! this order of precedence:
//!
//! 1. the leading hyphen segments equal the family's hyphen segments
//!    (`Open-Sans-Bold` in `open-sans`),
//! 2. the first segment equals the family name once separators are removed
//!    (`OpenSans-Bold` in `open-sans`),
//! 3. otherwise the whole base name is the token (`Roboto-Bold` in `inter`
//!    gives `roboto-bold`).
//!
//! The remainder is lower-cased with underscores turned into hyphens. Files
//! whose token ends up empty (`Inter.ttf` in `inter`) carry no style and are
//! dropped.

use std::{
    collections::{BTreeMap, btree_map},
    fmt,
};

use log::debug;

use crate::{family::FontFamily, io::FontFile};

/// Style key of a face within its family, e.g. `bold-italic`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StyleToken(String);

impl StyleToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StyleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn squash(s: &str) -> String {
    s.chars().filter(|c| !matches!(c, '-' | '_' | ' ')).flat_map(char::to_lowercase).collect()
}

/// Derive the style token of `base_name` within `family`, or `None` if nothing remains.
pub fn infer_style_token(family: &str, base_name: &str) -> Option<StyleToken> {
    let segments: Vec<&str> = base_name.split('-').collect();
    let family_segments: Vec<&str> = family.split('-').collect();

    let prefix_len = if segments.len() >= family_segments.len()
        && segments.iter().zip(&family_segments).all(|(s, f)| s.eq_ignore_ascii_case(f))
    {
        family_segments.len()
    } else if squash(segments[0]) == squash(family) {
        1
    } else {
        0
    };

    let token = segments[prefix_len..].join("-").to_lowercase().replace('_', "-");
    if token.is_empty() { None } else { Some(StyleToken(token)) }
}

/// Faces of one family keyed by style token, iterated in token order.
///
/// Inserting a token that is already present replaces the earlier file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    entries: BTreeMap<StyleToken, FontFile>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the file that was displaced, if any.
    pub fn insert(&mut self, token: StyleToken, file: FontFile) -> Option<FontFile> {
        self.entries.insert(token, file)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, StyleToken, FontFile> {
        self.entries.iter()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &StyleToken> {
        self.entries.keys()
    }
}

/// Build the style map of `family` from files in enumeration order (last one wins).
pub fn infer_styles(family: &FontFamily, files: impl IntoIterator<Item = FontFile>) -> StyleMap {
    let mut styles = StyleMap::new();
    for file in files {
        let Some(token) = infer_style_token(family.name(), file.base_name()) else {
            debug!("[{}] no style in {}, skipping", family.name(), file.path().display());
            continue;
        };
        let path = file.path().to_path_buf();
        if let Some(previous) = styles.insert(token.clone(), file) {
            debug!(
                "[{}] style '{token}': {} replaces {}",
                family.name(),
                path.display(),
                previous.path().display()
            );
        }
    }
    styles
}

/// A family together with the faces inferred for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyStyles {
    pub family: FontFamily,
    pub styles: StyleMap,
}

impl FamilyStyles {
    /// CSS family name of one face, `<family>-<token>`.
    pub fn face_name(&self, token: &StyleToken) -> String {
        format!("{}-{token}", self.family.name())
    }
}
