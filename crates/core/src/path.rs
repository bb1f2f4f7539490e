//! Relative URLs from a stylesheet to the fonts it references.

use std::path::{Component, Path};

/// Compute the URL of `to` relative to the directory containing `from`.
///
/// Separators are always forward slashes and the result always starts with
/// `./` or `../`, so it can be dropped into `url("...")` unchanged.
pub fn relative_url(from: &Path, to: &Path) -> String {
    let base: Vec<Component> = from.parent().map(normalize).unwrap_or_default();
    let target = normalize(to);

    let common = base.iter().zip(&target).take_while(|(a, b)| a == b).count();

    let mut parts: Vec<String> = Vec::new();
    parts.extend(base[common..].iter().map(|_| "..".to_string()));
    parts.extend(target[common..].iter().map(|c| c.as_os_str().to_string_lossy().into_owned()));

    let rel = parts.join("/");
    if rel.starts_with("./") || rel.starts_with("../") { rel } else { format!("./{rel}") }
}

/// Lexically resolve `.` and `..`; the filesystem is never consulted.
fn normalize(path: &Path) -> Vec<Component<'_>> {
    let mut out: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `..` above the root stays at the root
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            _ => out.push(component),
        }
    }
    out
}
