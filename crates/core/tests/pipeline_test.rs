//! End-to-end runs against a temporary project tree.

use std::{
    fs,
    path::{Path, PathBuf},
};

use fontface_core::{
    FontfaceContext, GenerateOptions, ScanDepth, clean_tailwind, standard_css, tailwind_css,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const APP_CSS: &str = "@import \"tailwindcss\";\n\nbody {\n  font-family: system-ui;\n}\n";

struct Project {
    dir: TempDir,
}

impl Project {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let project = Self { dir };
        project.font("Inter", "Inter-Regular.ttf");
        project.font("Inter", "Inter-Bold.ttf");
        project.font("Inter", "static/Inter-BoldItalic.woff2");
        project.font("Roboto Mono", "RobotoMono-Variable.ttf");
        fs::create_dir_all(project.fonts_root().join("Empty")).unwrap();
        fs::write(project.path("src/app.css"), APP_CSS).unwrap();
        project
    }

    fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    fn fonts_root(&self) -> PathBuf {
        self.path("src/Fonts")
    }

    fn font(&self, family: &str, rel: &str) {
        let path = self.fonts_root().join(family).join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"\0\x01\0\0").unwrap();
    }

    fn ctx(&self, options: GenerateOptions) -> FontfaceContext {
        FontfaceContext::new(self.dir.path(), Path::new("src/Fonts"), options).unwrap()
    }

    fn app_css(&self) -> String {
        fs::read_to_string(self.path("src/app.css")).unwrap()
    }
}

fn all(ctx: &FontfaceContext) -> Vec<fontface_core::FontFamily> {
    ctx.families(&[]).unwrap()
}

#[test]
fn test_tailwind_generate_writes_theme_and_faces() {
    let project = Project::new();
    let ctx = project.ctx(GenerateOptions::default());

    let rendered = tailwind_css(&ctx, &all(&ctx), Path::new("src/app.css")).unwrap();
    assert_eq!(rendered.summary.families, 2);
    assert_eq!(rendered.summary.faces, 4);
    rendered.write().unwrap();

    let css = project.app_css();
    assert!(css.starts_with(APP_CSS.trim_end()));
    assert_eq!(css.matches("@theme {").count(), 1);
    assert_eq!(css.matches("@font-face {").count(), 4);
    assert!(css.contains("  --font-inter-bolditalic: \"inter-bolditalic\", sans-serif;\n"));
    assert!(css.contains("  src: url(\"./Fonts/Inter/static/Inter-BoldItalic.woff2\") format(\"woff2\");\n"));
    assert!(css.contains("/* Custom @font-face rules for roboto-mono */\n"));
    assert!(css.contains("  font-family: \"roboto-mono-variable\";\n"));
    assert!(css.contains("  font-variation-settings: \"wght\" 400;\n"));
    assert!(!css.contains("empty"));
}

#[test]
fn test_tailwind_generate_twice_is_stable() {
    let project = Project::new();
    let ctx = project.ctx(GenerateOptions::default());
    let families = all(&ctx);

    tailwind_css(&ctx, &families, Path::new("src/app.css")).unwrap().write().unwrap();
    let first = project.app_css();
    tailwind_css(&ctx, &families, Path::new("src/app.css")).unwrap().write().unwrap();
    assert_eq!(project.app_css(), first);
}

#[test]
fn test_generate_then_clean_restores_original() {
    let project = Project::new();
    let ctx = project.ctx(GenerateOptions::default());
    let families = all(&ctx);

    tailwind_css(&ctx, &families, Path::new("src/app.css")).unwrap().write().unwrap();
    clean_tailwind(&ctx, &families, Path::new("src/app.css")).unwrap().write().unwrap();

    let css = project.app_css();
    assert_eq!(css, APP_CSS);
    assert!(!css.contains("@theme"));
    assert!(!css.contains("@font-face"));
}

#[test]
fn test_regenerate_subset_drops_unselected_family() {
    let project = Project::new();
    let ctx = project.ctx(GenerateOptions::default());

    tailwind_css(&ctx, &all(&ctx), Path::new("src/app.css")).unwrap().write().unwrap();
    let inter = ctx.families(&["Inter".to_string()]).unwrap();
    tailwind_css(&ctx, &inter, Path::new("src/app.css")).unwrap().write().unwrap();

    let css = project.app_css();
    assert_eq!(css.matches("/* Custom @font-face rules */").count(), 1);
    assert!(!css.contains("roboto-mono"));
    assert_eq!(css.matches("@font-face {").count(), 3);
}

#[test]
fn test_tailwind_requires_existing_stylesheet() {
    let project = Project::new();
    let ctx = project.ctx(GenerateOptions::default());
    let err = tailwind_css(&ctx, &all(&ctx), Path::new("src/missing.css")).unwrap_err();
    assert!(err.is_validation());
    assert!(!project.path("src/missing.css").exists());
}

#[test]
fn test_flat_scan_ignores_nested_files() {
    let project = Project::new();
    let ctx = project.ctx(GenerateOptions { scan: ScanDepth::Flat, ..GenerateOptions::default() });
    let rendered = tailwind_css(&ctx, &all(&ctx), Path::new("src/app.css")).unwrap();
    assert_eq!(rendered.summary.faces, 3);
    assert!(!rendered.css.contains("bolditalic"));
}

#[test]
fn test_standard_css_with_classes() {
    let project = Project::new();
    let ctx = project.ctx(GenerateOptions { utility_classes: true, ..GenerateOptions::default() });
    let inter = ctx.families(&["Inter".to_string()]).unwrap();

    let rendered = standard_css(&ctx, &inter, Path::new("dist/fonts.css")).unwrap();
    rendered.write().unwrap();

    let css = fs::read_to_string(project.path("dist/fonts.css")).unwrap();
    assert!(!css.contains("@theme"));
    assert_eq!(css.matches("@font-face {").count(), 3);
    assert!(css.contains(
        "@font-face {
  font-family: \"inter-bold\";
  src: url(\"../src/Fonts/Inter/Inter-Bold.ttf\") format(\"truetype\");
  font-weight: 700;
  font-style: normal;
}

.font-inter-bold {
  font-family: \"inter-bold\", sans-serif;
  font-weight: 700;
  font-style: normal;
}
"
    ));
}

#[test]
fn test_generate_then_clean_keeps_unterminated_stylesheet() {
    let project = Project::new();
    let original = "@import \"tailwindcss\";\nbody {}";
    fs::write(project.path("src/app.css"), original).unwrap();
    let ctx = project.ctx(GenerateOptions::default());
    let families = all(&ctx);

    tailwind_css(&ctx, &families, Path::new("src/app.css")).unwrap().write().unwrap();
    assert!(project.app_css().starts_with(original));
    clean_tailwind(&ctx, &families, Path::new("src/app.css")).unwrap().write().unwrap();
    assert_eq!(project.app_css(), original);
}

#[test]
fn test_regenerate_over_unmarked_faces() {
    // Output of earlier releases: no per-family markers.
    let legacy = format!(
        "{APP_CSS}\n@theme {{
  --font-inter-bold: \"inter-bold\", sans-serif;
}}

/* Custom @font-face rules */
@font-face {{
  font-family: \"inter-bold\";
  src: url(\"./Fonts/Inter/Inter-Bold.ttf\") format(\"truetype\");
  font-weight: 700;
  font-style: normal;
}}
"
    );
    let project = Project::new();
    fs::write(project.path("src/app.css"), legacy).unwrap();
    let ctx = project.ctx(GenerateOptions::default());
    let families = all(&ctx);

    tailwind_css(&ctx, &families, Path::new("src/app.css")).unwrap().write().unwrap();
    let css = project.app_css();
    assert_eq!(css.matches("font-family: \"inter-bold\";").count(), 1);
    assert_eq!(css.matches("/* Custom @font-face rules */").count(), 1);
    assert_eq!(css.matches("@font-face {").count(), 4);

    clean_tailwind(&ctx, &families, Path::new("src/app.css")).unwrap().write().unwrap();
    assert_eq!(project.app_css(), APP_CSS);
}

#[test]
fn test_stylesheet_path_with_parent_components() {
    let project = Project::new();
    fs::create_dir_all(project.path("site")).unwrap();
    fs::write(project.path("site/app.css"), APP_CSS).unwrap();
    let ctx = project.ctx(GenerateOptions::default());
    let inter = ctx.families(&["Inter".to_string()]).unwrap();

    let rendered = tailwind_css(&ctx, &inter, Path::new("src/../site/app.css")).unwrap();
    assert!(rendered.css.contains("  src: url(\"../src/Fonts/Inter/Inter-Bold.ttf\") format(\"truetype\");\n"));
}
