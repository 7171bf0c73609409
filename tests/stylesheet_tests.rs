//! End-to-end tests for the config -> stylesheet -> document pipeline.

use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use std::io::Write;

use theme_core::generator::{CssWriter, STYLE_ELEMENT_ID};
use theme_core::{
    apply_theme, apply_theme_to_file, build_stylesheet, generate_theme, generate_theme_css,
    ThemeConfig, ThemeError,
};

#[test]
fn test_css_writer_layout() {
    let mut writer = CssWriter::new();
    writer.write_comment("Generated by themeforge");
    writer.open_block(":root");
    writer.write_variable("primary", "#3b82f6");
    writer.write_variable("radius-md", "8px");
    writer.close_block();

    assert_snapshot!(writer.take_output(), @r###"
/* Generated by themeforge */
:root {
  --primary: #3b82f6;
  --radius-md: 8px;
}
"###);
}

#[test]
fn test_apply_into_head() {
    let doc = "<html><head><title>Agency</title></head><body></body></html>";
    let out = apply_theme(doc, ":root {}\n").unwrap();

    assert_snapshot!(out, @r###"
<html><head><title>Agency</title><style id="themeforge-variables">
:root {}
</style>
</head><body></body></html>
"###);
}

#[test]
fn test_build_stylesheet_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r##"{{"primary": "#e11d48", "base_radius": 4}}"##).unwrap();

    let css = build_stylesheet(file.path()).unwrap();
    assert!(css.contains("--primary: #e11d48;"));
    assert!(css.contains("--radius-md: 4px;"));

    let expected = generate_theme_css(
        &generate_theme(&ThemeConfig {
            primary: "#e11d48".to_string(),
            base_radius: 4.0,
            ..Default::default()
        })
        .unwrap(),
    );
    assert_eq!(css, expected);
}

#[test]
fn test_build_stylesheet_rejects_bad_color() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"secondary": "purple"}}"#).unwrap();

    let err = build_stylesheet(file.path()).unwrap_err();
    assert!(matches!(err, ThemeError::ValidationFailed { .. }), "{err:?}");
    assert!(err.to_string().contains("secondary:"));
}

#[test]
fn test_apply_to_file_twice_keeps_one_element() {
    let dir = tempfile::tempdir().unwrap();
    let page = dir.path().join("index.html");
    std::fs::write(&page, "<!doctype html>\n<html><head></head><body></body></html>\n").unwrap();

    let light = generate_theme_css(&generate_theme(&ThemeConfig::default()).unwrap());
    apply_theme_to_file(&page, &light).unwrap();

    let dark_config = ThemeConfig::default().with_mode(theme_core::Mode::Dark);
    let dark = generate_theme_css(&generate_theme(&dark_config).unwrap());
    apply_theme_to_file(&page, &dark).unwrap();

    let html = std::fs::read_to_string(&page).unwrap();
    assert_eq!(html.matches(STYLE_ELEMENT_ID).count(), 1);
    assert!(html.contains("(dark mode)"));
    assert!(!html.contains("(light mode)"));
    assert!(html.starts_with("<!doctype html>\n"));
}

#[test]
fn test_build_stylesheet_rejects_font_that_breaks_stylesheet() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"fonts": {{"mono": "mono; }} body {{ display: none"}}}}"#).unwrap();

    let err = build_stylesheet(file.path()).unwrap_err();
    assert!(matches!(err, ThemeError::ValidationFailed { .. }), "{err:?}");
    assert!(err.to_string().contains("fonts.mono"));
}

#[test]
fn test_build_stylesheet_rejects_style_end_tag_in_font() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"fonts": {{"sans": "Inter</style><script>x()</script>"}}}}"#).unwrap();

    let err = build_stylesheet(file.path()).unwrap_err();
    assert!(matches!(err, ThemeError::ValidationFailed { .. }), "{err:?}");
}

#[test]
fn test_generate_theme_rejects_bad_font() {
    let mut config = ThemeConfig::default();
    config.fonts.heading = "Inter</style>".to_string();

    let err = generate_theme(&config).unwrap_err();
    assert!(matches!(err, ThemeError::InvalidValue { ref field, .. } if field == "fonts.heading"));
}

#[test]
fn test_apply_twice_with_style_end_tag_in_value() {
    let mut theme = generate_theme(&ThemeConfig::default()).unwrap();
    theme.typography.font_sans = "Inter</style><script>x()</script>".to_string();
    let css = generate_theme_css(&theme);

    let doc = "<html><head><title>Agency</title></head><body></body></html>";
    let once = apply_theme(doc, &css).unwrap();
    let twice = apply_theme(&once, &css).unwrap();

    assert_eq!(once, twice);
    assert_eq!(twice.matches(STYLE_ELEMENT_ID).count(), 1);
    assert_eq!(twice.matches("</style>").count(), 1);
}
