//! Integration tests for theme generation.
//!
//! These tests check the structure of generated stylesheets rather than exact
//! color values, so tweaks to the shade table or status colors don't break
//! them. What they pin down is what a consuming page relies on:
//! - every token is declared exactly once per block
//! - values are well-formed
//! - text/surface pairs stay readable

use std::collections::HashMap;

use theme_core::color::contrast_ratio_hex;
use theme_core::config::SHADES;
use theme_core::generator::ColorFormat;
use theme_core::{
    contrast_ratio, ensure_contrast_ratio, generate_color_scale, generate_stylesheet,
    generate_theme, generate_theme_css, hex_to_rgb, rgb_to_hex, Mode, Rgb, ThemeConfig,
};

// ==================== CSS Structure Parsing ====================

/// Parsed stylesheet: custom properties per selector.
#[derive(Debug)]
struct CssStructure {
    blocks: HashMap<String, Vec<(String, String)>>,
}

impl CssStructure {
    fn parse(content: &str) -> Self {
        let mut blocks: HashMap<String, Vec<(String, String)>> = HashMap::new();
        let mut current: Option<String> = None;

        for line in content.lines() {
            let line = line.trim();
            if let Some(selector) = line.strip_suffix('{') {
                current = Some(selector.trim().to_string());
            } else if line == "}" {
                current = None;
            } else if let (Some(selector), Some(decl)) = (&current, line.strip_prefix("--")) {
                let decl = decl.trim_end_matches(';');
                if let Some((name, value)) = decl.split_once(':') {
                    blocks
                        .entry(selector.clone())
                        .or_default()
                        .push((name.trim().to_string(), value.trim().to_string()));
                }
            }
        }

        CssStructure { blocks }
    }

    fn block(&self, selector: &str) -> &[(String, String)] {
        self.blocks
            .get(selector)
            .map(|v| v.as_slice())
            .unwrap_or_default()
    }

    fn var(&self, selector: &str, name: &str) -> Option<&str> {
        self.block(selector)
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

fn is_hex6(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

// ==================== Tests ====================

#[test]
fn test_root_block_declares_each_variable_once() {
    let theme = generate_theme(&ThemeConfig::default()).unwrap();
    let css = CssStructure::parse(&generate_theme_css(&theme));
    let root = css.block(":root");

    let mut seen = std::collections::HashSet::new();
    for (name, _) in root {
        assert!(seen.insert(name.clone()), "duplicate --{name}");
    }

    // 25 semantic colors, 4 x 11 scale shades, 3 fonts, 9 sizes, 4 weights,
    // 3 line heights, 13 spacing steps, 7 radii, 4 shadows, 3 speeds.
    assert_eq!(root.len(), 25 + 44 + 3 + 9 + 4 + 3 + 13 + 7 + 4 + 3);
}

#[test]
fn test_color_values_are_hex() {
    let theme = generate_theme(&ThemeConfig::new("#e11d48")).unwrap();
    let css = CssStructure::parse(&generate_theme_css(&theme));

    for name in ["background", "foreground", "primary", "ring", "destructive"] {
        let value = css.var(":root", name).unwrap();
        assert!(is_hex6(value), "--{name}: {value}");
    }
    for shade in SHADES {
        let value = css.var(":root", &format!("primary-{shade}")).unwrap();
        assert!(is_hex6(value), "--primary-{shade}: {value}");
    }
    assert_eq!(css.var(":root", "primary-500"), Some("#e11d48"));
}

#[test]
fn test_stylesheet_text_pairs_are_readable() {
    let config = ThemeConfig::new("#fde047");
    let css = CssStructure::parse(&generate_stylesheet(&config, ColorFormat::Hex).unwrap());

    for selector in [":root", ".dark"] {
        for (fg, bg) in [
            ("foreground", "background"),
            ("primary-foreground", "primary"),
            ("muted-foreground", "muted"),
            ("card-foreground", "card"),
            ("warning-foreground", "warning"),
        ] {
            let fg_hex = css.var(selector, fg).unwrap();
            let bg_hex = css.var(selector, bg).unwrap();
            let ratio = contrast_ratio_hex(fg_hex, bg_hex).unwrap();
            assert!(ratio >= 4.5, "{selector} {fg} {fg_hex} on {bg_hex}: {ratio:.2}");
        }
    }
}

#[test]
fn test_dark_block_differs_from_light() {
    let css = CssStructure::parse(
        &generate_stylesheet(&ThemeConfig::default(), ColorFormat::Hex).unwrap(),
    );
    assert_eq!(css.var(":root", "background"), Some("#ffffff"));
    assert_ne!(css.var(".dark", "background"), Some("#ffffff"));
    assert_eq!(css.block(":root").len(), css.block(".dark").len());
}

#[test]
fn test_hsl_stylesheet_has_no_hex_colors() {
    let css = generate_stylesheet(&ThemeConfig::default(), ColorFormat::Hsl).unwrap();
    let parsed = CssStructure::parse(&css);
    let background = parsed.var(".dark", "background").unwrap();
    assert!(background.ends_with('%'), "{background}");
    assert!(!css.contains(": #"));
}

#[test]
fn test_scale_properties() {
    for hex in ["#3b82f6", "#000000", "#ffffff", "#14b8a6"] {
        let base = hex_to_rgb(hex).unwrap();
        let a = generate_color_scale(base);
        let b = generate_color_scale(base);
        assert_eq!(a, b);
        assert_eq!(rgb_to_hex(a[500]), hex);
    }
}

#[test]
fn test_contrast_properties() {
    let samples: Vec<Rgb> = (0..=255u8)
        .step_by(17)
        .map(|v| Rgb::new(v, 255 - v, v / 2))
        .collect();

    for &a in &samples {
        for &b in &samples {
            assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
            let fixed = ensure_contrast_ratio(a, b, 4.5);
            assert!(contrast_ratio(fixed, b) >= contrast_ratio(a, b));
        }
    }
}

#[test]
fn test_mode_round_trips_through_theme() {
    let theme = generate_theme(&ThemeConfig::default().with_mode(Mode::Dark)).unwrap();
    let json = serde_json::to_value(&theme).unwrap();
    assert_eq!(json["mode"], "dark");
    assert_eq!(json["colors"]["primary-foreground"].as_str().map(str::len), Some(7));
    assert_eq!(json["scales"]["primary"]["500"], "#3b82f6");
}
