//! CSS custom property generation.

use std::fmt::Write;

use crate::color::Rgb;
use crate::config::{Mode, ThemeConfig};
use crate::error::Result;
use crate::model::{GeneratedTheme, Token};
use crate::transform::generate_theme;

/// How colors are written into custom properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorFormat {
    /// `#rrggbb`
    #[default]
    Hex,
    /// Bare HSL channels (`217.2 91.2% 59.8%`) for use as `hsl(var(--x))`.
    Hsl,
}

impl ColorFormat {
    /// Parse a format name.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "hex" => Some(ColorFormat::Hex),
            "hsl" => Some(ColorFormat::Hsl),
            _ => None,
        }
    }

    fn format(&self, color: Rgb) -> String {
        match self {
            ColorFormat::Hex => color.to_hex(),
            ColorFormat::Hsl => color.to_hsl().to_css_channels(),
        }
    }
}

/// Options for [`generate_theme_css_with`].
#[derive(Debug, Clone)]
pub struct CssOptions {
    /// Selector the variables are declared under.
    pub selector: String,
    /// Color value format.
    pub color_format: ColorFormat,
    /// Emit the leading "Generated by" comment.
    pub header: bool,
}

impl Default for CssOptions {
    fn default() -> Self {
        Self {
            selector: ":root".to_string(),
            color_format: ColorFormat::Hex,
            header: true,
        }
    }
}

/// Indenting writer for CSS rule blocks.
pub struct CssWriter {
    /// Current nesting depth.
    depth: usize,
    /// Output buffer.
    buffer: String,
}

impl CssWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self {
            depth: 0,
            buffer: String::new(),
        }
    }

    /// Get the generated CSS.
    pub fn output(&self) -> &str {
        &self.buffer
    }

    /// Take the generated CSS.
    pub fn take_output(self) -> String {
        self.buffer
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str("  ");
        }
    }

    /// Write a comment line.
    pub fn write_comment(&mut self, comment: &str) {
        self.indent();
        let _ = writeln!(self.buffer, "/* {} */", comment);
    }

    /// Write an empty line.
    pub fn write_blank(&mut self) {
        self.buffer.push('\n');
    }

    /// Open a rule block.
    pub fn open_block(&mut self, selector: &str) {
        self.indent();
        let _ = writeln!(self.buffer, "{} {{", selector);
        self.depth += 1;
    }

    /// Close the innermost rule block.
    pub fn close_block(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.indent();
        self.buffer.push_str("}\n");
    }

    /// Write a custom property declaration.
    ///
    /// `</` is written as `<\/` so a value can never close the `<style>`
    /// element the stylesheet is embedded in.
    pub fn write_variable(&mut self, name: &str, value: &str) {
        self.indent();
        let value = value.replace("</", "<\\/");
        let _ = writeln!(self.buffer, "--{}: {};", name, value);
    }

    /// Write every token as a custom property.
    pub fn write_tokens(&mut self, tokens: &[Token]) {
        for token in tokens {
            self.write_variable(&token.name, &token.value);
        }
    }
}

impl Default for CssWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a theme as a `:root` block of CSS custom properties.
pub fn generate_theme_css(theme: &GeneratedTheme) -> String {
    generate_theme_css_with(theme, &CssOptions::default())
}

/// Render a theme with explicit options.
pub fn generate_theme_css_with(theme: &GeneratedTheme, options: &CssOptions) -> String {
    let mut writer = CssWriter::new();
    if options.header {
        writer.write_comment(&format!("Generated by themeforge ({} mode)", theme.mode));
    }
    write_theme_block(&mut writer, theme, &options.selector, options.color_format);
    writer.take_output()
}

/// Render light variables under `:root` and dark variables under `.dark`.
pub fn generate_stylesheet(config: &ThemeConfig, color_format: ColorFormat) -> Result<String> {
    let light = generate_theme(&config.with_mode(Mode::Light))?;
    let dark = generate_theme(&config.with_mode(Mode::Dark))?;

    let mut writer = CssWriter::new();
    writer.write_comment("Generated by themeforge");
    write_theme_block(&mut writer, &light, Mode::Light.selector(), color_format);
    writer.write_blank();
    write_theme_block(&mut writer, &dark, Mode::Dark.selector(), color_format);
    Ok(writer.take_output())
}

fn write_theme_block(
    writer: &mut CssWriter,
    theme: &GeneratedTheme,
    selector: &str,
    format: ColorFormat,
) {
    writer.open_block(selector);

    writer.write_comment("Colors");
    for (name, color) in theme.colors.entries() {
        writer.write_variable(name, &format.format(color));
    }

    writer.write_comment("Scales");
    for (prefix, scale) in theme.scales.entries() {
        for (shade, color) in scale.iter() {
            writer.write_variable(&format!("{prefix}-{shade}"), &format.format(color));
        }
    }

    writer.write_comment("Typography");
    let typography = &theme.typography;
    writer.write_variable("font-sans", &typography.font_sans);
    writer.write_variable("font-heading", &typography.font_heading);
    writer.write_variable("font-mono", &typography.font_mono);
    writer.write_tokens(&typography.sizes);
    writer.write_tokens(&typography.weights);
    writer.write_tokens(&typography.line_heights);

    writer.write_comment("Layout");
    writer.write_tokens(&theme.spacing);
    writer.write_tokens(&theme.radius);
    writer.write_tokens(&theme.shadows);
    writer.write_tokens(&theme.speeds);

    writer.close_block();
}
