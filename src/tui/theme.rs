use ratatui::style::Color;

use crate::model::UiConfig;

/// CRT color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    /// Phosphor body text
    pub text: Color,
    pub text_bright: Color,
    /// Title / glow highlights
    pub accent: Color,
    pub dim: Color,
    /// Depth-indicator rows under the top card
    pub shadow: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x04, 0x0A, 0x06),
            text: Color::Rgb(0x4A, 0xE0, 0x83),
            text_bright: Color::Rgb(0xCF, 0xFF, 0xE0),
            accent: Color::Rgb(0xFF, 0x3E, 0xB5),
            dim: Color::Rgb(0x2A, 0x7A, 0x4C),
            shadow: Color::Rgb(0x12, 0x33, 0x20),
        }
    }
}

/// Parse a hex color string like "#FF3EB5" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from user config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "accent" => theme.accent = color,
                    "dim" => theme.dim = color,
                    "shadow" => theme.shadow = color,
                    _ => {}
                }
            }
        }

        theme
    }
}
