use std::collections::HashMap;

use serde::Deserialize;

/// User configuration (config.toml). Everything is optional; an absent or
/// empty file yields defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

/// UI settings: `[ui.colors]` maps theme slot names to "#RRGGBB" overrides.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn parses_color_overrides() {
        let config: Config = toml::from_str(
            r##"[ui.colors]
background = "#000000"
text = "#33FF66"
"##,
        )
        .unwrap();
        assert_eq!(config.ui.colors.get("background").unwrap(), "#000000");
        assert_eq!(config.ui.colors.get("text").unwrap(), "#33FF66");
    }
}
