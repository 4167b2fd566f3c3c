use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::core::UnitMode;
use crate::paths::config_dir;

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) json: bool,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) no_save: bool,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) mode: Option<UnitMode>,
    /// Endpoint for the optional generation call.
    #[serde(default)]
    pub(crate) api_url: Option<String>,
    /// Model name sent with the generation call.
    #[serde(default)]
    pub(crate) generation_model: Option<String>,
}

impl Config {
    pub(crate) fn load() -> Self {
        for path in Self::config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        eprintln!("Warning: failed to parse {}: {e}", path.display());
                    }
                }
            }
        }
        Self::default()
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(dir) = config_dir() {
            paths.push(dir.join("config.toml"));
        }
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".tokcost.toml"));
        }
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(!config.json);
        assert!(!config.no_color);
        assert!(!config.no_save);
        assert!(config.mode.is_none());
        assert!(config.api_url.is_none());
    }

    #[test]
    fn parses_all_fields() {
        let config: Config = toml::from_str(
            r#"
            json = true
            no_color = true
            no_save = true
            color = "never"
            mode = "words"
            api_url = "https://example.test/v1/chat/completions"
            generation_model = "gpt-4.1"
            "#,
        )
        .unwrap();
        assert!(config.json);
        assert!(config.no_color);
        assert!(config.no_save);
        assert!(matches!(config.color, Some(ConfigColorMode::Never)));
        assert_eq!(config.mode, Some(UnitMode::Words));
        assert_eq!(
            config.api_url.as_deref(),
            Some("https://example.test/v1/chat/completions")
        );
        assert_eq!(config.generation_model.as_deref(), Some("gpt-4.1"));
    }

    #[test]
    fn unknown_mode_is_an_error() {
        assert!(toml::from_str::<Config>(r#"mode = "sentences""#).is_err());
    }
}
