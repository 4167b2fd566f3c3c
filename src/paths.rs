use std::path::PathBuf;

/// Per-user config directory holding config.toml, state.json, and the
/// optional pricing override. `TOKCOST_CONFIG_DIR` overrides it (used by the
/// integration tests for isolation).
pub(crate) fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("TOKCOST_CONFIG_DIR")
        && !dir.is_empty()
    {
        return Some(PathBuf::from(dir));
    }
    dirs::home_dir().map(|home| home.join(".config").join("tokcost"))
}
