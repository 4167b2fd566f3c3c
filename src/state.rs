//! Persisted last-used inputs. Load is best-effort: a missing or corrupt
//! state file falls back to defaults and never surfaces as an error; the
//! next save rewrites it.

use std::fs::File;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::UsageInput;
use crate::paths::config_dir;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub(crate) struct SavedState {
    #[serde(default)]
    pub(crate) usage: UsageInput,
    #[serde(default)]
    pub(crate) last_prompt: Option<String>,
    #[serde(default)]
    pub(crate) api_key: Option<String>,
}

fn state_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("state.json"))
}

pub(crate) fn load() -> SavedState {
    let Some(path) = state_path() else {
        return SavedState::default();
    };
    let Ok(file) = File::open(&path) else {
        return SavedState::default();
    };
    match serde_json::from_reader::<_, SavedState>(file) {
        Ok(mut state) => {
            // Persisted values bypass the edit boundary; re-validate them.
            state.usage = state.usage.sanitized();
            state
        }
        Err(_) => SavedState::default(),
    }
}

pub(crate) fn save(state: &SavedState) {
    let Some(path) = state_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    if let Ok(mut file) = File::create(&path) {
        let _ = serde_json::to_writer_pretty(&mut file, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::UnitMode;

    #[test]
    fn default_state_uses_usage_defaults() {
        let state = SavedState::default();
        assert_eq!(state.usage.input_quantity, 100.0);
        assert_eq!(state.usage.output_quantity, 100.0);
        assert_eq!(state.usage.call_count, 1);
        assert_eq!(state.usage.unit_mode, UnitMode::Tokens);
        assert!(state.last_prompt.is_none());
        assert!(state.api_key.is_none());
    }

    #[test]
    fn truncated_json_falls_back_to_defaults() {
        let state: Result<SavedState, _> =
            serde_json::from_str(r#"{"usage":{"input_quantity":5"#);
        assert!(state.is_err()); // load() maps this to SavedState::default()
    }

    #[test]
    fn missing_fields_take_defaults() {
        let state: SavedState = serde_json::from_str("{}").unwrap();
        assert_eq!(state.usage.input_quantity, 100.0);
        assert_eq!(state.usage.call_count, 1);
    }

    #[test]
    fn roundtrip_preserves_fields() {
        let state = SavedState {
            usage: UsageInput {
                input_quantity: 2500.0,
                output_quantity: 400.0,
                call_count: 12,
                unit_mode: UnitMode::Words,
            },
            last_prompt: Some("write a haiku".to_string()),
            api_key: Some("sk-test".to_string()),
        };
        let json = serde_json::to_string(&state).unwrap();
        let back: SavedState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.usage, state.usage);
        assert_eq!(back.last_prompt.as_deref(), Some("write a haiku"));
        assert_eq!(back.api_key.as_deref(), Some("sk-test"));
    }

    #[test]
    fn unit_mode_serializes_lowercase() {
        let state = SavedState {
            usage: UsageInput {
                unit_mode: UnitMode::Characters,
                ..UsageInput::default()
            },
            ..SavedState::default()
        };
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains(r#""unit_mode":"characters""#));
    }
}
