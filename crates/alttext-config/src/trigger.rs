use alttext_types::ScreenRect;
use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerConfig {
    #[serde(default = "default_enabled")]
    pub hotkeys_enabled: bool,
    /// Region treated as the navigator image, primary monitor when unset
    pub capture_region: Option<ScreenRect>,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            hotkeys_enabled: default_enabled(),
            capture_region: None,
        }
    }
}
