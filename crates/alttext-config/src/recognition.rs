use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_debounce_window_ms() -> u64 {
    3000
}

fn default_cache_capacity() -> usize {
    10
}

fn default_min_image_size() -> u32 {
    128
}

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognitionConfig {
    /// Window after a job starts in which a repeated trigger upgrades it
    #[serde(default = "default_debounce_window_ms")]
    pub debounce_window_ms: u64,
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
    /// Targets both narrower and shorter than this are rejected
    #[serde(default = "default_min_image_size")]
    pub min_image_size: u32,
    /// Reject targets whose role is not graphic
    #[serde(default = "default_enabled")]
    pub filter_non_graphic: bool,
    /// Look for a graphic descendant when focus is in browse-mode content
    #[serde(default = "default_enabled")]
    pub search_children: bool,
}

impl RecognitionConfig {
    pub fn new() -> Self {
        let filter_non_graphic = env::var("ALTTEXT_FILTER_NON_GRAPHIC")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_enabled);

        Self {
            filter_non_graphic,
            ..Self::default()
        }
    }

    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_window_ms)
    }
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            debounce_window_ms: default_debounce_window_ms(),
            cache_capacity: default_cache_capacity(),
            min_image_size: default_min_image_size(),
            filter_non_graphic: default_enabled(),
            search_children: default_enabled(),
        }
    }
}
