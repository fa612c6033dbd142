use std::env;

use serde::{Deserialize, Serialize};

use self::engine::EngineConfig;
use self::recognition::RecognitionConfig;
use self::trigger::TriggerConfig;

pub mod engine;
pub mod recognition;
pub mod trigger;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub recognition: RecognitionConfig,
    pub engine: EngineConfig,
    pub trigger: TriggerConfig,

    /// Hotkey poll interval
    pub poll_interval_ms: u64,
    /// Capacity of the hotkey -> event loop channel
    pub event_channel_capacity: usize,
}

impl Config {
    pub fn new() -> Self {
        let poll_interval_ms = env::var("ALTTEXT_POLL_INTERVAL_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(50);

        let event_channel_capacity = env::var("ALTTEXT_EVENT_CHANNEL_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(64);

        Config {
            recognition: RecognitionConfig::new(),
            engine: EngineConfig::new(),
            trigger: TriggerConfig::default(),

            poll_interval_ms,
            event_channel_capacity,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
