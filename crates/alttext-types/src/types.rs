use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Recognize the current target and deliver the caption with the given mode
    TriggerRecognition(PresentationMode),
    /// Re-deliver the last cached caption without recognizing anything
    PresentMostRecent(PresentationMode),
}

/// How a resolved caption reaches the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresentationMode {
    /// Announce through the host's speech channel
    Speak,
    /// Open as a read-only, navigable text view
    Browse,
}

impl PresentationMode {
    /// Mode a job moves to when the user triggers again while it is in flight
    pub fn escalate(self) -> Self {
        PresentationMode::Browse
    }
}

impl fmt::Display for PresentationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresentationMode::Speak => f.write_str("speak"),
            PresentationMode::Browse => f.write_str("browse"),
        }
    }
}

/// Screen rectangle in device-independent units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl ScreenRect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
