mod capture;
mod engine;
mod hotkey;

pub use capture::{ScreenCapture, primary_monitor_rect};
pub use engine::{CommandEngine, clean_caption};
pub use hotkey::HotkeyManager;
