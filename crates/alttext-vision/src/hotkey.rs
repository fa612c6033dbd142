use alttext_types::{AppEvent, PresentationMode};
use anyhow::{Context, Result};
use global_hotkey::{
    GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState,
    hotkey::{Code, HotKey, Modifiers},
};

/// Alt+Shift+C recognizes the current image, Alt+Shift+R reopens the last
/// caption in a browsable view
pub struct HotkeyManager {
    manager: GlobalHotKeyManager,
    recognize: HotKey,
    browse_previous: HotKey,
}

impl HotkeyManager {
    pub fn new() -> Result<Self> {
        Self::with_hotkeys(
            HotKey::new(Some(Modifiers::ALT | Modifiers::SHIFT), Code::KeyC),
            HotKey::new(Some(Modifiers::ALT | Modifiers::SHIFT), Code::KeyR),
        )
    }

    pub fn with_hotkeys(recognize: HotKey, browse_previous: HotKey) -> Result<Self> {
        let manager = GlobalHotKeyManager::new().context("Failed to create hotkey manager")?;

        manager
            .register(recognize)
            .context("Failed to register recognize hotkey")?;
        manager
            .register(browse_previous)
            .context("Failed to register browse hotkey")?;

        Ok(Self {
            manager,
            recognize,
            browse_previous,
        })
    }

    /// Event for a pending hotkey press, if any (non-blocking)
    pub fn poll(&self) -> Option<AppEvent> {
        let receiver = GlobalHotKeyEvent::receiver();
        while let Ok(event) = receiver.try_recv() {
            if event.state != HotKeyState::Pressed {
                continue;
            }
            if event.id == self.recognize.id() {
                return Some(AppEvent::TriggerRecognition(PresentationMode::Speak));
            }
            if event.id == self.browse_previous.id() {
                return Some(AppEvent::PresentMostRecent(PresentationMode::Browse));
            }
            tracing::debug!("Ignoring hotkey event {:?}", event.id);
        }
        None
    }
}

impl Drop for HotkeyManager {
    fn drop(&mut self) {
        let _ = self.manager.unregister(self.recognize);
        let _ = self.manager.unregister(self.browse_previous);
    }
}
