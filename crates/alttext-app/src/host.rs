use alttext_core::{AccessibilityHost, AccessibleObject, HostUi, Role, ViewHandle};
use alttext_types::ScreenRect;

/// Terminal stand-in for a screen reader.
///
/// Announcements are printed, browsable results are printed as a framed
/// block, and the configured region is reported as the navigator image.
pub struct ConsoleHost {
    region: Option<ScreenRect>,
}

impl ConsoleHost {
    pub fn new(region: Option<ScreenRect>) -> Self {
        Self { region }
    }
}

impl HostUi for ConsoleHost {
    fn announce(&self, text: &str) {
        tracing::info!("Announce: {}", text);
        println!("{text}");
    }

    fn show_browsable_text(&self, title: &str, text: &str) -> ViewHandle {
        let view = ViewHandle::new();
        tracing::info!("Opening result view {:?}", view);

        let rule = "-".repeat(title.chars().count().max(text.chars().count()));
        println!("{title}\n{rule}\n{text}\n{rule}");
        view
    }
}

impl AccessibilityHost for ConsoleHost {
    fn focus_object(&self) -> Option<AccessibleObject> {
        None
    }

    fn navigator_object(&self) -> Option<AccessibleObject> {
        Some(AccessibleObject::new(Role::Graphic, self.region))
    }
}
