use alttext_types::ScreenRect;
use uuid::Uuid;

/// Output channels of the host screen reader
pub trait HostUi: Send + Sync {
    /// Speak `text`
    fn announce(&self, text: &str);

    /// Open `text` in a read-only view and move focus into it
    fn show_browsable_text(&self, title: &str, text: &str) -> ViewHandle;
}

/// Identifies a browsable view opened by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewHandle(pub Uuid);

impl ViewHandle {
    pub fn new() -> Self {
        ViewHandle(Uuid::new_v4())
    }
}

impl Default for ViewHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Graphic,
    Document,
    Link,
    Text,
    Other,
}

/// Snapshot of an accessible object as reported by the host
#[derive(Debug, Clone)]
pub struct AccessibleObject {
    pub role: Role,
    /// `None` when the object is off screen
    pub location: Option<ScreenRect>,
    /// Focus is inside browse-mode (virtual buffer) content
    pub in_virtual_content: bool,
    /// Object is a view opened for a previous recognition result
    pub is_recognition_result: bool,
    pub children: Vec<AccessibleObject>,
}

impl AccessibleObject {
    pub fn new(role: Role, location: Option<ScreenRect>) -> Self {
        Self {
            role,
            location,
            in_virtual_content: false,
            is_recognition_result: false,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<AccessibleObject>) -> Self {
        self.children = children;
        self
    }

    pub fn in_virtual_content(mut self) -> Self {
        self.in_virtual_content = true;
        self
    }

    pub fn recognition_result(mut self) -> Self {
        self.is_recognition_result = true;
        self
    }

    /// First graphic descendant, depth-first
    pub fn find_graphic_descendant(&self) -> Option<&AccessibleObject> {
        self.children.iter().find_map(|child| {
            if child.role == Role::Graphic {
                Some(child)
            } else {
                child.find_graphic_descendant()
            }
        })
    }
}

/// Read access to the host's focus and navigator objects
pub trait AccessibilityHost: Send + Sync {
    fn focus_object(&self) -> Option<AccessibleObject>;

    fn navigator_object(&self) -> Option<AccessibleObject>;

    fn screen_curtain_enabled(&self) -> bool {
        false
    }
}
