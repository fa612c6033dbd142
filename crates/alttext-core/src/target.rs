use alttext_config::recognition::RecognitionConfig;
use alttext_types::ScreenRect;

use crate::error::RecognitionRejected;
use crate::host::{AccessibilityHost, AccessibleObject, Role};

/// Eligibility rules applied to the resolved object
#[derive(Debug, Clone, Copy)]
pub struct TargetPolicy {
    pub filter_non_graphic: bool,
    pub search_children: bool,
    pub min_size: u32,
}

impl From<&RecognitionConfig> for TargetPolicy {
    fn from(config: &RecognitionConfig) -> Self {
        Self {
            filter_non_graphic: config.filter_non_graphic,
            search_children: config.search_children,
            min_size: config.min_image_size,
        }
    }
}

impl Default for TargetPolicy {
    fn default() -> Self {
        Self::from(&RecognitionConfig::default())
    }
}

/// Screen region cleared for recognition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub rect: ScreenRect,
    pub allows_child_search: bool,
}

/// Resolve the object the user means and check it can be recognized.
pub fn acquire_target(
    host: &dyn AccessibilityHost,
    policy: TargetPolicy,
) -> Result<Target, RecognitionRejected> {
    if host.screen_curtain_enabled() {
        return Err(RecognitionRejected::ScreenCurtain);
    }

    let focus = host.focus_object();
    if focus.as_ref().is_some_and(|f| f.is_recognition_result) {
        return Err(RecognitionRejected::AlreadyInResult);
    }

    let allows_child_search =
        policy.search_children && focus.as_ref().is_some_and(|f| f.in_virtual_content);

    let descendant = if allows_child_search {
        focus
            .as_ref()
            .and_then(AccessibleObject::find_graphic_descendant)
            .cloned()
    } else {
        None
    };

    let object = descendant
        .or_else(|| host.navigator_object())
        .or(focus)
        .ok_or(RecognitionRejected::NotVisible)?;

    if policy.filter_non_graphic && object.role != Role::Graphic {
        tracing::debug!("Navigator object role: {:?}", object.role);
        return Err(RecognitionRejected::NotGraphic);
    }

    let rect = match object.location {
        Some(rect) if !rect.is_empty() => rect,
        other => {
            tracing::debug!("Object returned location {:?}", other);
            return Err(RecognitionRejected::NotVisible);
        }
    };

    if rect.width < policy.min_size && rect.height < policy.min_size {
        tracing::debug!("Capture bounds: width={}, height={}", rect.width, rect.height);
        return Err(RecognitionRejected::TooSmall {
            width: rect.width,
            height: rect.height,
        });
    }

    Ok(Target {
        rect,
        allows_child_search,
    })
}
