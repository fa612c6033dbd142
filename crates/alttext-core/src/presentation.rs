use alttext_types::PresentationMode;

use crate::cache::CaptionResult;
use crate::host::HostUi;

pub const RESULT_VIEW_TITLE: &str = "Image captioning result";

/// Final delivery of a caption to the user
pub trait Present {
    fn present(&self, result: &CaptionResult, host: &dyn HostUi);
}

impl Present for PresentationMode {
    fn present(&self, result: &CaptionResult, host: &dyn HostUi) {
        tracing::debug!("Presenting {} via {}", result.fingerprint, self);
        match self {
            PresentationMode::Speak => host.announce(&result.caption),
            PresentationMode::Browse => {
                let view = host.show_browsable_text(RESULT_VIEW_TITLE, &result.caption);
                tracing::debug!("Opened result view {:?}", view);
            }
        }
    }
}
