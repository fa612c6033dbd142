use alttext_core::RecognitionCoordinator;
use alttext_types::PresentationMode;

pub fn handle_present_recent(coordinator: &RecognitionCoordinator, mode: PresentationMode) {
    if !coordinator.present_most_recent(mode) {
        tracing::debug!(">>> [RECOGNITION] Nothing cached to present");
    }
}
