use alttext_core::{RecognitionCoordinator, RequestOutcome};
use alttext_types::PresentationMode;

pub fn handle_recognition_trigger(coordinator: &mut RecognitionCoordinator, mode: PresentationMode) {
    tracing::debug!(">>> [RECOGNITION] Triggered ({})", mode);

    match coordinator.request(mode) {
        RequestOutcome::Started(id) => tracing::debug!(">>> [RECOGNITION] Job {} started", id),
        RequestOutcome::Upgraded(id) => tracing::debug!(">>> [RECOGNITION] Job {} upgraded", id),
        RequestOutcome::CacheHit(fingerprint) => {
            tracing::debug!(">>> [RECOGNITION] Served {} from cache", fingerprint)
        }
        RequestOutcome::Rejected(reason) => {
            tracing::debug!(">>> [RECOGNITION] Rejected: {:?}", reason)
        }
    }
}
