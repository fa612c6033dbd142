use std::path::Path;

use crate::error::EngineError;

/// Captioning backend.
///
/// `describe` blocks for as long as the model needs, so it is only ever
/// called from a blocking worker.
pub trait RecognitionEngine: Send + Sync {
    fn describe(&self, image_path: &Path) -> Result<String, EngineError>;
}
