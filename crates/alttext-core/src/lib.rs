pub mod cache;
pub mod capture;
pub mod coordinator;
pub mod engine;
pub mod error;
pub mod fingerprint;
pub mod host;
pub mod presentation;
pub mod target;
pub mod temp_image;

pub use cache::{CaptionResult, ResultCache};
pub use capture::{PixelBuffer, PixelCapture};
pub use coordinator::{Collaborators, Completion, RecognitionCoordinator, RequestOutcome};
pub use engine::RecognitionEngine;
pub use error::{CaptureError, EngineError, RecognitionRejected};
pub use fingerprint::Fingerprint;
pub use host::{AccessibilityHost, AccessibleObject, HostUi, Role, ViewHandle};
pub use presentation::Present;
pub use target::{Target, TargetPolicy, acquire_target};
pub use temp_image::TempImage;

#[cfg(test)]
mod tests;
