use std::path::PathBuf;

/// Reasons a trigger is refused before any recognition work is started.
///
/// The `Display` text is what the user hears.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecognitionRejected {
    #[error("Screen curtain is enabled. Disable screen curtain to use image captioning.")]
    ScreenCurtain,

    #[error("Already in a content recognition result")]
    AlreadyInResult,

    #[error("Currently focused element is not an image. Please try again with an image element.")]
    NotGraphic,

    #[error("Content is not visible")]
    NotVisible,

    #[error("Image too small to produce good results. Please try again with a larger image.")]
    TooSmall { width: u32, height: u32 },

    #[error("Already running an image captioning process. Please try again later.")]
    Busy,

    #[error("Could not prepare the image for recognition")]
    TempImage,
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("required captioning files not found: {0:?}")]
    MissingFiles(Vec<PathBuf>),

    #[error("failed to launch captioning program: {0}")]
    Launch(#[source] std::io::Error),

    #[error("captioning program exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },

    #[error("captioning output is not valid UTF-8")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("recognition worker stopped: {0}")]
    Worker(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("pixel buffer of {len} bytes does not match {width}x{height} RGBA")]
    BufferSize { width: u32, height: u32, len: usize },

    #[error("region {0:?} is outside every monitor")]
    OffScreen(alttext_types::ScreenRect),

    #[error("screen capture failed: {0}")]
    Backend(String),
}
