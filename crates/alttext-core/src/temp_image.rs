use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::capture::PixelBuffer;

/// RAII guard for the JPEG handed to the engine
///
/// The file is removed when the guard is dropped, whether the engine call
/// succeeded, failed or panicked.
#[derive(Debug)]
pub struct TempImage {
    path: PathBuf,
}

impl TempImage {
    /// Write `pixels` to a fresh `alttext_<uuid>.jpg` in `dir`
    pub fn write(pixels: &PixelBuffer, dir: &Path) -> io::Result<Self> {
        let path = dir.join(format!("alttext_{}.jpg", Uuid::new_v4()));
        // Guard first so a partially written file is still cleaned up
        let guard = TempImage { path };
        pixels.save_jpeg(&guard.path).map_err(io::Error::other)?;
        Ok(guard)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempImage {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("Failed to remove {}: {}", self.path.display(), e),
        }
    }
}
