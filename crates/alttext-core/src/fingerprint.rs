use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};

use crate::capture::PixelBuffer;

/// Digest of the red channel of a captured region.
///
/// Each column is hashed top to bottom, then the column hashes are hashed in
/// order. Stable within a process run only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint(u64);

impl Fingerprint {
    pub fn of(pixels: &PixelBuffer) -> Self {
        let mut column_hashes = Vec::with_capacity(pixels.width() as usize);
        for x in 0..pixels.width() {
            let mut hasher = DefaultHasher::new();
            for y in 0..pixels.height() {
                pixels.red(x, y).hash(&mut hasher);
            }
            column_hashes.push(hasher.finish());
        }

        let mut hasher = DefaultHasher::new();
        column_hashes.hash(&mut hasher);
        Fingerprint(hasher.finish())
    }

    pub fn from_raw(value: u64) -> Self {
        Fingerprint(value)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}
