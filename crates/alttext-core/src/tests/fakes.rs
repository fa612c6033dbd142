//! Scripted collaborators for coordinator tests

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, mpsc};

use alttext_types::{PresentationMode, ScreenRect};

use crate::capture::{PixelBuffer, PixelCapture};
use crate::engine::RecognitionEngine;
use crate::error::{CaptureError, EngineError};
use crate::host::{AccessibilityHost, AccessibleObject, HostUi, Role, ViewHandle};

#[derive(Default, Clone)]
pub(crate) struct FakeAccessibility {
    pub focus: Option<AccessibleObject>,
    pub navigator: Option<AccessibleObject>,
    pub curtain: bool,
}

impl FakeAccessibility {
    pub fn graphic(rect: ScreenRect) -> Self {
        Self {
            navigator: Some(AccessibleObject::new(Role::Graphic, Some(rect))),
            ..Self::default()
        }
    }
}

impl AccessibilityHost for FakeAccessibility {
    fn focus_object(&self) -> Option<AccessibleObject> {
        self.focus.clone()
    }

    fn navigator_object(&self) -> Option<AccessibleObject> {
        self.navigator.clone()
    }

    fn screen_curtain_enabled(&self) -> bool {
        self.curtain
    }
}

/// Solid-red buffer; different `shade`s give different fingerprints
pub(crate) fn solid(shade: u8) -> PixelBuffer {
    let (width, height) = (16, 16);
    let mut data = Vec::with_capacity(width * height * 4);
    for _ in 0..width * height {
        data.extend_from_slice(&[shade, 0, 0, 255]);
    }
    PixelBuffer::from_rgba(width as u32, height as u32, data).unwrap()
}

pub(crate) struct FakeCapture {
    pub pixels: Mutex<Option<PixelBuffer>>,
    pub calls: AtomicUsize,
}

impl FakeCapture {
    pub fn new(pixels: PixelBuffer) -> Self {
        Self {
            pixels: Mutex::new(Some(pixels)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn set(&self, pixels: Option<PixelBuffer>) {
        *self.pixels.lock().unwrap() = pixels;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PixelCapture for FakeCapture {
    fn capture(&self, rect: ScreenRect) -> Result<PixelBuffer, CaptureError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.pixels
            .lock()
            .unwrap()
            .clone()
            .ok_or(CaptureError::OffScreen(rect))
    }
}

/// Engine that blocks until the test releases an outcome
pub(crate) struct GatedEngine {
    release: Mutex<mpsc::Receiver<Result<String, EngineError>>>,
    pub calls: AtomicUsize,
    /// Image path and whether it existed while `describe` ran
    pub seen: Mutex<Vec<(PathBuf, bool)>>,
}

impl GatedEngine {
    pub fn new() -> (Self, mpsc::Sender<Result<String, EngineError>>) {
        let (tx, rx) = mpsc::channel();
        let engine = Self {
            release: Mutex::new(rx),
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        };
        (engine, tx)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RecognitionEngine for GatedEngine {
    fn describe(&self, image_path: &std::path::Path) -> Result<String, EngineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen
            .lock()
            .unwrap()
            .push((image_path.to_path_buf(), image_path.exists()));
        self.release
            .lock()
            .unwrap()
            .recv()
            .unwrap_or_else(|e| Err(EngineError::Worker(e.to_string())))
    }
}

/// Records everything the coordinator tells the user
#[derive(Default)]
pub(crate) struct RecordingHost {
    pub spoken: Mutex<Vec<String>>,
    pub views: Mutex<Vec<String>>,
    /// Trigger the user "presses" from inside a presentation
    pub retrigger: Mutex<Option<mpsc::Sender<PresentationMode>>>,
}

impl RecordingHost {
    pub fn spoken(&self) -> Vec<String> {
        self.spoken.lock().unwrap().clone()
    }

    pub fn views(&self) -> Vec<String> {
        self.views.lock().unwrap().clone()
    }

    fn fire_retrigger(&self) {
        if let Some(tx) = self.retrigger.lock().unwrap().as_ref() {
            tx.send(PresentationMode::Speak).unwrap();
        }
    }
}

impl HostUi for RecordingHost {
    fn announce(&self, text: &str) {
        self.spoken.lock().unwrap().push(text.to_string());
    }

    fn show_browsable_text(&self, _title: &str, text: &str) -> ViewHandle {
        self.views.lock().unwrap().push(text.to_string());
        self.fire_retrigger();
        ViewHandle::new()
    }
}
