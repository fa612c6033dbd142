//! Event loop wiring: triggers and completions meet on one task

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use alttext_config::recognition::RecognitionConfig;
use alttext_core::{
    AccessibilityHost, AccessibleObject, CaptureError, Collaborators, EngineError, HostUi,
    PixelBuffer, PixelCapture, RecognitionCoordinator, RecognitionEngine, Role, ViewHandle,
};
use alttext_types::{AppEvent, PresentationMode, ScreenRect};
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use crate::events::{event_loop, recognize_once};

struct SlowEngine {
    calls: AtomicUsize,
}

impl RecognitionEngine for SlowEngine {
    fn describe(&self, _image_path: &Path) -> Result<String, EngineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        std::thread::sleep(Duration::from_millis(50));
        Ok("a sailboat on a lake.".to_string())
    }
}

struct StaticCapture;

impl PixelCapture for StaticCapture {
    fn capture(&self, _rect: ScreenRect) -> Result<PixelBuffer, CaptureError> {
        PixelBuffer::from_rgba(8, 8, vec![120; 8 * 8 * 4])
    }
}

#[derive(Default)]
struct Recorder {
    spoken: Mutex<Vec<String>>,
    views: Mutex<Vec<String>>,
}

impl Recorder {
    fn spoken(&self) -> Vec<String> {
        self.spoken.lock().unwrap().clone()
    }

    fn views(&self) -> Vec<String> {
        self.views.lock().unwrap().clone()
    }
}

impl HostUi for Recorder {
    fn announce(&self, text: &str) {
        self.spoken.lock().unwrap().push(text.to_string());
    }

    fn show_browsable_text(&self, _title: &str, text: &str) -> ViewHandle {
        self.views.lock().unwrap().push(text.to_string());
        ViewHandle::new()
    }
}

impl AccessibilityHost for Recorder {
    fn focus_object(&self) -> Option<AccessibleObject> {
        None
    }

    fn navigator_object(&self) -> Option<AccessibleObject> {
        Some(AccessibleObject::new(
            Role::Graphic,
            Some(ScreenRect::new(0, 0, 400, 300)),
        ))
    }
}

fn setup(dir: &Path) -> (RecognitionCoordinator, kanal::AsyncReceiver<alttext_core::Completion>, Arc<SlowEngine>, Arc<Recorder>) {
    let engine = Arc::new(SlowEngine {
        calls: AtomicUsize::new(0),
    });
    let host = Arc::new(Recorder::default());
    let collaborators = Collaborators {
        engine: engine.clone(),
        capture: Arc::new(StaticCapture),
        accessibility: host.clone(),
        host: host.clone(),
    };
    let (coordinator, completions) =
        RecognitionCoordinator::new(&RecognitionConfig::default(), collaborators);
    (coordinator.with_temp_dir(dir), completions, engine, host)
}

async fn wait_until(condition: impl Fn() -> bool) {
    timeout(Duration::from_secs(2), async {
        while !condition() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("condition never became true");
}

#[tokio::test]
async fn test_trigger_then_browse_previous() {
    let dir = tempfile::tempdir().unwrap();
    let (coordinator, completions, engine, host) = setup(dir.path());
    let (events_tx, events_rx) = kanal::unbounded_async();
    let cancel = CancellationToken::new();

    let event_loop = tokio::spawn(event_loop(coordinator, events_rx, completions, cancel.clone()));

    events_tx
        .send(AppEvent::TriggerRecognition(PresentationMode::Speak))
        .await
        .unwrap();
    wait_until(|| host.spoken().iter().any(|s| s == "a sailboat on a lake.")).await;

    events_tx
        .send(AppEvent::PresentMostRecent(PresentationMode::Browse))
        .await
        .unwrap();
    wait_until(|| !host.views().is_empty()).await;

    assert_eq!(host.views(), vec!["a sailboat on a lake."]);
    assert_eq!(engine.calls.load(Ordering::SeqCst), 1);

    cancel.cancel();
    let result = timeout(Duration::from_secs(1), event_loop).await.unwrap().unwrap();
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_double_press_opens_browse_view() {
    let dir = tempfile::tempdir().unwrap();
    let (coordinator, completions, engine, host) = setup(dir.path());
    let (events_tx, events_rx) = kanal::unbounded_async();
    let cancel = CancellationToken::new();

    let event_loop = tokio::spawn(event_loop(coordinator, events_rx, completions, cancel.clone()));

    for _ in 0..2 {
        events_tx
            .send(AppEvent::TriggerRecognition(PresentationMode::Speak))
            .await
            .unwrap();
    }
    wait_until(|| !host.views().is_empty()).await;

    assert_eq!(host.views(), vec!["a sailboat on a lake."]);
    assert_eq!(host.spoken(), vec!["Recognizing", "Recognizing"]);
    assert_eq!(engine.calls.load(Ordering::SeqCst), 1);

    cancel.cancel();
    timeout(Duration::from_secs(1), event_loop).await.unwrap().unwrap().unwrap();
}

#[tokio::test]
async fn test_closed_trigger_channel_ends_loop() {
    let dir = tempfile::tempdir().unwrap();
    let (coordinator, completions, _engine, _host) = setup(dir.path());
    let (events_tx, events_rx) = kanal::unbounded_async::<AppEvent>();
    drop(events_tx);

    let result = timeout(
        Duration::from_secs(1),
        event_loop(coordinator, events_rx, completions, CancellationToken::new()),
    )
    .await
    .unwrap();

    assert!(result.is_err());
}

#[tokio::test]
async fn test_recognize_once_waits_for_result() {
    let dir = tempfile::tempdir().unwrap();
    let (coordinator, completions, engine, host) = setup(dir.path());

    timeout(
        Duration::from_secs(2),
        recognize_once(coordinator, completions, PresentationMode::Browse),
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(host.views(), vec!["a sailboat on a lake."]);
    assert_eq!(engine.calls.load(Ordering::SeqCst), 1);
}
