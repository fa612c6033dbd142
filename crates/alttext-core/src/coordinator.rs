use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use alttext_config::recognition::RecognitionConfig;
use alttext_types::PresentationMode;
use kanal::{AsyncReceiver, AsyncSender};
use uuid::Uuid;

use crate::cache::{CaptionResult, ResultCache};
use crate::capture::PixelCapture;
use crate::engine::RecognitionEngine;
use crate::error::{EngineError, RecognitionRejected};
use crate::fingerprint::Fingerprint;
use crate::host::{AccessibilityHost, HostUi};
use crate::presentation::Present;
use crate::target::{TargetPolicy, acquire_target};
use crate::temp_image::TempImage;

pub const RECOGNIZING: &str = "Recognizing";
pub const RECOGNITION_FAILED: &str = "Recognition failed";
pub const NO_PREVIOUS_RESULT: &str = "No image captioning result yet";

/// Injected capabilities the coordinator drives
#[derive(Clone)]
pub struct Collaborators {
    pub engine: Arc<dyn RecognitionEngine>,
    pub capture: Arc<dyn PixelCapture>,
    pub accessibility: Arc<dyn AccessibilityHost>,
    pub host: Arc<dyn HostUi>,
}

/// Result of a background recognition, delivered back to the owner of the
/// coordinator through the completion channel
#[derive(Debug)]
pub struct Completion {
    pub job_id: Uuid,
    pub fingerprint: Fingerprint,
    pub outcome: Result<String, EngineError>,
}

/// Which path a `request` call took
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    CacheHit(Fingerprint),
    Started(Uuid),
    Upgraded(Uuid),
    Rejected(RecognitionRejected),
}

#[derive(Debug)]
struct RecognitionJob {
    id: Uuid,
    fingerprint: Fingerprint,
    image_path: PathBuf,
    mode: PresentationMode,
    started_at: Instant,
    allows_child_search: bool,
}

/// Single-flight recognition front end.
///
/// Owns the result cache and the active job slot. Every method takes
/// `&mut self` and is meant to be called from one event loop; the engine
/// runs on a blocking worker that reports back through the channel returned
/// by [`RecognitionCoordinator::new`].
pub struct RecognitionCoordinator {
    collaborators: Collaborators,
    cache: ResultCache,
    active: Option<RecognitionJob>,
    policy: TargetPolicy,
    debounce_window: Duration,
    temp_dir: PathBuf,
    completion_tx: AsyncSender<Completion>,
}

impl RecognitionCoordinator {
    pub fn new(
        config: &RecognitionConfig,
        collaborators: Collaborators,
    ) -> (Self, AsyncReceiver<Completion>) {
        let (completion_tx, completion_rx) = kanal::unbounded_async();

        let coordinator = Self {
            collaborators,
            cache: ResultCache::new(config.cache_capacity),
            active: None,
            policy: TargetPolicy::from(config),
            debounce_window: config.debounce_window(),
            temp_dir: std::env::temp_dir(),
            completion_tx,
        };

        (coordinator, completion_rx)
    }

    /// Directory for the JPEGs handed to the engine
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = dir.into();
        self
    }

    pub fn request(&mut self, mode: PresentationMode) -> RequestOutcome {
        self.request_at(mode, Instant::now())
    }

    pub(crate) fn request_at(&mut self, mode: PresentationMode, now: Instant) -> RequestOutcome {
        let target = match acquire_target(self.collaborators.accessibility.as_ref(), self.policy) {
            Ok(target) => target,
            Err(reason) => return self.reject(reason),
        };

        let pixels = match self.collaborators.capture.capture(target.rect) {
            Ok(pixels) => pixels,
            Err(e) => {
                tracing::warn!("Capture of {:?} failed: {}", target.rect, e);
                return self.reject(RecognitionRejected::NotVisible);
            }
        };
        let fingerprint = pixels.fingerprint();

        if let Some(cached) = self.cache.lookup(fingerprint) {
            tracing::debug!("Cache hit for {}", fingerprint);
            mode.present(cached, self.collaborators.host.as_ref());
            return RequestOutcome::CacheHit(fingerprint);
        }

        if let Some(job) = self.active.as_mut() {
            let elapsed = now.saturating_duration_since(job.started_at);
            if elapsed <= self.debounce_window && job.mode != PresentationMode::Browse {
                job.mode = job.mode.escalate();
                tracing::info!("Job {} upgraded to {} after {:?}", job.id, job.mode, elapsed);
                self.collaborators.host.announce(RECOGNIZING);
                return RequestOutcome::Upgraded(job.id);
            }
            tracing::debug!("Job {} running for {:?}", job.id, elapsed);
            return self.reject(RecognitionRejected::Busy);
        }

        let image = match TempImage::write(&pixels, &self.temp_dir) {
            Ok(image) => image,
            Err(e) => {
                tracing::error!("Failed to write capture for recognition: {}", e);
                return self.reject(RecognitionRejected::TempImage);
            }
        };

        let job = RecognitionJob {
            id: Uuid::new_v4(),
            fingerprint,
            image_path: image.path().to_path_buf(),
            mode,
            started_at: now,
            allows_child_search: target.allows_child_search,
        };
        tracing::info!(
            "Starting job {} for {} ({}, child search: {})",
            job.id,
            job.fingerprint,
            job.image_path.display(),
            job.allows_child_search
        );

        self.collaborators.host.announce(RECOGNIZING);
        self.spawn_worker(job.id, fingerprint, image);

        let id = job.id;
        self.active = Some(job);
        RequestOutcome::Started(id)
    }

    fn spawn_worker(&self, job_id: Uuid, fingerprint: Fingerprint, image: TempImage) {
        let engine = Arc::clone(&self.collaborators.engine);
        let completion_tx = self.completion_tx.clone();

        tokio::spawn(async move {
            let result = tokio::task::spawn_blocking(move || {
                let outcome = engine.describe(image.path());
                drop(image);
                outcome
            })
            .await;

            let outcome = match result {
                Ok(outcome) => outcome,
                Err(e) => Err(EngineError::Worker(e.to_string())),
            };

            if let Err(e) = completion_tx
                .send(Completion {
                    job_id,
                    fingerprint,
                    outcome,
                })
                .await
            {
                tracing::warn!("Dropped completion of job {}: {}", job_id, e);
            }
        });
    }

    /// Deliver a worker result.
    ///
    /// The job slot is cleared before anything is presented. Completions for
    /// a job that is no longer active are discarded.
    pub fn on_result(&mut self, completion: Completion) {
        let Some(job) = self.active.take_if(|job| job.id == completion.job_id) else {
            tracing::debug!("Discarding completion of inactive job {}", completion.job_id);
            return;
        };

        let host = self.collaborators.host.as_ref();
        match completion.outcome {
            Err(e) => {
                tracing::error!("Recognition failed: {}", e);
                host.announce(RECOGNITION_FAILED);
            }
            Ok(caption) => {
                tracing::info!("Job {} finished after {:?}", job.id, job.started_at.elapsed());
                let result = CaptionResult::new(job.fingerprint, caption);
                self.cache.insert(result.clone());
                job.mode.present(&result, host);
            }
        }
    }

    /// Re-deliver the newest cached caption without recognizing anything
    pub fn present_most_recent(&self, mode: PresentationMode) -> bool {
        let host = self.collaborators.host.as_ref();
        match self.cache.most_recent() {
            Some(result) => {
                mode.present(result, host);
                true
            }
            None => {
                host.announce(NO_PREVIOUS_RESULT);
                false
            }
        }
    }

    pub fn is_busy(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_mode(&self) -> Option<PresentationMode> {
        self.active.as_ref().map(|job| job.mode)
    }

    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }

    fn reject(&self, reason: RecognitionRejected) -> RequestOutcome {
        tracing::warn!("Recognition rejected: {:?}", reason);
        self.collaborators.host.announce(&reason.to_string());
        RequestOutcome::Rejected(reason)
    }
}
