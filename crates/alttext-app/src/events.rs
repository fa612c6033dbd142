use alttext_core::{Completion, RecognitionCoordinator};
use alttext_types::AppEvent;
use kanal::AsyncReceiver;
use tokio_util::sync::CancellationToken;

pub mod present_recent;
pub mod trigger_recognition;

use present_recent::handle_present_recent;
use trigger_recognition::handle_recognition_trigger;

/// App's main loop.
///
/// Triggers and worker completions are both handled here, so the
/// coordinator is only ever touched from this task.
pub async fn event_loop(
    mut coordinator: RecognitionCoordinator,
    events_rx: AsyncReceiver<AppEvent>,
    completions_rx: AsyncReceiver<Completion>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                break;
            }
            completion = completions_rx.recv() => {
                let completion = completion?;
                tracing::debug!("[EVENT_LOOP] Completion for job {}", completion.job_id);
                coordinator.on_result(completion);
            }
            event = events_rx.recv() => {
                let event = event?;
                tracing::debug!("[EVENT_LOOP] Event received: {:?}", event);
                handle_event(&mut coordinator, event);
            }
        }
    }

    Ok(())
}

pub fn handle_event(coordinator: &mut RecognitionCoordinator, event: AppEvent) {
    match event {
        AppEvent::TriggerRecognition(mode) => handle_recognition_trigger(coordinator, mode),
        AppEvent::PresentMostRecent(mode) => handle_present_recent(coordinator, mode),
    }
}

/// Run one recognition and wait for its result, for `--once`
pub async fn recognize_once(
    mut coordinator: RecognitionCoordinator,
    completions_rx: AsyncReceiver<Completion>,
    mode: alttext_types::PresentationMode,
) -> anyhow::Result<()> {
    handle_recognition_trigger(&mut coordinator, mode);

    while coordinator.is_busy() {
        let completion = completions_rx.recv().await?;
        coordinator.on_result(completion);
    }

    Ok(())
}
