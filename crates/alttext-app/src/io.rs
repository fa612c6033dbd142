use std::time::Duration;

use alttext_types::AppEvent;
use kanal::AsyncSender;
use tokio_util::sync::CancellationToken;

/// Poll the global hotkeys on a blocking thread and forward presses
pub async fn watcher_io(
    poll_interval: Duration,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let cancel_clone = cancel.clone();

    let listener = tokio::task::spawn_blocking(move || {
        let hotkey_manager = match alttext_vision::HotkeyManager::new() {
            Ok(manager) => manager,
            Err(e) => {
                tracing::error!("Failed to create hotkey manager: {}", e);
                return;
            }
        };

        tracing::info!("Hotkeys registered (Alt+Shift+C recognize, Alt+Shift+R browse previous)");

        while !cancel_clone.is_cancelled() {
            if let Some(event) = hotkey_manager.poll() {
                tracing::debug!("Hotkey pressed: {:?}", event);
                // Blocking thread: a full channel drops the press rather than stalling polling
                match event_tx.try_send(event) {
                    Ok(true) => {}
                    Ok(false) => tracing::warn!("Event loop is backed up, dropping hotkey press"),
                    Err(e) => {
                        tracing::error!("Failed to forward hotkey press: {}", e);
                        break;
                    }
                }
            }

            std::thread::sleep(poll_interval);
        }

        tracing::info!("Hotkey listener stopping");
    });

    tokio::select! {
        result = listener => result?,
        _ = cancel.cancelled() => {}
    }

    Ok(())
}
