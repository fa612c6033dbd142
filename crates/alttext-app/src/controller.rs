use std::sync::Arc;
use std::time::Duration;

use alttext_core::{Collaborators, Completion, RecognitionCoordinator};
use alttext_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::io::watcher_io;
use crate::state::AppState;

/// Trigger channel between the hotkey watcher and the event loop
pub struct ChannelSet {
    pub triggers: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            triggers: kanal::bounded_async(capacity),
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub async fn new(state: Arc<AppState>) -> Self {
        let capacity = state.config.read().await.event_channel_capacity;
        Self {
            channels: ChannelSet::new(capacity),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub async fn spawn_tasks(&self, collaborators: Collaborators) -> JoinSet<anyhow::Result<()>> {
        let (recognition, poll_interval, hotkeys_enabled) = {
            let config = self.state.config.read().await;
            (
                config.recognition.clone(),
                Duration::from_millis(config.poll_interval_ms),
                config.trigger.hotkeys_enabled,
            )
        };

        let (coordinator, completions): (RecognitionCoordinator, AsyncReceiver<Completion>) =
            RecognitionCoordinator::new(&recognition, collaborators);

        let mut tasks = JoinSet::new();

        // Event loop, sole owner of the coordinator
        tasks.spawn(event_loop(
            coordinator,
            self.channels.triggers.1.clone(),
            completions,
            self.cancel_token.child_token(),
        ));

        // Hotkey watcher
        if hotkeys_enabled {
            tasks.spawn(watcher_io(
                poll_interval,
                self.cancel_token.child_token(),
                self.channels.triggers.0.clone(),
            ));
        } else {
            tracing::info!("Hotkeys disabled");
        }

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
