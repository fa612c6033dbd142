use std::path::PathBuf;
use std::sync::Arc;

use alttext_config::Config;
use alttext_core::{Collaborators, RecognitionCoordinator};
use alttext_types::PresentationMode;
use alttext_vision::{CommandEngine, ScreenCapture};
use clap::{Parser, ValueEnum};
use tokio::signal;

mod controller;
mod events;
mod host;
mod io;
mod logging;
mod profile;
mod state;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::host::ConsoleHost;
use self::state::AppState;

#[derive(Parser)]
#[command(name = "alttext", about = "Describe the image under focus")]
struct Args {
    /// JSON profile to load instead of the environment defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Recognize once with the given mode and exit
    #[arg(long, value_enum)]
    once: Option<OnceMode>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum OnceMode {
    Speak,
    Browse,
}

impl From<OnceMode> for PresentationMode {
    fn from(mode: OnceMode) -> Self {
        match mode {
            OnceMode::Speak => PresentationMode::Speak,
            OnceMode::Browse => PresentationMode::Browse,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Missing .env is fine
    dotenvy::dotenv().ok();
    logging::init_tracing(&args.log_level);

    let config = profile::load_config(args.config.as_deref())?;
    let collaborators = build_collaborators(&config);

    if let Some(mode) = args.once {
        let (coordinator, completions) = RecognitionCoordinator::new(&config.recognition, collaborators);
        return events::recognize_once(coordinator, completions, mode.into()).await;
    }

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state).await;
    let mut tasks = controller.spawn_tasks(collaborators).await;

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        signal::ctrl_c().await.expect("failed to listen for ctrl+c");
    };

    tokio::select! {
        _ = shutdown => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::warn!("task exited"),
                Ok(Err(e)) => tracing::error!("task failed: {e}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        if let Ok(Err(e)) = result {
            tracing::debug!("task ended with error during shutdown: {e}");
        }
    }

    Ok(())
}

fn build_collaborators(config: &Config) -> Collaborators {
    let region = config.trigger.capture_region.or_else(|| {
        alttext_vision::primary_monitor_rect()
            .inspect_err(|e| tracing::warn!("No capture region available: {e}"))
            .ok()
    });

    let host = Arc::new(ConsoleHost::new(region));
    Collaborators {
        engine: Arc::new(CommandEngine::new(&config.engine)),
        capture: Arc::new(ScreenCapture::new()),
        accessibility: host.clone(),
        host,
    }
}
