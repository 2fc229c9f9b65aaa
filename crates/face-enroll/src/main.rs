//! Face-Enroll: terminal host for the face-photo enrollment workflow.

mod app;
mod camera;
mod config;
mod console_host;
mod console_reader;
mod error;
mod file_selection;
mod host_command;
mod photo_download;
mod preview_store;
mod renderer;
#[cfg(test)]
mod tests;

pub(crate) use {
    app::App,
    console_host::ConsoleHost,
    console_reader::ConsoleReader,
    error::{AppError, Result as AppResult},
    host_command::HostCommand,
    preview_store::PreviewStore,
};

use crate::config::{Config, TOKEN_ENV, project_dirs};

use std::sync::Arc;

use face_enroll_core::{CaptureWorkflow, HttpEnrollmentClient, WorkflowDeps};
use tokio::sync::mpsc;
use tracing::error;
use tracing_appender::{non_blocking::WorkerGuard, rolling::{RollingFileAppender, Rotation}};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "face_enroll=debug,face_enroll_core=debug";

/// Application entry point.
#[tokio::main]
async fn main() {
    // Flushes the log file on drop.
    let log_guard = init_logging();

    if let Err(e) = run().await {
        error!(error = ?e, "Face-Enroll failed");
        eprintln!("face-enroll: {}", e);
        drop(log_guard);
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let config = Config::load()?;
    let dirs = project_dirs()?;

    let client = Arc::new(HttpEnrollmentClient::new(
        &config.service.base_url,
        config.request_timeout(),
    )?);
    let session = config.session_context(std::env::var(TOKEN_ENV).ok());

    let deps = WorkflowDeps {
        media: camera::camera_backend(&config.camera),
        previews: Arc::new(PreviewStore::new(dirs.cache_dir().join("previews"))?),
        api: client.clone(),
        host: Arc::new(ConsoleHost),
    };
    let workflow = CaptureWorkflow::new(deps, session.clone(), config.workflow_config());

    let (line_tx, line_rx) = mpsc::channel(32);
    ConsoleReader::spawn(line_tx)?;

    let app = App {
        workflow,
        client,
        session,
        line_rx,
    };

    app.run().await
}

/// Log to a daily file in the data directory; stdout belongs to the prompt.
/// Falls back to stderr when no data directory is available.
fn init_logging() -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let appender = project_dirs().ok().and_then(|dirs| {
        RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("face-enroll")
            .filename_suffix("log")
            .build(dirs.data_dir().join("logs"))
            .ok()
    });

    match appender {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
            None
        }
    }
}
