use crate::{
    AppError, AppResult, HostCommand, file_selection::read_selection, host_command::HELP,
    photo_download::spawn_photo_download, renderer::render,
};

use face_enroll_core::{
    CaptureWorkflow, HttpEnrollmentClient, Outcome, SessionContext, WorkflowAction,
};

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{error, info, instrument, warn};

/// Main application state.
///
/// Drives one [`CaptureWorkflow`] from console lines, and polls the
/// workflow's outstanding step between lines.
pub struct App {
    pub(crate) workflow: CaptureWorkflow,
    pub(crate) client: Arc<HttpEnrollmentClient>,
    pub(crate) session: SessionContext,
    pub(crate) line_rx: mpsc::Receiver<String>,
}

impl App {
    /// Run until the workflow closes.
    #[instrument(skip(self), fields(workflow_id = %self.workflow.id()))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!("Face-Enroll starting");
        self.show();

        loop {
            tokio::select! {
                line = self.line_rx.recv() => match line {
                    Some(line) => self.handle_line(&line).await,
                    None => {
                        info!("Console input closed, closing workflow");
                        self.apply(WorkflowAction::Close);
                    }
                },

                _ = self.workflow.settle(), if self.workflow.has_pending() => {
                    self.show();
                }
            }

            if self.workflow.is_closed() {
                break;
            }
        }

        info!("Face-Enroll shut down");

        Ok(())
    }

    async fn handle_line(&mut self, line: &str) {
        let command = match line.parse::<HostCommand>() {
            Ok(command) => command,
            Err(AppError::CommandParse { reason, .. }) => {
                println!("{}", reason);
                return;
            }
            Err(e) => {
                error!(error = ?e, "Failed to parse command");
                return;
            }
        };

        match command {
            HostCommand::UseCamera => self.apply(WorkflowAction::UseCamera),
            HostCommand::Shutter => self.apply(WorkflowAction::Capture),
            HostCommand::CancelCamera => self.apply(WorkflowAction::CancelCamera),
            HostCommand::ChooseFile { path } => match read_selection(&path).await {
                Ok(file) => self.apply(WorkflowAction::ChooseFile(file)),
                Err(e) => {
                    warn!(path = ?path, error = ?e, "Failed to read selected file");
                    println!("cannot read {}", path.display());
                }
            },
            HostCommand::Set(edit) => self.apply(WorkflowAction::EditField(edit)),
            HostCommand::Retake => self.apply(WorkflowAction::Retake),
            HostCommand::Submit => self.apply(WorkflowAction::Submit),
            HostCommand::Retry => self.apply(WorkflowAction::TryAgain),
            HostCommand::Dismiss => self.apply(WorkflowAction::Dismiss),
            HostCommand::FetchPhoto { person_id, path } => {
                // Detached; the result is printed when it lands.
                let _download = spawn_photo_download(
                    Arc::clone(&self.client),
                    self.session.clone(),
                    person_id,
                    path,
                );
            }
            HostCommand::Status => self.show(),
            HostCommand::Help => println!("{}", HELP),
            HostCommand::Close => self.apply(WorkflowAction::Close),
        }
    }

    fn apply(&mut self, action: WorkflowAction) {
        if self.workflow.dispatch(action) == Outcome::Ignored {
            println!("(not available right now)");
        }
        self.show();
    }

    fn show(&self) {
        print!("{}", render(&self.workflow.view()));
    }
}
