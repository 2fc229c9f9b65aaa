use crate::AppResult;

use std::io::{BufRead, BufReader};

use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Forwards console lines to the async app.
///
/// Runs on a detached OS thread: a read blocked on stdin must not keep the
/// runtime alive at exit. End of input drops the sender, which the app
/// treats as a close request.
pub(crate) struct ConsoleReader;

impl ConsoleReader {
    /// Start forwarding stdin.
    #[track_caller]
    pub(crate) fn spawn(line_tx: mpsc::Sender<String>) -> AppResult<()> {
        std::thread::Builder::new()
            .name("console-reader".to_string())
            .spawn(move || {
                let stdin = std::io::stdin();
                forward_lines(BufReader::new(stdin.lock()), &line_tx);
            })?;

        Ok(())
    }
}

/// Send every non-empty line until input ends or the receiver is gone.
pub(crate) fn forward_lines<R: BufRead>(reader: R, line_tx: &mpsc::Sender<String>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "Failed to read console input");
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        if line_tx.blocking_send(line).is_err() {
            debug!("App gone, console reader stopping");
            return;
        }
    }

    debug!("Console input ended");
}
