use crate::console_reader::forward_lines;

use std::io::Cursor;

use tokio::sync::mpsc;

/// WHAT: Non-blank lines are forwarded in order, then the sender is released
/// WHY: End of input must reach the app as a closed channel
#[test]
fn given_input_with_blank_lines_when_forwarding_then_only_commands_sent() {
    // Given: Three commands with blank lines between
    let input = Cursor::new("camera\n\n   \nshutter\nsubmit\n");
    let (line_tx, mut line_rx) = mpsc::channel(8);

    // When: Forwarding, then dropping the sender like the reader thread does
    forward_lines(input, &line_tx);
    drop(line_tx);

    // Then: Exactly the commands, then closed
    let mut received = Vec::new();
    while let Ok(line) = line_rx.try_recv() {
        received.push(line);
    }
    assert_eq!(received, vec!["camera", "shutter", "submit"]);
    assert!(line_rx.try_recv().is_err());
}

/// WHAT: Forwarding stops once the app has gone
/// WHY: The reader thread must not spin after shutdown
#[test]
fn given_closed_receiver_when_forwarding_then_returns() {
    // Given: A receiver that is already dropped
    let (line_tx, line_rx) = mpsc::channel(1);
    drop(line_rx);

    // When / Then: Returns instead of blocking
    forward_lines(Cursor::new("camera\nsubmit\n"), &line_tx);
}
