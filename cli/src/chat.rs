//! Interactive chat: stdin lines out, received messages in.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::io::Write;
use std::pin::pin;

use api::{ChatEvent, ChatHandle, Connector, ConnectionStatus, Messenger};
use futures_util::future::{self, Either};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::watch;

use crate::error::CliError;

/// Run one chat channel until `input` reaches EOF or the server closes it.
///
/// Every received message is written to `out` as one line, in arrival order.
/// Blank input lines are not sent.
pub async fn run<C, R, W>(messenger: Messenger<C>, input: R, out: &mut W) -> Result<(), CliError>
where
    C: Connector,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let (handle, pump) = messenger.enter();
    let (connected_tx, connected) = watch::channel(false);

    let mut write_error = None;
    let outcome = {
        let pump = pin!(pump.run(|event| match event {
            ChatEvent::Message(text) => {
                if let Err(e) = writeln!(out, "{text}") {
                    write_error.get_or_insert(e);
                }
            }
            ChatEvent::Status(ConnectionStatus::Connected) => {
                connected_tx.send_replace(true);
                tracing::info!("chat connected");
            }
            ChatEvent::Status(status) => tracing::debug!(?status, "chat status"),
        }));
        let forward = pin!(forward_lines(input, handle, connected));

        match future::select(pump, forward).await {
            Either::Left((outcome, _)) => outcome,
            Either::Right(((), pump)) => pump.await,
        }
    };
    outcome?;
    match write_error {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

/// Forward input lines until EOF. At EOF the channel is held until it has
/// connected so queued lines go out; returning drops `handle` and releases it.
async fn forward_lines<R: AsyncBufRead + Unpin>(
    input: R,
    handle: ChatHandle,
    mut connected: watch::Receiver<bool>,
) {
    let mut lines = input.lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                if line.trim().is_empty() {
                    continue;
                }
                if !handle.send(&line) {
                    tracing::warn!("chat is not connected; message dropped");
                    return;
                }
            }
            Ok(None) => {
                if connected.wait_for(|up| *up).await.is_err() {
                    tracing::debug!("chat ended before connecting");
                }
                return;
            }
            Err(e) => {
                tracing::warn!(error = %e, "stdin read failed");
                return;
            }
        }
    }
}
