//! Read and write pumps for the session WebSocket.

use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, trace, warn};

use shopsnap_protocol::envelope::Message;
use shopsnap_protocol::messages::SessionEvent;

/// Reads frames from the WebSocket and forwards decoded events.
///
/// Stops on cancellation, a close frame, a read error, or stream end.
pub(crate) async fn read_pump<S>(
    mut read: S,
    events_tx: mpsc::Sender<SessionEvent>,
    write_tx: mpsc::Sender<tungstenite::Message>,
    cancel: CancellationToken,
) where
    S: StreamExt<Item = Result<tungstenite::Message, tungstenite::Error>> + Unpin,
{
    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,

            msg = read.next() => {
                match msg {
                    Some(Ok(tungstenite::Message::Text(text))) => {
                        if let Some(event) = decode_frame(text.as_str()) {
                            if events_tx.send(event).await.is_err() {
                                // Consumer hung up; the session is over.
                                break;
                            }
                        }
                    }
                    Some(Ok(tungstenite::Message::Ping(data))) => {
                        trace!("received ping, sending pong");
                        let _ = write_tx.send(tungstenite::Message::Pong(data)).await;
                    }
                    Some(Ok(tungstenite::Message::Close(_))) => {
                        debug!("received close frame");
                        break;
                    }
                    Some(Ok(_)) => {} // Pong, binary — ignore
                    Some(Err(e)) => {
                        warn!("WebSocket read error: {e}");
                        break;
                    }
                    None => {
                        debug!("WebSocket stream ended");
                        break;
                    }
                }
            }
        }
    }
}

/// Decodes one text frame into a session event.
///
/// Malformed envelopes and message kinds the collector does not consume
/// are logged and dropped.
fn decode_frame(text: &str) -> Option<SessionEvent> {
    let msg: Message = match serde_json::from_str(text) {
        Ok(m) => m,
        Err(e) => {
            warn!("failed to parse message: {e}");
            return None;
        }
    };

    match SessionEvent::from_message(&msg) {
        Ok(Some(event)) => {
            trace!(msg_type = ?msg.msg_type, id = %msg.id, "received event");
            Some(event)
        }
        Ok(None) => {
            trace!(msg_type = ?msg.msg_type, "dropping unconsumed message kind");
            None
        }
        Err(e) => {
            warn!(msg_type = ?msg.msg_type, "failed to decode payload: {e}");
            None
        }
    }
}

/// Writes messages to the WebSocket, then a close frame on shutdown.
pub(crate) async fn write_pump<S>(
    mut write: S,
    mut write_rx: mpsc::Receiver<tungstenite::Message>,
    cancel: CancellationToken,
) where
    S: SinkExt<tungstenite::Message, Error = tungstenite::Error> + Unpin,
{
    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            msg = write_rx.recv() => {
                match msg {
                    Some(m) => {
                        if let Err(e) = write.send(m).await {
                            error!("WebSocket write error: {e}");
                            break;
                        }
                    }
                    None => break,
                }
            }
        }
    }

    let _ = write.send(tungstenite::Message::Close(None)).await;
}
