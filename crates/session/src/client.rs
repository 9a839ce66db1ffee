//! WebSocket session client.

use futures_util::StreamExt;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite;
use tokio_util::sync::CancellationToken;

use shopsnap_protocol::constants::WS_MAX_MESSAGE_SIZE;
use shopsnap_protocol::messages::{LoginRequest, Request, SessionEvent};
use shopsnap_protocol::session::{Session, SessionError};

/// A live session with the game service.
///
/// One session serves exactly one snapshot run; there is no reconnect.
/// Dropping the session cancels both pumps.
pub struct ShopSession {
    events_rx: mpsc::Receiver<SessionEvent>,
    write_tx: mpsc::Sender<tungstenite::Message>,
    cancel: CancellationToken,
    _read_handle: tokio::task::JoinHandle<()>,
    _write_handle: tokio::task::JoinHandle<()>,
}

impl ShopSession {
    /// Connects to the service and sends the login request.
    ///
    /// Login success arrives later as a [`SessionEvent::LoginSuccess`]
    /// event; this method only bootstraps the connection.
    pub async fn connect(url: &str, login: LoginRequest) -> Result<Self, SessionError> {
        let mut ws_config = tungstenite::protocol::WebSocketConfig::default();
        ws_config.max_message_size = Some(WS_MAX_MESSAGE_SIZE);
        ws_config.max_frame_size = Some(WS_MAX_MESSAGE_SIZE);

        let (ws_stream, _) =
            tokio_tungstenite::connect_async_with_config(url, Some(ws_config), false)
                .await
                .map_err(|e| SessionError::Transport(e.to_string()))?;
        let (write, read) = ws_stream.split();

        let (write_tx, write_rx) = mpsc::channel::<tungstenite::Message>(64);
        let (events_tx, events_rx) = mpsc::channel::<SessionEvent>(256);
        let cancel = CancellationToken::new();

        let write_handle = {
            let cancel = cancel.clone();
            tokio::spawn(crate::pumps::write_pump(write, write_rx, cancel))
        };

        let read_handle = {
            let cancel = cancel.clone();
            let write_tx = write_tx.clone();
            tokio::spawn(crate::pumps::read_pump(read, events_tx, write_tx, cancel))
        };

        let mut session = Self {
            events_rx,
            write_tx,
            cancel,
            _read_handle: read_handle,
            _write_handle: write_handle,
        };
        session.send(Request::Login(login)).await?;

        Ok(session)
    }
}

impl Session for ShopSession {
    async fn next_event(&mut self) -> Option<SessionEvent> {
        self.events_rx.recv().await
    }

    async fn send(&mut self, request: Request) -> Result<(), SessionError> {
        let id = uuid::Uuid::new_v4().to_string();
        let msg = request.into_message(id)?;
        let json = serde_json::to_string(&msg)?;
        self.write_tx
            .send(tungstenite::Message::Text(json.into()))
            .await
            .map_err(|_| SessionError::Closed)
    }

    async fn close(&mut self) {
        self.cancel.cancel();
        self.events_rx.close();
        // Drain anything the read pump queued before it observed the cancel.
        while self.events_rx.try_recv().is_ok() {}
    }
}

impl Drop for ShopSession {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
