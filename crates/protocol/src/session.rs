//! The session boundary the orchestrator consumes.

use crate::messages::{Request, SessionEvent};

/// Errors crossing the session boundary.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("session closed")]
    Closed,
}

/// A live protocol session with the game service.
///
/// Events are delivered one at a time, in transport order; consumers never
/// observe two events interleaving on shared state.
#[allow(async_fn_in_trait)]
pub trait Session {
    /// Waits for the next inbound event.
    ///
    /// Returns `None` once the session has ended.
    async fn next_event(&mut self) -> Option<SessionEvent>;

    /// Sends an outbound request.
    async fn send(&mut self, request: Request) -> Result<(), SessionError>;

    /// Closes the session; no further events are delivered.
    async fn close(&mut self);
}

impl<S: Session> Session for &mut S {
    async fn next_event(&mut self) -> Option<SessionEvent> {
        (**self).next_event().await
    }

    async fn send(&mut self, request: Request) -> Result<(), SessionError> {
        (**self).send(request).await
    }

    async fn close(&mut self) {
        (**self).close().await
    }
}
