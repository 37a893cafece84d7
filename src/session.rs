use async_trait::async_trait;
use thiserror::Error;

pub type SessionResult<T> = Result<T, SessionError>;

#[derive(Error, Debug, Clone)]
pub enum SessionError {
    #[error("failed to leave conference: {0}")]
    Leave(String),
    #[error("failed to close connection: {0}")]
    Disconnect(String),
}

/// An active conference session. Leaving it is the only capability the
/// control actions need; joining and signaling live with the owner.
#[async_trait]
pub trait Conference: Send + Sync {
    async fn leave(&self) -> SessionResult<()>;
}

/// The network connection backing a session.
#[async_trait]
pub trait Connection: Send + Sync {
    async fn disconnect(&self) -> SessionResult<()>;
}
