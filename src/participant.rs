use async_trait::async_trait;

/// Registry of conference participants, owned elsewhere. The control
/// actions only ever report the local participant as gone.
#[async_trait]
pub trait ParticipantRegistry: Send + Sync {
    async fn local_participant_left(&self);
}
