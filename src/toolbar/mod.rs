use std::sync::Arc;

use thiserror::Error;
use tokio::sync::mpsc;

use crate::media::{FacingMode, LocalTrackOptions, MediaEngine, MediaError};
use crate::participant::ParticipantRegistry;
use crate::session::SessionError;
use crate::state::AppState;
use crate::track::TrackKind;

mod reducer;

pub use reducer::*;

pub type ToolbarEvents = mpsc::UnboundedReceiver<ToolbarEvent>;
pub type ToolbarEmitter = mpsc::UnboundedSender<ToolbarEvent>;
pub type ToolbarResult<T> = Result<T, ToolbarError>;

#[derive(Error, Debug, Clone)]
pub enum ToolbarError {
    #[error("session: {0}")]
    Session(#[from] SessionError),
    #[error("media: {0}")]
    Media(#[from] MediaError),
}

/// State-change notifications consumed by [`ToolbarState::apply`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToolbarEvent {
    CameraFacingModeChanged { camera_facing_mode: FacingMode },
    AudioMutedStateToggled,
    VideoMutedStateToggled,
}

/// Call control actions. Side effects go through the injected
/// collaborators, state changes are emitted as [`ToolbarEvent`]s on the
/// receiver returned by [`Toolbar::new`].
pub struct Toolbar {
    media: Arc<dyn MediaEngine>,
    participants: Arc<dyn ParticipantRegistry>,
    emitter: ToolbarEmitter,
}

impl Toolbar {
    pub fn new(
        media: Arc<dyn MediaEngine>,
        participants: Arc<dyn ParticipantRegistry>,
    ) -> (Self, ToolbarEvents) {
        let (emitter, events) = mpsc::unbounded_channel();
        (
            Self {
                media,
                participants,
                emitter,
            },
            events,
        )
    }

    /// Leaves the conference and closes the connection.
    ///
    /// Local tracks and the local participant can exist without a conference
    /// or connection ever having been established (tracks may be created
    /// before the participant), so they are torn down unconditionally, after
    /// any leave/disconnect. A leave or disconnect failure propagates and
    /// skips the teardown steps.
    pub async fn hangup(&self, state: &AppState) -> ToolbarResult<()> {
        if let Some(conference) = &state.conference {
            log::debug!("hangup: leaving conference");
            conference.leave().await?;
        }

        if let Some(connection) = &state.connection {
            log::debug!("hangup: closing connection");
            connection.disconnect().await?;
        }

        self.media.destroy_local_tracks().await;
        self.participants.local_participant_left().await;
        Ok(())
    }

    /// Toggles the mute state of the local audio track(s).
    pub fn toggle_audio(&self, state: &AppState) {
        self.toggle_media(state, TrackKind::Audio);
    }

    /// Toggles the mute state of the local video track(s).
    pub fn toggle_video(&self, state: &AppState) {
        self.toggle_media(state, TrackKind::Video);
    }

    /// Toggles the camera between front and rear (user and environment).
    ///
    /// The facing-mode event is emitted only once the new capture is up, so
    /// the UI flag never runs ahead of the camera switch. On failure no
    /// event is emitted and the flag stays where it was.
    pub async fn toggle_camera_facing_mode(&self, state: &AppState) -> ToolbarResult<()> {
        let camera_facing_mode = state.toolbar.camera_facing_mode.flipped();
        log::debug!("switching camera facing mode to {camera_facing_mode}");

        self.media
            .create_local_tracks(LocalTrackOptions {
                devices: vec![TrackKind::Video],
                facing_mode: Some(camera_facing_mode),
            })
            .await?;

        self.emit(ToolbarEvent::CameraFacingModeChanged { camera_facing_mode });
        Ok(())
    }

    fn toggle_media(&self, state: &AppState, kind: TrackKind) {
        let mut toggled = 0;
        for track in state
            .tracks
            .iter()
            .filter(|track| track.is_local() && track.kind() == kind)
        {
            if track.is_muted() {
                track.unmute();
            } else {
                track.mute();
            }
            toggled += 1;
        }

        if toggled == 0 {
            log::debug!("no local {kind:?} track to toggle, flipping the UI flag only");
        }

        // Exactly one event per call, whatever the track count.
        self.emit(match kind {
            TrackKind::Audio => ToolbarEvent::AudioMutedStateToggled,
            TrackKind::Video => ToolbarEvent::VideoMutedStateToggled,
        });
    }

    fn emit(&self, event: ToolbarEvent) {
        let _ = self.emitter.send(event);
    }
}
