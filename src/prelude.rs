pub use crate::media::{FacingMode, LocalTrackOptions, MediaEngine, MediaError, MediaResult};

pub use crate::participant::ParticipantRegistry;

pub use crate::session::{Conference, Connection, SessionError, SessionResult};

pub use crate::state::AppState;

pub use crate::toolbar::{
    Toolbar, ToolbarEmitter, ToolbarError, ToolbarEvent, ToolbarEvents, ToolbarResult, ToolbarState,
};

pub use crate::track::{
    LocalAudioTrack, LocalVideoTrack, RemoteAudioTrack, RemoteVideoTrack, Track, TrackKind,
};
