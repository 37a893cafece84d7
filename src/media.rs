use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use crate::track::TrackKind;

pub type MediaResult<T> = Result<T, MediaError>;

#[derive(Error, Debug, Clone)]
pub enum MediaError {
    #[error("failed to create local tracks: {0}")]
    TrackCreation(String),
}

/// Which camera a video capture is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacingMode {
    /// Front camera, facing the user.
    User,
    /// Rear camera, facing the environment.
    Environment,
}

impl FacingMode {
    pub fn flipped(self) -> Self {
        match self {
            FacingMode::User => FacingMode::Environment,
            FacingMode::Environment => FacingMode::User,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FacingMode::User => "user",
            FacingMode::Environment => "environment",
        }
    }
}

impl fmt::Display for FacingMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct LocalTrackOptions {
    /// Which capture devices to open.
    pub devices: Vec<TrackKind>,
    /// Camera to use for video devices, when it matters.
    pub facing_mode: Option<FacingMode>,
}

impl Default for LocalTrackOptions {
    fn default() -> Self {
        Self {
            devices: vec![TrackKind::Audio, TrackKind::Video],
            facing_mode: None,
        }
    }
}

/// Owns the lifecycle of local capture tracks. The tracks themselves are
/// surfaced to this crate through [`crate::state::AppState::tracks`]; this
/// trait only covers creation and teardown.
#[async_trait]
pub trait MediaEngine: Send + Sync {
    /// Opens new local tracks for the requested devices, replacing any
    /// previous ones of the same kind. Resolves once capture is up.
    async fn create_local_tracks(&self, options: LocalTrackOptions) -> MediaResult<()>;

    /// Tears down all local tracks.
    async fn destroy_local_tracks(&self);
}
