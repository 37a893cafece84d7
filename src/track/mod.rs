use parking_lot::RwLock;

mod local_audio_track;
mod local_video_track;
mod remote_audio_track;
mod remote_video_track;

pub use local_audio_track::*;
pub use local_video_track::*;
pub use remote_audio_track::*;
pub use remote_video_track::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackKind {
    Audio,
    Video,
}

/// Handle over one capture stream. Locality is part of the variant; the
/// registry owning the stream hands these out, this crate never creates
/// or destroys the underlying capture.
#[derive(Clone, Debug)]
pub enum Track {
    LocalAudio(LocalAudioTrack),
    LocalVideo(LocalVideoTrack),
    RemoteAudio(RemoteAudioTrack),
    RemoteVideo(RemoteVideoTrack),
}

macro_rules! track_dispatch {
    ([$($variant:ident),+]) => {
        pub fn name(&self) -> String {
            match self { $(Self::$variant(track) => track.name(),)+ }
        }

        pub fn kind(&self) -> TrackKind {
            match self { $(Self::$variant(track) => track.kind(),)+ }
        }

        pub fn is_muted(&self) -> bool {
            match self { $(Self::$variant(track) => track.is_muted(),)+ }
        }

        pub fn mute(&self) {
            match self { $(Self::$variant(track) => track.mute(),)+ }
        }

        pub fn unmute(&self) {
            match self { $(Self::$variant(track) => track.unmute(),)+ }
        }
    };
}

impl Track {
    track_dispatch!([LocalAudio, LocalVideo, RemoteAudio, RemoteVideo]);

    pub fn is_local(&self) -> bool {
        matches!(self, Self::LocalAudio(_) | Self::LocalVideo(_))
    }
}

impl From<LocalAudioTrack> for Track {
    fn from(track: LocalAudioTrack) -> Self {
        Self::LocalAudio(track)
    }
}

impl From<LocalVideoTrack> for Track {
    fn from(track: LocalVideoTrack) -> Self {
        Self::LocalVideo(track)
    }
}

impl From<RemoteAudioTrack> for Track {
    fn from(track: RemoteAudioTrack) -> Self {
        Self::RemoteAudio(track)
    }
}

impl From<RemoteVideoTrack> for Track {
    fn from(track: RemoteVideoTrack) -> Self {
        Self::RemoteVideo(track)
    }
}

#[derive(Debug)]
pub(crate) struct TrackInfo {
    pub name: String,
    pub kind: TrackKind,
    pub muted: bool,
}

#[derive(Debug)]
pub(crate) struct TrackInner {
    pub info: RwLock<TrackInfo>,
}

pub(crate) fn new_inner(name: String, kind: TrackKind) -> TrackInner {
    TrackInner {
        info: RwLock::new(TrackInfo {
            name,
            kind,
            muted: false,
        }),
    }
}

pub(crate) fn set_muted(inner: &TrackInner, muted: bool) {
    let mut info = inner.info.write();
    if info.muted == muted {
        // Already in the requested state, nothing to flip
        return;
    }
    info.muted = muted;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mute_unmute_flips_state() {
        let track = LocalAudioTrack::new("microphone");
        assert!(!track.is_muted());

        track.mute();
        assert!(track.is_muted());

        track.unmute();
        assert!(!track.is_muted());
    }

    #[test]
    fn muting_twice_is_a_noop() {
        let track = LocalVideoTrack::new("camera");
        track.mute();
        track.mute();
        assert!(track.is_muted());

        track.unmute();
        assert!(!track.is_muted());
    }

    #[test]
    fn locality_follows_the_variant() {
        assert!(Track::from(LocalAudioTrack::new("microphone")).is_local());
        assert!(Track::from(LocalVideoTrack::new("camera")).is_local());
        assert!(!Track::from(RemoteAudioTrack::new("peer-audio")).is_local());
        assert!(!Track::from(RemoteVideoTrack::new("peer-video")).is_local());
    }

    #[test]
    fn handles_share_the_same_stream() {
        let track = LocalAudioTrack::new("microphone");
        let clone = track.clone();

        track.mute();
        assert!(clone.is_muted());
    }
}
