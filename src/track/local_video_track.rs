use std::fmt::Debug;
use std::sync::Arc;

use super::{new_inner, set_muted, TrackInner, TrackKind};

#[derive(Clone)]
pub struct LocalVideoTrack {
    inner: Arc<TrackInner>,
}

impl Debug for LocalVideoTrack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalVideoTrack")
            .field("name", &self.name())
            .field("muted", &self.is_muted())
            .finish()
    }
}

impl LocalVideoTrack {
    pub fn new(name: &str) -> Self {
        Self {
            inner: Arc::new(new_inner(name.to_string(), TrackKind::Video)),
        }
    }

    pub fn name(&self) -> String {
        self.inner.info.read().name.clone()
    }

    pub fn kind(&self) -> TrackKind {
        self.inner.info.read().kind
    }

    pub fn is_muted(&self) -> bool {
        self.inner.info.read().muted
    }

    pub fn mute(&self) {
        set_muted(&self.inner, true);
    }

    pub fn unmute(&self) {
        set_muted(&self.inner, false);
    }
}
