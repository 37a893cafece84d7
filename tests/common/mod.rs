use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use call_controls::prelude::*;

/// Order of collaborator calls, shared by every fake in a test.
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<&'static str>>>);

impl CallLog {
    pub fn push(&self, entry: &'static str) {
        self.0.lock().push(entry);
    }

    pub fn entries(&self) -> Vec<&'static str> {
        self.0.lock().clone()
    }
}

pub struct FakeConference {
    pub log: CallLog,
    pub fail: bool,
}

#[async_trait]
impl Conference for FakeConference {
    async fn leave(&self) -> SessionResult<()> {
        self.log.push("leave");
        if self.fail {
            return Err(SessionError::Leave("signaling went away".into()));
        }
        Ok(())
    }
}

pub struct FakeConnection {
    pub log: CallLog,
}

#[async_trait]
impl Connection for FakeConnection {
    async fn disconnect(&self) -> SessionResult<()> {
        self.log.push("disconnect");
        Ok(())
    }
}

pub struct FakeMediaEngine {
    pub log: CallLog,
    pub fail_create: bool,
    pub requests: Mutex<Vec<LocalTrackOptions>>,
}

#[async_trait]
impl MediaEngine for FakeMediaEngine {
    async fn create_local_tracks(&self, options: LocalTrackOptions) -> MediaResult<()> {
        self.log.push("create_local_tracks");
        if self.fail_create {
            return Err(MediaError::TrackCreation("no rear camera".into()));
        }
        self.requests.lock().push(options);
        Ok(())
    }

    async fn destroy_local_tracks(&self) {
        self.log.push("destroy_local_tracks");
    }
}

pub struct FakeParticipants {
    pub log: CallLog,
}

#[async_trait]
impl ParticipantRegistry for FakeParticipants {
    async fn local_participant_left(&self) {
        self.log.push("local_participant_left");
    }
}

pub fn test_toolbar(log: &CallLog) -> (Toolbar, ToolbarEvents, Arc<FakeMediaEngine>) {
    let _ = env_logger::builder().is_test(true).try_init();

    let media = Arc::new(FakeMediaEngine {
        log: log.clone(),
        fail_create: false,
        requests: Mutex::default(),
    });
    let participants = Arc::new(FakeParticipants { log: log.clone() });
    let (toolbar, events) = Toolbar::new(media.clone(), participants);
    (toolbar, events, media)
}

pub fn failing_media_toolbar(log: &CallLog) -> (Toolbar, ToolbarEvents) {
    let _ = env_logger::builder().is_test(true).try_init();

    let media = Arc::new(FakeMediaEngine {
        log: log.clone(),
        fail_create: true,
        requests: Mutex::default(),
    });
    let participants = Arc::new(FakeParticipants { log: log.clone() });
    Toolbar::new(media, participants)
}

pub fn drain(events: &mut ToolbarEvents) -> Vec<ToolbarEvent> {
    let mut out = Vec::new();
    while let Ok(event) = events.try_recv() {
        out.push(event);
    }
    out
}
