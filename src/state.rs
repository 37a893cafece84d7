use std::sync::Arc;

use crate::session::{Conference, Connection};
use crate::toolbar::ToolbarState;
use crate::track::Track;

/// Client state the control actions read from. Callers own it and pass it
/// by reference; actions never mutate it directly, they emit events for
/// the reducer instead.
///
/// The session handles are optional: tracks can exist before a conference
/// or connection was ever established.
#[derive(Default)]
pub struct AppState {
    pub conference: Option<Arc<dyn Conference>>,
    pub connection: Option<Arc<dyn Connection>>,
    pub tracks: Vec<Track>,
    pub toolbar: ToolbarState,
}
