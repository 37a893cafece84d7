use super::ToolbarEvent;
use crate::media::FacingMode;

/// UI-facing toolbar state, advanced exclusively by applying
/// [`ToolbarEvent`]s in the order they were emitted.
///
/// The muted flags track what the user asked for, not what the media layer
/// is doing: a toggle with zero matching tracks still flips them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarState {
    pub camera_facing_mode: FacingMode,
    pub audio_muted: bool,
    pub video_muted: bool,
}

impl Default for ToolbarState {
    fn default() -> Self {
        Self {
            camera_facing_mode: FacingMode::User,
            audio_muted: false,
            video_muted: false,
        }
    }
}

impl ToolbarState {
    pub fn apply(&mut self, event: &ToolbarEvent) {
        match event {
            ToolbarEvent::CameraFacingModeChanged { camera_facing_mode } => {
                self.camera_facing_mode = *camera_facing_mode;
            }
            ToolbarEvent::AudioMutedStateToggled => self.audio_muted = !self.audio_muted,
            ToolbarEvent::VideoMutedStateToggled => self.video_muted = !self.video_muted,
        }
    }
}
