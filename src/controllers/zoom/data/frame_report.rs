use std::time::Duration;

use crate::core::zoom::status::ZoomState;

/// What happened while rendering one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Zero-based position of the frame in the run.
    pub frame_index: u64,
    /// Zoom depth the frame was rendered at.
    pub depth: u32,
    /// Controller state when the frame was rendered.
    pub state: ZoomState,
    pub render_duration: Duration,
}

/// Totals for a finished run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub frames_rendered: u64,
    pub final_depth: u32,
    pub total_render_duration: Duration,
}

impl RunSummary {
    #[must_use]
    pub fn average_frame_duration(&self) -> Duration {
        match u32::try_from(self.frames_rendered) {
            Ok(0) => Duration::ZERO,
            Ok(frames) => self.total_render_duration / frames,
            Err(_) => Duration::ZERO,
        }
    }
}
