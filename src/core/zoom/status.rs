#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomState {
    /// Still contracting toward the point of interest.
    Zooming,
    /// Maximum depth reached, the window no longer changes.
    Steady,
    /// Quit was requested, the frame loop is over.
    Terminated,
}

impl ZoomState {
    #[must_use]
    pub fn is_terminated(self) -> bool {
        self == Self::Terminated
    }
}
