use log::{trace, warn};

use crate::core::data::view_window::ViewWindow;
use crate::core::zoom::limits::ZoomLimits;
use crate::core::zoom::status::ZoomState;

/// Owns the view window and drives it toward the point of interest.
///
/// The window at depth `d` is always the depth-0 window scaled by
/// `zoom_factor^-d`, computed afresh rather than by repeated multiplication,
/// so row and column deltas stay in lockstep however long the zoom runs.
#[derive(Debug, Clone)]
pub struct ZoomController {
    limits: ZoomLimits,
    initial: ViewWindow,
    window: ViewWindow,
    state: ZoomState,
    precision_warned: bool,
}

impl ZoomController {
    #[must_use]
    pub fn new(initial: ViewWindow, limits: ZoomLimits) -> Self {
        let initial = ViewWindow { depth: 0, ..initial };
        let state = if limits.max_depth == 0 {
            ZoomState::Steady
        } else {
            ZoomState::Zooming
        };

        Self {
            limits,
            initial,
            window: initial,
            state,
            precision_warned: false,
        }
    }

    /// Snapshot to render the next frame from.
    #[must_use]
    pub fn window(&self) -> ViewWindow {
        self.window
    }

    #[must_use]
    pub fn state(&self) -> ZoomState {
        self.state
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.window.depth
    }

    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Applies one contraction step after a completed frame.
    pub fn advance(&mut self) -> ZoomState {
        if self.state != ZoomState::Zooming {
            return self.state;
        }

        let depth = self.window.depth + 1;
        self.window = self.initial.scaled(self.limits.scale_at(depth), depth);

        trace!(
            "zoom depth {}: delta ({:e}, {:e})",
            depth, self.window.delta_x, self.window.delta_y
        );

        if !self.precision_warned && self.window.precision_exhausted() {
            self.precision_warned = true;
            warn!(
                "zoom depth {} is past single-precision resolution, frames will stop gaining detail",
                depth
            );
        }

        if depth >= self.limits.max_depth {
            self.state = ZoomState::Steady;
        }

        self.state
    }

    pub fn terminate(&mut self) {
        self.state = ZoomState::Terminated;
    }
}
