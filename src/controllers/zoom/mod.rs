//! Zoom controller: the frame loop tying the renderer, the zoom state
//! machine and a frame sink together.

pub mod data;
pub mod errors;
pub mod ports;
pub mod session;

pub use session::ZoomSession;
