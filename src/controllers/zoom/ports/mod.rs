//! Port definitions for the zoom controller.
//!
//! Interfaces between the frame loop and whatever displays or stores the
//! frames it produces.

pub mod frame_sink;
