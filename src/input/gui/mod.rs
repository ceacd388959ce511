//! Windowed zoom: winit owns the event loop and pixels shows each frame.
//! Escape or closing the window requests quit.

pub mod errors;
pub mod run_gui;

pub use errors::GuiError;
pub use run_gui::run_gui;
