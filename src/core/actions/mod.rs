pub mod quit_signal;
pub mod render_frame;
