pub mod frame_renderer;
pub mod ports;
pub mod render_frame_guided;
pub mod render_frame_rayon;
pub mod render_frame_serial;
pub mod render_row;
