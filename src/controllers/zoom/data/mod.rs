pub mod frame_report;
pub mod zoom_config;
