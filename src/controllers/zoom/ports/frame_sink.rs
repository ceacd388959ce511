use std::error::Error;

use crate::controllers::zoom::data::frame_report::FrameReport;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Receives each finished frame, after every row has been written.
pub trait FrameSink {
    type Error: Error;

    fn present(&mut self, surface: &PixelBuffer, report: &FrameReport) -> Result<(), Self::Error>;
}
