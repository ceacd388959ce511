use std::convert::Infallible;

use log::{debug, info};

use crate::controllers::zoom::data::frame_report::FrameReport;
use crate::controllers::zoom::ports::frame_sink::FrameSink;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::zoom::status::ZoomState;

/// Headless sink: reports frame timings and nothing else.
#[derive(Debug, Default)]
pub struct LogFrameSink {
    last_state: Option<ZoomState>,
}

impl LogFrameSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameSink for LogFrameSink {
    type Error = Infallible;

    fn present(&mut self, surface: &PixelBuffer, report: &FrameReport) -> Result<(), Self::Error> {
        let resolution = surface.resolution();

        debug!(
            "presenting frame {} ({}x{}, depth {}, {:?})",
            report.frame_index,
            resolution.width(),
            resolution.height(),
            report.depth,
            report.render_duration
        );

        if self.last_state != Some(report.state) {
            info!("frame {}: zoom is {:?}", report.frame_index, report.state);
            self.last_state = Some(report.state);
        }

        Ok(())
    }
}
