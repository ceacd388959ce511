use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::lane_algorithm::LaneAlgorithm;
use crate::core::actions::render_frame::render_row::render_row;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::view_window::ViewWindow;

pub fn render_frame_serial<A, C>(
    window: &ViewWindow,
    surface: &mut PixelBuffer,
    algorithm: &A,
    colour_map: &C,
) where
    A: LaneAlgorithm,
    C: ColourMap,
{
    for (y, row) in surface.rows_mut().enumerate() {
        render_row(row, y, window, algorithm, colour_map);
    }
}
