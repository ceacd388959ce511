use rayon::prelude::*;

use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::lane_algorithm::LaneAlgorithm;
use crate::core::actions::render_frame::render_row::render_row;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::view_window::ViewWindow;

/// Renders every row on the current rayon pool using work stealing.
///
/// Rows are never split into jobs smaller than `min_rows`, so idle workers
/// steal whole runs of rows from busy ones instead of single scanlines.
/// Returns once every row has been written.
pub fn render_frame_rayon<A, C>(
    window: &ViewWindow,
    surface: &mut PixelBuffer,
    algorithm: &A,
    colour_map: &C,
    min_rows: usize,
) where
    A: LaneAlgorithm + Sync,
    C: ColourMap + Sync,
{
    surface
        .par_rows_mut()
        .enumerate()
        .with_min_len(min_rows.max(1))
        .for_each(|(y, row)| render_row(row, y, window, algorithm, colour_map));
}
