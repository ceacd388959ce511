use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::lane_algorithm::LaneAlgorithm;
use crate::core::data::lane_batch::{LANES, LaneBatch};
use crate::core::data::pixel_buffer::BYTES_PER_PIXEL;
use crate::core::data::view_window::ViewWindow;

/// Fills one row of RGB bytes, `LANES` columns per evaluator call.
///
/// `row` must hold a whole number of lane batches, which a lane-aligned
/// resolution guarantees.
pub fn render_row<A, C>(row: &mut [u8], y: usize, window: &ViewWindow, algorithm: &A, colour_map: &C)
where
    A: LaneAlgorithm,
    C: ColourMap,
{
    debug_assert_eq!(row.len() % (LANES * BYTES_PER_PIXEL), 0);

    let imag = [window.row_imag(y); LANES];

    for (batch_index, batch_pixels) in row.chunks_exact_mut(LANES * BYTES_PER_PIXEL).enumerate() {
        let batch = LaneBatch::new(window.lane_reals(batch_index * LANES), imag);
        let iterations = algorithm.evaluate(&batch);

        for (pixel, count) in batch_pixels
            .chunks_exact_mut(BYTES_PER_PIXEL)
            .zip(iterations.unpack())
        {
            pixel.copy_from_slice(&colour_map.colour(count).to_rgb());
        }
    }
}
