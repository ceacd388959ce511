use std::sync::{Mutex, PoisonError};

use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::lane_algorithm::LaneAlgorithm;
use crate::core::actions::render_frame::render_row::render_row;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::view_window::ViewWindow;
use crate::core::util::guided_chunk_rows::guided_chunk_rows;

/// A run of whole rows claimed by one worker.
#[derive(Debug)]
struct RowChunk<'a> {
    first_row: usize,
    rows: &'a mut [u8],
}

/// Hands out the unclaimed tail of the surface front to back.
struct RowCursor<'a> {
    remaining: &'a mut [u8],
    next_row: usize,
    row_bytes: usize,
}

impl<'a> RowCursor<'a> {
    fn new(buffer: &'a mut [u8], row_bytes: usize) -> Self {
        Self {
            remaining: buffer,
            next_row: 0,
            row_bytes,
        }
    }

    fn claim(&mut self, workers: usize, min_rows: usize) -> Option<RowChunk<'a>> {
        let rows_left = self.remaining.len() / self.row_bytes;

        if rows_left == 0 {
            return None;
        }

        let rows = guided_chunk_rows(rows_left, workers, min_rows);
        let (chunk, rest) = std::mem::take(&mut self.remaining).split_at_mut(rows * self.row_bytes);
        let first_row = self.next_row;

        self.remaining = rest;
        self.next_row += rows;

        Some(RowChunk {
            first_row,
            rows: chunk,
        })
    }
}

/// Renders every row with guided scheduling on the current rayon pool.
///
/// `workers` tasks repeatedly claim the next chunk of rows from a shared
/// cursor. Chunks start large and shrink towards `min_rows` as the frame
/// drains, so rows near the set boundary that cost far more iterations do not
/// leave the other workers idle at the end. Only the cursor is locked; claimed
/// rows are exclusively owned by the claiming task.
pub fn render_frame_guided<A, C>(
    window: &ViewWindow,
    surface: &mut PixelBuffer,
    algorithm: &A,
    colour_map: &C,
    workers: usize,
    min_rows: usize,
) where
    A: LaneAlgorithm + Sync,
    C: ColourMap + Sync,
{
    let row_bytes = surface.row_bytes();
    let cursor = Mutex::new(RowCursor::new(surface.buffer_mut(), row_bytes));
    let cursor = &cursor;

    rayon::scope(|scope| {
        for _ in 0..workers.max(1) {
            scope.spawn(move |_| {
                loop {
                    let claimed = cursor
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .claim(workers, min_rows);

                    let Some(chunk) = claimed else {
                        break;
                    };

                    for (offset, row) in chunk.rows.chunks_exact_mut(row_bytes).enumerate() {
                        render_row(row, chunk.first_row + offset, window, algorithm, colour_map);
                    }
                }
            });
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render_frame::render_frame_serial::render_frame_serial;
    use crate::core::data::complex::Complex;
    use crate::core::data::resolution::Resolution;
    use crate::core::fractals::mandelbrot::algorithm::MandelbrotLaneEvaluator;
    use crate::core::fractals::mandelbrot::colour_map::PaletteColourMap;
    use crate::core::fractals::mandelbrot::palette::Palette;

    fn render_both(width: u32, height: u32, workers: usize, min_rows: usize) -> (PixelBuffer, PixelBuffer) {
        let resolution = Resolution::new(width, height).unwrap();
        let window = ViewWindow::centred(resolution, Complex::new(-0.75, 0.1), 2.5);
        let algorithm = MandelbrotLaneEvaluator::new(80).unwrap();
        let colour_map = PaletteColourMap::new(Palette::default(), 80);

        let mut serial = PixelBuffer::new(resolution);
        let mut guided = PixelBuffer::new(resolution);

        render_frame_serial(&window, &mut serial, &algorithm, &colour_map);
        render_frame_guided(&window, &mut guided, &algorithm, &colour_map, workers, min_rows);

        (serial, guided)
    }

    #[test]
    fn test_guided_renders_same_pixels_as_serial() {
        let (serial, guided) = render_both(64, 120, 4, 10);

        assert_eq!(guided, serial);
    }

    #[test]
    fn test_guided_with_more_workers_than_rows() {
        let (serial, guided) = render_both(16, 3, 8, 1);

        assert_eq!(guided, serial);
    }

    #[test]
    fn test_guided_with_chunk_larger_than_frame() {
        let (serial, guided) = render_both(8, 7, 2, 50);

        assert_eq!(guided, serial);
    }

    #[test]
    fn test_guided_with_zero_workers_still_renders() {
        let (serial, guided) = render_both(8, 9, 0, 2);

        assert_eq!(guided, serial);
    }

    #[test]
    fn test_cursor_claims_cover_every_row_once() {
        let mut buffer = vec![0u8; 12 * 100];
        let mut cursor = RowCursor::new(&mut buffer, 12);
        let mut claimed = Vec::new();

        while let Some(chunk) = cursor.claim(4, 5) {
            claimed.push((chunk.first_row, chunk.rows.len() / 12));
        }

        let mut expected_start = 0;
        for &(first_row, rows) in &claimed {
            assert_eq!(first_row, expected_start);
            assert!(rows >= 1);
            expected_start += rows;
        }
        assert_eq!(expected_start, 100);
    }

    #[test]
    fn test_cursor_chunks_shrink_as_frame_drains() {
        let mut buffer = vec![0u8; 3 * 400];
        let mut cursor = RowCursor::new(&mut buffer, 3);
        let mut sizes = Vec::new();

        while let Some(chunk) = cursor.claim(4, 10) {
            sizes.push(chunk.rows.len() / 3);
        }

        assert_eq!(sizes[0], 100);
        assert!(sizes.windows(2).all(|pair| pair[0] >= pair[1]));
        assert!(sizes[..sizes.len() - 1].iter().all(|&rows| rows >= 10));
    }
}
