use log::debug;
use rayon::prelude::*;
use std::time::Instant;

use crate::core::actions::compute_frame::frame_request::FrameRequest;
use crate::core::actions::compute_frame::pixel_sampler::PixelSampler;
use crate::core::actions::compute_frame::ports::colour_map::ColourMap;
use crate::core::actions::compute_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::colour::Colour;
use crate::core::data::frame_buffer::{BYTES_PER_PIXEL, FrameBuffer, FrameBufferError, write_colour};
use crate::core::data::point::Point;

/// Computes a complete frame in parallel on the current rayon pool.
///
/// Rows are the unit of work: rayon hands them out by work stealing, which
/// balances the very uneven per-pixel cost, and each row owns a disjoint slice
/// of the buffer. The call returns only once every row has been written.
#[must_use]
pub fn compute_frame<CMap>(request: &FrameRequest, colour_map: &CMap) -> FrameBuffer
where
    CMap: ColourMap + Sync,
{
    let mut frame = FrameBuffer::new(request.pixel_rect);
    fill_rows_parallel(request, colour_map, &mut frame);
    frame
}

/// Like [`compute_frame`], but overwrites an existing buffer in place.
///
/// Fails without touching the buffer if it was sized for a different rect.
pub fn compute_frame_into<CMap>(
    request: &FrameRequest,
    colour_map: &CMap,
    frame: &mut FrameBuffer,
) -> Result<(), FrameBufferError>
where
    CMap: ColourMap + Sync,
{
    if frame.pixel_rect() != request.pixel_rect {
        return Err(FrameBufferError::BoundsMismatch {
            pixel_rect_size: request.pixel_rect.size() as usize * BYTES_PER_PIXEL,
            buffer_size: frame.buffer_size(),
        });
    }

    fill_rows_parallel(request, colour_map, frame);
    Ok(())
}

/// Single-threaded reference; produces the same bytes as [`compute_frame`].
#[must_use]
pub fn compute_frame_serial<CMap: ColourMap>(
    request: &FrameRequest,
    colour_map: &CMap,
) -> FrameBuffer {
    let mut frame = FrameBuffer::new(request.pixel_rect);
    let sampler = PixelSampler::new(request, colour_map);
    let top_y = request.pixel_rect.top_left().y;
    let left_x = request.pixel_rect.top_left().x;
    let stride = frame.row_stride();

    for (row, pixels) in frame.buffer_mut().chunks_mut(stride).enumerate() {
        fill_row(&sampler, left_x, top_y + row as i32, pixels);
    }

    frame
}

fn fill_rows_parallel<CMap>(request: &FrameRequest, colour_map: &CMap, frame: &mut FrameBuffer)
where
    CMap: ColourMap + Sync,
{
    let start = Instant::now();
    let sampler = PixelSampler::new(request, colour_map);
    let top_y = request.pixel_rect.top_left().y;
    let left_x = request.pixel_rect.top_left().x;
    let stride = frame.row_stride();

    frame
        .buffer_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(row, pixels)| fill_row(&sampler, left_x, top_y + row as i32, pixels));

    debug!(
        "computed {}x{} {} frame ({} samples/pixel) on {} threads in {:?}",
        request.pixel_rect.width(),
        request.pixel_rect.height(),
        request.fractal,
        request.supersampling.samples_per_pixel(),
        rayon::current_num_threads(),
        start.elapsed()
    );
}

fn fill_row<Alg>(algorithm: &Alg, left_x: i32, y: i32, pixels: &mut [u8])
where
    Alg: FractalAlgorithm<Success = Colour>,
{
    for (column, slot) in pixels.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        let colour = algorithm.compute(Point {
            x: left_x + column as i32,
            y,
        });
        write_colour(slot, colour);
    }
}
