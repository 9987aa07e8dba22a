use crate::core::actions::compute_frame::frame_request::FrameRequest;
use crate::core::actions::compute_frame::ports::colour_map::ColourMap;
use crate::core::actions::compute_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::constants::MAX_ITER;
use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::supersampling::SubPixelOffset;
use crate::core::util::pixel_to_plane_coords::pixel_to_plane_coords;

/// Colours one pixel by averaging the fractal over its sub-sample grid.
///
/// Samples that reach `MAX_ITER` contribute black. Each channel is the
/// truncated integer mean over all S² samples, and alpha is always opaque.
#[derive(Debug)]
pub struct PixelSampler<'a, CMap: ColourMap> {
    request: &'a FrameRequest,
    colour_map: &'a CMap,
    offsets: Vec<SubPixelOffset>,
    sample_count: u32,
}

impl<'a, CMap: ColourMap> PixelSampler<'a, CMap> {
    #[must_use]
    pub fn new(request: &'a FrameRequest, colour_map: &'a CMap) -> Self {
        let offsets: Vec<SubPixelOffset> = request.supersampling.offsets().collect();
        let sample_count = request.supersampling.samples_per_pixel();

        Self {
            request,
            colour_map,
            offsets,
            sample_count,
        }
    }

    fn sample(&self, pixel: Point, offset: SubPixelOffset) -> Option<Colour> {
        let point = pixel_to_plane_coords(
            pixel,
            offset,
            self.request.pixel_rect,
            &self.request.viewport,
        );
        let iterations = self.request.fractal.evaluate(point);

        if iterations >= MAX_ITER {
            return None;
        }

        Some(self.colour_map.map(iterations))
    }
}

impl<CMap: ColourMap> FractalAlgorithm for PixelSampler<'_, CMap> {
    type Success = Colour;

    fn compute(&self, pixel: Point) -> Colour {
        let mut sums = [0u32; 3];

        for colour in self.offsets.iter().filter_map(|&offset| self.sample(pixel, offset)) {
            sums[0] += colour.r as u32;
            sums[1] += colour.g as u32;
            sums[2] += colour.b as u32;
        }

        average(sums, self.sample_count)
    }
}

fn average(sums: [u32; 3], sample_count: u32) -> Colour {
    let scale = |sum: u32| (sum / sample_count).min(255) as u8;

    Colour::opaque(scale(sums[0]), scale(sums[1]), scale(sums[2]))
}
