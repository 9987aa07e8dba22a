use crate::core::constants::{HEIGHT, WIDTH};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::supersampling::Supersampling;
use crate::core::data::viewport::ViewportState;
use crate::core::fractals::fractal_kinds::FractalKinds;

pub(crate) fn default_frame_rect() -> PixelRect {
    PixelRect::from_size(WIDTH, HEIGHT).expect("default frame size is valid")
}

/// Everything a frame depends on besides the colour map. Read-only while the
/// frame is computed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameRequest {
    pub pixel_rect: PixelRect,
    pub viewport: ViewportState,
    pub fractal: FractalKinds,
    pub supersampling: Supersampling,
}

impl FrameRequest {
    /// A WIDTH×HEIGHT frame with the default 2×2 supersampling.
    #[must_use]
    pub fn new(fractal: FractalKinds, viewport: ViewportState) -> Self {
        Self {
            pixel_rect: default_frame_rect(),
            viewport,
            fractal,
            supersampling: Supersampling::default(),
        }
    }

    #[must_use]
    pub fn with_pixel_rect(mut self, pixel_rect: PixelRect) -> Self {
        self.pixel_rect = pixel_rect;
        self
    }

    #[must_use]
    pub fn with_supersampling(mut self, supersampling: Supersampling) -> Self {
        self.supersampling = supersampling;
        self
    }
}

impl Default for FrameRequest {
    fn default() -> Self {
        Self::new(FractalKinds::default(), ViewportState::default())
    }
}
