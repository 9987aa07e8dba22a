use pixels::{Pixels, SurfaceTexture, TextureError};
use std::fmt;
use winit::window::Window;

use crate::controllers::ports::frame_presenter::FramePresenterPort;
use crate::core::data::frame_buffer::FrameBuffer;

#[derive(Debug)]
pub enum PixelsPresenterError {
    Render(pixels::Error),
    Texture(TextureError),
}

impl fmt::Display for PixelsPresenterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(e) => write!(f, "render error: {}", e),
            Self::Texture(e) => write!(f, "texture error: {}", e),
        }
    }
}

impl std::error::Error for PixelsPresenterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(e) => Some(e),
            Self::Texture(e) => Some(e),
        }
    }
}

/// Shows frames in a window. The pixel buffer keeps the frame's size and
/// pixels scales it onto the window surface.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    buffer_width: u32,
    buffer_height: u32,
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        buffer_width: u32,
        buffer_height: u32,
    ) -> Result<Self, PixelsPresenterError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(buffer_width, buffer_height, surface_texture)
            .map_err(PixelsPresenterError::Render)?;

        Ok(Self {
            pixels,
            buffer_width,
            buffer_height,
        })
    }

    /// Call when the window size changes; zero-sized surfaces are skipped.
    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), PixelsPresenterError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels
            .resize_surface(width, height)
            .map_err(PixelsPresenterError::Texture)
    }

    fn match_buffer_to(&mut self, frame: &FrameBuffer) -> Result<(), PixelsPresenterError> {
        let width = frame.pixel_rect().width();
        let height = frame.pixel_rect().height();

        if width != self.buffer_width || height != self.buffer_height {
            self.pixels
                .resize_buffer(width, height)
                .map_err(PixelsPresenterError::Texture)?;
            self.buffer_width = width;
            self.buffer_height = height;
        }

        Ok(())
    }
}

impl FramePresenterPort for PixelsPresenter {
    type Error = PixelsPresenterError;

    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Self::Error> {
        self.match_buffer_to(frame)?;
        self.pixels.frame_mut().copy_from_slice(frame.buffer());
        self.pixels.render().map_err(PixelsPresenterError::Render)
    }
}
