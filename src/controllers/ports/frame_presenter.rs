use std::error::Error;

use crate::core::data::frame_buffer::FrameBuffer;

/// Receives each finished frame. Called on the controlling thread only, after
/// every worker has finished writing the buffer.
pub trait FramePresenterPort {
    type Error: Error;

    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Self::Error>;
}
