use std::error::Error;
use std::fmt;

use crate::core::data::point::Point;

/// Frames narrower or shorter than this are rejected.
pub const MIN_FRAME_SIDE: u32 = 2;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelRectError {
    InvalidSize { width: u32, height: u32 },
    OutOfRange { origin: Point, width: u32, height: u32 },
}

impl fmt::Display for PixelRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => write!(
                f,
                "frame must be at least {}x{} pixels: {}x{}",
                MIN_FRAME_SIDE, MIN_FRAME_SIDE, width, height
            ),
            Self::OutOfRange {
                origin,
                width,
                height,
            } => write!(
                f,
                "{}x{} frame at x:{}, y:{} does not fit in pixel coordinates",
                width, height, origin.x, origin.y
            ),
        }
    }
}

impl Error for PixelRectError {}

/// The pixels of one frame: `width × height` pixels whose first pixel sits at
/// `origin`. Frames are normally anchored at (0, 0); a shifted origin only
/// relabels pixels and does not move the view.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    origin: Point,
    width: u32,
    height: u32,
}

impl PixelRect {
    pub fn new(origin: Point, width: u32, height: u32) -> Result<Self, PixelRectError> {
        if width < MIN_FRAME_SIDE || height < MIN_FRAME_SIDE {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        // the last pixel must still be addressable as a Point
        let last_x = origin.x as i64 + width as i64 - 1;
        let last_y = origin.y as i64 + height as i64 - 1;

        if last_x > i32::MAX as i64 || last_y > i32::MAX as i64 {
            return Err(PixelRectError::OutOfRange {
                origin,
                width,
                height,
            });
        }

        Ok(Self {
            origin,
            width,
            height,
        })
    }

    pub fn from_size(width: u32, height: u32) -> Result<Self, PixelRectError> {
        Self::new(Point { x: 0, y: 0 }, width, height)
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        self.origin
    }

    /// Last pixel of the frame, inclusive.
    #[must_use]
    pub fn bottom_right(&self) -> Point {
        Point {
            x: self.origin.x + (self.width - 1) as i32,
            y: self.origin.y + (self.height - 1) as i32,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        let dx = point.x as i64 - self.origin.x as i64;
        let dy = point.y as i64 - self.origin.y as i64;

        (0..self.width as i64).contains(&dx) && (0..self.height as i64).contains(&dy)
    }
}
