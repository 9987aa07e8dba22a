use std::error::Error;
use std::fmt;

const PAN_STEP: f64 = 0.1;
const ZOOM_IN_FACTOR: f64 = 0.8;
const ZOOM_OUT_FACTOR: f64 = 1.25;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidZoom { zoom: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidZoom { zoom } => {
                write!(f, "zoom factor must be finite and greater than zero: {}", zoom)
            }
        }
    }
}

impl Error for ViewportError {}

/// Pan/zoom commands produced by input handling between frames.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    PanUp,
    PanDown,
    PanLeft,
    PanRight,
    ZoomIn,
    ZoomOut,
}

/// Which region of the plane the frame shows. `zoom` is always finite and positive.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportState {
    zoom: f64,
    offset_x: f64,
    offset_y: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            offset_x: -0.5,
            offset_y: 0.0,
        }
    }
}

impl ViewportState {
    pub fn new(zoom: f64, offset_x: f64, offset_y: f64) -> Result<Self, ViewportError> {
        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(ViewportError::InvalidZoom { zoom });
        }

        Ok(Self {
            zoom,
            offset_x,
            offset_y,
        })
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn offset_x(&self) -> f64 {
        self.offset_x
    }

    #[must_use]
    pub fn offset_y(&self) -> f64 {
        self.offset_y
    }

    /// Pans move a tenth of the current zoom so the on-screen step stays constant.
    pub fn apply(&mut self, command: ViewCommand) {
        let pan_amount = self.zoom * PAN_STEP;

        match command {
            ViewCommand::PanUp => self.offset_y -= pan_amount,
            ViewCommand::PanDown => self.offset_y += pan_amount,
            ViewCommand::PanLeft => self.offset_x -= pan_amount,
            ViewCommand::PanRight => self.offset_x += pan_amount,
            ViewCommand::ZoomIn => self.zoom = Self::rescale(self.zoom, ZOOM_IN_FACTOR),
            ViewCommand::ZoomOut => self.zoom = Self::rescale(self.zoom, ZOOM_OUT_FACTOR),
        }
    }

    // Repeated zooming can underflow to zero or overflow to infinity; hold the
    // previous value instead.
    fn rescale(zoom: f64, factor: f64) -> f64 {
        let scaled = zoom * factor;

        if scaled.is_finite() && scaled > 0.0 {
            scaled
        } else {
            zoom
        }
    }
}
