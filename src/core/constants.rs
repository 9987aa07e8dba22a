/// Default frame width in pixels.
pub const WIDTH: u32 = 800;

/// Default frame height in pixels.
pub const HEIGHT: u32 = 600;

/// Iteration cap shared by every fractal. A result equal to this value is the
/// interior/background case and is never used as a palette index.
pub const MAX_ITER: u32 = 1000;
