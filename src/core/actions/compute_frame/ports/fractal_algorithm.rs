use crate::core::data::point::Point;

/// Per-pixel computation. Implementations are pure so pixels can run in any
/// order or concurrently.
pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, pixel: Point) -> Self::Success;
}
