use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::BAILOUT_MAGNITUDE_SQUARED;
use std::ops::ControlFlow;

pub const JULIA_CONSTANT: Complex = Complex::new(-0.7, 0.27015);

/// z ← z² + c for a fixed c, starting from the point itself.
#[must_use]
pub fn julia_iterations(z: Complex, c: Complex, max_iterations: u32) -> u32 {
    let iterations = (1..=max_iterations).try_fold(z, |z0, iteration| {
        if z0.magnitude_squared() > BAILOUT_MAGNITUDE_SQUARED {
            ControlFlow::Break(iteration - 1)
        } else {
            ControlFlow::Continue(z0 * z0 + c)
        }
    });

    match iterations {
        ControlFlow::Break(iteration) => iteration,
        ControlFlow::Continue(_) => max_iterations,
    }
}
