use crate::core::data::complex::Complex;

/// Both components of a Newton step must fall below this for convergence.
pub const CONVERGENCE_TOLERANCE: f64 = 1e-6;

/// Newton's method on f(z) = z³ − 1 starting from the point itself.
///
/// Returns the index of the step whose size fell under the tolerance, so a
/// point already on a root returns 0. A vanishing derivative stops the
/// iteration and returns the steps taken so far. This is a convergence speed,
/// not a root index.
#[must_use]
pub fn newton_iterations(start: Complex, max_iterations: u32) -> u32 {
    let mut z = start;

    for iteration in 0..max_iterations {
        let z_squared = z * z;
        let derivative = z_squared.scale(3.0);

        if derivative.magnitude_squared() == 0.0 {
            return iteration;
        }

        let step = (z_squared * z - Complex::ONE) / derivative;
        z = z - step;

        if step.real.abs() < CONVERGENCE_TOLERANCE && step.imag.abs() < CONVERGENCE_TOLERANCE {
            return iteration;
        }
    }

    max_iterations
}
