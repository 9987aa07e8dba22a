use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::escape_iterations;

/// z ← z² + c from z = 0.
///
/// Points inside the main cardioid or the period-2 bulb never escape, so they
/// return `max_iterations` without iterating.
#[must_use]
pub fn mandelbrot_iterations(c: Complex, max_iterations: u32) -> u32 {
    if in_main_cardioid_or_bulb(c) {
        return max_iterations;
    }

    escape_iterations(Complex::ZERO, max_iterations, |z| z * z + c)
}

#[must_use]
pub fn in_main_cardioid_or_bulb(c: Complex) -> bool {
    let x_shifted = c.real - 0.25;
    let imag_squared = c.imag * c.imag;
    let q = x_shifted * x_shifted + imag_squared;

    if q * (q + x_shifted) < 0.25 * imag_squared {
        return true;
    }

    let x_bulb = c.real + 1.0;
    x_bulb * x_bulb + imag_squared < 0.0625
}
