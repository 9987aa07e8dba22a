use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::escape_iterations;

/// Conjugate-squared recurrence: zr ← zr² − zi² + x, zi ← −2·zr·zi + y,
/// starting from z = c.
#[must_use]
pub fn tricorn_iterations(c: Complex, max_iterations: u32) -> u32 {
    escape_iterations(c, max_iterations, |z| Complex {
        real: z.real * z.real - z.imag * z.imag + c.real,
        imag: -2.0 * z.real * z.imag + c.imag,
    })
}
