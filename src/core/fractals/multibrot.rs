use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::escape_iterations;

/// Cubic multibrot: z ← z³ + c from z = 0.
#[must_use]
pub fn multibrot_iterations(c: Complex, max_iterations: u32) -> u32 {
    escape_iterations(Complex::ZERO, max_iterations, |z| {
        let real_squared = z.real * z.real;
        let imag_squared = z.imag * z.imag;

        Complex {
            real: z.real * (real_squared - 3.0 * imag_squared) + c.real,
            imag: z.imag * (3.0 * real_squared - imag_squared) + c.imag,
        }
    })
}
