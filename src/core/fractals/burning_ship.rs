use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::escape_iterations;

/// zr ← |zr² − zi² + x|, zi ← |2·zr·zi| + y from z = 0.
#[must_use]
pub fn burning_ship_iterations(c: Complex, max_iterations: u32) -> u32 {
    escape_iterations(Complex::ZERO, max_iterations, |z| Complex {
        real: (z.real * z.real - z.imag * z.imag + c.real).abs(),
        imag: (2.0 * z.real * z.imag).abs() + c.imag,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::MAX_ITER;

    #[test]
    fn default_view_centre_settles_on_fixed_point() {
        // x ← |x² − 0.5| converges to (√3 − 1) / 2 and never escapes
        assert_eq!(burning_ship_iterations(Complex::new(-0.5, 0.0), MAX_ITER), MAX_ITER);
    }

    #[test]
    fn known_escape_counts() {
        assert_eq!(burning_ship_iterations(Complex::new(1.0, 1.0), MAX_ITER), 2);
        assert_eq!(burning_ship_iterations(Complex::new(-1.75, -0.03), MAX_ITER), 22);
    }

    #[test]
    fn far_point_escapes_after_first_step() {
        assert_eq!(burning_ship_iterations(Complex::new(2.0, 2.0), MAX_ITER), 1);
    }
}
