use crate::core::data::colour::Colour;

/// Per-channel multiplier and shift: channel(i) = (i * mult + shift) & 0xFF.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ColourCoefficients {
    pub r_mult: u32,
    pub g_mult: u32,
    pub b_mult: u32,
    pub r_shift: u32,
    pub g_shift: u32,
    pub b_shift: u32,
}

impl Default for ColourCoefficients {
    fn default() -> Self {
        Self {
            r_mult: 6,
            g_mult: 1,
            b_mult: 4,
            r_shift: 1,
            g_shift: 2,
            b_shift: 1,
        }
    }
}

impl ColourCoefficients {
    /// Computes the colour for an iteration count without a table.
    #[must_use]
    pub fn colour_at(&self, iterations: u32) -> Colour {
        Colour::opaque(
            channel(iterations, self.r_mult, self.r_shift),
            channel(iterations, self.g_mult, self.g_shift),
            channel(iterations, self.b_mult, self.b_shift),
        )
    }
}

// Wrapping keeps the low byte exact for any coefficient size.
#[inline]
fn channel(iterations: u32, mult: u32, shift: u32) -> u8 {
    (iterations.wrapping_mul(mult).wrapping_add(shift) & 0xFF) as u8
}
