//! 16-bit linear-feedback shift register.
//!
//! This is the game's only entropy source. The corridor generator takes two
//! sequential draws per tick from the one shared register, so level layouts
//! are a pure function of the seed.

/// Tap mask applied when the shifted-out bit is 1.
pub const TAP_MASK: u16 = 0xB400;

/// Fibonacci-style LFSR over the full 16-bit nonzero cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lfsr {
    state: u16,
}

impl Lfsr {
    /// Create a generator from a seed. A zero seed is coerced to 1, since
    /// zero is the one fixed point the register must never enter.
    pub fn new(seed: u16) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Advance the register and return its new value.
    ///
    /// Extracts bit 0, shifts right by one, and XORs the tap mask back in
    /// when the extracted bit was set.
    pub fn next(&mut self) -> u16 {
        let lsb = self.state & 1;
        self.state >>= 1;
        if lsb == 1 {
            self.state ^= TAP_MASK;
        }
        self.state
    }

    /// Current register value.
    pub fn state(&self) -> u16 {
        self.state
    }
}

impl Default for Lfsr {
    fn default() -> Self {
        Self::new(1)
    }
}
