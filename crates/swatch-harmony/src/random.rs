//! Random base colors for a fresh palette.

use swatch_color::Rgb;

/// Minimal deterministic PRNG. No external `rand` crate needed.
#[derive(Debug, Clone)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Seed the generator. A zero seed is bumped to 1 (zero is a fixed point).
    #[must_use]
    pub fn new(seed: u32) -> Self {
        // Spread small seeds across the state space.
        let state = seed.wrapping_mul(0x9E37_79B9);
        Self { state: state.max(1) }
    }

    pub const fn next_u32(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    /// A uniform byte from the high bits of the next state.
    pub const fn next_u8(&mut self) -> u8 {
        (self.next_u32() >> 24) as u8
    }
}

/// Draw a color with every channel uniform over 0–255.
pub const fn random_rgb(rng: &mut Xorshift32) -> Rgb {
    let r = rng.next_u8();
    let g = rng.next_u8();
    let b = rng.next_u8();
    Rgb::new(r, g, b)
}
