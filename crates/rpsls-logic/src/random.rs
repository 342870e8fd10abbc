//! Random sources for the computer opponent
//!
//! The opponent never touches a global generator. Every draw goes through
//! a [`RandomSource`] handed in by the caller, so tests can swap in a
//! seeded or fully scripted sequence.

/// Source of randomness consumed by the opponent strategy
pub trait RandomSource {
    /// Generate next u32
    fn next_u32(&mut self) -> u32;

    /// Generate a value in range [0, max)
    fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_u32() % max
    }

    /// Generate a value 0-99 (for percentage checks)
    fn next_percent(&mut self) -> u8 {
        self.next_range(100) as u8
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// Seeded random number generator
///
/// Deterministic: same seed + stream = same sequence. Uses xorshift64*.
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Fallback state; xorshift never leaves zero.
    const ZERO_GUARD: u64 = 0x9e3779b97f4a7c15;

    /// Create a new RNG from a 32-byte seed and a stream index
    pub fn new(seed: &[u8; 32], stream: u32) -> Self {
        let mut state = 0u64;
        for (i, chunk) in seed.chunks(8).enumerate() {
            let mut bytes = [0u8; 8];
            bytes[..chunk.len()].copy_from_slice(chunk);
            state ^= u64::from_le_bytes(bytes).wrapping_add(i as u64);
        }
        state ^= (stream as u64).wrapping_mul(0x517cc1b727220a95);
        Self::warmed(state)
    }

    /// Create a new RNG from a single 64-bit seed
    pub fn from_u64(seed: u64) -> Self {
        Self::warmed(seed ^ Self::ZERO_GUARD)
    }

    fn warmed(state: u64) -> Self {
        let state = if state == 0 { Self::ZERO_GUARD } else { state };
        let mut rng = Self { state };
        for _ in 0..8 {
            rng.next_u64();
        }
        rng
    }

    /// Generate next u64
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545f4914f6cdd1d)
    }
}

impl RandomSource for SeededRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }
}

/// Replays a fixed sequence of raw draws, cycling when exhausted
///
/// `next_range(5)` over the script `[0, 1, 2]` yields Rock, Paper, Scissors
/// indices; `next_percent()` over `[10]` always lands in the low half.
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(values: Vec<u32>) -> Self {
        let values = if values.is_empty() { vec![0] } else { values };
        Self { values, cursor: 0 }
    }

    /// Number of draws taken so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
