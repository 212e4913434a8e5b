//! # Value Generation
//!
//! Fresh cells are filled with short random strings drawn from printable
//! ASCII (`' '..='~'`). The control bytes the codec uses as delimiters sit
//! outside that range, so generated text can never break a saved line.
//!
//! The engine takes any [`ValueSource`], which lets tests swap in a
//! deterministic sequence instead of a random one.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::board::Cell;

/// Length of every generated key and value.
pub const VALUE_LEN: usize = 3;

const PRINTABLE_FIRST: u8 = b' ';
const PRINTABLE_LAST: u8 = b'~';

pub trait ValueSource {
    /// Returns a new value of exactly [`VALUE_LEN`] printable ASCII characters.
    fn generate(&mut self) -> String;

    /// A cell whose key and value are generated independently.
    fn random_cell(&mut self) -> Cell {
        let key = self.generate();
        let value = self.generate();
        Cell { key, value }
    }
}

/// Uniform random values backed by any `rand` generator.
pub struct RandomValues<R = StdRng> {
    rng: R,
}

impl RandomValues<StdRng> {
    /// Seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Same seed, same sequence of values.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomValues<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ValueSource for RandomValues<R> {
    fn generate(&mut self) -> String {
        (0..VALUE_LEN)
            .map(|_| char::from(self.rng.gen_range(PRINTABLE_FIRST..=PRINTABLE_LAST)))
            .collect()
    }
}

/// True if `s` is exactly what [`ValueSource::generate`] is allowed to return.
pub fn is_generated_shape(s: &str) -> bool {
    s.len() == VALUE_LEN && s.bytes().all(|b| (PRINTABLE_FIRST..=PRINTABLE_LAST).contains(&b))
}
