use crate::Generator;
use dwarf_core::{Code, ALPHABET};
use jiff::Timestamp;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random code generator over the 52-letter alphabet.
///
/// Each instance owns its own pseudo-random source. Codes are identifiers,
/// not secrets, so the source is seeded from the clock rather than from the
/// operating system.
#[derive(Debug)]
pub struct AlphaGenerator {
    rng: Mutex<StdRng>,
}

impl AlphaGenerator {
    /// Creates a generator seeded from the current time in nanoseconds.
    pub fn new() -> Self {
        let nanos = Timestamp::now().as_nanosecond();
        // fold the i128 into 64 bits so the fast-moving low bits survive
        Self::with_seed((nanos as u64) ^ ((nanos >> 64) as u64))
    }

    /// Creates a generator with a fixed seed. Two generators built from the
    /// same seed produce the same sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for AlphaGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for AlphaGenerator {
    fn generate(&self, length: usize) -> Code {
        let mut rng = self.rng.lock();
        let code: String = (0..length)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        Code::new_unchecked(code)
    }
}
