use crate::Generator;
use dwarf_core::{Code, ALPHABET};
use std::sync::atomic::{AtomicU64, Ordering};

/// A deterministic generator walking the code space in order.
///
/// The counter is rendered in base 52 over [`ALPHABET`], left padded with the
/// first symbol to the requested length and wrapped modulo `52^length`. Handy
/// for tests and reproducible demos; production deployments use
/// [`AlphaGenerator`](crate::AlphaGenerator).
#[derive(Debug)]
pub struct SeqGenerator {
    counter: AtomicU64,
}

impl Clone for SeqGenerator {
    fn clone(&self) -> Self {
        Self::with_offset(self.counter.load(Ordering::SeqCst))
    }
}

impl SeqGenerator {
    pub fn new() -> Self {
        Self::with_offset(0)
    }

    /// Creates a generator starting from a specific counter value.
    pub fn with_offset(offset: u64) -> Self {
        Self {
            counter: AtomicU64::new(offset),
        }
    }
}

impl Default for SeqGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn encode(mut value: u64, length: usize) -> String {
    let base = ALPHABET.len() as u64;
    let mut symbols = vec![ALPHABET[0]; length];
    for slot in symbols.iter_mut().rev() {
        *slot = ALPHABET[(value % base) as usize];
        value /= base;
    }
    // every byte comes from ALPHABET
    symbols.into_iter().map(char::from).collect()
}

impl Generator for SeqGenerator {
    fn generate(&self, length: usize) -> Code {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        Code::new_unchecked(encode(count, length))
    }
}
