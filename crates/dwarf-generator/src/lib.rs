pub mod alpha;
pub mod seq;

pub use alpha::AlphaGenerator;
pub use seq::SeqGenerator;

use dwarf_core::Code;

/// Trait for generating candidate short codes.
///
/// Implementations are pure generators that don't interact with storage:
/// they produce candidates, and the caller checks them for collisions.
pub trait Generator: Send + Sync + 'static {
    /// Produces a code of exactly `length` symbols drawn from
    /// [`dwarf_core::ALPHABET`].
    ///
    /// `length` must be positive; a zero length yields an empty code.
    fn generate(&self, length: usize) -> Code;
}
