use crate::error::PolicyError;
use std::ops::RangeInclusive;
use typed_builder::TypedBuilder;

pub const DEFAULT_CHAR_FLOOR: usize = 3;
pub const DEFAULT_MAX_LENGTH: usize = 12;

/// Bounds of the code lengths tried by one save.
///
/// A save starts at `char_floor` and grows the length by one per collision.
/// Growth is local to the save; the floor itself never moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TypedBuilder)]
pub struct AllocationPolicy {
    #[builder(default = DEFAULT_CHAR_FLOOR)]
    pub char_floor: usize,
    /// Longest code tried before giving up with `KeyspaceExhausted`.
    #[builder(default = DEFAULT_MAX_LENGTH)]
    pub max_length: usize,
}

impl Default for AllocationPolicy {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl AllocationPolicy {
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.char_floor == 0 {
            return Err(PolicyError::ZeroFloor);
        }

        if self.max_length < self.char_floor {
            return Err(PolicyError::MaxBelowFloor {
                char_floor: self.char_floor,
                max_length: self.max_length,
            });
        }

        Ok(())
    }

    /// Lengths tried in order, one per attempt.
    pub fn lengths(&self) -> RangeInclusive<usize> {
        self.char_floor..=self.max_length
    }
}
