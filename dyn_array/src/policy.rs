use crate::error::ArrayError;

/// Growth and shrink thresholds of a [DynArray](crate::DynArray).
///
/// The array doubles when an insert finds it full and halves once a deletion
/// leaves it at most `1 / shrink_divisor` occupied, never dropping below
/// `min_capacity`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CapacityPolicy {
    /// Capacity floor. Must be a non-zero power of two.
    pub min_capacity: usize,
    /// Must be above 2, or a halving could leave the array full again.
    pub shrink_divisor: usize,
}

impl Default for CapacityPolicy {
    fn default() -> Self {
        Self {
            min_capacity: 16,
            shrink_divisor: 4,
        }
    }
}

impl CapacityPolicy {
    pub fn validate(&self) -> Result<(), ArrayError> {
        if !self.min_capacity.is_power_of_two() {
            return Err(ArrayError::InvalidPolicy(format!(
                "minimum capacity must be a non-zero power of two, got {}",
                self.min_capacity
            )));
        }
        if self.shrink_divisor <= 2 {
            return Err(ArrayError::InvalidPolicy(format!(
                "shrink divisor must be greater than 2, got {}",
                self.shrink_divisor
            )));
        }
        Ok(())
    }

    /// Smallest power of two that fits `requested` and respects the floor.
    pub fn initial_capacity(&self, requested: usize) -> usize {
        requested.max(self.min_capacity).next_power_of_two()
    }

    pub fn grown(&self, capacity: usize) -> usize {
        capacity * 2
    }

    /// Returns the halved capacity if an array of `len` elements should shrink.
    pub fn shrunk(&self, len: usize, capacity: usize) -> Option<usize> {
        let half = capacity / 2;
        (len.saturating_mul(self.shrink_divisor) <= capacity && half >= self.min_capacity)
            .then_some(half)
    }
}
