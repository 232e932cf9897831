
/// The 64-bit golden ratio. Odd, so multiplication by it is a bijection on `u64`.
pub(crate) const MAGIC: u64 = 0x9E37_79B9_7F4A_7C15;

/// Converts raw hash codes into buckets of a power-of-two sized probe index.
///
/// The bucket is taken from the high bits of `hash * MAGIC`, which are the ones that
/// depend on every bit of the input.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Scrambler {
    shift: u32,
}

impl Scrambler {
    /// Creates a scrambler for a probe index with `hash_size` buckets.
    ///
    /// `hash_size` must be a power of two greater than one.
    #[cfg_attr(feature = "inline-more", inline)]
    pub(crate) fn new(hash_size: usize) -> Self {
        debug_assert!(hash_size.is_power_of_two() && hash_size > 1);
        Self {
            shift: (hash_size as u64).leading_zeros() + 1,
        }
    }

    #[inline]
    pub(crate) fn bucket(self, hash: u64) -> usize {
        (hash.wrapping_mul(MAGIC) >> self.shift) as usize
    }
}
