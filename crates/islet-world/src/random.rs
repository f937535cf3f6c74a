use rand::{Rng, RngCore};

/// Randomness threaded through every generation stage.
///
/// Any `rand` generator is a source; seed one to get reproducible worlds.
pub trait RandomSource {
    /// Next raw 32-bit value.
    fn next_raw(&mut self) -> u32;

    /// Uniform integer in `lo..=hi`. Returns `lo` when the range is empty.
    fn next_in_range(&mut self, lo: i32, hi: i32) -> i32;
}

impl<R: RngCore> RandomSource for R {
    #[inline]
    fn next_raw(&mut self) -> u32 {
        self.next_u32()
    }

    #[inline]
    fn next_in_range(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.gen_range(lo..=hi)
    }
}
