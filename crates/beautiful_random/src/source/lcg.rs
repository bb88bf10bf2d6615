//! Linear-congruential uniform primitive shared by every distribution kind.
use rand::RngCore;

/// Knuth's MMIX multiplier.
pub const LCG_MULTIPLIER: u64 = 6_364_136_223_846_793_005;
/// Additive constant.
pub const LCG_INCREMENT: u64 = 1;

/// Scale mapping the top 53 bits of the state onto [0, 1).
const F64_UNIT_SCALE: f64 = 1.0 / (1u64 << 53) as f64;

/// 64-bit linear-congruential generator: `state' = a * state + c` with wrapping arithmetic.
///
/// Not suitable for anything security related. The low bits have short periods, so
/// floating-point output is derived from the high bits only.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    /// Create a generator starting from `seed`.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Current state. The next draw is a pure function of this value.
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Replace the state.
    pub fn reseed(&mut self, seed: u64) {
        self.state = seed;
    }

    /// Advance one step and return the new state.
    #[inline]
    pub fn step(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        self.state
    }

    /// Advance one step and return `state / 2^64`, always in [0, 1).
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        (self.step() >> 11) as f64 * F64_UNIT_SCALE
    }
}

impl RngCore for Lcg {
    fn next_u32(&mut self) -> u32 {
        (self.step() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.step()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_matches_recurrence() {
        let mut lcg = Lcg::new(0);
        assert_eq!(lcg.step(), 1);
        assert_eq!(lcg.step(), LCG_MULTIPLIER.wrapping_add(1));

        let mut lcg = Lcg::new(u64::MAX);
        let expected = u64::MAX.wrapping_mul(LCG_MULTIPLIER).wrapping_add(1);
        assert_eq!(lcg.step(), expected);
        assert_eq!(lcg.state(), expected);
    }

    #[test]
    fn next_f64_stays_below_one_at_the_top_of_the_state_space() {
        // The state reached from this seed is u64::MAX.
        let seed = (u64::MAX - 1).wrapping_mul(modular_inverse(LCG_MULTIPLIER));
        let mut lcg = Lcg::new(seed);
        let v = lcg.next_f64();
        assert_eq!(lcg.state(), u64::MAX);
        assert!(v < 1.0, "{v} must be < 1");
        assert!(v > 0.999_999);
    }

    #[test]
    fn next_f64_values_in_range() {
        let mut lcg = Lcg::new(0xDEAD_BEEF);
        for _ in 0..10_000 {
            let v = lcg.next_f64();
            assert!((0.0..1.0).contains(&v), "{v} out of range");
        }
    }

    #[test]
    fn identical_seeds_produce_identical_streams() {
        let mut a = Lcg::new(2025);
        let mut b = Lcg::new(2025);
        for _ in 0..256 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn fill_bytes_handles_partial_chunks() {
        let mut a = Lcg::new(7);
        let mut buf = [0u8; 11];
        a.fill_bytes(&mut buf);

        let mut b = Lcg::new(7);
        let first = b.step().to_le_bytes();
        let second = b.step().to_le_bytes();
        assert_eq!(&buf[..8], &first);
        assert_eq!(&buf[8..], &second[..3]);
    }

    #[test]
    fn reseed_restarts_the_stream() {
        let mut lcg = Lcg::new(99);
        let first = lcg.next_u64();
        lcg.next_u64();
        lcg.reseed(99);
        assert_eq!(lcg.next_u64(), first);
    }

    // Inverse of an odd multiplier modulo 2^64 (Newton iteration).
    fn modular_inverse(a: u64) -> u64 {
        let mut x = a;
        for _ in 0..6 {
            x = x.wrapping_mul(2u64.wrapping_sub(a.wrapping_mul(x)));
        }
        x
    }
}
