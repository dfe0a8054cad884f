//! Deterministic pair sampling for the pairwise check
//!
//! Checking every ordered pair of a corpus of a few thousand vectors is
//! quadratic. Instead each vector `i` is paired with every `step`-th vector
//! starting at a pseudo-random offset in `[0, step)`, which keeps the pair
//! count near `n * n / step` while varying the partners per vector.

/// Seedable xorshift64 generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    /// Create a generator; a zero seed is remapped since xorshift stalls at 0
    pub fn seeded(seed: u64) -> Self {
        let state = if seed == 0 {
            0x9E37_79B9_7F4A_7C15
        } else {
            seed
        };
        Self { state }
    }

    /// Next raw value
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Next value in `[0, bound)`; `bound` must be non-zero
    pub fn below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "bound must be non-zero");
        (self.next_u64() % bound as u64) as usize
    }
}

/// Iterator over sampled `(first, second)` corpus index pairs
///
/// One offset is drawn per first index, in order, whether or not it yields
/// any pairs, so the sequence depends only on `len`, `step` and `seed`.
#[derive(Debug, Clone)]
pub struct PairSampler {
    rng: DeterministicRng,
    len: usize,
    step: usize,
    first: usize,
    next_second: Option<usize>,
}

impl PairSampler {
    /// Sample pairs over a corpus of `len` vectors
    pub fn new(len: usize, step: usize, seed: u64) -> Self {
        Self {
            rng: DeterministicRng::seeded(seed),
            len,
            step: step.max(1),
            first: 0,
            next_second: None,
        }
    }
}

impl Iterator for PairSampler {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(second) = self.next_second {
                if second < self.len {
                    self.next_second = Some(second + self.step);
                    return Some((self.first, second));
                }
                self.first += 1;
                self.next_second = None;
            }

            if self.first >= self.len {
                return None;
            }
            self.next_second = Some(self.rng.below(self.step));
        }
    }
}
