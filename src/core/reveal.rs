//! One-shot reveal bookkeeping.

/// Stagger delay for the `index`-th revealable element, capped.
#[inline]
pub fn stagger_delay_ms(index: usize, step_ms: u32, cap_ms: u32) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    index.saturating_mul(step_ms).min(cap_ms)
}

/// Tracks which of a fixed list of elements have been revealed.
///
/// An element moves from pending to revealed exactly once; repeated
/// intersection reports for it are ignored.
#[derive(Clone, Debug, Default)]
pub struct RevealSet {
    revealed: Vec<bool>,
}

impl RevealSet {
    pub fn new(len: usize) -> Self {
        Self {
            revealed: vec![false; len],
        }
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    /// Mark `index` revealed. Returns `true` only on the first call for an
    /// in-range index; that is the caller's cue to apply the transition and
    /// stop observing the element.
    pub fn reveal(&mut self, index: usize) -> bool {
        match self.revealed.get_mut(index) {
            Some(done) if !*done => {
                *done = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn pending(&self) -> usize {
        self.revealed.iter().filter(|done| !**done).count()
    }
}
