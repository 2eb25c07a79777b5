//! Fixed-capacity classification of signals around a gate.

use smallvec::SmallVec;

/// Signals near a gate, split by critical-path membership.
///
/// Each class has a fixed capacity. Pushing into a full class fails and
/// leaves the neighborhood untouched, so a rule can bail out with `?`
/// instead of silently replacing an earlier signal.
#[derive(Debug, Clone)]
pub struct Neighborhood<S> {
    critical: SmallVec<[S; 2]>,
    non_critical: SmallVec<[S; 2]>,
    max_critical: usize,
    max_non_critical: usize,
}

impl<S: Copy> Neighborhood<S> {
    pub fn new(max_critical: usize, max_non_critical: usize) -> Self {
        Self { critical: SmallVec::new(), non_critical: SmallVec::new(), max_critical, max_non_critical }
    }

    /// Record `signal` in the matching class. `None` if that class is full.
    #[must_use]
    pub fn push(&mut self, signal: S, critical: bool) -> Option<()> {
        let (slots, capacity) = if critical {
            (&mut self.critical, self.max_critical)
        } else {
            (&mut self.non_critical, self.max_non_critical)
        };
        if slots.len() == capacity {
            return None;
        }
        slots.push(signal);
        Some(())
    }

    pub fn critical(&self) -> &[S] {
        &self.critical
    }

    pub fn non_critical(&self) -> &[S] {
        &self.non_critical
    }

    /// Both classes hold exactly their capacity.
    pub fn is_full(&self) -> bool {
        self.critical.len() == self.max_critical && self.non_critical.len() == self.max_non_critical
    }

    /// The single critical and single non-critical signal of a full `(1, 1)` neighborhood.
    pub fn pair(&self) -> Option<(S, S)> {
        match (&self.critical[..], &self.non_critical[..]) {
            (&[critical], &[non_critical]) => Some((critical, non_critical)),
            _ => None,
        }
    }
}
