//! Three-level distributivity.
//!
//! Matches `z & !(!(c & w) & !v)`, i.e. `z & ((c & w) | v)`, where `c` is
//! the critical signal three levels down and `z` arrives much earlier. The
//! replacement `(c & (w & z)) | (z & v)` leaves `c` two gates below the
//! output instead of three.

use shoal_ir::{DepthNetwork, Network};

use super::{gate_fanins, is_critical, level_of};
use crate::neighborhood::Neighborhood;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreeLevelMatch<S> {
    /// Early fanin of the matched gate.
    pub child_zero: S,
    /// Non-critical, complemented fanin one level down.
    pub nc_first: S,
    /// Critical signal three levels down.
    pub critical_second: S,
    pub nc_second: S,
}

pub fn find<N: DepthNetwork>(ntk: &N, n: N::Node) -> Option<ThreeLevelMatch<N::Signal>> {
    if !ntk.is_on_critical_path(n) {
        return None;
    }

    // Top: one complemented critical fanin, one non-critical.
    let mut top = Neighborhood::new(1, 1);
    for s in gate_fanins(ntk, n)? {
        match (is_critical(ntk, s), ntk.is_complemented(s)) {
            (true, true) => top.push(s, true)?,
            (false, _) => top.push(s, false)?,
            (true, false) => return None,
        }
    }
    let (critical_zero, child_zero) = top.pair()?;
    if level_of(ntk, critical_zero) <= level_of(ntk, child_zero) + 2 {
        return None;
    }

    // Middle: both fanins complemented, one of them critical.
    let mut middle = Neighborhood::new(1, 1);
    for s in gate_fanins(ntk, ntk.get_node(critical_zero))? {
        if !ntk.is_complemented(s) {
            return None;
        }
        middle.push(s, is_critical(ntk, s))?;
    }
    let (critical_first, nc_first) = middle.pair()?;

    // Bottom: any polarity, one critical.
    let mut bottom = Neighborhood::new(1, 1);
    for s in gate_fanins(ntk, ntk.get_node(critical_first))? {
        bottom.push(s, is_critical(ntk, s))?;
    }
    let (critical_second, nc_second) = bottom.pair()?;

    Some(ThreeLevelMatch { child_zero, nc_first, critical_second, nc_second })
}

impl<S: Copy> ThreeLevelMatch<S> {
    pub fn build<N: Network<Signal = S>>(self, ntk: &mut N) -> S {
        let z = self.child_zero;
        let t0 = ntk.create_and(self.nc_second, z);
        let t1 = ntk.create_and(self.critical_second, t0);
        let v = ntk.create_not(self.nc_first);
        let t2 = ntk.create_and(z, v);
        let (t1, t2) = (ntk.create_not(t1), ntk.create_not(t2));
        ntk.create_nand(t1, t2)
    }
}
