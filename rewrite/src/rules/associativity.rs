//! Associativity: `(crit & x) & y  =>  crit & (x & y)`.
//!
//! Fires on a critical gate with exactly one positive critical fanin whose
//! own fanins hold one critical signal. Moving the two non-critical signals
//! into a fresh gate lets the critical signal enter one level later.

use shoal_ir::{DepthNetwork, Network};

use super::{gate_fanins, is_critical, level_of};
use crate::neighborhood::Neighborhood;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssociativityMatch<S> {
    pub critical: S,
    pub non_critical: [S; 2],
}

pub fn find<N: DepthNetwork>(ntk: &N, n: N::Node) -> Option<AssociativityMatch<N::Signal>> {
    if !ntk.is_on_critical_path(n) || ntk.level(n) <= 1 {
        return None;
    }
    let fanins = gate_fanins(ntk, n)?;

    let is_candidate = |s: N::Signal| !ntk.is_complemented(s) && is_critical(ntk, s);
    let (candidate, other) = match fanins {
        [a, b] if is_candidate(a) && !is_candidate(b) => (a, b),
        [a, b] if is_candidate(b) && !is_candidate(a) => (b, a),
        _ => return None,
    };
    let inner = gate_fanins(ntk, ntk.get_node(candidate))?;

    let mut neighborhood = Neighborhood::new(1, 2);
    neighborhood.push(other, false)?;
    for s in inner {
        neighborhood.push(s, is_critical(ntk, s))?;
    }
    if !neighborhood.is_full() {
        return None;
    }

    let critical = neighborhood.critical()[0];
    let non_critical = [neighborhood.non_critical()[0], neighborhood.non_critical()[1]];
    let late = level_of(ntk, critical);
    if non_critical.iter().any(|&s| level_of(ntk, s) >= late) {
        return None;
    }
    Some(AssociativityMatch { critical, non_critical })
}

impl<S: Copy> AssociativityMatch<S> {
    pub fn build<N: Network<Signal = S>>(self, ntk: &mut N) -> S {
        let [x, y] = self.non_critical;
        let early = ntk.create_and(x, y);
        ntk.create_and(self.critical, early)
    }
}
