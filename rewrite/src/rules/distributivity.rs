//! Two-level distributivity: `!(s & x) & !(s & y)  =>  !(s & (x | y))`.
//!
//! Both branches of a critical gate must read the same critical signal `s`
//! through complemented edges. Factoring `s` out leaves it one gate below
//! the output instead of two.

use shoal_ir::{DepthNetwork, Network};

use super::{gate_fanins, is_critical};
use crate::neighborhood::Neighborhood;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistributivityMatch<S> {
    pub shared: S,
    pub non_critical: [S; 2],
    /// Polarity convention of the matched gate, see [`Network::is_or`].
    pub is_or: bool,
}

/// Critical and non-critical fanin of one complemented branch.
fn split_branch<N: DepthNetwork>(ntk: &N, branch: N::Signal) -> Option<(N::Signal, N::Signal)> {
    let node = ntk.get_node(branch);
    if !ntk.is_complemented(branch) || !ntk.is_on_critical_path(node) {
        return None;
    }
    let mut neighborhood = Neighborhood::new(1, 1);
    for s in gate_fanins(ntk, node)? {
        neighborhood.push(s, is_critical(ntk, s))?;
    }
    neighborhood.pair()
}

pub fn find<N: DepthNetwork>(ntk: &N, n: N::Node) -> Option<DistributivityMatch<N::Signal>> {
    if !ntk.is_on_critical_path(n) || ntk.level(n) <= 1 {
        return None;
    }
    let fanins = gate_fanins(ntk, n)?;

    // Branches that are gates over primary inputs leave nothing to gain.
    let shallow =
        fanins.iter().filter(|&&s| ntk.is_complemented(s) && ntk.level(ntk.get_node(s)) == 1).count();
    if shallow == ntk.fanin_size(n) {
        return None;
    }

    let (shared, x) = split_branch(ntk, fanins[0])?;
    let (other, y) = split_branch(ntk, fanins[1])?;
    if shared != other {
        return None;
    }
    Some(DistributivityMatch { shared, non_critical: [x, y], is_or: ntk.is_or(n) })
}

impl<S: Copy> DistributivityMatch<S> {
    pub fn build<N: Network<Signal = S>>(self, ntk: &mut N) -> S {
        let [x, y] = self.non_critical;
        let term = ntk.create_or(x, y);
        if self.is_or { ntk.create_and(term, self.shared) } else { ntk.create_nand(term, self.shared) }
    }
}
