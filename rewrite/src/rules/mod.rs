//! Algebraic rewrite rules.
//!
//! Every rule is split into a read-only `find` step, which inspects a bounded
//! neighborhood of a gate and returns a match, and a `build` step, which
//! creates the replacement logic. Failing any precondition in `find` is a
//! normal "no match" and never touches the network.

pub mod associativity;
pub mod distributivity;
pub mod three_level;

use shoal_ir::{DepthNetwork, Network};

use crate::config::Rule;

/// The two fanins of `node`, or `None` for primary inputs and the constant.
///
/// # Panics
///
/// Panics if a gate reports a fanin count other than two.
pub(crate) fn gate_fanins<N: Network>(ntk: &N, node: N::Node) -> Option<[N::Signal; 2]> {
    if !ntk.is_and(node) {
        return None;
    }
    let fanins = ntk.fanins(node);
    assert_eq!(fanins.len(), 2, "gate {node:?} must have exactly two fanins");
    Some([fanins[0], fanins[1]])
}

/// Critical-path membership of the node behind `signal`.
pub(crate) fn is_critical<N: DepthNetwork>(ntk: &N, signal: N::Signal) -> bool {
    ntk.is_on_critical_path(ntk.get_node(signal))
}

pub(crate) fn level_of<N: DepthNetwork>(ntk: &N, signal: N::Signal) -> u32 {
    ntk.level(ntk.get_node(signal))
}

/// Try `rule` on gate `n`; on a match, build the replacement and substitute it.
pub fn apply<N: DepthNetwork>(rule: Rule, ntk: &mut N, n: N::Node) -> bool {
    let replacement = match rule {
        Rule::Associativity => associativity::find(ntk, n).map(|m| m.build(ntk)),
        Rule::Distributivity => distributivity::find(ntk, n).map(|m| m.build(ntk)),
        Rule::ThreeLevelDistributivity => three_level::find(ntk, n).map(|m| m.build(ntk)),
    };
    match replacement {
        Some(signal) => {
            tracing::debug!(rule = %rule, node = ?n, level = ntk.level(n), "rule matched");
            ntk.substitute_node(n, signal);
            true
        }
        None => false,
    }
}
