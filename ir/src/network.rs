//! Capability traits consumed by network algorithms.
//!
//! Algorithms are written against these traits rather than a concrete
//! network type. [`Network`] covers structure, structurally hashed gate
//! creation and substitution; [`DepthNetwork`] adds per-node levels and
//! critical-path membership. An algorithm that needs depth information
//! bounds on `DepthNetwork`, so handing it a plain network is a compile
//! error rather than a runtime failure.

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Not;

use smallvec::SmallVec;

/// Fanin list of a node. Gates always report exactly two entries.
pub type Fanins<S> = SmallVec<[S; 2]>;

/// A two-input AND network with complemented edges.
pub trait Network {
    type Node: Copy + Eq + Hash + Debug;
    type Signal: Copy + Eq + Hash + Debug + Not<Output = Self::Signal>;

    /// Number of node slots, including dead ones. Upper bound for [`Network::node_to_index`].
    fn size(&self) -> usize;

    fn node_to_index(&self, node: Self::Node) -> usize;

    /// Snapshot of the live gates, in a deterministic order.
    fn gates(&self) -> Vec<Self::Node>;

    fn pis(&self) -> &[Self::Node];

    fn pos(&self) -> &[Self::Signal];

    fn is_constant(&self, node: Self::Node) -> bool;

    fn is_pi(&self, node: Self::Node) -> bool;

    /// True for live or dead AND gates; false for primary inputs and the constant.
    fn is_and(&self, node: Self::Node) -> bool;

    /// True once a node has been substituted away or dereferenced to nothing.
    fn is_dead(&self, node: Self::Node) -> bool;

    /// Ordered fanins. Empty for primary inputs and the constant.
    fn fanins(&self, node: Self::Node) -> Fanins<Self::Signal>;

    fn fanin_size(&self, node: Self::Node) -> usize {
        self.fanins(node).len()
    }

    fn get_node(&self, signal: Self::Signal) -> Self::Node;

    fn is_complemented(&self, signal: Self::Signal) -> bool;

    fn make_signal(&self, node: Self::Node) -> Self::Signal;

    /// Polarity convention used by two-level distributivity.
    ///
    /// Returns true iff `node` computes the disjunction of the positive
    /// outputs of its fanin nodes. A plain AIG, where every gate is an AND,
    /// always returns false.
    fn is_or(&self, node: Self::Node) -> bool;

    /// Structurally hashed AND: returns an existing equivalent gate when there is one.
    fn create_and(&mut self, a: Self::Signal, b: Self::Signal) -> Self::Signal;

    fn create_not(&self, a: Self::Signal) -> Self::Signal {
        !a
    }

    fn create_nand(&mut self, a: Self::Signal, b: Self::Signal) -> Self::Signal {
        !self.create_and(a, b)
    }

    fn create_or(&mut self, a: Self::Signal, b: Self::Signal) -> Self::Signal {
        !self.create_and(!a, !b)
    }

    /// Rewire every consumer of `old` (gates and primary outputs) to `new`.
    fn substitute_node(&mut self, old: Self::Node, new: Self::Signal);
}

/// Level and critical-path information on top of a [`Network`].
///
/// Values reflect the structure as of the last [`DepthNetwork::update_levels`];
/// callers that mutate the network must refresh before querying again.
pub trait DepthNetwork: Network {
    fn level(&self, node: Self::Node) -> u32;

    /// Length of the longest input-to-output path.
    fn depth(&self) -> u32;

    fn is_on_critical_path(&self, node: Self::Node) -> bool;

    /// Recompute levels, depth and critical-path membership from scratch.
    fn update_levels(&mut self);
}
