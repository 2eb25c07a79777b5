//! Node identities and complemented-edge signals.
//!
//! A [`Signal`] packs a node index and a complementation bit into a single
//! `u32` literal (`node << 1 | complement`), the same encoding AIGER uses.
//! Signals are plain values: cheap to copy, hash and compare.

use std::fmt;
use std::ops::{BitXor, Not};

/// Index of a node inside an [`Aig`](crate::Aig).
///
/// Node 0 is always the constant-false node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The constant node.
    pub const CONSTANT: NodeId = NodeId(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// A reference to a node together with a complementation bit.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signal(u32);

impl Signal {
    /// Constant false.
    pub const FALSE: Signal = Signal(0);
    /// Constant true.
    pub const TRUE: Signal = Signal(1);

    #[inline]
    pub fn new(node: NodeId, complemented: bool) -> Self {
        Self((node.0 << 1) | complemented as u32)
    }

    /// Build a signal from a raw AIGER-style literal.
    #[inline]
    pub fn from_literal(literal: u32) -> Self {
        Self(literal)
    }

    #[inline]
    pub fn literal(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn node(self) -> NodeId {
        NodeId(self.0 >> 1)
    }

    #[inline]
    pub fn is_complemented(self) -> bool {
        self.0 & 1 == 1
    }

    /// The same node with positive polarity.
    #[inline]
    pub fn regular(self) -> Self {
        Self(self.0 & !1)
    }

    #[inline]
    pub fn is_constant(self) -> bool {
        self.node() == NodeId::CONSTANT
    }
}

impl From<NodeId> for Signal {
    fn from(node: NodeId) -> Self {
        Signal::new(node, false)
    }
}

impl Not for Signal {
    type Output = Signal;

    #[inline]
    fn not(self) -> Signal {
        Signal(self.0 ^ 1)
    }
}

/// Conditionally complement a signal: `s ^ true == !s`.
impl BitXor<bool> for Signal {
    type Output = Signal;

    #[inline]
    fn bitxor(self, complement: bool) -> Signal {
        Signal(self.0 ^ complement as u32)
    }
}

impl fmt::Debug for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_complemented() { write!(f, "!{}", self.node()) } else { write!(f, "{}", self.node()) }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
