//! Small hand-built networks shared by the rewrite tests.
//!
//! Node creation order matters: the driver visits gates in index order, so
//! each builder creates gates bottom-up exactly as documented.

use shoal_ir::{Aig, DepthNetwork, DepthView, Fanins, Network, NodeId, Signal};

use crate::{RewriteConfig, RewriteStats, algebraic_rewrite_with};

/// `(((a & b) & c) & d) & e`, one output. Depth 4.
pub struct Chain {
    pub aig: Aig,
    pub ab: Signal,
    pub deep: Signal,
    pub g1: Signal,
    pub n: Signal,
    pub c: Signal,
    pub d: Signal,
    pub e: Signal,
}

pub fn chain() -> Chain {
    let mut aig = Aig::new();
    let [a, b, c, d, e] = [(); 5].map(|_| aig.create_pi());
    let ab = aig.create_and(a, b);
    let deep = aig.create_and(ab, c);
    let g1 = aig.create_and(deep, d);
    let n = aig.create_and(g1, e);
    aig.create_po(n);
    Chain { aig, ab, deep, g1, n, c, d, e }
}

/// `!(s & d) & !(s & e)` with `s = (a & b) & (c & f)`. Depth 4.
pub struct SharedBranches {
    pub aig: Aig,
    pub s: Signal,
    pub x: Signal,
    pub y: Signal,
    pub n: Signal,
    pub d: Signal,
    pub e: Signal,
}

pub fn shared_branches() -> SharedBranches {
    let mut aig = Aig::new();
    let [a, b, c, f, d, e] = [(); 6].map(|_| aig.create_pi());
    let ab = aig.create_and(a, b);
    let cf = aig.create_and(c, f);
    let s = aig.create_and(ab, cf);
    let x = aig.create_and(s, d);
    let y = aig.create_and(s, e);
    let n = aig.create_and(!x, !y);
    aig.create_po(n);
    SharedBranches { aig, s, x, y, n, d, e }
}

/// Like [`shared_branches`], but each branch reads its own level-2 gate.
pub fn distinct_branches() -> Aig {
    let mut aig = Aig::new();
    let [a, b, c, f, d, e] = [(); 6].map(|_| aig.create_pi());
    let ab = aig.create_and(a, b);
    let cf = aig.create_and(c, f);
    let ac = aig.create_and(a, c);
    let bf = aig.create_and(b, f);
    let s1 = aig.create_and(ab, cf);
    let s2 = aig.create_and(ac, bf);
    let x = aig.create_and(s1, d);
    let y = aig.create_and(s2, e);
    let n = aig.create_and(!x, !y);
    aig.create_po(n);
    aig
}

/// `e & !(!((a & b) & c) & !d)`. Depth 4.
pub struct ThreeLevel {
    pub aig: Aig,
    pub cs: Signal,
    pub cf: Signal,
    pub cz: Signal,
    pub n: Signal,
    pub c: Signal,
    pub d: Signal,
    pub e: Signal,
}

pub fn three_level() -> ThreeLevel {
    let mut aig = Aig::new();
    let [a, b, c, d, e] = [(); 5].map(|_| aig.create_pi());
    let cs = aig.create_and(a, b);
    let cf = aig.create_and(cs, c);
    let cz = aig.create_and(!cf, !d);
    let n = aig.create_and(!cz, e);
    aig.create_po(n);
    ThreeLevel { aig, cs, cf, cz, n, c, d, e }
}

/// `(a & b) & (c & d)`. Depth 2.
pub fn balanced_tree() -> Aig {
    let mut aig = Aig::new();
    let [a, b, c, d] = [(); 4].map(|_| aig.create_pi());
    let ab = aig.create_and(a, b);
    let cd = aig.create_and(c, d);
    let root = aig.create_and(ab, cd);
    aig.create_po(root);
    aig
}

pub fn depth(aig: &mut Aig) -> u32 {
    DepthView::new(aig).depth()
}

pub fn rewrite(aig: &mut Aig, config: &RewriteConfig) -> RewriteStats {
    let mut view = DepthView::new(aig);
    algebraic_rewrite_with(&mut view, config)
}

/// Forwards to a depth network and checks how the driver uses it.
///
/// Level queries between a substitution and the following refresh panic,
/// as does substituting a gate off the critical path.
pub struct Audited<N> {
    inner: N,
    stale: bool,
    pub substitutions: usize,
    /// Report an extra fanin for every gate.
    pub pad_fanins: bool,
}

impl<N> Audited<N> {
    pub fn new(inner: N) -> Self {
        Self { inner, stale: false, substitutions: 0, pad_fanins: false }
    }

    fn check_fresh(&self) {
        assert!(!self.stale, "level data read before update_levels");
    }
}

impl<N: DepthNetwork<Node = NodeId, Signal = Signal>> Network for Audited<N> {
    type Node = NodeId;
    type Signal = Signal;

    fn size(&self) -> usize {
        self.inner.size()
    }

    fn node_to_index(&self, node: NodeId) -> usize {
        self.inner.node_to_index(node)
    }

    fn gates(&self) -> Vec<NodeId> {
        self.inner.gates()
    }

    fn pis(&self) -> &[NodeId] {
        self.inner.pis()
    }

    fn pos(&self) -> &[Signal] {
        self.inner.pos()
    }

    fn is_constant(&self, node: NodeId) -> bool {
        self.inner.is_constant(node)
    }

    fn is_pi(&self, node: NodeId) -> bool {
        self.inner.is_pi(node)
    }

    fn is_and(&self, node: NodeId) -> bool {
        self.inner.is_and(node)
    }

    fn is_dead(&self, node: NodeId) -> bool {
        self.inner.is_dead(node)
    }

    fn fanins(&self, node: NodeId) -> Fanins<Signal> {
        let mut fanins = self.inner.fanins(node);
        if self.pad_fanins && self.inner.is_and(node) {
            fanins.push(Signal::TRUE);
        }
        fanins
    }

    fn get_node(&self, signal: Signal) -> NodeId {
        self.inner.get_node(signal)
    }

    fn is_complemented(&self, signal: Signal) -> bool {
        self.inner.is_complemented(signal)
    }

    fn make_signal(&self, node: NodeId) -> Signal {
        self.inner.make_signal(node)
    }

    fn is_or(&self, node: NodeId) -> bool {
        self.inner.is_or(node)
    }

    fn create_and(&mut self, a: Signal, b: Signal) -> Signal {
        self.inner.create_and(a, b)
    }

    fn substitute_node(&mut self, old: NodeId, new: Signal) {
        self.check_fresh();
        assert!(self.inner.is_on_critical_path(old), "substituted {old} off the critical path");
        self.inner.substitute_node(old, new);
        self.stale = true;
        self.substitutions += 1;
    }
}

impl<N: DepthNetwork<Node = NodeId, Signal = Signal>> DepthNetwork for Audited<N> {
    fn level(&self, node: NodeId) -> u32 {
        self.check_fresh();
        self.inner.level(node)
    }

    fn depth(&self) -> u32 {
        self.check_fresh();
        self.inner.depth()
    }

    fn is_on_critical_path(&self, node: NodeId) -> bool {
        self.check_fresh();
        self.inner.is_on_critical_path(node)
    }

    fn update_levels(&mut self) {
        self.inner.update_levels();
        self.stale = false;
    }
}
