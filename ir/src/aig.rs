//! Reference and-inverter graph.
//!
//! [`Aig`] is a mutable, structurally hashed AIG with fanout bookkeeping so
//! that [`Aig::substitute_node`] can rewire consumers in place. Node 0 is the
//! constant-false node; primary inputs and gates follow in creation order.
//!
//! # Substitution
//!
//! Replacing a node may make some of its consumers trivial (`a & a`,
//! `a & !a`, a constant operand) or structurally identical to a gate that
//! already exists. Those consumers are queued and substituted in turn, so a
//! single call can cascade. Nodes left without consumers are taken out:
//! marked dead, dropped from the hash table, and their fanins dereferenced.

use std::collections::HashMap;

use smallvec::{SmallVec, smallvec};

use crate::network::{Fanins, Network};
use crate::signal::{NodeId, Signal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    Constant,
    Pi,
    And,
}

#[derive(Debug, Clone)]
struct AigNode {
    kind: NodeKind,
    /// Normalized operands (smaller literal first). Unused for non-gates.
    fanins: [Signal; 2],
    /// Gates reading this node. A gate appears once per edge.
    fanouts: SmallVec<[NodeId; 4]>,
    /// Number of primary outputs pointing at this node.
    po_refs: u32,
    dead: bool,
}

impl AigNode {
    fn leaf(kind: NodeKind) -> Self {
        Self { kind, fanins: [Signal::FALSE; 2], fanouts: SmallVec::new(), po_refs: 0, dead: false }
    }

    fn gate(a: Signal, b: Signal) -> Self {
        Self { kind: NodeKind::And, fanins: [a, b], fanouts: SmallVec::new(), po_refs: 0, dead: false }
    }

    fn is_referenced(&self) -> bool {
        !self.fanouts.is_empty() || self.po_refs > 0
    }
}

/// Outcome of normalizing the operands of an AND.
enum AndShape {
    /// The AND folds to an existing signal.
    Trivial(Signal),
    /// A real gate with ordered operands.
    Pair(Signal, Signal),
}

fn normalize_and(a: Signal, b: Signal) -> AndShape {
    let (a, b) = if a.literal() > b.literal() { (b, a) } else { (a, b) };

    // The constant node sorts first, so only `a` needs checking.
    if a == Signal::FALSE {
        return AndShape::Trivial(Signal::FALSE);
    }
    if a == Signal::TRUE {
        return AndShape::Trivial(b);
    }
    if a == b {
        return AndShape::Trivial(a);
    }
    if a == !b {
        return AndShape::Trivial(Signal::FALSE);
    }
    AndShape::Pair(a, b)
}

/// A structurally hashed and-inverter graph.
#[derive(Debug, Clone)]
pub struct Aig {
    nodes: Vec<AigNode>,
    pis: Vec<NodeId>,
    pos: Vec<Signal>,
    strash: HashMap<(Signal, Signal), NodeId>,
    live_gates: usize,
}

impl Default for Aig {
    fn default() -> Self {
        Self::new()
    }
}

impl Aig {
    pub fn new() -> Self {
        Self {
            nodes: vec![AigNode::leaf(NodeKind::Constant)],
            pis: Vec::new(),
            pos: Vec::new(),
            strash: HashMap::new(),
            live_gates: 0,
        }
    }

    pub fn get_constant(&self, value: bool) -> Signal {
        if value { Signal::TRUE } else { Signal::FALSE }
    }

    pub fn create_pi(&mut self) -> Signal {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(AigNode::leaf(NodeKind::Pi));
        self.pis.push(id);
        Signal::from(id)
    }

    /// Register a primary output and return its position.
    pub fn create_po(&mut self, signal: Signal) -> usize {
        self.nodes[signal.node().index()].po_refs += 1;
        self.pos.push(signal);
        self.pos.len() - 1
    }

    pub fn num_pis(&self) -> usize {
        self.pis.len()
    }

    pub fn num_pos(&self) -> usize {
        self.pos.len()
    }

    /// Number of live gates.
    pub fn num_gates(&self) -> usize {
        self.live_gates
    }

    /// Number of gates currently reading `node`, plus outputs pointing at it.
    pub fn fanout_size(&self, node: NodeId) -> usize {
        let n = &self.nodes[node.index()];
        n.fanouts.len() + n.po_refs as usize
    }

    pub fn create_and(&mut self, a: Signal, b: Signal) -> Signal {
        let (a, b) = match normalize_and(a, b) {
            AndShape::Trivial(s) => return s,
            AndShape::Pair(a, b) => (a, b),
        };

        if let Some(&existing) = self.strash.get(&(a, b)) {
            return Signal::from(existing);
        }

        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(AigNode::gate(a, b));
        self.nodes[a.node().index()].fanouts.push(id);
        self.nodes[b.node().index()].fanouts.push(id);
        self.strash.insert((a, b), id);
        self.live_gates += 1;
        Signal::from(id)
    }

    /// Replace every use of `old` by `new`, cascading through consumers that
    /// become trivial or structurally redundant.
    ///
    /// # Panics
    ///
    /// Panics if `old` is not a gate.
    pub fn substitute_node(&mut self, old: NodeId, new: Signal) {
        assert_eq!(self.nodes[old.index()].kind, NodeKind::And, "only gates can be substituted, got {old}");

        let mut old_to_new: HashMap<NodeId, Signal> = HashMap::new();
        let mut worklist: Vec<(NodeId, Signal)> = vec![(old, new)];

        while let Some((old, mut new)) = worklist.pop() {
            if self.nodes[old.index()].dead {
                continue;
            }

            // An earlier step may have replaced the target itself.
            while self.nodes[new.node().index()].dead {
                match old_to_new.get(&new.node()) {
                    Some(&next) => new = next ^ new.is_complemented(),
                    None => break,
                }
            }
            if self.nodes[new.node().index()].dead {
                self.revive_node(new.node());
            }

            let consumers: SmallVec<[NodeId; 4]> = self.nodes[old.index()].fanouts.clone();
            for parent in consumers {
                if let Some(cascade) = self.replace_in_node(parent, old, new) {
                    worklist.push(cascade);
                }
            }
            self.replace_in_outputs(old, new);

            if old != new.node() {
                old_to_new.insert(old, new);
                self.take_out_node(old);
            }
        }
    }

    /// Rewire one consumer. Returns a follow-up substitution when the
    /// consumer itself becomes redundant; the consumer is left untouched then.
    fn replace_in_node(&mut self, parent: NodeId, old: NodeId, new: Signal) -> Option<(NodeId, Signal)> {
        let node = &self.nodes[parent.index()];
        if node.dead || node.kind != NodeKind::And {
            return None;
        }

        let [f0, f1] = node.fanins;
        let rewire = |f: Signal| if f.node() == old { new ^ f.is_complemented() } else { f };
        let (a, b) = match normalize_and(rewire(f0), rewire(f1)) {
            AndShape::Trivial(s) => return Some((parent, s)),
            AndShape::Pair(a, b) => (a, b),
        };

        match self.strash.get(&(a, b)) {
            Some(&existing) if existing != parent => return Some((parent, Signal::from(existing))),
            _ => {}
        }

        if self.strash.get(&(f0, f1)) == Some(&parent) {
            self.strash.remove(&(f0, f1));
        }
        self.nodes[parent.index()].fanins = [a, b];
        self.strash.insert((a, b), parent);

        let old_fanouts = &mut self.nodes[old.index()].fanouts;
        if let Some(pos) = old_fanouts.iter().position(|&n| n == parent) {
            old_fanouts.swap_remove(pos);
        }
        self.nodes[new.node().index()].fanouts.push(parent);
        None
    }

    fn replace_in_outputs(&mut self, old: NodeId, new: Signal) {
        let mut moved = 0;
        for po in self.pos.iter_mut().filter(|po| po.node() == old) {
            *po = new ^ po.is_complemented();
            moved += 1;
        }
        if moved > 0 {
            self.nodes[old.index()].po_refs -= moved;
            self.nodes[new.node().index()].po_refs += moved;
        }
    }

    /// Kill `node` and every fanin gate left unreferenced by its removal.
    fn take_out_node(&mut self, node: NodeId) {
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            let n = &mut self.nodes[id.index()];
            if n.dead || n.kind != NodeKind::And {
                continue;
            }
            n.dead = true;
            let fanins = n.fanins;
            self.live_gates -= 1;
            if self.strash.get(&(fanins[0], fanins[1])) == Some(&id) {
                self.strash.remove(&(fanins[0], fanins[1]));
            }

            for f in fanins {
                let child = &mut self.nodes[f.node().index()];
                if let Some(pos) = child.fanouts.iter().position(|&n| n == id) {
                    child.fanouts.swap_remove(pos);
                }
                if child.kind == NodeKind::And && !child.dead && !child.is_referenced() {
                    stack.push(f.node());
                }
            }
        }
    }

    /// Bring a dead gate (and any dead fanins) back into the graph.
    fn revive_node(&mut self, node: NodeId) {
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            if !self.nodes[id.index()].dead {
                continue;
            }
            let fanins = self.nodes[id.index()].fanins;
            self.nodes[id.index()].dead = false;
            self.live_gates += 1;
            self.strash.insert((fanins[0], fanins[1]), id);

            for f in fanins {
                let child = &mut self.nodes[f.node().index()];
                child.fanouts.push(id);
                if child.dead {
                    stack.push(f.node());
                }
            }
        }
    }

    /// Copy of the network holding only the live output cones, renumbered
    /// in topological order. Primary inputs are kept in order even when unused.
    pub fn compact(&self) -> Aig {
        let mut fresh = Aig::new();
        let mut map: Vec<Option<Signal>> = vec![None; self.nodes.len()];
        map[NodeId::CONSTANT.index()] = Some(Signal::FALSE);
        for &pi in &self.pis {
            map[pi.index()] = Some(fresh.create_pi());
        }

        for &po in &self.pos {
            let mut stack = vec![(po.node(), false)];
            while let Some((id, expanded)) = stack.pop() {
                if map[id.index()].is_some() {
                    continue;
                }
                let [f0, f1] = self.nodes[id.index()].fanins;
                if expanded {
                    let lookup = |f: Signal, map: &[Option<Signal>]| {
                        map[f.node().index()].map(|s| s ^ f.is_complemented()).unwrap_or(Signal::FALSE)
                    };
                    let a = lookup(f0, &map);
                    let b = lookup(f1, &map);
                    map[id.index()] = Some(fresh.create_and(a, b));
                } else {
                    stack.push((id, true));
                    stack.push((f1.node(), false));
                    stack.push((f0.node(), false));
                }
            }
        }

        for &po in &self.pos {
            let mapped = map[po.node().index()].unwrap_or(Signal::FALSE) ^ po.is_complemented();
            fresh.create_po(mapped);
        }
        fresh
    }
}

impl Network for Aig {
    type Node = NodeId;
    type Signal = Signal;

    fn size(&self) -> usize {
        self.nodes.len()
    }

    fn node_to_index(&self, node: NodeId) -> usize {
        node.index()
    }

    fn gates(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.kind == NodeKind::And && !n.dead)
            .map(|(i, _)| NodeId(i as u32))
            .collect()
    }

    fn pis(&self) -> &[NodeId] {
        &self.pis
    }

    fn pos(&self) -> &[Signal] {
        &self.pos
    }

    fn is_constant(&self, node: NodeId) -> bool {
        self.nodes[node.index()].kind == NodeKind::Constant
    }

    fn is_pi(&self, node: NodeId) -> bool {
        self.nodes[node.index()].kind == NodeKind::Pi
    }

    fn is_and(&self, node: NodeId) -> bool {
        self.nodes[node.index()].kind == NodeKind::And
    }

    fn is_dead(&self, node: NodeId) -> bool {
        self.nodes[node.index()].dead
    }

    fn fanins(&self, node: NodeId) -> Fanins<Signal> {
        let n = &self.nodes[node.index()];
        match n.kind {
            NodeKind::And => smallvec![n.fanins[0], n.fanins[1]],
            NodeKind::Pi | NodeKind::Constant => SmallVec::new(),
        }
    }

    fn get_node(&self, signal: Signal) -> NodeId {
        signal.node()
    }

    fn is_complemented(&self, signal: Signal) -> bool {
        signal.is_complemented()
    }

    fn make_signal(&self, node: NodeId) -> Signal {
        Signal::from(node)
    }

    fn is_or(&self, _node: NodeId) -> bool {
        false
    }

    fn create_and(&mut self, a: Signal, b: Signal) -> Signal {
        Aig::create_and(self, a, b)
    }

    fn substitute_node(&mut self, old: NodeId, new: Signal) {
        Aig::substitute_node(self, old, new)
    }
}
