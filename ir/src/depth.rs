//! Level and critical-path view over any [`Network`].
//!
//! [`DepthView`] borrows a network mutably, forwards every structural
//! operation to it, and keeps a level and a critical-path flag per node.
//! The data is rebuilt wholesale by [`DepthNetwork::update_levels`]; gates
//! created through the view get their level immediately but are not marked
//! critical until the next refresh.

use crate::network::{DepthNetwork, Fanins, Network};

pub struct DepthView<'a, N: Network> {
    ntk: &'a mut N,
    levels: Vec<u32>,
    critical: Vec<bool>,
    depth: u32,
}

impl<'a, N: Network> DepthView<'a, N> {
    /// Wrap `ntk` and compute levels for its current structure.
    pub fn new(ntk: &'a mut N) -> Self {
        let mut view = Self { ntk, levels: Vec::new(), critical: Vec::new(), depth: 0 };
        view.update_levels();
        view
    }

    pub fn network(&self) -> &N {
        self.ntk
    }

    fn level_of_index(&self, index: usize) -> u32 {
        self.levels.get(index).copied().unwrap_or(0)
    }

    fn compute_levels(&mut self) {
        let size = self.ntk.size();
        self.levels = vec![0; size];
        let mut done = vec![false; size];

        // Post-order over every live node, explicit stack to survive deep chains.
        let roots: Vec<N::Node> = self.ntk.gates();
        for root in roots {
            let mut stack = vec![(root, false)];
            while let Some((node, expanded)) = stack.pop() {
                let index = self.ntk.node_to_index(node);
                if done[index] {
                    continue;
                }
                let fanins = self.ntk.fanins(node);
                if expanded || fanins.is_empty() {
                    let level = fanins
                        .iter()
                        .map(|&f| self.levels[self.ntk.node_to_index(self.ntk.get_node(f))] + 1)
                        .max()
                        .unwrap_or(0);
                    self.levels[index] = level;
                    done[index] = true;
                } else {
                    stack.push((node, true));
                    for &f in fanins.iter().rev() {
                        let child = self.ntk.get_node(f);
                        if !done[self.ntk.node_to_index(child)] {
                            stack.push((child, false));
                        }
                    }
                }
            }
        }

        self.depth = self
            .ntk
            .pos()
            .iter()
            .map(|&po| self.levels[self.ntk.node_to_index(self.ntk.get_node(po))])
            .max()
            .unwrap_or(0);
    }

    fn compute_critical_path(&mut self) {
        self.critical = vec![false; self.ntk.size()];

        let mut stack: Vec<N::Node> = self
            .ntk
            .pos()
            .iter()
            .map(|&po| self.ntk.get_node(po))
            .filter(|&n| self.levels[self.ntk.node_to_index(n)] == self.depth)
            .collect();

        while let Some(node) = stack.pop() {
            let index = self.ntk.node_to_index(node);
            if self.critical[index] || self.ntk.is_constant(node) {
                continue;
            }
            self.critical[index] = true;

            let level = self.levels[index];
            for f in self.ntk.fanins(node) {
                let child = self.ntk.get_node(f);
                if self.levels[self.ntk.node_to_index(child)] + 1 == level {
                    stack.push(child);
                }
            }
        }
    }
}

impl<N: Network> Network for DepthView<'_, N> {
    type Node = N::Node;
    type Signal = N::Signal;

    fn size(&self) -> usize {
        self.ntk.size()
    }

    fn node_to_index(&self, node: Self::Node) -> usize {
        self.ntk.node_to_index(node)
    }

    fn gates(&self) -> Vec<Self::Node> {
        self.ntk.gates()
    }

    fn pis(&self) -> &[Self::Node] {
        self.ntk.pis()
    }

    fn pos(&self) -> &[Self::Signal] {
        self.ntk.pos()
    }

    fn is_constant(&self, node: Self::Node) -> bool {
        self.ntk.is_constant(node)
    }

    fn is_pi(&self, node: Self::Node) -> bool {
        self.ntk.is_pi(node)
    }

    fn is_and(&self, node: Self::Node) -> bool {
        self.ntk.is_and(node)
    }

    fn is_dead(&self, node: Self::Node) -> bool {
        self.ntk.is_dead(node)
    }

    fn fanins(&self, node: Self::Node) -> Fanins<Self::Signal> {
        self.ntk.fanins(node)
    }

    fn fanin_size(&self, node: Self::Node) -> usize {
        self.ntk.fanin_size(node)
    }

    fn get_node(&self, signal: Self::Signal) -> Self::Node {
        self.ntk.get_node(signal)
    }

    fn is_complemented(&self, signal: Self::Signal) -> bool {
        self.ntk.is_complemented(signal)
    }

    fn make_signal(&self, node: Self::Node) -> Self::Signal {
        self.ntk.make_signal(node)
    }

    fn is_or(&self, node: Self::Node) -> bool {
        self.ntk.is_or(node)
    }

    fn create_not(&self, a: Self::Signal) -> Self::Signal {
        self.ntk.create_not(a)
    }

    fn create_and(&mut self, a: Self::Signal, b: Self::Signal) -> Self::Signal {
        let before = self.ntk.size();
        let signal = self.ntk.create_and(a, b);
        let after = self.ntk.size();
        if after > before {
            self.levels.resize(after, 0);
            self.critical.resize(after, false);
            let node = self.ntk.get_node(signal);
            let level = self
                .ntk
                .fanins(node)
                .iter()
                .map(|&f| self.level_of_index(self.ntk.node_to_index(self.ntk.get_node(f))) + 1)
                .max()
                .unwrap_or(0);
            self.levels[self.ntk.node_to_index(node)] = level;
        }
        signal
    }

    fn substitute_node(&mut self, old: Self::Node, new: Self::Signal) {
        self.ntk.substitute_node(old, new)
    }
}

impl<N: Network> DepthNetwork for DepthView<'_, N> {
    fn level(&self, node: Self::Node) -> u32 {
        self.level_of_index(self.ntk.node_to_index(node))
    }

    fn depth(&self) -> u32 {
        self.depth
    }

    fn is_on_critical_path(&self, node: Self::Node) -> bool {
        self.critical.get(self.ntk.node_to_index(node)).copied().unwrap_or(false)
    }

    fn update_levels(&mut self) {
        self.compute_levels();
        self.compute_critical_path();
    }
}
