//! Bit-parallel simulation.
//!
//! Every node carries a 64-bit word, one simulation pattern per bit. Any
//! [`Network`] can be simulated; [`equivalent`] uses this to compare two
//! networks over every input assignment.

use snafu::ensure;

use crate::error::{InterfaceMismatchSnafu, Result, TooManyInputsSnafu};
use crate::network::Network;

/// Largest input count [`equivalent`] will enumerate (2^16 patterns).
pub const MAX_EXHAUSTIVE_INPUTS: usize = 16;

/// Truth-table projections of the first six variables.
const PROJECTIONS: [u64; 6] = [
    0xAAAA_AAAA_AAAA_AAAA,
    0xCCCC_CCCC_CCCC_CCCC,
    0xF0F0_F0F0_F0F0_F0F0,
    0xFF00_FF00_FF00_FF00,
    0xFFFF_0000_FFFF_0000,
    0xFFFF_FFFF_0000_0000,
];

/// Simulate 64 patterns at once.
///
/// `inputs[i]` holds the patterns of the i-th primary input. Returns one
/// word per primary output.
///
/// # Panics
///
/// Panics if `inputs.len()` differs from the number of primary inputs.
pub fn simulate_words<N: Network>(ntk: &N, inputs: &[u64]) -> Vec<u64> {
    assert_eq!(inputs.len(), ntk.pis().len(), "one input word per primary input");

    let mut values = vec![0u64; ntk.size()];
    let mut done = vec![false; ntk.size()];
    for (&pi, &word) in ntk.pis().iter().zip(inputs) {
        let index = ntk.node_to_index(pi);
        values[index] = word;
        done[index] = true;
    }

    let word_of = |values: &[u64], s: N::Signal| {
        let w = values[ntk.node_to_index(ntk.get_node(s))];
        if ntk.is_complemented(s) { !w } else { w }
    };

    for &po in ntk.pos() {
        let mut stack = vec![(ntk.get_node(po), false)];
        while let Some((node, expanded)) = stack.pop() {
            let index = ntk.node_to_index(node);
            if done[index] {
                continue;
            }
            let fanins = ntk.fanins(node);
            if fanins.is_empty() {
                // Constant node: stays zero.
                done[index] = true;
            } else if expanded {
                let word = fanins.iter().fold(!0u64, |acc, &f| acc & word_of(&values, f));
                values[index] = word;
                done[index] = true;
            } else {
                stack.push((node, true));
                stack.extend(fanins.iter().map(|&f| (ntk.get_node(f), false)));
            }
        }
    }

    ntk.pos().iter().map(|&po| word_of(&values, po)).collect()
}

/// Input words for block `block` of an exhaustive enumeration over `num_inputs` variables.
fn exhaustive_block(num_inputs: usize, block: u64) -> Vec<u64> {
    (0..num_inputs)
        .map(|i| match PROJECTIONS.get(i) {
            Some(&projection) => projection,
            None if (block >> (i - PROJECTIONS.len())) & 1 == 1 => !0,
            None => 0,
        })
        .collect()
}

/// Check that two networks compute the same outputs for every input assignment.
pub fn equivalent<A: Network, B: Network>(a: &A, b: &B) -> Result<bool> {
    ensure!(
        a.pis().len() == b.pis().len() && a.pos().len() == b.pos().len(),
        InterfaceMismatchSnafu {
            lhs_pis: a.pis().len(),
            rhs_pis: b.pis().len(),
            lhs_pos: a.pos().len(),
            rhs_pos: b.pos().len(),
        }
    );
    let num_inputs = a.pis().len();
    ensure!(num_inputs <= MAX_EXHAUSTIVE_INPUTS, TooManyInputsSnafu { count: num_inputs, max: MAX_EXHAUSTIVE_INPUTS });

    let blocks = 1u64 << num_inputs.saturating_sub(PROJECTIONS.len());
    for block in 0..blocks {
        let inputs = exhaustive_block(num_inputs, block);
        if simulate_words(a, &inputs) != simulate_words(b, &inputs) {
            tracing::debug!(block, "networks differ");
            return Ok(false);
        }
    }
    Ok(true)
}
