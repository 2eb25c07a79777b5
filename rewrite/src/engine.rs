//! Fixed-point rewrite driver.
//!
//! Each pass walks a snapshot of the live gates and tries the enabled rules
//! in priority order. The first rule that matches substitutes the gate, and
//! levels are recomputed before the next gate is looked at, so every
//! decision sees the critical path of the current structure. Passes repeat
//! until one changes nothing or the pass ceiling is reached.

use shoal_ir::DepthNetwork;
use tracing::{debug, trace, warn};

use crate::config::{RewriteConfig, Rule};
use crate::rules;

/// Outcome of a rewrite run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteStats {
    /// Passes executed, including the final pass that found nothing.
    pub passes: usize,
    pub associativity: usize,
    pub distributivity: usize,
    pub three_level: usize,
    /// False when the pass ceiling stopped the run.
    pub converged: bool,
    pub depth_before: u32,
    pub depth_after: u32,
}

impl RewriteStats {
    /// Substitutions made by `rule`.
    pub fn count(&self, rule: Rule) -> usize {
        match rule {
            Rule::Associativity => self.associativity,
            Rule::Distributivity => self.distributivity,
            Rule::ThreeLevelDistributivity => self.three_level,
        }
    }

    /// Total substitutions over all rules.
    pub fn substitutions(&self) -> usize {
        self.associativity + self.distributivity + self.three_level
    }

    fn record(&mut self, rule: Rule) {
        match rule {
            Rule::Associativity => self.associativity += 1,
            Rule::Distributivity => self.distributivity += 1,
            Rule::ThreeLevelDistributivity => self.three_level += 1,
        }
    }
}

/// Reduce the depth of `ntk` in place with the default configuration.
pub fn algebraic_rewrite<N: DepthNetwork>(ntk: &mut N) {
    algebraic_rewrite_with(ntk, &RewriteConfig::default());
}

/// Reduce the depth of `ntk` in place and report what happened.
#[tracing::instrument(skip_all)]
pub fn algebraic_rewrite_with<N: DepthNetwork>(ntk: &mut N, config: &RewriteConfig) -> RewriteStats {
    ntk.update_levels();
    let mut stats = RewriteStats { depth_before: ntk.depth(), ..Default::default() };

    loop {
        if stats.passes == config.max_passes {
            warn!(max_passes = config.max_passes, "pass ceiling reached before a fixed point");
            break;
        }
        stats.passes += 1;

        let gates = ntk.gates();
        trace!(pass = stats.passes, gates = gates.len(), "starting pass");

        let mut changed = false;
        for n in gates {
            if ntk.is_dead(n) {
                continue;
            }
            if let Some(rule) = config.enabled_rules().find(|&rule| rules::apply(rule, ntk, n)) {
                stats.record(rule);
                ntk.update_levels();
                changed = true;
            }
        }

        if !changed {
            stats.converged = true;
            break;
        }
    }

    stats.depth_after = ntk.depth();
    debug!(
        passes = stats.passes,
        substitutions = stats.substitutions(),
        depth.before = stats.depth_before,
        depth.after = stats.depth_after,
        converged = stats.converged,
        "algebraic rewrite finished"
    );
    stats
}
