//! Rewriting configuration.
//!
//! Provides typed configuration with a bon builder and environment variable
//! fallbacks.

use bon::bon;
use enumset::{EnumSet, EnumSetType};
use strum::{AsRefStr, Display, EnumString};

/// Pass ceiling used when none is configured.
pub const DEFAULT_MAX_PASSES: usize = 1000;

// ============================================================================
// RULES
// ============================================================================

/// Algebraic rewrite rules, in the order the driver tries them.
#[derive(Debug, Hash, EnumSetType, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Rule {
    /// `(x & y) & z` regrouped so the late signal enters last.
    Associativity,
    /// `!(s & b) & !(s & c)` folded into `!(s & (b | c))`.
    Distributivity,
    /// Distributivity reaching three levels below the gate.
    ThreeLevelDistributivity,
}

impl Rule {
    /// Every rule in priority order.
    pub const ALL: [Rule; 3] = [Rule::Associativity, Rule::Distributivity, Rule::ThreeLevelDistributivity];
}

// ============================================================================
// REWRITE CONFIGURATION
// ============================================================================

/// Configuration for [`algebraic_rewrite_with`](crate::algebraic_rewrite_with).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteConfig {
    /// Upper bound on driver passes. Hitting it is reported, not fatal.
    pub max_passes: usize,
    /// Rules the driver may apply.
    pub rules: EnumSet<Rule>,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self { max_passes: DEFAULT_MAX_PASSES, rules: EnumSet::all() }
    }
}

#[bon]
impl RewriteConfig {
    /// Create a rewrite configuration with builder pattern.
    #[builder]
    pub fn new(
        #[builder(default = DEFAULT_MAX_PASSES)] max_passes: usize,
        #[builder(default = EnumSet::all())] rules: EnumSet<Rule>,
    ) -> Self {
        Self { max_passes, rules }
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// * `SHOAL_MAX_PASSES` - Pass ceiling (default: 1000)
    /// * `SHOAL_DISABLE_RULES` - Comma-separated rule names to turn off,
    ///   e.g. `associativity,three_level_distributivity`
    pub fn from_env() -> Self {
        let max_passes = std::env::var("SHOAL_MAX_PASSES").ok();
        let disabled = std::env::var("SHOAL_DISABLE_RULES").ok();
        Self::from_vars(max_passes.as_deref(), disabled.as_deref())
    }

    pub(crate) fn from_vars(max_passes: Option<&str>, disabled: Option<&str>) -> Self {
        let max_passes =
            max_passes.and_then(|s| s.trim().parse().ok()).filter(|&n: &usize| n > 0).unwrap_or(DEFAULT_MAX_PASSES);

        let mut rules = EnumSet::all();
        for name in disabled.into_iter().flat_map(|s| s.split(',')).map(str::trim).filter(|s| !s.is_empty()) {
            match name.parse::<Rule>() {
                Ok(rule) => {
                    rules.remove(rule);
                }
                Err(_) => tracing::warn!(name, "ignoring unknown rule in SHOAL_DISABLE_RULES"),
            }
        }

        Self { max_passes, rules }
    }

    /// Enabled rules in priority order.
    pub fn enabled_rules(&self) -> impl Iterator<Item = Rule> + '_ {
        Rule::ALL.into_iter().filter(|&rule| self.rules.contains(rule))
    }
}
