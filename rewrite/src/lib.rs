//! Depth-reducing algebraic rewriting of and-inverter graphs.
//!
//! The driver walks the gates of any [`DepthNetwork`](shoal_ir::DepthNetwork)
//! and applies associativity and distributivity identities to gates on the
//! critical path, until a fixed point is reached. The network function is
//! preserved exactly; only structure and depth change.
//!
//! ```ignore
//! use shoal_ir::{DepthView, read_aag};
//!
//! let mut aig = read_aag(&source)?;
//! let mut view = DepthView::new(&mut aig);
//! shoal_rewrite::algebraic_rewrite(&mut view);
//! ```
//!
//! # Module Organization
//!
//! - [`config`] - [`RewriteConfig`] and the [`Rule`] set
//! - [`engine`] - Fixed-point driver and [`RewriteStats`]
//! - [`rules`] - The individual rewrite rules
//! - [`neighborhood`] - Fixed-capacity critical/non-critical classifier

pub mod config;
pub mod engine;
pub mod neighborhood;
pub mod rules;

#[cfg(test)]
mod test;

pub use config::{RewriteConfig, Rule};
pub use engine::{RewriteStats, algebraic_rewrite, algebraic_rewrite_with};
