//! And-inverter graph networks for the shoal depth optimizer.
//!
//! This crate provides the network side of the optimizer: the capability
//! traits that rewriting algorithms are written against, and a reference
//! implementation of each.
//!
//! # Module Organization
//!
//! - [`signal`] - Node identities and complemented-edge signals
//! - [`network`] - [`Network`] and [`DepthNetwork`] capability traits
//! - [`aig`] - Structurally hashed, mutable [`Aig`]
//! - [`depth`] - [`DepthView`]: levels and critical path over any network
//! - [`simulate`] - Bit-parallel simulation and exhaustive equivalence
//! - [`aiger`] - ASCII AIGER reading and writing
//! - [`error`] - Error types and result handling

pub mod aig;
pub mod aiger;
pub mod depth;
pub mod error;
pub mod network;
pub mod signal;
pub mod simulate;


pub use aig::Aig;
pub use aiger::{read_aag, write_aag};
pub use depth::DepthView;
pub use error::{Error, Result};
pub use network::{DepthNetwork, Fanins, Network};
pub use signal::{NodeId, Signal};
pub use simulate::{equivalent, simulate_words};
