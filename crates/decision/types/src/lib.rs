//! Collective Decision Domain Types
//!
//! This crate defines the value snapshots the decision engine resolves:
//! tallies over closed option sets, admin proposals and competing member
//! recommendations, election candidates, the per-decision-type threshold
//! configuration, and the resolution records handed back to callers.
//!
//! # Key Concepts
//!
//! - **Population**: eligible decision-makers for one vote instance. Supplied
//!   by the caller; thresholds are percentages of it.
//! - **Proposal**: an admin-originated setting change subject to member
//!   approval or disapproval, with an expiry instant.
//! - **Recommendation**: a member-originated alternative value that
//!   overrides a proposal once it gains enough support.
//! - **Auto-qualify**: a primary candidate advancing by crossing a vote
//!   percentage, independent of rank.
//!
//! # Architecture
//!
//! This is a pure types crate. All types implement `Clone`, `Debug`,
//! `Serialize`, `Deserialize`. IDs use the newtype pattern and implement
//! `Display`, `generate()`, and `new()`. Only configuration validation can
//! fail; see [`DecisionError`].

#![deny(unsafe_code)]

mod candidate;
mod config;
mod errors;
mod ids;
mod proposal;
mod resolution;
mod tally;

pub use candidate::*;
pub use config::*;
pub use errors::*;
pub use ids::*;
pub use proposal::*;
pub use resolution::*;
pub use tally::*;
