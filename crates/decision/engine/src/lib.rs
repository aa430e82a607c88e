//! Collective Decision Resolution Engine
//!
//! Turns already-tallied votes into governance outcomes: community setting
//! proposals, privacy votes, and primary-election advancement. Every
//! resolver is a pure, synchronous function of the snapshot it is given;
//! the engine collects no votes, reads no clock, and persists nothing.
//!
//! # Architecture
//!
//! - [`threshold_math`] — percentage, threshold and votes-needed arithmetic
//!   shared by every resolver
//! - [`MultiOptionVoteResolver`] — plurality/majority over a closed option set
//! - [`BinaryThresholdResolver`] — two-sided super-majority against population
//! - [`ProposalResolver`] — admin proposal vs member recommendations with expiry
//! - [`CandidateAdvancementResolver`] — auto-qualify plus min/max bounds
//! - [`DecisionEngine`] — validates [`EngineConfig`] once and hands out resolvers
//!
//! # Key Invariants
//!
//! 1. A zero population is 0%, never a division fault
//! 2. Expiry is checked first and is absolute
//! 3. A qualifying member recommendation outranks the admin's own proposal
//! 4. Advancement never exceeds the configured maximum
//! 5. Only configuration can fail, and it fails at construction
//!
//! # Example
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use decision_engine::{DecisionEngine, EngineConfig};
//! use decision_types::{DecisionKind, Proposal, ProposalStatus, SettingKey};
//!
//! let engine = DecisionEngine::new(EngineConfig::default()).unwrap();
//! let resolver = engine.proposal_resolver(DecisionKind::CommunitySetting).unwrap();
//!
//! let now = Utc::now();
//! let proposal = Proposal::new(
//!     SettingKey::new("allow_ads"),
//!     false,
//!     true,
//!     250,
//!     now - Duration::hours(1),
//!     resolver.config(),
//! )
//! .with_votes(160, 30);
//!
//! let resolution = resolver.resolve(&proposal, &[], now);
//! assert_eq!(resolution.status, ProposalStatus::Active);
//! assert!(resolution.effective_value);
//! ```

#![deny(unsafe_code)]

pub mod binary_threshold;
pub mod candidate_advancement;
pub mod engine;
pub mod engine_config;
pub mod multi_option;
pub mod proposal_resolver;
pub mod threshold_math;

// Re-export main types for convenience
pub use binary_threshold::BinaryThresholdResolver;
pub use candidate_advancement::CandidateAdvancementResolver;
pub use engine::DecisionEngine;
pub use engine_config::EngineConfig;
pub use multi_option::MultiOptionVoteResolver;
pub use proposal_resolver::ProposalResolver;
pub use threshold_math::{meets_threshold, percent_of, votes_needed_for_threshold};
