//! Election candidates
//!
//! Everything on a candidate is caller input except `advanced_to_main` and
//! `auto_qualified`, which the advancement resolver writes.

use crate::CandidateId;
use serde::{Deserialize, Serialize};

/// Why a candidate did or did not move on to the general round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvancementReason {
    /// Crossed the auto-qualify percentage and fit under the cap
    AutoQualified,
    /// Backfilled by vote rank to reach the minimum
    TopVotes,
    NotAdvancing,
}

impl AdvancementReason {
    pub fn advances(&self) -> bool {
        !matches!(self, AdvancementReason::NotAdvancing)
    }
}

/// A candidate in a primary race
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub votes: u64,
    /// Share of ballots cast in the race, precomputed by the caller
    pub percentage: f64,
    #[serde(default)]
    pub advanced_to_main: bool,
    #[serde(default)]
    pub auto_qualified: bool,
}

impl Candidate {
    pub fn new(id: CandidateId, votes: u64, percentage: f64) -> Self {
        Self {
            id,
            votes,
            percentage,
            advanced_to_main: false,
            auto_qualified: false,
        }
    }
}
