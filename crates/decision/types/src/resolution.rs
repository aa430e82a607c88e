//! Resolution records
//!
//! Every resolver returns one of these. They are complete and
//! self-consistent for any input and are handed back to the collaborator
//! layer for persistence, notification and display.

use crate::{AdvancementReason, Candidate, CandidateId, ProposalId, ProposalStatus, RecommendationId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One option's place in a multi-option ranking
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionStanding<O> {
    pub option: O,
    pub votes: u64,
    /// Share of votes cast
    pub percentage: u64,
}

/// Winner of a plurality/majority vote over a closed option set
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiOptionResolution<O> {
    pub winner: O,
    pub winner_votes: u64,
    /// Winner's share of votes cast (not of population)
    pub percentage: u64,
    pub is_majority: bool,
    pub is_plurality: bool,
    pub total_votes: u64,
    /// Votes cast as a share of population
    pub turnout_percentage: u64,
    /// All options, best first
    pub standings: Vec<OptionStanding<O>>,
}

/// Outcome of a two-sided super-majority vote
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryResolution<T> {
    pub option_a: T,
    pub option_b: T,
    /// Side A's share of population
    pub percentage_a: u64,
    /// Side B's share of population
    pub percentage_b: u64,
    pub is_threshold_met: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<T>,
    pub votes_needed_a: u64,
    pub votes_needed_b: u64,
}

/// What decided a proposal's effective value
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "source", content = "recommendation_id")]
pub enum DecisionSource {
    /// The proposal expired before anything else could apply
    Expiry,
    /// A member recommendation met its threshold
    MemberRecommendation(RecommendationId),
    /// Members approved the admin proposal
    AdminApproval,
    /// Members rejected the admin proposal
    MemberDisapproval,
    /// Nothing has met a threshold yet
    Undecided,
}

/// How one recommendation stands against its threshold
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationStanding {
    pub id: RecommendationId,
    pub support_count: u64,
    pub support_percentage: u64,
    pub qualifies: bool,
    pub votes_needed: u64,
}

/// Votes still needed for each outcome, for progress displays
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalProgress {
    pub approval_votes_needed: u64,
    pub disapproval_votes_needed: u64,
    pub recommendation_votes_needed: BTreeMap<RecommendationId, u64>,
}

/// Resolved state of an admin proposal
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProposalResolution<V> {
    pub proposal_id: ProposalId,
    pub status: ProposalStatus,
    /// Value the setting takes given this resolution
    pub effective_value: V,
    pub source: DecisionSource,
    pub approval_percentage: u64,
    pub disapproval_percentage: u64,
    pub recommendations: Vec<RecommendationStanding>,
    pub progress: ProposalProgress,
}

impl<V> ProposalResolution<V> {
    pub fn is_decided(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Which candidates move on to the general round, and why
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdvancementOutcome {
    /// All candidates in rank order with resolver flags written
    pub candidates: Vec<Candidate>,
    /// Advancing candidates in rank order
    pub advancing: Vec<CandidateId>,
    pub auto_qualified_count: usize,
    pub top_votes_count: usize,
    pub reasons: BTreeMap<CandidateId, AdvancementReason>,
}

impl AdvancementOutcome {
    pub fn advancing_count(&self) -> usize {
        self.advancing.len()
    }

    pub fn reason_for(&self, id: &CandidateId) -> Option<AdvancementReason> {
        self.reasons.get(id).copied()
    }
}
