//! Proposals and member recommendations
//!
//! A proposal is an admin-initiated change to a community setting. Members
//! approve or disapprove it, and may counter with recommendations of their
//! own. Both are value snapshots: the engine recomputes a proposal's status
//! on every read and never mutates the snapshot it is handed.

use crate::{ProposalId, RecommendationId, SettingKey, ThresholdConfig};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Status of an admin proposal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProposalStatus {
    /// Awaiting enough approvals or disapprovals
    #[default]
    PendingApproval,
    /// Approved; the proposed value is in effect
    Active,
    /// Disapproved; the current value stays
    Disapproved,
    /// A member recommendation overrode the proposal
    MemberOverride,
    /// The proposal ran out of time
    Expired,
}

impl ProposalStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ProposalStatus::PendingApproval)
    }
}

impl std::fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ProposalStatus::PendingApproval => "pending_approval",
            ProposalStatus::Active => "active",
            ProposalStatus::Disapproved => "disapproved",
            ProposalStatus::MemberOverride => "member_override",
            ProposalStatus::Expired => "expired",
        };
        f.write_str(s)
    }
}

/// An admin-initiated change request for one setting
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Proposal<V> {
    pub id: ProposalId,
    pub setting: SettingKey,
    /// Value in effect before the proposal
    pub current_value: V,
    /// Value the admin wants
    pub proposed_value: V,
    pub approval_count: u64,
    pub disapproval_count: u64,
    /// Eligible members at snapshot time
    pub total_valid_members: u64,
    pub proposed_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    /// Last status the collaborator persisted; informational only
    #[serde(default)]
    pub status: ProposalStatus,
}

impl<V> Proposal<V> {
    /// Create a proposal whose expiry is `proposed_at + expiry_days`
    pub fn new(
        setting: SettingKey,
        current_value: V,
        proposed_value: V,
        total_valid_members: u64,
        proposed_at: DateTime<Utc>,
        config: &ThresholdConfig,
    ) -> Self {
        Self {
            id: ProposalId::generate(),
            setting,
            current_value,
            proposed_value,
            approval_count: 0,
            disapproval_count: 0,
            total_valid_members,
            proposed_at,
            expires_at: proposed_at + Duration::days(i64::from(config.expiry_days)),
            status: ProposalStatus::PendingApproval,
        }
    }

    pub fn with_id(mut self, id: ProposalId) -> Self {
        self.id = id;
        self
    }

    pub fn with_votes(mut self, approval_count: u64, disapproval_count: u64) -> Self {
        self.approval_count = approval_count;
        self.disapproval_count = disapproval_count;
        self
    }

    pub fn with_expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    /// Strictly past the expiry instant
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// A member-initiated alternative value for a setting
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation<V> {
    pub id: RecommendationId,
    pub setting: SettingKey,
    /// Proposal this recommendation answers, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proposal_id: Option<ProposalId>,
    pub recommended_value: V,
    pub support_count: u64,
    /// Eligible members at snapshot time
    pub total_valid_members: u64,
}

impl<V> Recommendation<V> {
    pub fn new(setting: SettingKey, recommended_value: V, total_valid_members: u64) -> Self {
        Self {
            id: RecommendationId::generate(),
            setting,
            proposal_id: None,
            recommended_value,
            support_count: 0,
            total_valid_members,
        }
    }

    pub fn with_id(mut self, id: RecommendationId) -> Self {
        self.id = id;
        self
    }

    pub fn for_proposal(mut self, proposal_id: ProposalId) -> Self {
        self.proposal_id = Some(proposal_id);
        self
    }

    pub fn with_support(mut self, support_count: u64) -> Self {
        self.support_count = support_count;
        self
    }

    /// Whether this recommendation competes with the given proposal
    pub fn applies_to<P>(&self, proposal: &Proposal<P>) -> bool {
        self.setting == proposal.setting
            && self
                .proposal_id
                .as_ref()
                .map_or(true, |id| *id == proposal.id)
    }
}
