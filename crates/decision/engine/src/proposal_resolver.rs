//! Proposal resolution
//!
//! Resolves an admin proposal, plus any member recommendations competing
//! for the same setting, into a status and an effective value. Status is
//! recomputed from the snapshot on every call, in this order:
//!
//! 1. Past `expires_at` the proposal is `expired`, whatever the counts say.
//! 2. A recommendation meeting the recommendation threshold overrides the
//!    proposal (`member_override`), even if the proposal is also approved.
//! 3. Approval meeting its threshold makes the proposal `active`.
//! 4. Disapproval meeting its threshold makes it `disapproved`.
//! 5. Otherwise it stays `pending_approval` and the current value holds.

use crate::threshold_math::{meets_threshold, percent_of, votes_needed_for_threshold};
use chrono::{DateTime, Utc};
use decision_types::{
    DecisionResult, DecisionSource, Proposal, ProposalProgress, ProposalResolution,
    ProposalStatus, Recommendation, RecommendationStanding, ThresholdConfig,
};
use tracing::{debug, info, warn};

/// Resolves proposals under one decision type's thresholds
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProposalResolver {
    config: ThresholdConfig,
}

impl ProposalResolver {
    pub fn new(config: ThresholdConfig) -> DecisionResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ThresholdConfig {
        &self.config
    }

    /// Resolve `proposal` at instant `now`
    ///
    /// Recommendations for other settings, or linked to other proposals,
    /// are ignored.
    pub fn resolve<V: Clone>(
        &self,
        proposal: &Proposal<V>,
        recommendations: &[Recommendation<V>],
        now: DateTime<Utc>,
    ) -> ProposalResolution<V> {
        let population = proposal.total_valid_members;

        let applicable: Vec<&Recommendation<V>> = recommendations
            .iter()
            .filter(|r| {
                let applies = r.applies_to(proposal);
                if !applies {
                    warn!(
                        proposal_id = %proposal.id,
                        recommendation_id = %r.id,
                        "Recommendation does not target this proposal, ignoring"
                    );
                }
                applies
            })
            .collect();

        let standings: Vec<RecommendationStanding> = applicable
            .iter()
            .map(|r| self.recommendation_standing(r))
            .collect();

        let progress = ProposalProgress {
            approval_votes_needed: self.approval_votes_needed(proposal),
            disapproval_votes_needed: self.disapproval_votes_needed(proposal),
            recommendation_votes_needed: standings
                .iter()
                .map(|s| (s.id.clone(), s.votes_needed))
                .collect(),
        };

        let (status, effective_value, source) = if proposal.is_expired_at(now) {
            (
                ProposalStatus::Expired,
                proposal.current_value.clone(),
                DecisionSource::Expiry,
            )
        } else if let Some(winner) = Self::winning_recommendation(&applicable, &standings) {
            (
                ProposalStatus::MemberOverride,
                winner.recommended_value.clone(),
                DecisionSource::MemberRecommendation(winner.id.clone()),
            )
        } else if meets_threshold(
            proposal.approval_count,
            population,
            self.config.approval_threshold,
            self.config.min_votes_required,
        ) {
            (
                ProposalStatus::Active,
                proposal.proposed_value.clone(),
                DecisionSource::AdminApproval,
            )
        } else if meets_threshold(
            proposal.disapproval_count,
            population,
            self.config.disapproval_threshold,
            self.config.min_votes_required,
        ) {
            (
                ProposalStatus::Disapproved,
                proposal.current_value.clone(),
                DecisionSource::MemberDisapproval,
            )
        } else {
            (
                ProposalStatus::PendingApproval,
                proposal.current_value.clone(),
                DecisionSource::Undecided,
            )
        };

        let approval_percentage = percent_of(proposal.approval_count, population);
        let disapproval_percentage = percent_of(proposal.disapproval_count, population);

        if status != proposal.status {
            debug!(
                proposal_id = %proposal.id,
                from = %proposal.status,
                to = %status,
                "Proposal status differs from snapshot"
            );
        }

        info!(
            proposal_id = %proposal.id,
            setting = %proposal.setting,
            status = %status,
            approval_percentage,
            disapproval_percentage,
            recommendations = standings.len(),
            "Proposal resolved"
        );

        ProposalResolution {
            proposal_id: proposal.id.clone(),
            status,
            effective_value,
            source,
            approval_percentage,
            disapproval_percentage,
            recommendations: standings,
            progress,
        }
    }

    /// Votes still needed for the proposal to be approved
    pub fn approval_votes_needed<V>(&self, proposal: &Proposal<V>) -> u64 {
        votes_needed_for_threshold(
            proposal.approval_count,
            proposal.total_valid_members,
            self.config.approval_threshold,
        )
    }

    /// Votes still needed for the proposal to be disapproved
    pub fn disapproval_votes_needed<V>(&self, proposal: &Proposal<V>) -> u64 {
        votes_needed_for_threshold(
            proposal.disapproval_count,
            proposal.total_valid_members,
            self.config.disapproval_threshold,
        )
    }

    /// Votes still needed for a recommendation to override
    pub fn recommendation_votes_needed<V>(&self, recommendation: &Recommendation<V>) -> u64 {
        votes_needed_for_threshold(
            recommendation.support_count,
            recommendation.total_valid_members,
            self.config.recommendation_threshold,
        )
    }

    fn recommendation_standing<V>(&self, recommendation: &Recommendation<V>) -> RecommendationStanding {
        let support_percentage =
            percent_of(recommendation.support_count, recommendation.total_valid_members);
        RecommendationStanding {
            id: recommendation.id.clone(),
            support_count: recommendation.support_count,
            support_percentage,
            qualifies: meets_threshold(
                recommendation.support_count,
                recommendation.total_valid_members,
                self.config.recommendation_threshold,
                self.config.min_votes_required,
            ),
            votes_needed: self.recommendation_votes_needed(recommendation),
        }
    }

    /// Highest support count among qualifying recommendations; first wins ties
    fn winning_recommendation<'a, V>(
        applicable: &[&'a Recommendation<V>],
        standings: &[RecommendationStanding],
    ) -> Option<&'a Recommendation<V>> {
        let mut best: Option<&'a Recommendation<V>> = None;
        for (recommendation, standing) in applicable.iter().zip(standings) {
            if !standing.qualifies {
                continue;
            }
            match best {
                Some(current) if current.support_count >= recommendation.support_count => {}
                _ => best = Some(*recommendation),
            }
        }
        best
    }
}
