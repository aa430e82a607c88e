//! Two-sided super-majority resolution
//!
//! Each side is measured against the whole eligible population, not against
//! votes cast, so low turnout cannot let a minority of ballots flip a
//! community-wide default. The sides are checked independently; they need
//! not sum to 100 since abstentions exist.

use crate::threshold_math::{meets_threshold, percent_of, votes_needed_for_threshold};
use decision_types::{BinaryResolution, DecisionError, DecisionResult, ThresholdConfig};
use tracing::{debug, info};

/// Resolves a visible/hidden style vote against a single threshold
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryThresholdResolver {
    required_percentage: u32,
    min_votes_required: u64,
}

impl BinaryThresholdResolver {
    pub fn new(required_percentage: u32, min_votes_required: u64) -> DecisionResult<Self> {
        if required_percentage > 100 {
            return Err(DecisionError::InvalidThreshold {
                field: "required_percentage",
                value: required_percentage,
            });
        }
        Ok(Self {
            required_percentage,
            min_votes_required,
        })
    }

    /// Use a decision type's approval threshold as the required percentage
    pub fn from_config(config: &ThresholdConfig) -> DecisionResult<Self> {
        config.validate()?;
        Ok(Self {
            required_percentage: config.approval_threshold,
            min_votes_required: config.min_votes_required,
        })
    }

    pub fn required_percentage(&self) -> u32 {
        self.required_percentage
    }

    pub fn min_votes_required(&self) -> u64 {
        self.min_votes_required
    }

    /// Resolve side A against side B
    ///
    /// Below the population floor nobody wins. Otherwise A is checked first,
    /// then B; if both reach the threshold A wins.
    pub fn resolve<T: Copy>(
        &self,
        (option_a, for_a): (T, u64),
        (option_b, for_b): (T, u64),
        total_valid_members: u64,
    ) -> BinaryResolution<T> {
        let percentage_a = percent_of(for_a, total_valid_members);
        let percentage_b = percent_of(for_b, total_valid_members);

        let a_passes = meets_threshold(
            for_a,
            total_valid_members,
            self.required_percentage,
            self.min_votes_required,
        );
        let b_passes = meets_threshold(
            for_b,
            total_valid_members,
            self.required_percentage,
            self.min_votes_required,
        );

        let winner = if a_passes {
            Some(option_a)
        } else if b_passes {
            Some(option_b)
        } else {
            None
        };

        if a_passes && b_passes {
            debug!(for_a, for_b, total_valid_members, "Both sides met threshold, side A wins");
        }

        info!(
            percentage_a,
            percentage_b,
            required = self.required_percentage,
            population = total_valid_members,
            threshold_met = winner.is_some(),
            "Binary vote resolved"
        );

        BinaryResolution {
            option_a,
            option_b,
            percentage_a,
            percentage_b,
            is_threshold_met: winner.is_some(),
            winner,
            votes_needed_a: self.votes_needed_for_threshold(for_a, total_valid_members),
            votes_needed_b: self.votes_needed_for_threshold(for_b, total_valid_members),
        }
    }

    /// Votes still needed for one side to reach the required percentage
    pub fn votes_needed_for_threshold(&self, current: u64, population: u64) -> u64 {
        votes_needed_for_threshold(current, population, self.required_percentage)
    }
}
