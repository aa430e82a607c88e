//! Per-decision-type configuration
//!
//! Thresholds are whole percentages of the eligible population. Configs are
//! owned by platform configuration and are read-only to the resolvers, which
//! only accept them after `validate()` has passed.

use crate::{DecisionError, DecisionResult};
use serde::{Deserialize, Serialize};

/// The kinds of threshold-governed decisions the platform runs
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionKind {
    /// Admin-proposed change to a community setting
    CommunitySetting,
    /// Member vote on a privacy flag
    PrivacyVote,
    /// Privacy vote attached to an impeachment
    ImpeachmentPrivacy,
}

impl DecisionKind {
    pub const ALL: [DecisionKind; 3] = [
        DecisionKind::CommunitySetting,
        DecisionKind::PrivacyVote,
        DecisionKind::ImpeachmentPrivacy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionKind::CommunitySetting => "community_setting",
            DecisionKind::PrivacyVote => "privacy_vote",
            DecisionKind::ImpeachmentPrivacy => "impeachment_privacy",
        }
    }
}

impl std::fmt::Display for DecisionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn check_percentage(field: &'static str, value: u32) -> DecisionResult<()> {
    if value > 100 {
        return Err(DecisionError::InvalidThreshold { field, value });
    }
    Ok(())
}

/// Thresholds for one decision type
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    /// Percentage of the population that must approve an admin proposal
    pub approval_threshold: u32,
    /// Percentage of the population that must disapprove an admin proposal
    pub disapproval_threshold: u32,
    /// Percentage of the population a member recommendation needs to override
    pub recommendation_threshold: u32,
    /// Population floor below which no threshold can be met
    pub min_votes_required: u64,
    /// Lifetime of a proposal in days
    pub expiry_days: u32,
}

impl ThresholdConfig {
    /// Uniform thresholds with the given percentage on every side
    pub fn uniform(threshold: u32, min_votes_required: u64, expiry_days: u32) -> Self {
        Self {
            approval_threshold: threshold,
            disapproval_threshold: threshold,
            recommendation_threshold: threshold,
            min_votes_required,
            expiry_days,
        }
    }

    /// Community setting governance: 60% on every side
    pub fn community_setting() -> Self {
        Self::uniform(60, 10, 7)
    }

    /// Privacy votes: 70% super-majority
    pub fn privacy_vote() -> Self {
        Self::uniform(70, 10, 7)
    }

    pub fn with_min_votes(mut self, min_votes_required: u64) -> Self {
        self.min_votes_required = min_votes_required;
        self
    }

    pub fn with_expiry_days(mut self, expiry_days: u32) -> Self {
        self.expiry_days = expiry_days;
        self
    }

    pub fn validate(&self) -> DecisionResult<()> {
        check_percentage("approval_threshold", self.approval_threshold)?;
        check_percentage("disapproval_threshold", self.disapproval_threshold)?;
        check_percentage("recommendation_threshold", self.recommendation_threshold)?;
        if self.expiry_days == 0 {
            return Err(DecisionError::InvalidExpiry(self.expiry_days));
        }
        Ok(())
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self::community_setting()
    }
}

/// Bounds for advancing candidates out of a primary
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvancementConfig {
    /// Vote percentage at which a candidate advances regardless of rank
    pub auto_qualify_threshold: u32,
    /// Fewest candidates that advance when enough candidates are running
    pub minimum_advancing: usize,
    /// Hard cap on advancing candidates
    pub maximum_advancing: usize,
}

impl AdvancementConfig {
    pub fn new(auto_qualify_threshold: u32, minimum_advancing: usize, maximum_advancing: usize) -> Self {
        Self {
            auto_qualify_threshold,
            minimum_advancing,
            maximum_advancing,
        }
    }

    pub fn validate(&self) -> DecisionResult<()> {
        check_percentage("auto_qualify_threshold", self.auto_qualify_threshold)?;
        if self.minimum_advancing == 0 {
            return Err(DecisionError::InvalidMinimumAdvancing);
        }
        if self.maximum_advancing < self.minimum_advancing {
            return Err(DecisionError::InvalidAdvancementBounds {
                minimum: self.minimum_advancing,
                maximum: self.maximum_advancing,
            });
        }
        Ok(())
    }
}

impl Default for AdvancementConfig {
    fn default() -> Self {
        Self::new(25, 2, 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(ThresholdConfig::community_setting().validate().is_ok());
        assert!(ThresholdConfig::privacy_vote().validate().is_ok());
        assert!(AdvancementConfig::default().validate().is_ok());
    }

    #[test]
    fn threshold_above_100_rejected() {
        let mut config = ThresholdConfig::community_setting();
        config.recommendation_threshold = 101;
        assert_eq!(
            config.validate(),
            Err(DecisionError::InvalidThreshold {
                field: "recommendation_threshold",
                value: 101,
            })
        );
    }

    #[test]
    fn zero_expiry_rejected() {
        let config = ThresholdConfig::community_setting().with_expiry_days(0);
        assert_eq!(config.validate(), Err(DecisionError::InvalidExpiry(0)));
    }

    #[test]
    fn inverted_advancement_bounds_rejected() {
        let config = AdvancementConfig::new(25, 5, 3);
        assert_eq!(
            config.validate(),
            Err(DecisionError::InvalidAdvancementBounds {
                minimum: 5,
                maximum: 3,
            })
        );
    }

    #[test]
    fn zero_minimum_rejected() {
        let config = AdvancementConfig::new(25, 0, 3);
        assert_eq!(config.validate(), Err(DecisionError::InvalidMinimumAdvancing));
    }

    #[test]
    fn decision_kind_serializes_snake_case() {
        let json = serde_json::to_string(&DecisionKind::PrivacyVote).unwrap();
        assert_eq!(json, "\"privacy_vote\"");
    }
}
