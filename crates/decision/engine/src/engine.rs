//! Decision engine entry point
//!
//! Validates the whole [`EngineConfig`] once, at startup, and hands out
//! resolvers built from it. After construction nothing can fail except
//! asking for a decision kind the configuration does not define.

use crate::{
    BinaryThresholdResolver, CandidateAdvancementResolver, EngineConfig, MultiOptionVoteResolver,
    ProposalResolver,
};
use decision_types::{DecisionError, DecisionKind, DecisionResult, VoteOption};
use std::collections::BTreeMap;
use tracing::info;

/// Holds one resolver per configured decision kind
#[derive(Clone, Debug)]
pub struct DecisionEngine {
    config: EngineConfig,
    proposals: BTreeMap<DecisionKind, ProposalResolver>,
    binaries: BTreeMap<DecisionKind, BinaryThresholdResolver>,
    advancement: CandidateAdvancementResolver,
}

impl DecisionEngine {
    pub fn new(config: EngineConfig) -> DecisionResult<Self> {
        config.validate()?;

        let mut proposals = BTreeMap::new();
        let mut binaries = BTreeMap::new();
        for (kind, thresholds) in &config.thresholds {
            proposals.insert(*kind, ProposalResolver::new(thresholds.clone())?);
            binaries.insert(*kind, BinaryThresholdResolver::from_config(thresholds)?);
        }
        let advancement = CandidateAdvancementResolver::new(config.advancement.clone())?;

        info!(
            kinds = proposals.len(),
            auto_qualify = config.advancement.auto_qualify_threshold,
            "Decision engine ready"
        );

        Ok(Self {
            config,
            proposals,
            binaries,
            advancement,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn proposal_resolver(&self, kind: DecisionKind) -> DecisionResult<&ProposalResolver> {
        self.proposals
            .get(&kind)
            .ok_or(DecisionError::MissingDecisionKind(kind))
    }

    pub fn binary_resolver(&self, kind: DecisionKind) -> DecisionResult<&BinaryThresholdResolver> {
        self.binaries
            .get(&kind)
            .ok_or(DecisionError::MissingDecisionKind(kind))
    }

    pub fn advancement_resolver(&self) -> &CandidateAdvancementResolver {
        &self.advancement
    }

    pub fn multi_option_resolver<O: VoteOption>(&self) -> DecisionResult<MultiOptionVoteResolver<O>> {
        MultiOptionVoteResolver::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use decision_types::{AdvancementConfig, ThresholdConfig, Visibility};

    #[test]
    fn default_engine_serves_every_kind() {
        let engine = DecisionEngine::new(EngineConfig::default()).unwrap();
        for kind in DecisionKind::ALL {
            assert!(engine.proposal_resolver(kind).is_ok());
            assert!(engine.binary_resolver(kind).is_ok());
        }
        assert_eq!(
            engine.binary_resolver(DecisionKind::PrivacyVote).unwrap().required_percentage(),
            70
        );
        assert!(engine.multi_option_resolver::<Visibility>().is_ok());
    }

    #[test]
    fn invalid_config_refuses_to_start() {
        let mut bad = ThresholdConfig::community_setting();
        bad.approval_threshold = 101;
        let config = EngineConfig::default().with_thresholds(DecisionKind::CommunitySetting, bad);
        assert!(DecisionEngine::new(config).is_err());

        let config = EngineConfig::default().with_advancement(AdvancementConfig::new(25, 3, 1));
        assert!(DecisionEngine::new(config).is_err());
    }

    #[test]
    fn unconfigured_kind_is_reported() {
        let config = EngineConfig {
            thresholds: BTreeMap::new(),
            advancement: AdvancementConfig::default(),
        };
        let engine = DecisionEngine::new(config).unwrap();
        assert_eq!(
            engine.proposal_resolver(DecisionKind::PrivacyVote).unwrap_err(),
            DecisionError::MissingDecisionKind(DecisionKind::PrivacyVote)
        );
    }
}
