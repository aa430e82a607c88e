//! Platform decision configuration
//!
//! Thresholds per decision type plus primary advancement bounds, read from a
//! TOML file:
//!
//! ```toml
//! [thresholds.community_setting]
//! approval_threshold = 60
//! disapproval_threshold = 60
//! recommendation_threshold = 60
//! min_votes_required = 10
//! expiry_days = 7
//!
//! [advancement]
//! auto_qualify_threshold = 25
//! minimum_advancing = 2
//! maximum_advancing = 4
//! ```
//!
//! Kinds missing from the file are not filled in; asking for one later
//! yields [`DecisionError::MissingDecisionKind`].

use decision_types::{AdvancementConfig, DecisionError, DecisionKind, DecisionResult, ThresholdConfig};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

/// All decision configuration the engine needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub thresholds: BTreeMap<DecisionKind, ThresholdConfig>,
    #[serde(default)]
    pub advancement: AdvancementConfig,
}

impl EngineConfig {
    /// Load configuration from a TOML file
    ///
    /// A missing file yields the built-in defaults. A present file must
    /// parse and validate.
    pub fn load(path: impl AsRef<Path>) -> DecisionResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "No decision config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| DecisionError::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml_str(&contents)?;

        info!(
            path = %path.display(),
            kinds = config.thresholds.len(),
            "Decision config loaded"
        );
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(contents: &str) -> DecisionResult<Self> {
        let config: EngineConfig =
            toml::from_str(contents).map_err(|e| DecisionError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> DecisionResult<String> {
        toml::to_string_pretty(self).map_err(|e| DecisionError::Config(e.to_string()))
    }

    pub fn validate(&self) -> DecisionResult<()> {
        for config in self.thresholds.values() {
            config.validate()?;
        }
        self.advancement.validate()
    }

    pub fn thresholds_for(&self, kind: DecisionKind) -> DecisionResult<&ThresholdConfig> {
        self.thresholds
            .get(&kind)
            .ok_or(DecisionError::MissingDecisionKind(kind))
    }

    pub fn with_thresholds(mut self, kind: DecisionKind, config: ThresholdConfig) -> Self {
        self.thresholds.insert(kind, config);
        self
    }

    pub fn with_advancement(mut self, advancement: AdvancementConfig) -> Self {
        self.advancement = advancement;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        let thresholds = BTreeMap::from([
            (DecisionKind::CommunitySetting, ThresholdConfig::community_setting()),
            (DecisionKind::PrivacyVote, ThresholdConfig::privacy_vote()),
            (DecisionKind::ImpeachmentPrivacy, ThresholdConfig::privacy_vote()),
        ]);
        Self {
            thresholds,
            advancement: AdvancementConfig::default(),
        }
    }
}
