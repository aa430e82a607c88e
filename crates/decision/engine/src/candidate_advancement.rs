//! Primary-election advancement
//!
//! Decides which candidates in a primary move on to the general round.
//! Candidates at or above the auto-qualify percentage advance outright, up
//! to a hard cap; if too few qualify, the remaining slots up to the minimum
//! are backfilled by vote rank. Every candidate gets a reason so that
//! displays and audits can tell a 25% qualifier from a backfill.

use decision_types::{AdvancementConfig, AdvancementOutcome, AdvancementReason, Candidate, DecisionResult};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Resolves advancement for one primary race
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateAdvancementResolver {
    config: AdvancementConfig,
}

impl CandidateAdvancementResolver {
    pub fn new(config: AdvancementConfig) -> DecisionResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AdvancementConfig {
        &self.config
    }

    fn auto_qualifies(&self, candidate: &Candidate) -> bool {
        // NaN never qualifies
        candidate.percentage >= f64::from(self.config.auto_qualify_threshold)
    }

    /// Rank candidates by votes and tag each with an advancement reason
    ///
    /// Equal vote counts keep input order. Candidate ids are expected to be
    /// unique within a race; on a collision the reason map keeps the
    /// higher-ranked entry and a warning is logged.
    pub fn resolve(&self, candidates: &[Candidate]) -> AdvancementOutcome {
        let mut ranked: Vec<Candidate> = candidates.to_vec();
        ranked.sort_by(|a, b| b.votes.cmp(&a.votes));

        let qualified: Vec<usize> = ranked
            .iter()
            .enumerate()
            .filter(|(_, c)| self.auto_qualifies(c))
            .map(|(i, _)| i)
            .collect();

        let mut reasons = vec![AdvancementReason::NotAdvancing; ranked.len()];

        // ranked order means the first `maximum_advancing` qualifiers are the
        // top ones by votes
        for &i in qualified.iter().take(self.config.maximum_advancing) {
            reasons[i] = AdvancementReason::AutoQualified;
        }

        let auto_qualified_count = qualified.len().min(self.config.maximum_advancing);
        if qualified.len() > self.config.maximum_advancing {
            debug!(
                qualified = qualified.len(),
                cap = self.config.maximum_advancing,
                "More candidates auto-qualified than the cap allows"
            );
        }

        let mut top_votes_count = 0;
        if auto_qualified_count < self.config.minimum_advancing {
            let slots = self.config.minimum_advancing - auto_qualified_count;
            for reason in reasons
                .iter_mut()
                .filter(|r| **r == AdvancementReason::NotAdvancing)
                .take(slots)
            {
                *reason = AdvancementReason::TopVotes;
                top_votes_count += 1;
            }
        }

        for (candidate, reason) in ranked.iter_mut().zip(&reasons) {
            candidate.advanced_to_main = reason.advances();
            candidate.auto_qualified = *reason == AdvancementReason::AutoQualified;
        }

        let advancing = ranked
            .iter()
            .filter(|c| c.advanced_to_main)
            .map(|c| c.id.clone())
            .collect::<Vec<_>>();

        let mut reason_map = BTreeMap::new();
        for (candidate, reason) in ranked.iter().zip(reasons) {
            if reason_map.contains_key(&candidate.id) {
                warn!(
                    candidate_id = %candidate.id,
                    ?reason,
                    "Duplicate candidate id, keeping the higher-ranked reason"
                );
                continue;
            }
            reason_map.insert(candidate.id.clone(), reason);
        }

        info!(
            candidates = ranked.len(),
            advancing = advancing.len(),
            auto_qualified = auto_qualified_count,
            top_votes = top_votes_count,
            "Primary advancement resolved"
        );

        AdvancementOutcome {
            candidates: ranked,
            advancing,
            auto_qualified_count,
            top_votes_count,
            reasons: reason_map,
        }
    }
}
