//! Vote tallies over closed option sets
//!
//! A tally maps each option of a fixed set to a count. `total_votes` is
//! derived from the counts by default but may be supplied independently by
//! the collaborator layer (for instance when it tracks ballots separately);
//! abstention is implicit in the gap between `total_votes` and population.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A closed, ordered set of mutually exclusive options
///
/// `options()` is the declared enumeration order; it breaks ties wherever
/// two options hold equal counts.
pub trait VoteOption: Copy + Eq + Hash + Debug + 'static {
    fn options() -> &'static [Self];

    /// Position in the declared order
    fn ordinal(&self) -> usize {
        Self::options()
            .iter()
            .position(|o| o == self)
            .unwrap_or(usize::MAX)
    }
}

/// Audience levels a post or profile section can be restricted to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    CommunityOnly,
    FriendsOnly,
    OnlyMe,
}

impl VoteOption for Visibility {
    fn options() -> &'static [Self] {
        &[
            Visibility::Public,
            Visibility::CommunityOnly,
            Visibility::FriendsOnly,
            Visibility::OnlyMe,
        ]
    }
}

/// The two sides of a privacy vote
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrivacyChoice {
    Visible,
    Hidden,
}

impl VoteOption for PrivacyChoice {
    fn options() -> &'static [Self] {
        &[PrivacyChoice::Visible, PrivacyChoice::Hidden]
    }
}

/// Per-option vote counts plus the number of votes cast
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "O: Serialize",
    deserialize = "O: Deserialize<'de>"
))]
pub struct VoteTally<O: VoteOption> {
    counts: HashMap<O, u64>,
    total_votes: u64,
}

impl<O: VoteOption> VoteTally<O> {
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            total_votes: 0,
        }
    }

    /// Build a tally whose total is the sum of the given counts
    pub fn from_counts(counts: impl IntoIterator<Item = (O, u64)>) -> Self {
        let mut tally = Self::new();
        for (option, votes) in counts {
            tally.record(option, votes);
        }
        tally
    }

    /// Add votes for an option, keeping the total in step
    pub fn record(&mut self, option: O, votes: u64) {
        let entry = self.counts.entry(option).or_insert(0);
        *entry = entry.saturating_add(votes);
        self.total_votes = self.total_votes.saturating_add(votes);
    }

    pub fn with_votes(mut self, option: O, votes: u64) -> Self {
        self.record(option, votes);
        self
    }

    /// Override the derived total with an independently tracked one
    pub fn with_total_votes(mut self, total_votes: u64) -> Self {
        self.total_votes = total_votes;
        self
    }

    pub fn votes_for(&self, option: O) -> u64 {
        self.counts.get(&option).copied().unwrap_or(0)
    }

    pub fn total_votes(&self) -> u64 {
        self.total_votes
    }

    /// Sum of the per-option counts, regardless of the tracked total
    pub fn counted_votes(&self) -> u64 {
        self.counts.values().fold(0u64, |acc, v| acc.saturating_add(*v))
    }

    /// Counts in declared option order, zero-filled
    pub fn in_declared_order(&self) -> Vec<(O, u64)> {
        O::options().iter().map(|o| (*o, self.votes_for(*o))).collect()
    }
}

impl<O: VoteOption> Default for VoteTally<O> {
    fn default() -> Self {
        Self::new()
    }
}
