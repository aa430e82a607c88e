//! Plurality/majority resolution over a closed option set
//!
//! Percentages here are shares of votes cast, not of population. The
//! majority line is fixed at 50%; callers needing another bar use the
//! binary or proposal resolvers.

use crate::threshold_math::percent_of;
use decision_types::{
    DecisionError, DecisionResult, MultiOptionResolution, OptionStanding, VoteOption, VoteTally,
};
use tracing::{debug, info, warn};

/// Picks the winner of a vote over the option set `O`
#[derive(Clone, Debug)]
pub struct MultiOptionVoteResolver<O: VoteOption> {
    /// First declared option; wins when no votes are cast
    first: O,
}

impl<O: VoteOption> MultiOptionVoteResolver<O> {
    /// Fails only for an option set that declares no options
    pub fn new() -> DecisionResult<Self> {
        let first = O::options()
            .first()
            .copied()
            .ok_or(DecisionError::EmptyOptionSet(std::any::type_name::<O>()))?;
        Ok(Self { first })
    }

    /// Rank options by votes and classify the winner
    ///
    /// Ties keep declared order. With no votes cast the first declared
    /// option wins at 0% and the outcome is neither majority nor plurality.
    pub fn resolve(&self, tally: &VoteTally<O>, population: u64) -> MultiOptionResolution<O> {
        let total_votes = tally.total_votes();

        if population > 0 && total_votes > population {
            warn!(total_votes, population, "More votes cast than eligible voters");
        }
        if tally.counted_votes() > total_votes {
            warn!(
                counted = tally.counted_votes(),
                total_votes, "Option counts exceed tracked vote total"
            );
        }

        let mut ranked = tally.in_declared_order();
        // stable: equal counts stay in declared order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        let standings: Vec<OptionStanding<O>> = ranked
            .into_iter()
            .map(|(option, votes)| OptionStanding {
                option,
                votes,
                percentage: percent_of(votes, total_votes),
            })
            .collect();

        let turnout_percentage = percent_of(total_votes, population);

        let (winner, winner_votes) = match standings.first() {
            Some(top) if total_votes > 0 => (top.option, top.votes),
            _ => (self.first, 0),
        };

        let percentage = percent_of(winner_votes, total_votes);
        // classified on raw counts; the rounded percentage is for display only
        let is_majority = 2 * u128::from(winner_votes) > u128::from(total_votes);
        let is_plurality = !is_majority && winner_votes > 0;

        debug!(
            ?winner,
            winner_votes,
            total_votes,
            options = standings.len(),
            "Options ranked"
        );
        info!(
            ?winner,
            percentage,
            is_majority,
            is_plurality,
            turnout_percentage,
            "Multi-option vote resolved"
        );

        MultiOptionResolution {
            winner,
            winner_votes,
            percentage,
            is_majority,
            is_plurality,
            total_votes,
            turnout_percentage,
            standings,
        }
    }
}
