//! Threshold arithmetic shared by every resolver
//!
//! Percentages are whole numbers rounded half-up. All resolvers go through
//! [`percent_of`] so that figures reported for different decision types
//! agree. Intermediate products are widened to `u128`; no input can
//! overflow or divide by zero.

/// `round(100 * count / population)`, half-up; `0` for an empty population
///
/// `count > population` is tolerated and yields a percentage above 100.
pub fn percent_of(count: u64, population: u64) -> u64 {
    if population == 0 {
        return 0;
    }
    let count = u128::from(count);
    let population = u128::from(population);
    let rounded = (200 * count + population) / (2 * population);
    u64::try_from(rounded).unwrap_or(u64::MAX)
}

/// Whether `count` reaches `threshold_pct` of `population`
///
/// Always false while the population is below `min_votes`, so a handful of
/// early votes in a near-empty population cannot carry a decision.
pub fn meets_threshold(count: u64, population: u64, threshold_pct: u32, min_votes: u64) -> bool {
    if population < min_votes {
        return false;
    }
    percent_of(count, population) >= u64::from(threshold_pct)
}

/// Additional votes needed to reach `required_pct` of `population`
///
/// `max(0, ceil(population * required_pct / 100) - current)`.
pub fn votes_needed_for_threshold(current: u64, population: u64, required_pct: u32) -> u64 {
    let required = (u128::from(population) * u128::from(required_pct) + 99) / 100;
    let required = u64::try_from(required).unwrap_or(u64::MAX);
    required.saturating_sub(current)
}
