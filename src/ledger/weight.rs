//! Reputation-to-weight curve.

use super::constants::MIN_REPUTATION;

/// Voting weight for a reputation.
///
/// A stepped base-4 curve: weight starts at 1 and grows by one for every
/// division by 4 that leaves the running value at 4 or more. This is not an
/// integer square root; vote tallies depend on the exact steps.
///
/// Returns 0 below [`MIN_REPUTATION`].
pub fn voting_weight(reputation: u64) -> u64 {
    if reputation < MIN_REPUTATION {
        return 0;
    }

    let mut weight = 1;
    let mut temp = reputation;
    while temp >= 4 {
        temp /= 4;
        weight += 1;
    }
    weight
}
