//! Bid acceptance rules.
//!
//! A bid may replace an auction's current bid only when it is strictly
//! greater. There is no upper bound and no minimum increment beyond one
//! rupee.

/// An amount that can be weighed against a current bid.
pub trait ProposedAmount: Copy {
    /// Whether this amount is strictly greater than `current_bid`.
    fn exceeds(self, current_bid: u64) -> bool;
}

impl ProposedAmount for u64 {
    fn exceeds(self, current_bid: u64) -> bool {
        self > current_bid
    }
}

impl ProposedAmount for f64 {
    /// Exact comparison; `current_bid` is never rounded through `f64`.
    fn exceeds(self, current_bid: u64) -> bool {
        if !self.is_finite() || self < 0.0 {
            return false;
        }

        let whole = self.trunc();
        // 2^64 is exactly representable; anything at or above it beats every u64.
        if whole >= u64::MAX as f64 {
            return true;
        }

        let whole = whole as u64;
        whole > current_bid || (whole == current_bid && self.fract() > 0.0)
    }
}

/// Decide whether `proposed` may replace `current_bid`.
pub fn is_acceptable<A: ProposedAmount>(current_bid: u64, proposed: A) -> bool {
    proposed.exceeds(current_bid)
}

/// Smallest whole-rupee bid that would be accepted.
pub fn minimum_bid(current_bid: u64) -> u64 {
    current_bid.saturating_add(1)
}
