//! Auction module error types.

use thiserror::Error;

use auction_types::AuctionId;

/// Errors that can occur in the auction module.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuctionError {
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Auction not found: {0}")]
    AuctionNotFound(AuctionId),

    #[error("Bid of {proposed} rejected for auction {auction_id}: minimum is {minimum}")]
    InvalidBid {
        auction_id: AuctionId,
        proposed: u64,
        minimum: u64,
    },
}

impl AuctionError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }
}
