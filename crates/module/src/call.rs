//! Call message types for the auction module.

use auction_types::AuctionId;
use serde::{Deserialize, Serialize};

use crate::input::AuctionDraft;

/// State-changing calls accepted by the auction module.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuctionCall {
    /// Create a new auction from a submitted form.
    CreateAuction { draft: AuctionDraft },

    /// Place a bid on an existing auction.
    PlaceBid { auction_id: AuctionId, amount: u64 },
}
