//! Query handlers for the auction module.
//!
//! These functions provide read-only access to the store.

use auction_types::{Auction, AuctionId, SortCriterion};
use serde::{Deserialize, Serialize};

use crate::bid_validator::minimum_bid;
use crate::state::AuctionStore;

/// Query request types.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuctionQuery {
    /// Get auction details by ID.
    GetAuction { auction_id: AuctionId },

    /// Get all auctions in the requested order.
    ListAuctions {
        #[serde(default)]
        sort: SortCriterion,
    },

    /// Smallest bid the auction would accept.
    MinimumBid { auction_id: AuctionId },

    /// Number of auctions.
    Count,
}

/// Query response types.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuctionQueryResponse {
    /// Auction details.
    Auction(Option<Auction>),

    /// List of auctions.
    AuctionList(Vec<Auction>),

    /// Minimum acceptable bid, if the auction exists.
    MinimumBid(Option<u64>),

    /// Auction count.
    Count(usize),
}

/// Handle a query.
pub fn handle_query(store: &AuctionStore, query: AuctionQuery) -> AuctionQueryResponse {
    match query {
        AuctionQuery::GetAuction { auction_id } => {
            AuctionQueryResponse::Auction(store.get_auction(auction_id).cloned())
        }

        AuctionQuery::ListAuctions { sort } => {
            let auctions = store.sorted_view(sort).into_iter().cloned().collect();
            AuctionQueryResponse::AuctionList(auctions)
        }

        AuctionQuery::MinimumBid { auction_id } => AuctionQueryResponse::MinimumBid(
            store
                .get_auction(auction_id)
                .map(|auction| minimum_bid(auction.current_bid)),
        ),

        AuctionQuery::Count => AuctionQueryResponse::Count(store.len()),
    }
}
