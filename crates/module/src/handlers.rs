//! Call handlers for the auction module.
//!
//! These functions apply each call to the store and record the outcome.

use auction_types::{Auction, AuctionId};
use chrono::{DateTime, Utc};
use tracing::{error, info, warn};

use crate::call::AuctionCall;
use crate::error::AuctionError;
use crate::input::AuctionDraft;
use crate::state::AuctionStore;

/// Context provided by the caller for each call.
#[derive(Clone, Debug)]
pub struct CallContext {
    /// Current timestamp
    pub timestamp: DateTime<Utc>,
}

impl CallContext {
    pub fn now() -> Self {
        Self {
            timestamp: Utc::now(),
        }
    }
}

/// Result type for handlers.
pub type HandlerResult<T> = Result<T, AuctionError>;

/// Handle CreateAuction call.
pub fn handle_create_auction(
    store: &mut AuctionStore,
    ctx: &CallContext,
    draft: &AuctionDraft,
) -> HandlerResult<Auction> {
    match store.create_at(draft, ctx.timestamp) {
        Ok(auction) => {
            info!(
                auction_id = auction.id,
                starting_bid = auction.current_bid,
                "auction created"
            );
            Ok(auction)
        }
        Err(err) => {
            warn!(%err, "auction draft rejected");
            Err(err)
        }
    }
}

/// Handle PlaceBid call.
pub fn handle_place_bid(
    store: &mut AuctionStore,
    _ctx: &CallContext,
    auction_id: AuctionId,
    amount: u64,
) -> HandlerResult<Auction> {
    match store.accept_bid(auction_id, amount) {
        Ok(auction) => {
            info!(auction_id, current_bid = auction.current_bid, "bid accepted");
            Ok(auction)
        }
        Err(err @ AuctionError::AuctionNotFound(_)) => {
            error!(auction_id, "bid placed on unknown auction");
            Err(err)
        }
        Err(err) => {
            warn!(auction_id, amount, %err, "bid rejected");
            Err(err)
        }
    }
}

/// Dispatch a call to its handler.
pub fn handle_call(
    store: &mut AuctionStore,
    ctx: &CallContext,
    call: AuctionCall,
) -> HandlerResult<Auction> {
    match call {
        AuctionCall::CreateAuction { draft } => handle_create_auction(store, ctx, &draft),
        AuctionCall::PlaceBid { auction_id, amount } => {
            handle_place_bid(store, ctx, auction_id, amount)
        }
    }
}
