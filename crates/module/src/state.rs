//! In-memory state for the auction catalog.

use auction_types::{Auction, AuctionId, NewAuction, SortCriterion};
use chrono::{DateTime, Utc};

use crate::bid_validator::{is_acceptable, minimum_bid};
use crate::error::AuctionError;
use crate::input::AuctionDraft;

/// The auction collection.
///
/// Auctions are kept in creation order. The collection is only reachable
/// through the operations below; callers get copies or shared references.
#[derive(Debug, Default, Clone)]
pub struct AuctionStore {
    auctions: Vec<Auction>,
}

impl AuctionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Id for the next auction: one past the current count.
    ///
    /// Only unique while auctions are never removed.
    fn allocate_auction_id(&self) -> AuctionId {
        self.auctions.len() as AuctionId + 1
    }

    /// Validate a draft and append it, stamped with the current time.
    pub fn create(&mut self, draft: &AuctionDraft) -> Result<Auction, AuctionError> {
        self.create_at(draft, Utc::now())
    }

    /// Validate a draft and append it with an explicit creation time.
    pub fn create_at(
        &mut self,
        draft: &AuctionDraft,
        created_at: DateTime<Utc>,
    ) -> Result<Auction, AuctionError> {
        let listing = draft.validate()?;
        Ok(self.insert(listing, created_at))
    }

    /// Append an already validated listing.
    pub fn insert(&mut self, listing: NewAuction, created_at: DateTime<Utc>) -> Auction {
        let auction = listing.into_auction(self.allocate_auction_id(), created_at);
        self.auctions.push(auction.clone());
        auction
    }

    /// Replace an auction's current bid if `amount` beats it.
    pub fn accept_bid(
        &mut self,
        auction_id: AuctionId,
        amount: u64,
    ) -> Result<Auction, AuctionError> {
        let auction = self
            .get_auction_mut(auction_id)
            .ok_or(AuctionError::AuctionNotFound(auction_id))?;

        if !is_acceptable(auction.current_bid, amount) {
            return Err(AuctionError::InvalidBid {
                auction_id,
                proposed: amount,
                minimum: minimum_bid(auction.current_bid),
            });
        }

        auction.current_bid = amount;
        Ok(auction.clone())
    }

    /// Ordered view of the collection. The stored order is untouched.
    ///
    /// The sort is stable, so ties keep creation order.
    pub fn sorted_view(&self, criterion: SortCriterion) -> Vec<&Auction> {
        let mut view: Vec<&Auction> = self.auctions.iter().collect();
        if criterion != SortCriterion::Unordered {
            view.sort_by(|a, b| criterion.compare(a, b));
        }
        view
    }

    /// Get auction by ID.
    pub fn get_auction(&self, auction_id: AuctionId) -> Option<&Auction> {
        self.auctions.iter().find(|a| a.id == auction_id)
    }

    fn get_auction_mut(&mut self, auction_id: AuctionId) -> Option<&mut Auction> {
        self.auctions.iter_mut().find(|a| a.id == auction_id)
    }

    /// Auctions in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Auction> {
        self.auctions.iter()
    }

    pub fn len(&self) -> usize {
        self.auctions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.auctions.is_empty()
    }
}
