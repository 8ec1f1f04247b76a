//! Core type definitions for the auction catalog.
//!
//! This crate provides the shared data structures used across the workspace:
//! the stored auction listing, the validated creation input, and the sort
//! orderings offered to the listing view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

// =========================
// AUCTION TYPES
// =========================

/// Auction identifier, assigned at creation.
pub type AuctionId = u64;

/// A single auction listing.
///
/// Amounts are whole rupees.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Auction {
    pub id: AuctionId,
    pub title: String,
    pub description: String,
    /// Never decreases over the auction's life.
    pub current_bid: u64,
    /// Free-form display text such as "2d 5h". Not a duration.
    pub time_left: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

/// Validated input for a new auction.
///
/// String fields are trimmed and non-empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAuction {
    pub title: String,
    pub description: String,
    pub starting_bid: u64,
    pub image_url: String,
    pub time_left: String,
}

impl NewAuction {
    /// Materialize the listing under the given id and creation time.
    pub fn into_auction(self, id: AuctionId, created_at: DateTime<Utc>) -> Auction {
        Auction {
            id,
            title: self.title,
            description: self.description,
            current_bid: self.starting_bid,
            time_left: self.time_left,
            image_url: self.image_url,
            created_at,
        }
    }
}

// =========================
// ORDERING
// =========================

/// Orderings offered by the listing view.
///
/// Parsed from the UI keys `latest`, `price-low`, `price-high` and
/// `ending-soon`. Any other key maps to [`SortCriterion::Unordered`], which
/// leaves the collection in insertion order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum SortCriterion {
    /// Most recently created first
    #[default]
    Latest,
    /// Ascending current bid
    PriceLow,
    /// Descending current bid
    PriceHigh,
    /// Ascending raw `time_left` text
    EndingSoon,
    /// Insertion order
    Unordered,
}

impl SortCriterion {
    /// All criteria with a UI key, in menu order.
    pub const ALL: [SortCriterion; 4] = [
        SortCriterion::Latest,
        SortCriterion::PriceLow,
        SortCriterion::PriceHigh,
        SortCriterion::EndingSoon,
    ];

    /// Map a UI key to a criterion.
    pub fn from_key(key: &str) -> Self {
        match key.trim() {
            "latest" => Self::Latest,
            "price-low" => Self::PriceLow,
            "price-high" => Self::PriceHigh,
            "ending-soon" => Self::EndingSoon,
            _ => Self::Unordered,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::EndingSoon => "ending-soon",
            Self::Unordered => "unordered",
        }
    }

    /// Human-readable menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Latest => "Latest",
            Self::PriceLow => "Price Low to High",
            Self::PriceHigh => "Price High to Low",
            Self::EndingSoon => "Ending Soon",
            Self::Unordered => "Unordered",
        }
    }

    /// Compare two auctions under this criterion.
    ///
    /// `EndingSoon` compares the raw text byte-wise, so "10d" sorts before
    /// "2d".
    pub fn compare(&self, a: &Auction, b: &Auction) -> Ordering {
        match self {
            Self::Latest => b.created_at.cmp(&a.created_at),
            Self::PriceLow => a.current_bid.cmp(&b.current_bid),
            Self::PriceHigh => b.current_bid.cmp(&a.current_bid),
            Self::EndingSoon => a.time_left.cmp(&b.time_left),
            Self::Unordered => Ordering::Equal,
        }
    }
}

impl From<String> for SortCriterion {
    fn from(key: String) -> Self {
        Self::from_key(&key)
    }
}

impl From<SortCriterion> for &'static str {
    fn from(criterion: SortCriterion) -> Self {
        criterion.as_str()
    }
}

impl FromStr for SortCriterion {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_key(s))
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
