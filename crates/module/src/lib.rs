//! In-memory auction catalog with bid validation.
//!
//! This module implements the bidding logic behind the auction listing UI:
//!
//! - Auction creation from validated form input
//! - Bid acceptance against the current bid
//! - Sorted, read-only views of the catalog
//! - Seed catalog configuration
//!
//! # Architecture
//!
//! - `state`: The auction store
//! - `bid_validator`: Bid acceptance rules
//! - `input`: Form validation at the UI boundary
//! - `call`: Message types for state-changing operations
//! - `handlers`: Call processing with logging
//! - `queries`: Read-only state access
//! - `genesis`: Seed catalog
//! - `error`: Error types
//!
//! # Example
//!
//! ```
//! use auction_module::{AuctionDraft, AuctionStore};
//! use auction_types::SortCriterion;
//!
//! let mut store = AuctionStore::new();
//! let draft = AuctionDraft {
//!     title: "Teak Chair".into(),
//!     description: "Mid-century teak chair".into(),
//!     starting_bid: "4000".into(),
//!     image_url: "https://example.com/chair.jpg".into(),
//!     time_left: "2d".into(),
//! };
//!
//! let chair = store.create(&draft).unwrap();
//! store.accept_bid(chair.id, 4500).unwrap();
//!
//! let view = store.sorted_view(SortCriterion::PriceHigh);
//! assert_eq!(view[0].current_bid, 4500);
//! ```

pub mod bid_validator;
pub mod call;
pub mod error;
pub mod genesis;
pub mod handlers;
pub mod input;
pub mod queries;
pub mod state;

pub use call::AuctionCall;
pub use error::AuctionError;
pub use genesis::{AuctionGenesisConfig, GenesisValidationError, SeedAuction};
pub use handlers::{CallContext, HandlerResult};
pub use input::{parse_bid_amount, AuctionDraft};
pub use queries::{AuctionQuery, AuctionQueryResponse};
pub use state::AuctionStore;
