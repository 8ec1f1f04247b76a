//! Genesis configuration for the auction catalog.
//!
//! The seed catalog is the set of auctions the store starts with. It is
//! read from JSON by the CLI; the default is the built-in showcase set.

use auction_types::NewAuction;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::input::{trimmed_required, DESCRIPTION, IMAGE_URL, TIME_LEFT, TITLE};
use crate::state::AuctionStore;

/// Genesis configuration for the auction catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionGenesisConfig {
    /// Seed auctions, inserted in order with ids `1..=n`
    pub auctions: Vec<SeedAuction>,
}

/// A seed auction with an explicit creation time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedAuction {
    #[serde(flatten)]
    pub listing: NewAuction,
    pub created_at: DateTime<Utc>,
}

impl SeedAuction {
    fn new(
        title: &str,
        description: &str,
        starting_bid: u64,
        time_left: &str,
        image_url: &str,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            listing: NewAuction {
                title: title.to_string(),
                description: description.to_string(),
                starting_bid,
                image_url: image_url.to_string(),
                time_left: time_left.to_string(),
            },
            created_at,
        }
    }
}

fn seed_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

impl Default for AuctionGenesisConfig {
    fn default() -> Self {
        Self {
            auctions: vec![
                SeedAuction::new(
                    "Vintage Leather Watch",
                    "A beautiful vintage leather watch from the 1950s in excellent condition.",
                    12500,
                    "2d 5h",
                    "https://images.unsplash.com/photo-1524592094714-0f0654e20314?auto=format&fit=crop&w=600&q=80",
                    seed_date(2024, 3, 15),
                ),
                SeedAuction::new(
                    "Antique Bronze Statue",
                    "Rare bronze statue from the early 19th century depicting a Greek goddess.",
                    45000,
                    "1d 12h",
                    "https://images.unsplash.com/photo-1577083552431-6e5fd01aa342?auto=format&fit=crop&w=600&q=80",
                    seed_date(2024, 3, 14),
                ),
                SeedAuction::new(
                    "Modern Art Painting",
                    "Original abstract painting by contemporary artist Jane Smith.",
                    25000,
                    "3d 8h",
                    "https://images.unsplash.com/photo-1579783902614-a3fb3927b6a5?auto=format&fit=crop&w=600&q=80",
                    seed_date(2024, 3, 13),
                ),
            ],
        }
    }
}

impl AuctionGenesisConfig {
    /// A catalog with no seed auctions.
    pub fn empty() -> Self {
        Self {
            auctions: Vec::new(),
        }
    }

    /// Validate the genesis configuration.
    pub fn validate(&self) -> Result<(), GenesisValidationError> {
        for (index, seed) in self.auctions.iter().enumerate() {
            seed.trimmed_listing()
                .map_err(|field| GenesisValidationError::EmptyField { index, field })?;
        }

        Ok(())
    }

    /// Validate and build a store holding the seed auctions.
    ///
    /// Text fields are trimmed the same way form input is.
    pub fn build_store(&self) -> Result<AuctionStore, GenesisValidationError> {
        let mut store = AuctionStore::new();
        for (index, seed) in self.auctions.iter().enumerate() {
            let listing = seed
                .trimmed_listing()
                .map_err(|field| GenesisValidationError::EmptyField { index, field })?;
            store.insert(listing, seed.created_at);
        }
        Ok(store)
    }
}

impl SeedAuction {
    /// The listing with text fields trimmed, or the first blank field.
    fn trimmed_listing(&self) -> Result<NewAuction, &'static str> {
        let listing = &self.listing;
        Ok(NewAuction {
            title: non_blank(TITLE, &listing.title)?,
            description: non_blank(DESCRIPTION, &listing.description)?,
            starting_bid: listing.starting_bid,
            image_url: non_blank(IMAGE_URL, &listing.image_url)?,
            time_left: non_blank(TIME_LEFT, &listing.time_left)?,
        })
    }
}

fn non_blank(field: &'static str, value: &str) -> Result<String, &'static str> {
    trimmed_required(value).map(str::to_string).ok_or(field)
}

/// Errors that can occur during genesis validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenesisValidationError {
    #[error("Seed auction {index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AuctionGenesisConfig::default();
        assert!(config.validate().is_ok());

        let store = config.build_store().unwrap();
        assert_eq!(store.len(), 3);
        let ids: Vec<u64> = store.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(store.get_auction(1).unwrap().current_bid, 12500);
    }

    #[test]
    fn test_empty_config() {
        let store = AuctionGenesisConfig::empty().build_store().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_blank_seed_field() {
        let mut config = AuctionGenesisConfig::default();
        config.auctions[1].listing.time_left = "  ".to_string();
        assert_eq!(
            config.validate(),
            Err(GenesisValidationError::EmptyField {
                index: 1,
                field: "time left"
            })
        );
        assert!(config.build_store().is_err());
    }

    #[test]
    fn test_seed_fields_are_trimmed() {
        let mut config = AuctionGenesisConfig::empty();
        let mut seed = AuctionGenesisConfig::default().auctions.remove(0);
        seed.listing.title = " Watch ".to_string();
        seed.listing.time_left = "\t2d 5h\n".to_string();
        config.auctions.push(seed);

        let store = config.build_store().unwrap();
        let auction = store.get_auction(1).unwrap();
        assert_eq!(auction.title, "Watch");
        assert_eq!(auction.time_left, "2d 5h");
    }

    #[test]
    fn test_blank_seed_uses_form_field_names() {
        let mut config = AuctionGenesisConfig::default();
        config.auctions[2].listing.image_url = String::new();
        assert_eq!(
            config.build_store().unwrap_err(),
            GenesisValidationError::EmptyField {
                index: 2,
                field: "image URL"
            }
        );
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "auctions": [
                {
                    "title": "Silk Saree",
                    "description": "Hand-woven Banarasi silk",
                    "startingBid": 18000,
                    "imageUrl": "https://example.com/saree.jpg",
                    "timeLeft": "1d 3h",
                    "createdAt": "2024-03-10T09:30:00Z"
                }
            ]
        }"#;

        let config: AuctionGenesisConfig = serde_json::from_str(json).unwrap();
        let store = config.build_store().unwrap();
        let seeded = store.get_auction(1).unwrap();
        assert_eq!(seeded.title, "Silk Saree");
        assert_eq!(seeded.current_bid, 18000);
        assert_eq!(seeded.created_at, Utc.with_ymd_and_hms(2024, 3, 10, 9, 30, 0).unwrap());
    }
}
