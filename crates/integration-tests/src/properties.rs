//! Property-based tests for store invariants.
//!
//! These tests check bid monotonicity and sorted-view behavior over
//! randomly generated catalogs using proptest.

use auction_module::{AuctionDraft, AuctionError, AuctionStore};
use auction_types::{Auction, AuctionId, NewAuction, SortCriterion};
use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

/// Strategy for a catalog of up to 12 listings: price, time-left text and
/// creation offset in minutes. Offsets may repeat to exercise tie handling.
fn catalog_strategy() -> impl Strategy<Value = Vec<(u64, String, i64)>> {
    prop::collection::vec(
        (0u64..1_000_000, "[1-9][0-9]?d( [0-9]{1,2}h)?", 0i64..50),
        0..12,
    )
}

fn build_store(catalog: &[(u64, String, i64)]) -> AuctionStore {
    let epoch = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut store = AuctionStore::new();
    for (i, (price, time_left, offset)) in catalog.iter().enumerate() {
        store.insert(
            NewAuction {
                title: format!("Lot {}", i),
                description: "Generated lot".to_string(),
                starting_bid: *price,
                image_url: "https://example.com/lot.jpg".to_string(),
                time_left: time_left.clone(),
            },
            epoch + Duration::minutes(*offset),
        );
    }
    store
}

fn snapshot(store: &AuctionStore) -> Vec<Auction> {
    store.iter().cloned().collect()
}

fn sorted_ids(view: &[&Auction]) -> Vec<AuctionId> {
    let mut ids: Vec<AuctionId> = view.iter().map(|a| a.id).collect();
    ids.sort_unstable();
    ids
}

/// Wrap a text strategy in up to three blanks on either side.
fn padded(text: impl Strategy<Value = String>) -> impl Strategy<Value = String> {
    ("[ \t]{0,3}", text, "[ \t]{0,3}")
        .prop_map(|(lead, text, trail)| format!("{}{}{}", lead, text, trail))
}

/// Strategy for a valid create form and the starting bid it names.
fn draft_strategy() -> impl Strategy<Value = (AuctionDraft, u64)> {
    (
        padded("[A-Za-z0-9][A-Za-z0-9 ]{0,20}"),
        padded("[a-z]{1,12}( [a-z]{1,12}){0,3}"),
        ("[ \t]{0,3}", any::<u64>(), "[ \t]{0,3}"),
        padded("https://example\\.com/[a-z]{1,8}\\.jpg"),
        padded("[1-9]d( [0-9]{1,2}h)?"),
    )
        .prop_map(|(title, description, (lead, bid, trail), image_url, time_left)| {
            let draft = AuctionDraft {
                title,
                description,
                starting_bid: format!("{}{}{}", lead, bid, trail),
                image_url,
                time_left,
            };
            (draft, bid)
        })
}

fn criterion_strategy() -> impl Strategy<Value = SortCriterion> {
    prop_oneof![
        Just(SortCriterion::Latest),
        Just(SortCriterion::PriceLow),
        Just(SortCriterion::PriceHigh),
        Just(SortCriterion::EndingSoon),
        Just(SortCriterion::Unordered),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: a bid is accepted iff it beats the current bid, and only the
    /// target auction changes.
    #[test]
    fn prop_accept_bid_iff_strictly_greater(
        catalog in catalog_strategy().prop_filter("non-empty", |c| !c.is_empty()),
        pick in any::<prop::sample::Index>(),
        amount in 0u64..2_000_000,
    ) {
        let mut store = build_store(&catalog);
        let target = pick.index(store.len()) as AuctionId + 1;
        let before = snapshot(&store);
        let current = store.get_auction(target).unwrap().current_bid;

        let result = store.accept_bid(target, amount);

        if amount > current {
            prop_assert_eq!(result.unwrap().current_bid, amount);
            for (old, new) in before.iter().zip(store.iter()) {
                if old.id == target {
                    prop_assert_eq!(new.current_bid, amount);
                } else {
                    prop_assert_eq!(old, new);
                }
            }
        } else {
            let is_invalid_bid = matches!(result, Err(AuctionError::InvalidBid { .. }));
            prop_assert!(is_invalid_bid);
            prop_assert_eq!(snapshot(&store), before);
        }
    }

    /// Property: a valid create appends exactly one auction whose current
    /// bid is the starting bid, and leaves existing auctions alone.
    #[test]
    fn prop_create_appends_one(
        catalog in catalog_strategy(),
        (draft, starting_bid) in draft_strategy(),
    ) {
        let mut store = build_store(&catalog);
        let before = snapshot(&store);

        let created = store.create(&draft).unwrap();

        prop_assert_eq!(store.len(), before.len() + 1);
        prop_assert_eq!(created.current_bid, starting_bid);
        prop_assert_eq!(created.id, before.len() as AuctionId + 1);
        prop_assert_eq!(created.title.as_str(), draft.title.trim());
        prop_assert_eq!(store.get_auction(created.id), Some(&created));
        let after = snapshot(&store);
        prop_assert_eq!(&after[..before.len()], &before[..]);
    }

    /// Property: the current bid never decreases over any bid sequence.
    #[test]
    fn prop_current_bid_is_monotonic(
        start in 0u64..10_000,
        amounts in prop::collection::vec(0u64..20_000, 0..30),
    ) {
        let mut store = build_store(&[(start, "1d".to_string(), 0)]);
        let mut last = start;
        for amount in amounts {
            let _ = store.accept_bid(1, amount);
            let now = store.get_auction(1).unwrap().current_bid;
            prop_assert!(now >= last);
            prop_assert!(now == last || now == amount);
            last = now;
        }
    }

    /// Property: sorted views never mutate the store and always hold the
    /// same auctions.
    #[test]
    fn prop_sorted_view_is_a_permutation(
        catalog in catalog_strategy(),
        first in criterion_strategy(),
        second in criterion_strategy(),
    ) {
        let store = build_store(&catalog);
        let before = snapshot(&store);

        let a = store.sorted_view(first);
        let b = store.sorted_view(second);

        prop_assert_eq!(sorted_ids(&a), sorted_ids(&b));
        prop_assert_eq!(a.len(), store.len());
        prop_assert_eq!(snapshot(&store), before);
    }

    /// Property: price views are ordered and ties keep creation order.
    #[test]
    fn prop_price_views_are_ordered(catalog in catalog_strategy()) {
        let store = build_store(&catalog);

        let low = store.sorted_view(SortCriterion::PriceLow);
        for pair in low.windows(2) {
            prop_assert!(pair[0].current_bid <= pair[1].current_bid);
            if pair[0].current_bid == pair[1].current_bid {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }

        let high = store.sorted_view(SortCriterion::PriceHigh);
        for pair in high.windows(2) {
            prop_assert!(pair[0].current_bid >= pair[1].current_bid);
        }
    }

    /// Property: the latest view starts with the most recently created auction.
    #[test]
    fn prop_latest_first(
        catalog in catalog_strategy().prop_filter("non-empty", |c| !c.is_empty()),
    ) {
        let store = build_store(&catalog);
        let view = store.sorted_view(SortCriterion::Latest);
        let newest = store.iter().map(|a| a.created_at).max().unwrap();
        prop_assert_eq!(view[0].created_at, newest);
    }

    /// Property: repeated views with no mutation in between are identical.
    #[test]
    fn prop_sorted_view_is_idempotent(
        catalog in catalog_strategy(),
        criterion in criterion_strategy(),
    ) {
        let store = build_store(&catalog);
        let first: Vec<AuctionId> = store.sorted_view(criterion).iter().map(|a| a.id).collect();
        let second: Vec<AuctionId> = store.sorted_view(criterion).iter().map(|a| a.id).collect();
        prop_assert_eq!(first, second);
    }
}
