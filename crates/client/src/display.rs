//! Presentation helpers for auction listings.

use auction_types::Auction;

/// Format whole rupees with Indian digit grouping, e.g. `₹12,34,567`.
///
/// The last three digits form one group and the rest are grouped in pairs.
pub fn format_inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{}", digits);
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 2 + 4);
    grouped.push('₹');
    for (i, ch) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.push(',');
    grouped.push_str(tail);
    grouped
}

/// Render a single auction card.
pub fn render_card(auction: &Auction) -> String {
    format!(
        "[{}] {}\n    {}\n    Current bid: {}    Time left: {}\n",
        auction.id,
        auction.title,
        auction.description,
        format_inr(auction.current_bid),
        auction.time_left
    )
}

/// Render a listing in the given order.
pub fn render_listing<'a>(auctions: impl IntoIterator<Item = &'a Auction>) -> String {
    let cards: Vec<String> = auctions.into_iter().map(render_card).collect();
    if cards.is_empty() {
        return "No auctions found\n".to_string();
    }
    cards.join("\n")
}
