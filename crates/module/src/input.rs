//! Form input validation.
//!
//! Raw form fields arrive as strings. They are checked and converted here,
//! before anything reaches the store.

use auction_types::NewAuction;
use serde::{Deserialize, Serialize};

use crate::error::AuctionError;

pub(crate) const TITLE: &str = "title";
pub(crate) const DESCRIPTION: &str = "description";
pub(crate) const IMAGE_URL: &str = "image URL";
pub(crate) const TIME_LEFT: &str = "time left";

/// Raw create-auction form, every field as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionDraft {
    pub title: String,
    pub description: String,
    pub starting_bid: String,
    pub image_url: String,
    pub time_left: String,
}

impl AuctionDraft {
    /// Validate the draft into a typed listing.
    ///
    /// Fields are checked in form order and the first failure is reported.
    pub fn validate(&self) -> Result<NewAuction, AuctionError> {
        let title = required(TITLE, &self.title)?;
        let description = required(DESCRIPTION, &self.description)?;
        let starting_bid = parse_starting_bid(&self.starting_bid)?;
        let image_url = required(IMAGE_URL, &self.image_url)?;
        let time_left = required(TIME_LEFT, &self.time_left)?;

        Ok(NewAuction {
            title,
            description,
            starting_bid,
            image_url,
            time_left,
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, AuctionError> {
    trimmed_required(value)
        .map(str::to_string)
        .ok_or_else(|| AuctionError::validation(field, "must not be empty"))
}

/// `value` without surrounding whitespace, or `None` if nothing is left.
pub(crate) fn trimmed_required(value: &str) -> Option<&str> {
    Some(value.trim()).filter(|trimmed| !trimmed.is_empty())
}

/// Parse the starting bid as a non-negative whole number of rupees.
pub fn parse_starting_bid(raw: &str) -> Result<u64, AuctionError> {
    const FIELD: &str = "starting bid";

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AuctionError::validation(FIELD, "must not be empty"));
    }

    trimmed
        .parse::<u64>()
        .map_err(|_| AuctionError::validation(FIELD, "must be a non-negative whole number"))
}

/// Parse a bid form amount into whole rupees.
///
/// Rejects empty, non-numeric, non-finite, negative, fractional and
/// out-of-range input. Decimal and exponent forms are accepted only when
/// the written value is exactly a whole number of rupees.
pub fn parse_bid_amount(raw: &str) -> Result<u64, AuctionError> {
    const FIELD: &str = "amount";

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AuctionError::validation(FIELD, "must not be empty"));
    }

    if let Ok(amount) = trimmed.parse::<u64>() {
        return Ok(amount);
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| AuctionError::validation(FIELD, "must be a number"))?;

    if !value.is_finite() {
        return Err(AuctionError::validation(FIELD, "must be a finite number"));
    }
    if value.is_sign_negative() {
        return Err(AuctionError::validation(FIELD, "must not be negative"));
    }

    exact_whole_number(trimmed).map_err(|reason| AuctionError::validation(FIELD, reason))
}

/// Read a finite, non-negative decimal literal as an exact integer.
///
/// `text` has already parsed as an `f64`, so it is digits with an optional
/// `+`, fraction and exponent.
fn exact_whole_number(text: &str) -> Result<u64, &'static str> {
    const FRACTIONAL: &str = "must be whole rupees";
    const TOO_LARGE: &str = "is too large";

    let text = text.strip_prefix('+').unwrap_or(text);
    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(at) => {
            let exponent = text[at + 1..]
                .parse::<i64>()
                .map_err(|_| "is out of range")?;
            (&text[..at], exponent)
        }
        None => (text, 0),
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let digits = format!("{}{}", whole, fraction);
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(0);
    }

    // value == digits * 10^scale
    let scale = exponent - fraction.len() as i64;
    if scale < 0 {
        let dropped = usize::try_from(scale.unsigned_abs()).map_err(|_| FRACTIONAL)?;
        if dropped >= digits.len() {
            return Err(FRACTIONAL);
        }
        let (kept, dropped) = digits.split_at(digits.len() - dropped);
        if dropped.bytes().any(|b| b != b'0') {
            return Err(FRACTIONAL);
        }
        kept.parse::<u64>().map_err(|_| TOO_LARGE)
    } else {
        let base = digits.parse::<u64>().map_err(|_| TOO_LARGE)?;
        u32::try_from(scale)
            .ok()
            .and_then(|scale| 10u64.checked_pow(scale))
            .and_then(|factor| base.checked_mul(factor))
            .ok_or(TOO_LARGE)
    }
}
