//! End-to-end integration tests for the auction catalog.
//!
//! These tests exercise the full flow a UI drives:
//! 1. Seed catalog load
//! 2. Auction creation from form input
//! 3. Bid placement and rejection
//! 4. Sorted listing views

#[cfg(test)]
mod properties;
