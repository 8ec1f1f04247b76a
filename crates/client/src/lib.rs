//! Terminal front end for the auction catalog.
//!
//! This crate plays the UI role around `auction-module`:
//! - Rendering listings and rupee amounts
//! - Collecting form input and converting it before calling the store
//! - Reporting failures as inline messages

pub mod display;
pub mod session;

pub use display::{format_inr, render_card, render_listing};
pub use session::{parse_command, Session, SessionCommand, SessionError};
