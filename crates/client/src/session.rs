//! Line-oriented command session over an auction store.
//!
//! Each line is one UI event. Failures are reported inline and the session
//! keeps going; only I/O errors end it early.

use std::io::{BufRead, Write};

use auction_module::bid_validator::minimum_bid;
use auction_module::handlers::handle_call;
use auction_module::{
    parse_bid_amount, AuctionCall, AuctionDraft, AuctionError, AuctionStore, CallContext,
};
use auction_types::{AuctionId, SortCriterion};
use thiserror::Error;
use tracing::debug;

use crate::display::{format_inr, render_card, render_listing};

pub const HELP: &str = "\
Commands:
  list [latest|price-low|price-high|ending-soon]
  show <id>
  create <title> | <description> | <starting bid> | <image url> | <time left>
  bid <id> <amount>
  help
  quit
";

const CREATE_USAGE: &str =
    "create <title> | <description> | <starting bid> | <image url> | <time left>";
const BID_USAGE: &str = "bid <id> <amount>";
const SHOW_USAGE: &str = "show <id>";
const INVALID_TEXT: &str = "Input is not valid text. Type 'help' for commands.";

/// Errors surfaced while running a session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error(transparent)]
    Auction(#[from] AuctionError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A parsed session command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// Show the catalog, optionally switching the sort order
    List { sort: Option<SortCriterion> },
    Show { auction_id: AuctionId },
    Create(AuctionDraft),
    /// Bid with the raw amount text as typed
    Bid { auction_id: AuctionId, amount: String },
    Help,
    Quit,
}

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> Result<Option<SessionCommand>, SessionError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "list" | "ls" => SessionCommand::List {
            sort: (!rest.is_empty()).then(|| SortCriterion::from_key(rest)),
        },
        "show" => SessionCommand::Show {
            auction_id: parse_id(rest, SHOW_USAGE)?,
        },
        "create" => {
            let fields: Vec<&str> = rest.split('|').collect();
            let [title, description, starting_bid, image_url, time_left] = fields.as_slice() else {
                return Err(SessionError::Usage(CREATE_USAGE));
            };
            SessionCommand::Create(AuctionDraft {
                title: title.to_string(),
                description: description.to_string(),
                starting_bid: starting_bid.to_string(),
                image_url: image_url.to_string(),
                time_left: time_left.to_string(),
            })
        }
        "bid" => {
            let parts: Vec<&str> = rest.split_whitespace().collect();
            match parts.as_slice() {
                [id, amount] => SessionCommand::Bid {
                    auction_id: parse_id(id, BID_USAGE)?,
                    amount: amount.to_string(),
                },
                _ => return Err(SessionError::Usage(BID_USAGE)),
            }
        }
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        other => return Err(SessionError::UnknownCommand(other.to_string())),
    };

    Ok(Some(command))
}

fn parse_id(raw: &str, usage: &'static str) -> Result<AuctionId, SessionError> {
    raw.trim().parse().map_err(|_| SessionError::Usage(usage))
}

/// Inline message shown for a failed command.
pub fn describe_failure(err: &SessionError) -> String {
    match err {
        SessionError::Auction(AuctionError::Validation { field, reason }) => {
            format!("Invalid {}: {}", field, reason)
        }
        SessionError::Auction(AuctionError::InvalidBid { minimum, .. }) => {
            format!("Bid rejected. Minimum bid: {}", format_inr(*minimum))
        }
        SessionError::Auction(AuctionError::AuctionNotFound(_)) => {
            "Something went wrong. Please try again.".to_string()
        }
        SessionError::UnknownCommand(_) => format!("{}. Type `help` for commands.", err),
        other => other.to_string(),
    }
}

/// Interactive session state: the store plus the selected sort order.
pub struct Session {
    store: AuctionStore,
    sort: SortCriterion,
}

impl Session {
    pub fn new(store: AuctionStore) -> Self {
        Self {
            store,
            sort: SortCriterion::default(),
        }
    }

    pub fn store(&self) -> &AuctionStore {
        &self.store
    }

    pub fn sort(&self) -> SortCriterion {
        self.sort
    }

    /// Run one command and return the text to display.
    ///
    /// `Quit` is handled by [`Session::run`] and produces no output here.
    pub fn execute(
        &mut self,
        command: SessionCommand,
        ctx: &CallContext,
    ) -> Result<String, SessionError> {
        debug!(?command, "executing session command");

        match command {
            SessionCommand::List { sort } => {
                if let Some(sort) = sort {
                    self.sort = sort;
                }
                Ok(format!(
                    "Sort by: {}\n\n{}",
                    self.sort.label(),
                    render_listing(self.store.sorted_view(self.sort))
                ))
            }

            SessionCommand::Show { auction_id } => {
                let auction = self
                    .store
                    .get_auction(auction_id)
                    .ok_or(AuctionError::AuctionNotFound(auction_id))?;
                Ok(format!(
                    "{}    Minimum bid: {}\n",
                    render_card(auction),
                    format_inr(minimum_bid(auction.current_bid))
                ))
            }

            SessionCommand::Create(draft) => {
                let auction =
                    handle_call(&mut self.store, ctx, AuctionCall::CreateAuction { draft })?;
                Ok(format!("Created auction {}\n{}", auction.id, render_card(&auction)))
            }

            SessionCommand::Bid { auction_id, amount } => {
                if self.store.get_auction(auction_id).is_none() {
                    return Err(AuctionError::AuctionNotFound(auction_id).into());
                }
                let amount = parse_bid_amount(&amount)?;
                let call = AuctionCall::PlaceBid { auction_id, amount };
                let auction = handle_call(&mut self.store, ctx, call)?;
                Ok(format!(
                    "Bid placed on [{}] {}: {}\n",
                    auction.id,
                    auction.title,
                    format_inr(auction.current_bid)
                ))
            }

            SessionCommand::Help => Ok(HELP.to_string()),

            SessionCommand::Quit => Ok(String::new()),
        }
    }

    /// Read commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        output: &mut W,
    ) -> Result<(), SessionError> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let Ok(line) = std::str::from_utf8(&buf) else {
                debug!("skipping line that is not valid UTF-8");
                writeln!(output, "{}", INVALID_TEXT)?;
                continue;
            };
            let line = line.trim_end_matches(['\n', '\r']);

            let command = match parse_command(line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    writeln!(output, "{}", describe_failure(&err))?;
                    continue;
                }
            };

            if command == SessionCommand::Quit {
                break;
            }

            match self.execute(command, &CallContext::now()) {
                Ok(text) => write!(output, "{}", text)?,
                Err(err) => writeln!(output, "{}", describe_failure(&err))?,
            }
        }

        output.flush()?;
        Ok(())
    }
}
