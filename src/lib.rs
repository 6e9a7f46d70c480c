//! # stacksearch
//!
//! Search Stack Overflow questions from the terminal and read their answers.
//!
//! ## Main Components
//!
//! - [`StackSearch`]: builds requests against the Stack Exchange API and decodes the responses
//! - [`Session`]: the interactive list and answer prompt
//! - [`Fetch`]: the HTTP seam; [`HttpFetcher`] is the real implementation
//!
//! ## Example
//!
//! ```no_run
//! use stacksearch::{HttpFetcher, Printer, Session, StackSearch};
//! use std::io;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = StackSearch::new(HttpFetcher::new()?);
//!     let printer = Printer::plain(io::stdout().lock());
//!     let mut session = Session::new(client, io::stdin().lock(), printer);
//!     session.run("typescript generics")?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod args;
pub mod config;
pub mod error;
pub mod fetch;
pub mod models;
pub mod print;
pub mod session;
pub mod utils;

pub use crate::api::StackSearch;
pub use crate::args::Args;
pub use crate::error::SearchError;
pub use crate::fetch::{ Fetch, HttpFetcher };
pub use crate::print::Printer;
pub use crate::session::{ Outcome, Session };
