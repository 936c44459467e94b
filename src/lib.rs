//! PageRank of a small, closed corpus of hyperlinked pages, estimated two
//! ways: by a random walk ([`page_rank::sampled`]) and by fixed-point
//! iteration ([`page_rank::iterated`]).
//!
//! ```no_run
//! use link_rank::page_rank::iterated::{Config, IteratedPageRank};
//! use link_rank::page_rank::{PageRank, PageRankResult};
//! use link_rank::Corpus;
//!
//! let corpus = Corpus::new([("a.html", vec!["b.html"]), ("b.html", vec!["a.html"])]);
//! let ranks = IteratedPageRank::new(&corpus, &Config::default())?
//!     .calc()?
//!     .ranks(&corpus);
//! assert!((ranks["a.html"] - 0.5).abs() < 1e-9);
//! # Ok::<(), link_rank::Error>(())
//! ```
pub mod corpus;
pub use self::corpus::{crawl, Corpus};
pub mod error;
pub use self::error::{Error, Result};
mod common;
pub use self::common::*;

pub mod page_rank;

#[cfg(test)]
mod testing;
