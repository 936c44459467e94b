//! PageRank estimators over a [`Corpus`](crate::Corpus).
//!
//! Both estimators model the same random surfer: with probability `damping`
//! it follows one of the current page's links chosen uniformly, otherwise
//! it jumps to a page chosen uniformly from the whole corpus. A dangling
//! page behaves as if it linked to every page of the corpus.

mod traits;
pub use self::traits::*;
pub mod iterated;
pub mod sampled;
pub mod transition;
pub use self::transition::transition_model;

use crate::{error::invalid, Corpus};

pub const DEFAULT_DAMPING: f64 = 0.85;

pub(crate) fn check_damping(damping: f64) -> crate::Result<()> {
    if damping > 0.0 && damping < 1.0 {
        Ok(())
    } else {
        Err(invalid(format!("damping={damping}, expected 0 < damping < 1")))
    }
}

pub(crate) fn check_corpus(corpus: &Corpus) -> crate::Result<()> {
    if corpus.is_empty() {
        Err(invalid("PageRank of an empty corpus is undefined"))
    } else {
        Ok(())
    }
}
