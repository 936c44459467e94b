use super::*;
use crate::*;
use algograph::graph::VertexId;
use rand::{
    distr::{weighted::WeightedIndex, Distribution},
    Rng,
};
use std::{cell::RefCell, collections::HashMap};
use tracing::debug;

/// PageRank by a random walk of fixed length.
///
/// The walk starts on a uniformly chosen page and takes `samples - 1` steps
/// following [`transition_model`]. A page's rank is the share of visits it
/// received.
pub struct SampledPageRank<'a, R>
where
    R: Rng,
{
    corpus: &'a Corpus,
    samples: usize,
    pages: Vec<VertexId>,
    // transitions[i] draws the index in `pages` of the page after pages[i]
    transitions: Vec<WeightedIndex<f64>>,
    rng: RefCell<R>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    pub samples: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            samples: 10_000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Result {
    pub page_rank: HashMap<VertexId, f64, ahash::RandomState>,
    pub visits: HashMap<VertexId, usize, ahash::RandomState>,
}

impl<'a, R: Rng> SampledPageRank<'a, R> {
    pub fn new(corpus: &'a Corpus, config: &Config, rng: R) -> crate::Result<Self> {
        check_damping(config.damping)?;
        if config.samples < 1 {
            return Err(error::invalid(format!(
                "samples={}, expected at least 1",
                config.samples
            )));
        }
        check_corpus(corpus)?;

        let pages: Vec<VertexId> = corpus.vertices().collect();
        let transitions = pages
            .iter()
            .map(|u| {
                let weights = transition::transitions(corpus, *u, config.damping);
                WeightedIndex::new(weights.iter().map(|(_, w)| *w)).map_err(|e| {
                    error::invalid(format!(
                        "transitions of {:?}: {e}",
                        corpus.name(u).unwrap_or("?")
                    ))
                })
            })
            .collect::<crate::Result<Vec<_>>>()?;
        debug!(
            pages = pages.len(),
            samples = config.samples,
            "sampled page rank ready"
        );
        Ok(Self {
            corpus,
            samples: config.samples,
            pages,
            transitions,
            rng: RefCell::new(rng),
        })
    }

    pub fn into_rng(self) -> R {
        self.rng.into_inner()
    }
}

impl<R: Rng> PageRank for SampledPageRank<'_, R> {
    type Result = self::Result;

    fn calc(&self) -> crate::Result<Self::Result> {
        let mut rng = self.rng.borrow_mut();
        let mut counts = vec![0usize; self.pages.len()];
        let mut cur = rng.random_range(0..self.pages.len());
        counts[cur] += 1;
        for _ in 1..self.samples {
            cur = self.transitions[cur].sample(&mut *rng);
            counts[cur] += 1;
        }

        let n = self.samples as f64;
        let visits: HashMap<_, _, ahash::RandomState> =
            self.pages.iter().copied().zip(counts).collect();
        let page_rank = visits
            .iter()
            .map(|(v, c)| (*v, (*c as f64) / n))
            .collect();
        debug!(
            pages = self.corpus.page_size(),
            samples = self.samples,
            "random walk done"
        );
        Ok(Self::Result { page_rank, visits })
    }
}

impl PageRankResult for self::Result {
    fn page_rank(&self) -> &HashMap<VertexId, f64, ahash::RandomState> {
        &self.page_rank
    }

    fn debug<'a>(&'a self, corpus: &'a Corpus) -> impl std::fmt::Debug + 'a {
        ResultDebug {
            corpus,
            result: self,
        }
    }
}

pub struct ResultDebug<'a> {
    corpus: &'a Corpus,
    result: &'a self::Result,
}

impl std::fmt::Debug for ResultDebug<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in self.corpus.vertices() {
            let page = self.corpus.name(&v).unwrap_or("?");
            let p = self.result.page_rank.get(&v).copied().unwrap_or(0.0);
            let c = self.result.visits.get(&v).copied().unwrap_or(0);
            writeln!(f, "{page}: {p:?}, {c}")?;
        }
        Ok(())
    }
}
