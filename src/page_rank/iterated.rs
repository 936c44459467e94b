use super::*;
use crate::*;
use algograph::graph::{QueryableGraph, VertexId};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, trace, warn};

/// PageRank by fixed-point iteration.
///
/// Every pass computes a fresh snapshot from the previous one only:
///
/// ```text
/// next[i] = (1-d)/N + d * sum(rank[j] / out(j) for j -> i)
///                   + d * sum(rank[j] / N for dangling j)
/// ```
pub struct IteratedPageRank<'a> {
    corpus: &'a Corpus,
    damping: f64,
    tolerance: f64,
    max_iterations: usize,
    transitions: BTreeMap<(VertexId, VertexId), f64>,
    dangling: Vec<VertexId>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    /// Iteration stops once no page changed by more than this in a pass.
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            tolerance: 0.001,
            max_iterations: 1000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Result {
    pub page_rank: HashMap<VertexId, f64, ahash::RandomState>,
    /// Change of each page in the last pass.
    pub delta: HashMap<VertexId, f64, ahash::RandomState>,
    pub iterations: usize,
}

impl<'a> IteratedPageRank<'a> {
    pub fn new(corpus: &'a Corpus, config: &Config) -> crate::Result<Self> {
        check_damping(config.damping)?;
        let tolerance = config.tolerance;
        if tolerance.is_nan() || tolerance <= 0.0 {
            return Err(error::invalid(format!("tolerance={tolerance}")));
        }
        if config.max_iterations == 0 {
            return Err(error::invalid("max_iterations=0"));
        }
        check_corpus(corpus)?;

        let graph = corpus.graph();
        let mut transitions = BTreeMap::new();
        let mut dangling = vec![];
        for u in corpus.vertices() {
            let n = graph.out_edges(&u).count();
            if n == 0 {
                dangling.push(u);
                continue;
            }
            let unit = config.damping / (n as f64);
            for v in graph.out_edges(&u).map(|e| e.sink) {
                *transitions.entry((u, v)).or_insert(0.0) += unit;
            }
        }
        debug!(
            pages = corpus.page_size(),
            links = transitions.len(),
            dangling = dangling.len(),
            "iterated page rank ready"
        );
        Ok(Self {
            corpus,
            damping: config.damping,
            tolerance,
            max_iterations: config.max_iterations,
            transitions,
            dangling,
        })
    }

    /// One update pass from the snapshot `p`.
    pub fn step(
        &self,
        p: &HashMap<VertexId, f64, ahash::RandomState>,
    ) -> HashMap<VertexId, f64, ahash::RandomState> {
        let mut r = HashMap::with_capacity_and_hasher(p.len(), ahash::RandomState::new());
        self.pass(p, &mut r);
        r
    }

    fn pass(
        &self,
        p: &HashMap<VertexId, f64, ahash::RandomState>,
        r: &mut HashMap<VertexId, f64, ahash::RandomState>,
    ) {
        let n = self.corpus.page_size() as f64;
        let leaked: f64 = self
            .dangling
            .iter()
            .map(|v| p.get(v).copied().unwrap_or(0.0))
            .sum();
        let base = (1.0 - self.damping) / n + self.damping * leaked / n;
        r.clear();
        for v in self.corpus.vertices() {
            r.insert(v, base);
        }
        for ((u, v), w) in self.transitions.iter() {
            let from = p.get(u).copied().unwrap_or(0.0);
            if let Some(to) = r.get_mut(v) {
                *to += from * w;
            }
        }
    }
}

impl PageRank for IteratedPageRank<'_> {
    type Result = self::Result;

    fn calc(&self) -> crate::Result<Self::Result> {
        let n = self.corpus.page_size();
        let mut p: HashMap<_, _, ahash::RandomState> = self
            .corpus
            .vertices()
            .map(|v| (v, 1.0 / (n as f64)))
            .collect();
        let mut r = HashMap::with_capacity_and_hasher(n, ahash::RandomState::new());
        let mut delta = HashMap::with_capacity_and_hasher(n, ahash::RandomState::new());
        let mut change = f64::INFINITY;
        for iterations in 1..=self.max_iterations {
            self.pass(&p, &mut r);

            delta.clear();
            for v in self.corpus.vertices() {
                let a = r.get(&v).copied().unwrap_or(0.0);
                let b = p.get(&v).copied().unwrap_or(0.0);
                delta.insert(v, a - b);
            }
            change = norm_inf(&delta);
            trace!(iterations, change, "iteration pass");

            if change <= self.tolerance {
                debug!(iterations, change, total = norm_1(&r), "converged");
                return Ok(Self::Result {
                    page_rank: r,
                    delta,
                    iterations,
                });
            }

            std::mem::swap(&mut p, &mut r);
        }
        warn!(
            iterations = self.max_iterations,
            change, "iteration cap reached before convergence"
        );
        Err(Error::NotConverged {
            iterations: self.max_iterations,
            delta: change,
        })
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
            let d = self.result.delta.get(&v).copied().unwrap_or(0.0);
            writeln!(f, "{page}: {p:?}, {d:?}")?;
        }
        Ok(())
    }
}
