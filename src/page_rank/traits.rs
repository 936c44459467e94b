use crate::{Corpus, Ranks};
use algograph::graph::VertexId;
use std::collections::HashMap;

pub trait PageRank {
    type Result: PageRankResult;

    fn calc(&self) -> crate::Result<Self::Result>;
}

pub trait PageRankResult {
    fn page_rank(&self) -> &HashMap<VertexId, f64, ahash::RandomState>;

    /// Ranks keyed by page name.
    fn ranks(&self, corpus: &Corpus) -> Ranks {
        self.page_rank()
            .iter()
            .filter_map(|(v, w)| corpus.name(v).map(|page| (page.to_string(), *w)))
            .collect()
    }

    fn debug<'a>(&'a self, corpus: &'a Corpus) -> impl std::fmt::Debug + 'a;
}
