//! The corpus: a closed set of pages and the hyperlinks between them.
//!
//! Pages are named by strings and stored as vertices of a directed
//! [`algograph`] graph. Construction keeps only links between two distinct
//! pages of the corpus, so every page's link set is a subset of the corpus
//! minus the page itself.

use algograph::graph::*;
use std::collections::{BTreeMap, BTreeSet, HashMap};

mod crawl;
pub use self::crawl::{crawl, extract_links};

#[derive(Debug, Clone)]
pub struct Corpus {
    graph: directed::TreeBackedGraph,
    ids: BTreeMap<String, VertexId>,
    names: HashMap<VertexId, String, ahash::RandomState>,
}

impl Corpus {
    /// Builds a corpus from `(page, links)` pairs.
    ///
    /// Self-links and links to names that are not pages of the corpus are
    /// dropped. A page listed more than once gets the union of its links.
    pub fn new<I, P, L, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let raw = {
            let mut raw: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
            for (page, links) in pages {
                raw.entry(page.into())
                    .or_default()
                    .extend(links.into_iter().map(Into::into));
            }
            raw
        };
        let mut graph = directed::TreeBackedGraph::new();
        let ids: BTreeMap<String, VertexId> = raw
            .keys()
            .map(|page| (page.clone(), graph.add_vertex()))
            .collect();
        for (page, links) in raw.iter() {
            let Some(u) = ids.get(page).copied() else {
                continue;
            };
            for link in links.iter().filter(|link| *link != page) {
                if let Some(v) = ids.get(link) {
                    graph.add_edge(u, *v);
                }
            }
        }
        let names = ids.iter().map(|(page, v)| (*v, page.clone())).collect();
        Self { graph, ids, names }
    }

    pub fn page_size(&self) -> usize {
        self.ids.len()
    }

    pub fn link_size(&self) -> usize {
        self.graph.edge_size()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Page names in sorted order.
    pub fn pages(&self) -> impl Iterator<Item = &str> + '_ {
        self.ids.keys().map(String::as_str)
    }

    pub fn contains(&self, page: &str) -> bool {
        self.ids.contains_key(page)
    }

    /// Sorted names of the pages `page` links to, or `None` if `page` is not
    /// in the corpus.
    pub fn links(&self, page: &str) -> Option<Vec<&str>> {
        let u = self.vertex(page)?;
        let mut links: Vec<&str> = self
            .graph
            .out_edges(&u)
            .filter_map(|e| self.name(&e.sink))
            .collect();
        links.sort_unstable();
        Some(links)
    }

    pub fn out_degree(&self, page: &str) -> Option<usize> {
        let u = self.vertex(page)?;
        Some(self.graph.out_edges(&u).count())
    }

    pub fn is_dangling(&self, page: &str) -> Option<bool> {
        self.out_degree(page).map(|d| d == 0)
    }

    pub fn vertex(&self, page: &str) -> Option<VertexId> {
        self.ids.get(page).copied()
    }

    pub fn name(&self, v: &VertexId) -> Option<&str> {
        self.names.get(v).map(String::as_str)
    }

    /// Vertices in the order of their page names.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.ids.values().copied()
    }

    pub fn graph(&self) -> &directed::TreeBackedGraph {
        &self.graph
    }
}
