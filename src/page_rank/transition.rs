use crate::{error::invalid, Corpus};
use algograph::graph::{QueryableGraph, VertexId};
use std::collections::{BTreeSet, HashMap};

/// Probability of visiting each page next, keyed by page name.
pub type Distribution = HashMap<String, f64, ahash::RandomState>;

/// Distribution of the surfer's next page when it is currently on `page`.
///
/// Every page gets `(1 - damping) / N`, and each page `page` links to gets
/// another `damping / out-degree`. From a dangling page every page is equally
/// likely.
///
/// # Errors
/// `InvalidArgument` if `page` is not in the corpus or `damping` is not in
/// `[0, 1]`.
pub fn transition_model(corpus: &Corpus, page: &str, damping: f64) -> crate::Result<Distribution> {
    if !(0.0..=1.0).contains(&damping) {
        return Err(invalid(format!("damping={damping}, expected 0 <= damping <= 1")));
    }
    let u = corpus
        .vertex(page)
        .ok_or_else(|| invalid(format!("page {page:?} is not in the corpus")))?;
    let dist = transitions(corpus, u, damping)
        .into_iter()
        .filter_map(|(v, w)| corpus.name(&v).map(|page| (page.to_string(), w)))
        .collect();
    Ok(dist)
}

/// Transition weights out of `u`, one per page, in the order of
/// [`Corpus::vertices`].
pub(crate) fn transitions(corpus: &Corpus, u: VertexId, damping: f64) -> Vec<(VertexId, f64)> {
    let n = corpus.page_size() as f64;
    let links: BTreeSet<VertexId> = corpus.graph().out_edges(&u).map(|e| e.sink).collect();
    if links.is_empty() {
        return corpus.vertices().map(|v| (v, 1.0 / n)).collect();
    }
    let jump = (1.0 - damping) / n;
    let follow = damping / (links.len() as f64);
    corpus
        .vertices()
        .map(|v| {
            if links.contains(&v) {
                (v, jump + follow)
            } else {
                (v, jump)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{testing::RandomCorpus, Error};
    use quickcheck_macros::quickcheck;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn follows_links() {
        let corpus = Corpus::new([
            ("1.html", vec!["2.html"]),
            ("2.html", vec!["1.html", "3.html"]),
            ("3.html", vec!["2.html", "4.html"]),
            ("4.html", vec!["2.html"]),
        ]);
        let dist = transition_model(&corpus, "2.html", 0.85).unwrap();
        assert_eq!(dist.len(), 4);
        assert!(close(dist["1.html"], 0.0375 + 0.425));
        assert!(close(dist["2.html"], 0.0375));
        assert!(close(dist["3.html"], 0.0375 + 0.425));
        assert!(close(dist["4.html"], 0.0375));
    }

    #[test]
    fn dangling_page_jumps_uniformly() {
        let corpus = Corpus::new([("a", vec!["b"]), ("b", vec![]), ("c", vec!["a"])]);
        let dist = transition_model(&corpus, "b", 0.85).unwrap();
        for page in ["a", "b", "c"] {
            assert!(close(dist[page], 1.0 / 3.0), "{dist:?}");
        }
    }

    #[test]
    fn degenerate_damping() {
        let corpus = Corpus::new([("a", vec!["b"]), ("b", vec!["a"])]);
        let dist = transition_model(&corpus, "a", 1.0).unwrap();
        assert!(close(dist["a"], 0.0));
        assert!(close(dist["b"], 1.0));
        let dist = transition_model(&corpus, "a", 0.0).unwrap();
        assert!(close(dist["a"], 0.5));
        assert!(close(dist["b"], 0.5));
    }

    #[test]
    fn unknown_page() {
        let corpus = Corpus::new([("a", vec!["b"]), ("b", vec!["a"])]);
        let err = transition_model(&corpus, "c", 0.85).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)), "{err:?}");
    }

    #[test]
    fn bad_damping() {
        let corpus = Corpus::new([("a", vec!["b"]), ("b", vec!["a"])]);
        for damping in [-0.1, 1.5, f64::NAN] {
            let err = transition_model(&corpus, "a", damping).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)), "{err:?}");
        }
    }

    #[quickcheck]
    fn sums_to_one(c: RandomCorpus) {
        let corpus = &c.corpus;
        for page in corpus.pages() {
            let dist = transition_model(corpus, page, c.damping).unwrap();
            assert_eq!(dist.len(), corpus.page_size());
            let total: f64 = dist.values().sum();
            assert!((total - 1.0).abs() < 1e-9, "{page}: {total}");
            assert!(dist.values().all(|w| (0.0..=1.0).contains(w)), "{dist:?}");
        }
    }
}
