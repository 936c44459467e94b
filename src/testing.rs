use crate::Corpus;
use quickcheck::Arbitrary;

/// A small corpus with random links, some of them self-links or leaving the
/// corpus, plus a damping factor in `(0, 1)`.
#[derive(Debug, Clone)]
pub struct RandomCorpus {
    pub corpus: Corpus,
    pub damping: f64,
}

impl Arbitrary for RandomCorpus {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        const N: usize = 8;

        let n = usize::arbitrary(g) % N + 1;
        let pages: Vec<_> = (0..n).map(|i| format!("{i}.html")).collect();
        let corpus = Corpus::new(pages.iter().map(|page| {
            let links: Vec<String> = (0..usize::arbitrary(g) % (n + 2))
                .map(|_| {
                    let i = usize::arbitrary(g) % (n + 1);
                    format!("{i}.html")
                })
                .collect();
            (page.clone(), links)
        }));
        let damping = (u8::arbitrary(g) % 98 + 1) as f64 / 100.0;
        Self { corpus, damping }
    }
}
