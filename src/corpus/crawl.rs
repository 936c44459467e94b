use super::Corpus;
use crate::error::{Error, Result};
use regex::Regex;
use std::{collections::BTreeSet, fs, path::Path, sync::LazyLock};
use tracing::{debug, info};
use walkdir::WalkDir;

static HREF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Loads every `.html` file directly inside `dir` as a page of the corpus.
///
/// Pages are named by file name. Subdirectories are not visited.
///
/// # Errors
/// Fails if `dir` cannot be listed or a page cannot be read.
pub fn crawl<P: AsRef<Path>>(dir: P) -> Result<Corpus> {
    let dir = dir.as_ref();
    let mut pages = Vec::new();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if !name.ends_with(".html") {
            continue;
        }
        let contents = fs::read_to_string(entry.path()).map_err(|source| Error::Io {
            path: entry.path().to_path_buf(),
            source,
        })?;
        let links = extract_links(&contents);
        debug!(page = name, links = links.len(), "parsed page");
        pages.push((name.to_string(), links));
    }
    let corpus = Corpus::new(pages);
    info!(
        dir = %dir.display(),
        pages = corpus.page_size(),
        links = corpus.link_size(),
        "corpus loaded"
    );
    Ok(corpus)
}

/// Targets of all `<a href="...">` tags in `html`.
pub fn extract_links(html: &str) -> BTreeSet<String> {
    HREF_RE
        .captures_iter(html)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, body: &str) {
        fs::write(dir.path().join(name), body).unwrap();
    }

    #[test]
    fn extracts_anchor_targets() {
        let html = r#"
            <html><body>
              <a href="2.html">two</a>
              <a class="x" href="3.html">three</a>
              <a
                 href="2.html">again</a>
              <link href="style.css">
              <area href="4.html">
            </body></html>
        "#;
        let links: Vec<_> = extract_links(html).into_iter().collect();
        assert_eq!(links, vec!["2.html", "3.html"]);
    }

    #[test]
    fn crawl_directory() {
        let dir = TempDir::new().unwrap();
        write(&dir, "1.html", r#"<a href="2.html">2</a><a href="1.html">me</a>"#);
        write(
            &dir,
            "2.html",
            r#"<a href="1.html">1</a><a href="3.html">3</a><a href="https://x.org">x</a>"#,
        );
        write(&dir, "3.html", "no links");
        write(&dir, "notes.txt", r#"<a href="1.html">1</a>"#);
        fs::create_dir(dir.path().join("sub.html")).unwrap();

        let corpus = crawl(dir.path()).unwrap();
        let pages: Vec<_> = corpus.pages().collect();
        assert_eq!(pages, vec!["1.html", "2.html", "3.html"]);
        assert_eq!(corpus.links("1.html").unwrap(), vec!["2.html"]);
        assert_eq!(corpus.links("2.html").unwrap(), vec!["1.html", "3.html"]);
        assert_eq!(corpus.is_dangling("3.html"), Some(true));
    }

    #[test]
    fn crawl_empty_directory() {
        let dir = TempDir::new().unwrap();
        let corpus = crawl(dir.path()).unwrap();
        assert!(corpus.is_empty());
    }

    #[test]
    fn crawl_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = crawl(&missing).unwrap_err();
        assert!(matches!(err, Error::Walk(_)), "{err:?}");
    }
}
