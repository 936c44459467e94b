use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};

use link_rank::page_rank::{iterated, sampled, PageRank, PageRankResult, DEFAULT_DAMPING};
use link_rank::{crawl, Corpus, Ranks};

/// Rank the pages of a directory of HTML files.
#[derive(Debug, Parser)]
#[command(name = "link-rank", version)]
struct Cli {
    /// Directory holding the `.html` pages
    corpus: PathBuf,

    /// Probability of following a link rather than jumping to a random page
    #[arg(short, long, default_value_t = DEFAULT_DAMPING, env = "LINK_RANK_DAMPING")]
    damping: f64,

    /// Length of the random walk
    #[arg(short = 'n', long, default_value_t = 10_000, env = "LINK_RANK_SAMPLES")]
    samples: usize,

    /// Largest per-page change at which iteration stops
    #[arg(long, default_value_t = 0.001)]
    tolerance: f64,

    /// Passes allowed before iteration gives up
    #[arg(long, default_value_t = 1000)]
    max_iterations: usize,

    /// Seed of the random walk; drawn from the OS when absent
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    if let Err(e) = run(&Cli::parse()) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let corpus = crawl(&cli.corpus)
        .with_context(|| format!("cannot load corpus from {}", cli.corpus.display()))?;

    let ranks = sample(&corpus, cli)?;
    println!("PageRank Results from Sampling (n = {})", cli.samples);
    print_ranks(&ranks);

    let ranks = iterate(&corpus, cli)?;
    println!("PageRank Results from Iteration");
    print_ranks(&ranks);
    Ok(())
}

fn sample(corpus: &Corpus, cli: &Cli) -> Result<Ranks> {
    let cfg = sampled::Config {
        damping: cli.damping,
        samples: cli.samples,
    };
    let rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let res = sampled::SampledPageRank::new(corpus, &cfg, rng)?.calc()?;
    Ok(res.ranks(corpus))
}

fn iterate(corpus: &Corpus, cli: &Cli) -> Result<Ranks> {
    let cfg = iterated::Config {
        damping: cli.damping,
        tolerance: cli.tolerance,
        max_iterations: cli.max_iterations,
    };
    let res = iterated::IteratedPageRank::new(corpus, &cfg)?.calc()?;
    Ok(res.ranks(corpus))
}

fn print_ranks(ranks: &Ranks) {
    let mut pages: Vec<_> = ranks.iter().collect();
    pages.sort_by(|a, b| a.0.cmp(b.0));
    for (page, rank) in pages {
        println!("  {page}: {rank:.4}");
    }
}
