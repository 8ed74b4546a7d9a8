use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use sihsearch::{
    explain, BookmarkStore, FileStorage, ProblemStatement, RecordStore, SearchRequest, TermHits,
};

mod cli;
use cli::display;
use cli::{BookmarkAction, Cli, Commands, SearchArgs};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        error!(error = %err, "command failed");
        for cause in err.chain().skip(1) {
            error!(cause = %cause, "caused by");
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let store = RecordStore::load(&cli.data)
        .with_context(|| format!("could not load corpus from {}", cli.data.display()))?;

    match &cli.command {
        Commands::Search(args) => run_search(&store, args),
        Commands::Facets { json } => {
            let catalog = store.catalog();
            if *json {
                print_json(&catalog)
            } else {
                display::catalog_table(&catalog);
                Ok(())
            }
        }
        Commands::Show { id, json } => {
            let record = find(&store, id)?;
            if *json {
                print_json(record)
            } else {
                display::record_detail(record);
                Ok(())
            }
        }
        Commands::Stats { json } => run_stats(&store, *json),
        Commands::Bookmarks { action } => run_bookmarks(&store, &cli, action),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("could not encode output")?;
    println!("{}", out);
    Ok(())
}

fn find<'a>(store: &'a RecordStore, id: &str) -> Result<&'a ProblemStatement> {
    store
        .get(id)
        .with_context(|| format!("no problem statement with id '{}'", id))
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Serialize)]
struct SearchHit<'a> {
    #[serde(flatten)]
    record: &'a ProblemStatement,
    score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    explain: Option<Vec<TermHits>>,
}

fn run_search(store: &RecordStore, args: &SearchArgs) -> Result<()> {
    let mut request = SearchRequest::new(args.query.clone().unwrap_or_default())
        .with_tags(args.tags.iter().cloned())
        .sorted_by(args.sort);

    if args.min.is_some() || args.max.is_some() {
        let min = args.min.unwrap_or(0);
        let max = args.max.unwrap_or(u32::MAX);
        if min > max {
            bail!("--min ({}) must not exceed --max ({})", min, max);
        }
        request = request.with_submissions(min..=max);
    }

    if !request.tags.is_empty() {
        let catalog = store.catalog();
        for tag in request.tags.iter().filter(|tag| catalog.category_of(tag).is_none()) {
            debug!(tag = %tag, "tag is not in the facet catalog");
        }
    }

    let results = store.run_scored(&request);
    let total = results.len();
    let shown = args.limit.unwrap_or(total).min(total);

    let hits: Vec<SearchHit<'_>> = results
        .iter()
        .take(shown)
        .map(|entry| SearchHit {
            record: entry.record,
            score: entry.score,
            explain: args
                .explain
                .then(|| explain(&request.query, entry.record)),
        })
        .collect();

    if args.json {
        return print_json(&hits);
    }

    let has_query = !request.query.trim().is_empty();
    for hit in &hits {
        display::result_card(
            hit.record,
            has_query.then_some(hit.score),
            hit.explain.as_deref(),
        );
    }
    display::result_footer(shown, total);
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// STATS
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Serialize)]
struct Stats {
    records: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    submissions: Option<SubmissionRange>,
    difficulty: Vec<(String, usize)>,
}

#[derive(Serialize)]
struct SubmissionRange {
    min: u32,
    max: u32,
}

/// Per-difficulty counts: Easy, Medium, Hard first, then anything else.
fn difficulty_counts(store: &RecordStore) -> Vec<(String, usize)> {
    const ORDER: [&str; 3] = ["Easy", "Medium", "Hard"];

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in store {
        *counts.entry(record.difficulty_label()).or_default() += 1;
    }

    let mut ordered: Vec<(String, usize)> = ORDER
        .iter()
        .filter_map(|label| counts.remove(label).map(|count| (label.to_string(), count)))
        .collect();
    ordered.extend(counts.into_iter().map(|(label, count)| (label.to_string(), count)));
    ordered
}

fn run_stats(store: &RecordStore, json: bool) -> Result<()> {
    let stats = Stats {
        records: store.len(),
        submissions: store
            .submission_bounds()
            .map(|(min, max)| SubmissionRange { min, max }),
        difficulty: difficulty_counts(store),
    };
    if json {
        return print_json(&stats);
    }
    display::stats_table(stats.records, store.submission_bounds(), &stats.difficulty);
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// BOOKMARKS
// ═══════════════════════════════════════════════════════════════════════════

fn run_bookmarks(store: &RecordStore, cli: &Cli, action: &BookmarkAction) -> Result<()> {
    let dir = cli.bookmarks_dir();
    debug!(dir = %dir.display(), "bookmark storage");
    let mut bookmarks = BookmarkStore::new(FileStorage::new(dir));

    match action {
        BookmarkAction::List { json } => {
            let list = bookmarks.list();
            if *json {
                print_json(&list)?;
            } else {
                display::bookmark_table(&list);
            }
        }
        BookmarkAction::Add { id } => {
            let record = find(store, id)?;
            bookmarks.add(record);
            println!("Bookmarked {}", record.id);
        }
        BookmarkAction::Remove { id } => {
            if bookmarks.is_bookmarked(id) {
                bookmarks.remove(id);
                println!("Removed {}", id);
            } else {
                println!("{} was not bookmarked", id);
            }
        }
        BookmarkAction::Toggle { id } => {
            let record = find(store, id)?;
            if bookmarks.toggle(record) {
                println!("Bookmarked {}", record.id);
            } else {
                println!("Removed {}", record.id);
            }
        }
    }
    Ok(())
}
