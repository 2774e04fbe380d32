use anyhow::Context;
use clap::Parser;
use vinedocs::cli::{Cli, Commands};
use vinedocs::highlight::{self, Element, Node};
use vinedocs::nav;
use vinedocs::recent::{JsonFileStore, RecentList};
use vinedocs::record::PageRecord;
use vinedocs::route;
use vinedocs::search::{SearchEngine, SearchHit};

fn main() -> anyhow::Result<()> {
    vinedocs::tracing::init();

    let cli = Cli::parse();
    let navigation = nav::load_default()?;

    match cli.command {
        Commands::Search { query, limit } => {
            let engine = SearchEngine::new(navigation.index);
            let hits = engine.search_limited(&query, limit);
            print_results(&hits, &query);
        }
        Commands::Open { href, query } => {
            let record = navigation
                .index
                .find_by_path(&href)
                .with_context(|| format!("No documentation page at '{}'", href))?
                .clone();
            let mut recent = RecentList::load(default_store()?);
            recent.record_visit(&record);
            let target = route::target_with_highlight(&record.href, query.as_deref().unwrap_or(""));
            println!("{}", target);
        }
        Commands::Recent => {
            let recent = RecentList::load(default_store()?);
            if recent.is_empty() {
                println!("No recently viewed pages.");
            }
            for record in recent.entries() {
                println!("{}  ({})", record.title, record.href);
            }
        }
        Commands::Highlight { href, term } => {
            let record = navigation
                .index
                .find_by_path(&href)
                .with_context(|| format!("No documentation page at '{}'", href))?;
            let mut article = render_page(record);
            let outcome = highlight::apply(&mut article, &term);
            print!("{}", render_marked(&article));
            if outcome.marks == 0 {
                println!("(no occurrences of '{}')", term);
            }
        }
    }

    Ok(())
}

fn default_store() -> anyhow::Result<JsonFileStore> {
    let path = JsonFileStore::default_path()
        .context("Could not determine the platform data directory")?;
    Ok(JsonFileStore::new(path))
}

/// Builds the document tree the portal would render for a page.
fn render_page(record: &PageRecord) -> Element {
    let mut article = Element::new("article");
    article.children.push(Node::Element(Element::with_children(
        "h1",
        vec![Node::text(record.title.clone())],
    )));
    if let Some(description) = &record.description {
        article.children.push(Node::Element(Element::with_children(
            "p",
            vec![Node::text(description.clone())],
        )));
    }
    for snippet in &record.content {
        article.children.push(Node::Element(Element::with_children(
            "p",
            vec![Node::text(snippet.clone())],
        )));
    }
    article
}

/// Flattens the tree to text, wrapping markers in guillemets.
fn render_marked(root: &Element) -> String {
    let mut out = String::new();
    for child in &root.children {
        render_node(child, &mut out);
        out.push('\n');
    }
    out
}

fn render_node(node: &Node, out: &mut String) {
    match node {
        Node::Element(el) => {
            for child in &el.children {
                render_node(child, out);
            }
        }
        Node::Text(text) => out.push_str(text),
        Node::Mark(text) => {
            out.push('«');
            out.push_str(text);
            out.push('»');
        }
    }
}

/// Formats ranked results with relevance normalized to the best hit.
fn print_results(hits: &[SearchHit], query: &str) {
    if hits.is_empty() {
        println!("No results found for '{}'.", query);
        println!();
        println!("Search tips:");
        println!("• Try a shorter or more general term");
        println!("• Section names like 'Production' and 'Compliance' also match");
        println!("• Symbol-only terms match exactly and case-sensitively");
        return;
    }

    println!("Search results for '{}':", query);
    println!();

    let max_score = hits.first().map_or(1.0, |hit| hit.score);
    for (idx, hit) in hits.iter().enumerate() {
        let relevance = ((hit.score / max_score) * 100.0).round() as u8;
        println!(
            "{}. `{}` ({}) - relevance: {}%",
            idx + 1,
            hit.record.title,
            hit.record.href,
            relevance
        );
        if let Some(snippet) = hit.snippet.as_deref().filter(|s| !s.is_empty()) {
            println!("   {}", snippet);
        }
        println!();
    }
}
