use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vinedocs")]
#[command(about = "Search and highlight the vinedocs documentation set", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank documentation pages against a query
    Search {
        query: String,
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,
    },
    /// Navigate to a page, recording it as recently viewed
    Open {
        href: String,
        /// Attach this query as the highlight parameter of the target
        #[arg(short, long)]
        query: Option<String>,
    },
    /// List recently viewed pages, most recent first
    Recent,
    /// Render a page's content with every occurrence of a term marked
    Highlight { href: String, term: String },
}
