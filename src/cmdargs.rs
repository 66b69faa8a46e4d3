use clap::Parser;

/// Rank the most frequent 3-word phrases in each author's commit messages
#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Args {
    /// Input event log, one JSON object per line (github.jsonl as default)
    #[clap(long)]
    pub input: Option<String>,

    /// Output CSV report (output.csv as default)
    #[clap(long)]
    pub output: Option<String>,
}
