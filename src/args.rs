use clap::Parser;
use std::path::PathBuf;

/// Summarize a delimited export of brokerage trade/order records:
/// echo the header columns and count the data rows.
#[derive(Parser)]
#[clap(version = "1.0", author)]
pub struct Opts {
    /// File to read
    #[clap(long)]
    pub file: PathBuf,

    /// Field delimiter (single ASCII character)
    #[clap(short, long, default_value = ",")]
    pub delimiter: char,

    #[clap(short, long)]
    pub quiet: bool,
    /// Verbose mode (-v, -vv, -vvv, etc)
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Timestamp (sec, ms, ns, none)
    #[clap(short, long)]
    pub ts: Option<stderrlog::Timestamp>,
}

pub fn parse_args() -> Opts {
    Opts::parse()
}
