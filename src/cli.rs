use anyhow::Result;
use clap::{Args, Parser};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "hotfile")]
#[command(about = "List the files of a git repository in order of their hotness")]
#[command(long_about = "List the files of a git repository in order of their hotness.\n\n\
Hotness is the number of lines that have been modified. It excludes the lines \
a file was created with, forgets everything before a file was deleted, and \
ignores binary files. E.g. if a file is created with 10 lines and 5 more are \
added later, its hotness is 5.")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[arg(long, help = "Output as JSON", conflicts_with = "ndjson")]
    pub json: bool,

    #[arg(long, help = "Output as NDJSON")]
    pub ndjson: bool,

    #[arg(short, long, help = "Enable debug logging on stderr")]
    pub verbose: bool,

    #[arg(help = "Path inside the repository to analyze")]
    pub path: Option<String>,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, help = "Path to git repository")]
    pub repo: Option<PathBuf>,

    #[arg(long, help = "Only count commits more recent than this date (passed to git log as is)")]
    pub since: Option<String>,

    #[arg(long, help = "Only count commits older than this date (passed to git log as is)")]
    pub until: Option<String>,

    #[arg(
        short = 'n',
        long,
        default_value_t = 20,
        help = "Number of results to output, 0 outputs all"
    )]
    pub top: usize,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        setup_logging(self.verbose);
        crate::hotness::exec(self.common, self.json, self.ndjson, self.path)
    }
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
