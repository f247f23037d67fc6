use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use permuterm_dict::wordlist::wordlist::{FileFormat, Wordlist};


/// Load a word list, then answer exact and wildcard queries read from stdin.
///
/// A query containing `*` is a wildcard search (`ab*`, `*ab`, `a*b`, `*ab*`);
/// anything else is looked up exactly.
#[derive(StructOpt)]
#[structopt(name = "permuterm")]
struct Cli {
    /// The path to the word list
    #[structopt(parse(from_os_str))]
    path: PathBuf,
    /// Split each line on this character and index a single column
    #[structopt(short, long)]
    delimiter: Option<char>,
    /// Column holding the term when a delimiter is given
    #[structopt(short = "c", long)]
    word_column: Option<usize>,
    /// Print one JSON object per answer
    #[structopt(long)]
    json: bool,
    /// Read every query before answering, and answer them in parallel
    #[structopt(long)]
    parallel: bool,
    /// Don't print the query prompt
    #[structopt(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let args = Cli::from_args();
    let format = FileFormat::builder()
        .delimiter(args.delimiter)
        .word_column(args.word_column)
        .build();

    let wl = Wordlist::from_file(&args.path, format)
        .with_context(|| format!("could not index {}", args.path.display()))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.parallel {
        let mut tokens = vec![];
        for line in stdin.lock().lines() {
            tokens.extend(line?.split_whitespace().map(str::to_string));
        }
        for answer in wl.query_many(&tokens) {
            answer.write_to(&mut out, args.json)?;
        }
        return Ok(());
    }

    prompt(&mut out, args.quiet)?;
    for line in stdin.lock().lines() {
        for token in line?.split_whitespace() {
            wl.query(token).write_to(&mut out, args.json)?;
        }
        prompt(&mut out, args.quiet)?;
    }
    Ok(())
}

fn prompt<W: Write>(out: &mut W, quiet: bool) -> io::Result<()> {
    if !quiet {
        write!(out, "\nQuery: ")?;
        out.flush()?;
    }
    Ok(())
}
