mod fields;
mod logging;
mod normalizer;
mod record;
mod tokenizer;

use std::io::{self, Read, Write};

use anyhow::Result;
use clap::{ArgAction, Parser};

use crate::record::ParsePolicy;

#[derive(Parser, Debug)]
#[command(author, version, about = "Normalize a fixed-schema CSV stream from stdin to stdout")]
struct Args {
    /// Increase verbosity one level per flag, up to 3 (-vvv for debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Duplicate diagnostics to csvnorm.log
    #[arg(short = 'l', long = "log-to-file")]
    log_to_file: bool,

    /// Abort on malformed timestamps/durations instead of dropping the row
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose, args.log_to_file)?;

    let policy = if args.strict {
        ParsePolicy::Strict
    } else {
        ParsePolicy::Drop
    };

    let mut input = Vec::new();
    io::stdin().read_to_end(&mut input)?;

    let output = normalizer::normalize(&input, policy)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
