//! `percent-red`: insert `1..=N` in random order into a red-black tree and
//! report the share of red nodes.
//!
//! Usage:
//!   percent-red [--seed SEED] [-v...] N

use std::io;

use clap::Parser;
use log::error;
use rougeratio::{
    logging,
    report::{self, USAGE},
};

#[derive(Parser, Debug)]
#[command(name = "percent-red", version)]
#[command(about = "Share of red nodes in a red-black tree built from 1..=N shuffled")]
struct Args {
    /// How many keys to insert
    count: Option<String>,

    /// Seed for a reproducible shuffle
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log more; repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            eprintln!("{USAGE}");
            return;
        }
        Err(e) => {
            let _ = e.print();
            return;
        }
    };
    logging::init(args.verbose);

    let (mut out, mut err) = (io::stdout().lock(), io::stderr().lock());
    if let Err(e) = report::execute(args.count.as_deref(), args.seed, &mut out, &mut err) {
        error!("{e}");
    }
}
