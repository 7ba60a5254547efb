//! `prim-vs-kruskal`: read an adjacency matrix and tell whether Prim's and
//! Kruskal's minimum spanning trees are the same.
//!
//! Usage:
//!   prim-vs-kruskal [-v...] [FILE]
//!
//! The input is the vertex count followed by the matrix rows. Without FILE
//! the matrix is read from stdin.

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use clap::Parser;
use log::info;
use rougeratio::{
    logging,
    mst::{AdjacencyMatrix, prim_equals_kruskal},
};

#[derive(Parser, Debug)]
#[command(name = "prim-vs-kruskal", version)]
#[command(about = "Compare Prim's and Kruskal's minimum spanning trees")]
struct Args {
    /// File holding the adjacency matrix
    file: Option<PathBuf>,

    /// Log more; repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    let input = match &args.file {
        Some(path) => {
            info!("Reading input values from {}.", path.display());
            fs::read_to_string(path).map_err(|e| format!("Unable to open {}: {e}", path.display()))
        }
        None => {
            info!("Reading input values from stdin.");
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map(|_| buf)
                .map_err(|e| e.to_string())
        }
    };
    let input = match input {
        Ok(input) => input,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let answer = AdjacencyMatrix::parse(&input).and_then(|matrix| prim_equals_kruskal(&matrix));
    match answer {
        Ok(same) => println!("Does Prim MST = Kruskal MST? {same}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
