//! The `percent-red` driver: shuffle `1..=N`, insert the keys one at a time
//! and report how large the tree is and how much of it is red.

use std::{
    fmt,
    io::{self, Write},
};

use log::debug;
use rand::{Rng, SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;

use crate::{Error, Tree};

pub const USAGE: &str =
    "Please enter how many random numbers should be inserted into the red-black tree.";

/// Largest accepted count, the range of a signed 32-bit integer.
pub const MAX_COUNT: usize = i32::MAX as usize;

/// What a run was asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub count: usize,
    pub seed: Option<u64>,
}

impl Options {
    /// Build options from the raw command-line count.
    ///
    /// # Errors
    ///
    /// [`Error::MissingCount`] or [`Error::InvalidCount`] when `count` is not a
    /// non-negative integer.
    pub fn new(count: Option<&str>, seed: Option<u64>) -> Result<Self, Error> {
        Ok(Options {
            count: parse_count(count)?,
            seed,
        })
    }
}

/// Parse the count exactly as given, without trimming whitespace, up to
/// [`MAX_COUNT`].
pub fn parse_count(raw: Option<&str>) -> Result<usize, Error> {
    let raw = raw.ok_or(Error::MissingCount)?;
    match raw.parse() {
        Ok(count) if count <= MAX_COUNT => Ok(count),
        _ => Err(Error::InvalidCount(raw.to_string())),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Report {
    Empty,
    Populated { size: usize, percent_red: u32 },
}

impl Report {
    /// Summarize `tree`, never asking an empty tree for its red share.
    pub fn of<K>(tree: &Tree<K>) -> Result<Self, Error> {
        if tree.is_empty() {
            return Ok(Report::Empty);
        }
        let ratio = tree.percent_red()?;
        Ok(Report::Populated {
            size: tree.len(),
            percent_red: (100.0 * ratio).round() as u32,
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Empty => write!(f, "There are no nodes in the red-black tree"),
            Report::Populated { size, percent_red } => {
                writeln!(f, "The size of the tree is {size}.")?;
                write!(
                    f,
                    "The percentage of red nodes in the tree is {percent_red} percent."
                )
            }
        }
    }
}

/// `1..=count` in uniformly random order.
pub fn shuffled_keys<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<usize> {
    let mut keys: Vec<usize> = (1..=count).collect();
    keys.shuffle(rng);
    keys
}

pub fn build<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Tree<usize> {
    let mut tree = Tree::new();
    for key in shuffled_keys(count, rng) {
        tree.insert(key);
    }
    debug!(
        "inserted {count} keys: height {}, {} red",
        tree.height(),
        tree.red_count()
    );
    tree
}

/// Build the tree `options` describe and summarize it.
pub fn run(options: &Options) -> Result<Report, Error> {
    let tree = match options.seed {
        Some(seed) => {
            debug!("shuffling with seed {seed}");
            build(options.count, &mut ChaCha8Rng::seed_from_u64(seed))
        }
        None => build(options.count, &mut rand::rng()),
    };
    Report::of(&tree)
}

/// Everything `percent-red` does after its arguments are split: the report
/// goes to `out`, the usage message to `err`. Bad input is not a failure of
/// the command; it only means nothing was done.
pub fn execute<W, E>(
    count: Option<&str>,
    seed: Option<u64>,
    out: &mut W,
    err: &mut E,
) -> io::Result<()>
where
    W: Write + ?Sized,
    E: Write + ?Sized,
{
    let options = match Options::new(count, seed) {
        Ok(options) => options,
        Err(e) => {
            debug!("{e}");
            return writeln!(err, "{USAGE}");
        }
    };
    match run(&options) {
        Ok(report) => writeln!(out, "{report}"),
        Err(e) => writeln!(err, "{e}"),
    }
}
