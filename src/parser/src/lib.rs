use std::{
    ffi::OsStr,
    ops::{Add, RangeInclusive},
    path::{Path, PathBuf},
    str::FromStr,
};

use located_error::prelude::*;

use clap::Parser;
use serde::{Serialize, Deserialize};
use log::debug;
use num::One;

mod error;
pub use error::ParserError;

/// Default input file, when none is provided.
pub const DEFAULT_INPUT: &str = "out2.gen";

#[derive(Parser, Debug, Serialize, Deserialize)]
#[clap(name="genmap-rs", author, version, about, long_about = None)]
/// genmap-rs: Infer genetic linkage maps from pedigree genotypes
pub struct Cli {
    ///Set the verbosity level (-v -vv -vvv)
    /// 
    /// Set the verbosity level of this program. Multiple levels allowed {n} 
    ///
    /// -v: Info  |  -vv: Debug  | -vvv: Trace {n}
    /// 
    /// Note that the program will still output warnings by default, even when this flag is off.
    /// Use The --quiet/-q to disable them
    #[clap(short='v', long, parse(from_occurrences), global=true)]
    pub verbose: u8,

    /// Disable warnings.
    /// 
    /// By default, warnings are emmited and redirected to the console, even when verbose mode is off.
    /// Use this argument to disable this. Only errors will be displayed.
    #[clap(short='q', long, global=true)]
    pub quiet: bool,

    /// Input pedigree genotype file (.gen)
    /// 
    /// Line-oriented format: number of families (ignored), number of loci, locus names, family number (ignored),
    /// number of organisms, followed by two lines per organism: '<id> <parent1> <parent2> <sex>' and its
    /// 2*M allele codes (0: missing, 1, 2). Parent ids set to 0 are considered missing.
    #[clap(default_value(DEFAULT_INPUT), parse(try_from_os_str=valid_input_file))]
    pub input: PathBuf,

    /// Known initial order of loci (0-based indices).
    /// 
    /// Bypasses greedy clustering: the provided loci are used as the initial chain, in the given order.
    /// Loci missing from this list are then inserted next to their closest neighbour.
    /// Argument may accept slices (inclusive) and/or discrete integers i.e.
    /// '--order 0-3 7 5' will be parsed as: [0, 1, 2, 3, 7, 5]
    #[clap(short='k', long, multiple_values(true))]
    pub order: Option<Vec<String>>,

    /// Only use reliable, origin-tracked recombination counts.
    /// 
    /// By default, parents with more than four offspring may have their counts replaced with a parity-based
    /// estimate, whenever origin-tracking underestimates recombination. This flag disables that correction.
    #[clap(short='r', long)]
    pub reliable_only: bool,

    /// Output file. The linkage map is printed to the console if unspecified.
    #[clap(short='o', long, parse(from_os_str))]
    pub output: Option<PathBuf>,

    /// Overwrite an existing output file.
    #[clap(short='x', long)]
    pub overwrite: bool,
}

impl Cli {
    /// Dump command line arguments to the console, in `.yaml` format (debug level).
    /// 
    /// # Errors
    /// - if `serde_yaml` fails to parse `Self` to a string.
    pub fn serialize(&self) -> Result<()> {
        let serialized = serde_yaml::to_string(&self)
            .map_err(ParserError::SerializeArgs)
            .loc("While serializing command line arguments")?;
        debug!("\n---- Command line args ----\n{}\n---", serialized);
        Ok(())
    }

    /// Logger verbosity: `0` when `--quiet`, otherwise one level above `--verbose`.
    #[must_use]
    pub fn verbosity(&self) -> u8 {
        if self.quiet {0} else {self.verbose + 1}
    }

    /// Parse the user-provided `--order`, if any. Order is preserved, and duplicates are kept.
    /// 
    /// # Errors
    /// - if any of the provided values cannot be parsed as a range of locus indices.
    pub fn known_order(&self) -> Result<Option<Vec<usize>>> {
        self.order.as_ref()
            .map(|ranges| parse_user_ranges(ranges, "order"))
            .transpose()
            .loc("While parsing --order")
    }
}

/// Ensure `s` points to an existing regular file.
fn assert_file_is_valid(s: &OsStr) -> Result<(), ParserError> {
    use ParserError::{MissingFile, NotAFile};
    let path = Path::new(s);
    match (path.exists(), path.is_file()) {
        (false, _)    => Err(MissingFile(path.display().to_string())),
        (true, false) => Err(NotAFile(path.display().to_string())),
        (true, true)  => Ok(()),
    }
}

fn valid_input_file(s: &OsStr) -> Result<PathBuf> {
    assert_file_is_valid(s).loc("While checking for file validity")?;
    Ok(PathBuf::from(s))
}

/// Convert a user-defined string "range" into a vector of integers.
/// "9-14" thus becomes [9, 10, 11, 12, 13, 14]
/// Note that the range is fully inclusive. 
fn parse_user_range<T>(s: &str, arg: &'static str) -> Result<Vec<T>, ParserError>
where   T                   : FromStr + Add<Output = T> + Ord + One + Copy,
        RangeInclusive<T>   : Iterator<Item = T>,
        <T as FromStr>::Err : ToString,
{
    let parse = |token: &str| token.parse::<T>().map_err(|e| {
        let err = e.to_string();
        ParserError::ParseArg{arg: arg.to_string(), err: format!("{token}: {err}")}
    });

    match s.split_once('-') {
        Some((start, end)) => {
            let (start, end) = (parse(start)?, parse(end)?);
            if start > end {
                return Err(ParserError::DecreasingRange(s.to_string(), arg))
            }
            Ok((start..=end).collect())
        },
        None => Ok(vec![parse(s)?])
    }
}

/// Convert a vector of Strings with user-input ranges to a single vector of integers.
///  - Input will most likely stem from the command line parser, where users are not expected
///    to write every single value they would like to input.
/// 
///     --> ["4-6", "0", "2"] for the user, becomes [4, 5, 6, 0, 2] for our program.
/// 
///  - The order of user-input is preserved, and duplicates are left untouched.
/// 
/// # Errors
///  returns a `ParserError` if the provided ranges cannot be parsed into integers.
pub fn parse_user_ranges<T>(ranges: &[String], arg: &'static str) -> Result<Vec<T>, ParserError>
where   T                   : FromStr + Add<Output = T> + Ord + One + Copy,
        RangeInclusive<T>   : Iterator<Item = T>,
        <T as FromStr>::Err : ToString,
{
    let mut parsed = Vec::with_capacity(ranges.len());
    for range in ranges {
        parsed.extend(parse_user_range(range, arg)?);
    }
    Ok(parsed)
}
