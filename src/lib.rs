use std::path::Path;

use located_error::prelude::*;
use genmap_io::{parse::{can_write_file, create_parent_directory}, read::GenReader, write::ReportWriter};
use linkage::{Chain, FractionMatrix, LinkageConfig, LinkageMap};
use parser::Cli;
use pedigree::Pedigree;

#[macro_use]
extern crate log;

/// Load a `.gen` file, reveal the gametes of its pedigree, and infer a linkage map.
/// 
/// # Errors
/// - if the input file cannot be read, or is malformed.
/// - if the pedigree is inconsistent (dangling parents, duplicate organisms, cycles)
/// - if `config.known_order` is invalid.
pub fn load_linkage_map(path: &Path, config: &LinkageConfig) -> Result<LinkageMap> {
    info!("Reading pedigree from {}", path.display());
    let file = GenReader::new(path)?.read()
        .with_loc(|| format!("While parsing {}", path.display()))?;

    let pedigree = Pedigree::new(file.loci, file.records)
        .loc("While building pedigree")?;

    linkage::build_linkage_map(&pedigree, config)
        .loc("While inferring linkage map")
}

/// Infer the linkage map of a `.gen` file, and return its `(chain, fractions)` pair.
/// 
/// # Errors
/// - see [`load_linkage_map`]
pub fn process_pedigree(path: &Path, config: &LinkageConfig) -> Result<(Chain, FractionMatrix)> {
    load_linkage_map(path, config).map(LinkageMap::into_parts)
}

/// Run `genmap-rs` from parsed command line arguments.
/// 
/// # Errors
/// - if `--order` cannot be parsed.
/// - if `--output` already exists and `--overwrite` is off, or cannot be created.
/// - see [`load_linkage_map`]
pub fn run(cli: Cli) -> Result<()> {
    let config = LinkageConfig {
        statistical_correction: !cli.reliable_only,
        known_order           : cli.known_order()?,
    };
    debug!("{config:?}");

    if let Some(output) = &cli.output {
        can_write_file(cli.overwrite, output)?;
        create_parent_directory(output)?;
    }

    let map = load_linkage_map(&cli.input, &config)?;

    ReportWriter::new(cli.output.as_ref())?
        .write_iter(map.junctions())
        .loc("While writing linkage map")
}
