use anyhow::Result;

use crate::{Allele, Organism, OrganismId, OrganismRecord, Pedigree, Sex, Genotype};

/// Build an organism id. Panics on `0`
pub fn oid(raw: u32) -> OrganismId {
    OrganismId::new(raw).expect("Organism ids must be non-zero")
}

/// Convert raw allele codes into allele calls. Panics on invalid codes.
pub fn calls(codes: &[u8]) -> Vec<Option<Allele>> {
    codes.iter()
        .map(|code| Allele::from_code(*code).expect("Invalid allele code"))
        .collect()
}

pub fn genotype(codes: &[u8]) -> Genotype {
    Genotype::new(calls(codes))
}

/// Mock a raw organism record.
/// # Arguments:
/// - `id`     : raw id of the organism.
/// - `parents`: raw parent ids. `0` = no parent.
/// - `codes`  : flat list of `2*M` allele codes.
pub fn record(id: u32, parents: [u32; 2], codes: &[u8]) -> OrganismRecord {
    OrganismRecord {
        id      : oid(id),
        parents : parents.map(OrganismId::new),
        sex     : Sex::Unknown,
        genotype: calls(codes),
    }
}

/// Mock a standalone organism, with no registered children, nor gametes.
pub fn mock_organism(id: u32, parents: [u32; 2], codes: &[u8]) -> Organism {
    Organism::from(record(id, parents, codes))
}

/// Two-locus, three-generation pedigree:
/// - 1: founder,  homozygous 1/1 at both loci.
/// - 2: child of 1, heterozygous at both loci.
/// - 3: child of 2, homozygous 1/1
/// - 4: child of 2, homozygous 2/2
pub fn scenario_pedigree() -> Result<Pedigree> {
    Pedigree::new(vec!["L0".to_string(), "L1".to_string()], vec![
        record(1, [0, 0], &[1, 1, 1, 1]),
        record(2, [1, 0], &[1, 2, 1, 2]),
        record(3, [2, 0], &[1, 1, 1, 1]),
        record(4, [2, 0], &[2, 2, 2, 2]),
    ])
}
