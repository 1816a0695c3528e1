use anyhow::Result;

use pedigree::{Allele, OrganismId, OrganismRecord, Pedigree, Sex};

use crate::fraction::FractionMatrix;

pub fn oid(raw: u32) -> OrganismId {
    OrganismId::new(raw).expect("Organism ids must be non-zero")
}

/// Generic locus names: `L0, L1, ..., L{n-1}`
pub fn loci(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("L{i}")).collect()
}

/// Mock a raw organism record. Parent ids set to `0` are treated as missing.
pub fn record(id: u32, parents: [u32; 2], codes: &[u8]) -> OrganismRecord {
    let genotype = codes.iter()
        .map(|code| Allele::from_code(*code).expect("Invalid allele code"))
        .collect();
    OrganismRecord { id: oid(id), parents: parents.map(OrganismId::new), sex: Sex::Unknown, genotype }
}

pub fn matrix(rows: &[Vec<f64>]) -> FractionMatrix {
    FractionMatrix::from_rows(rows)
}

/// Fraction matrix of loci laid along a line, at the given positions.
pub fn positions_matrix(positions: &[f64]) -> FractionMatrix {
    let rows = positions.iter()
        .map(|a| positions.iter().map(|b| (a - b).abs()).collect())
        .collect::<Vec<Vec<f64>>>();
    FractionMatrix::from_rows(&rows)
}

/// Two-locus, three-generation pedigree:
/// - 1: founder,  homozygous 1/1 at both loci.
/// - 2: child of 1, heterozygous at both loci.
/// - 3: child of 2, homozygous 1/1
/// - 4: child of 2, homozygous 2/2
pub fn scenario_pedigree() -> Result<Pedigree> {
    Pedigree::new(loci(2), vec![
        record(1, [0, 0], &[1, 1, 1, 1]),
        record(2, [1, 0], &[1, 2, 1, 2]),
        record(3, [2, 0], &[1, 1, 1, 1]),
        record(4, [2, 0], &[2, 2, 2, 2]),
    ])
}

/// Three-locus pedigree, where parent 10 has six offspring with mate 20.
/// - Parent 10's phase is only known at locus 0, so that origin-tracking never observes a recombinant.
/// - Parity-based counting observes three type-1 and three type-2 meioses, over loci (0, 1).
/// - Parent 10 is homozygous at locus 2, so that no meiosis is informative for pairs (0, 2) and (1, 2).
pub fn correction_pedigree() -> Result<Pedigree> {
    Pedigree::new(loci(3), vec![
        record(1,  [0, 0],   &[1, 1, 1, 2, 1, 1]),
        record(20, [0, 0],   &[2, 2, 2, 2, 2, 2]),
        record(10, [1, 0],   &[1, 2, 1, 2, 1, 1]),
        record(11, [10, 20], &[1, 2, 1, 2, 1, 2]), // [1 1] type 1
        record(12, [10, 20], &[2, 2, 2, 2, 1, 2]), // [2 2] type 1
        record(13, [10, 20], &[1, 2, 2, 2, 1, 2]), // [1 2] type 2
        record(14, [10, 20], &[2, 2, 1, 2, 1, 2]), // [2 1] type 2
        record(15, [10, 20], &[1, 2, 1, 2, 1, 2]), // [1 1] type 1
        record(16, [10, 20], &[1, 2, 2, 2, 1, 2]), // [1 2] type 2
    ])
}
