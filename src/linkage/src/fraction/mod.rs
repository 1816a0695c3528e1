use log::warn;

use crate::cistrans::CisTransTable;

/// Sentinel recombination fraction of a pair of loci for which no informative meiosis was observed.
/// Lies above every observable fraction, so that such pairs never count as linked.
pub const NO_DATA: f64 = 2.0;

/// Fractions strictly below this value are considered informative linkage.
pub const LINKAGE_LIMIT: f64 = 1.0;

/// Symmetric matrix of pairwise recombination fractions.
#[derive(Debug, Clone, PartialEq)]
pub struct FractionMatrix {
    n_loci: usize,
    values: Vec<f64>,
}

impl FractionMatrix {
    /// Derive recombination fractions from accumulated cis-trans counts.
    /// Pairs lacking any observation receive the `NO_DATA` sentinel, and are reported once.
    #[must_use]
    pub fn from_cistrans(table: &CisTransTable) -> Self {
        let n_loci = table.n_loci();
        let mut values = vec![0.0; n_loci * n_loci];
        for i in 0..n_loci {
            for j in 0..n_loci {
                let counts = table.get(i, j);
                values[i * n_loci + j] = counts.fraction().unwrap_or_else(|| {
                    if i < j {
                        warn!("No informative meiosis observed between loci {i} and {j}.");
                    }
                    NO_DATA
                });
            }
        }
        Self { n_loci, values }
    }

    /// Build a matrix from raw rows. Rows are expected to be square and symmetric.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[Vec<f64>]) -> Self {
        let n_loci = rows.len();
        let values = rows.iter().flatten().copied().collect::<Vec<f64>>();
        assert_eq!(values.len(), n_loci * n_loci, "Non-square matrix");
        Self { n_loci, values }
    }

    /// Recombination fraction between loci `i` and `j`.
    /// # Panics
    /// - if `i` or `j` is out of bounds.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n_loci + j]
    }

    /// `true` if at least one informative meiosis was observed between `i` and `j`.
    #[must_use]
    pub fn has_data(&self, i: usize, j: usize) -> bool {
        self.get(i, j) < NO_DATA
    }

    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.n_loci..(i + 1) * self.n_loci]
    }

    #[must_use]
    pub fn n_loci(&self) -> usize {
        self.n_loci
    }
}
