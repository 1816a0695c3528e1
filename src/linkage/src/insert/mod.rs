use log::trace;

use crate::{chain::Chain, fraction::FractionMatrix};

/// Insert every locus missing from `chain`, in ascending index order.
pub fn insert_missing(chain: &mut Chain, matrix: &FractionMatrix) {
    for locus in chain.missing_loci(matrix.n_loci()) {
        let position = insert_locus(chain, locus, matrix);
        trace!("Inserted locus {locus} at position {position}: {chain}");
    }
}

/// Insert `locus` next to its closest chain member, on the side that best preserves the chain's ordering.
/// Returns the position at which `locus` was inserted.
/// 
/// - An empty chain simply receives `locus`.
/// - A single-element chain receives `locus` after its only member.
/// - The closest member is the first one reaching the minimal distance. No-data pairs are candidates too.
pub fn insert_locus(chain: &mut Chain, locus: usize, matrix: &FractionMatrix) -> usize {
    let d = |a: usize, b: usize| matrix.get(a, b);

    if chain.len() < 2 {
        let position = chain.len();
        chain.insert(position, locus);
        return position
    }

    let mut closest = 0;
    for (k, &member) in chain.iter().enumerate().skip(1) {
        if d(member, locus) < d(chain[closest], locus) {
            closest = k;
        }
    }

    let last = chain.len() - 1;
    let position = if closest == 0 {
        // Goes before the head, if it lies further from the second member than the head does.
        match d(locus, chain[1]) > d(chain[0], chain[1]) {
            true  => 0,
            false => 1,
        }
    } else if closest == last {
        match d(locus, chain[last - 1]) > d(chain[last], chain[last - 1]) {
            true  => last + 1,
            false => last,
        }
    } else {
        match d(locus, chain[closest - 1]) < d(chain[closest], chain[closest - 1]) {
            true  => closest,
            false => closest + 1,
        }
    };

    chain.insert(position, locus);
    position
}
