use log::{debug, trace};

use crate::{chain::Chain, fraction::{FractionMatrix, LINKAGE_LIMIT}};

/// Greedily order loci, by repeatedly extending a chain with its nearest unused neighbour.
/// 
/// A chain is grown from every possible starting locus, and the longest one is retained.
/// Ties in length are resolved in favour of the lowest starting locus.
#[must_use]
pub fn form_cluster(matrix: &FractionMatrix) -> Chain {
    let mut best = Chain::new();
    for start in 0..matrix.n_loci() {
        let chain = grow_chain(matrix, start);
        trace!("Chain grown from locus {start}: {chain}");
        if chain.len() > best.len() {
            best = chain;
        }
    }
    debug!("Longest greedy chain spans {} out of {} loci: {best}", best.len(), matrix.n_loci());
    best
}

/// Grow a single chain, starting from `start`.
/// 
/// - The two nearest neighbours of `start` define the initial span, but only the first one joins the chain.
/// - The chain is then extended from the last selected neighbour, as long as the nearest unused locus lies
///   within the accumulated span. Any other unused locus lying at the same (or lower) distance joins along.
pub(crate) fn grow_chain(matrix: &FractionMatrix, start: usize) -> Chain {
    let mut used  = vec![false; matrix.n_loci()];
    let mut chain = Chain::new();
    chain.push(start);
    used[start] = true;

    let Some((first, _)) = nearest_unused(matrix, start, &used, f64::INFINITY) else {
        return chain
    };
    chain.push(first);
    used[first] = true;

    let Some((second, _)) = nearest_unused(matrix, start, &used, f64::INFINITY) else {
        return chain
    };

    let mut span = matrix.get(first, second);
    let mut tail = first;
    while let Some((next, distance)) = nearest_unused(matrix, tail, &used, span) {
        chain.push(next);
        used[next] = true;

        for locus in 0..matrix.n_loci() {
            let d = matrix.get(tail, locus);
            if !used[locus] && d <= distance && d <= span {
                chain.push(locus);
                used[locus] = true;
            }
        }
        span += distance;
        tail = next;
    }
    chain
}

/// Closest unused locus from `from`, along with its distance.
/// Candidates must be informatively linked to `from`, and lie within `max_distance`. 
/// The lowest index wins ties.
fn nearest_unused(matrix: &FractionMatrix, from: usize, used: &[bool], max_distance: f64) -> Option<(usize, f64)> {
    let mut nearest = None;
    let mut best    = LINKAGE_LIMIT;
    for (locus, &distance) in matrix.row(from).iter().enumerate() {
        if !used[locus] && distance < best && distance <= max_distance {
            nearest = Some(locus);
            best    = distance;
        }
    }
    nearest.map(|locus| (locus, best))
}
