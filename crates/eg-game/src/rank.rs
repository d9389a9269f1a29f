//! Queue position by distance to the exit.

/// Dense proximity ranks: `ranks[k]` is how many entries of `distances` come
/// before entry `k` when sorted ascending (0 = closest).
///
/// A stable sort of the indices by distance yields the visiting order; the
/// rank of each entry is its position in that order, i.e. the order sorted
/// back by index.  Equal distances keep their input order.  O(n log n).
pub fn proximity_ranks(distances: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..distances.len()).collect();
    order.sort_by(|&a, &b| distances[a].total_cmp(&distances[b]));

    let mut ranks = vec![0; distances.len()];
    for (rank, &k) in order.iter().enumerate() {
        ranks[k] = rank;
    }
    ranks
}
