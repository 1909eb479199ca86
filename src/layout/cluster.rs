//! Overlap clustering.
//!
//! # Algorithm
//! Single pass in input order. Each item joins the FIRST existing
//! cluster holding any member it overlaps; otherwise it opens a new
//! cluster. Clusters are never merged afterwards.
//!
//! This is not a connected-components algorithm: an item that bridges
//! two existing clusters only joins the first of them, so the result
//! depends on input order. Existing layouts rely on this behavior.
//!
//! # Complexity
//! O(n²) overlap tests in the worst case.

use crate::models::{overlaps, Timed};

/// Groups items into overlap clusters.
///
/// Every input item appears in exactly one returned cluster, and
/// items keep their relative input order inside each cluster.
pub fn group_by_overlap<T: Timed>(items: &[T]) -> Vec<Vec<&T>> {
    let mut clusters: Vec<Vec<&T>> = Vec::new();

    for item in items {
        let home = clusters
            .iter_mut()
            .find(|cluster| cluster.iter().any(|member| overlaps(*member, item)));
        match home {
            Some(cluster) => cluster.push(item),
            None => clusters.push(vec![item]),
        }
    }

    clusters
}
