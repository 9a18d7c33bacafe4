//! Disjoint-set forest used by Kruskal's algorithm.
//!
//! Sets are plain parent-pointer trees: `find_set` climbs to the root and
//! `union` hangs the second root under the first. There is no path
//! compression and no union by rank, so a find costs O(depth); at the graph
//! sizes this crate targets that is acceptable and keeps the trees exactly
//! as the unions built them, which [`DisjointSetForest::parent_of`] exposes.

use crate::{
    error::{GraphError, Result},
    graph::NO_VERTEX,
};

/// A partition of the vertices `1..=vertex_count` into disjoint sets.
///
/// # Examples
/// ```
/// use spanwise_core::DisjointSetForest;
///
/// let mut forest = DisjointSetForest::new(4);
/// assert!(forest.union(1, 2));
/// assert!(forest.union(3, 4));
/// assert!(!forest.union(2, 1));
/// assert_eq!(forest.find_set(2), 1);
/// assert_eq!(forest.sets(), vec![vec![1, 2], vec![3, 4]]);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DisjointSetForest {
    parents: Vec<usize>,
    set_count: usize,
}

impl DisjointSetForest {
    /// Creates one singleton set per vertex.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        let mut parents: Vec<usize> = (0..=vertex_count).collect();
        if let Some(sentinel) = parents.first_mut() {
            *sentinel = NO_VERTEX;
        }
        Self {
            parents,
            set_count: vertex_count,
        }
    }

    /// Returns the number of vertices in the partition.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parents.len().saturating_sub(1)
    }

    /// Returns `true` when the partition covers no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of disjoint sets.
    #[must_use]
    #[rustfmt::skip]
    pub fn set_count(&self) -> usize { self.set_count }

    /// Returns the tree parent of `vertex` (roots are their own parent).
    #[must_use]
    pub fn parent_of(&self, vertex: usize) -> Option<usize> {
        if vertex == NO_VERTEX {
            return None;
        }
        self.parents.get(vertex).copied()
    }

    /// Returns the root of the tree containing `vertex`.
    ///
    /// Kruskal only feeds validated edge endpoints through here; use
    /// [`DisjointSetForest::try_find_set`] for unchecked input.
    ///
    /// # Panics
    /// Panics when `vertex` lies outside `1..=len()`.
    #[must_use]
    pub fn find_set(&self, vertex: usize) -> usize {
        assert!(
            self.check_vertex(vertex).is_ok(),
            "vertex {vertex} is outside 1..={}",
            self.len()
        );
        self.root_of(vertex)
    }

    /// Returns the root of the tree containing `vertex`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when `vertex` lies outside
    /// `1..=len()`.
    pub fn try_find_set(&self, vertex: usize) -> Result<usize> {
        self.check_vertex(vertex)?;
        Ok(self.root_of(vertex))
    }

    /// Merges the sets containing `left` and `right`, as
    /// [`DisjointSetForest::union`] does.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for the first vertex outside
    /// `1..=len()`; the forest is left untouched.
    pub fn try_union(&mut self, left: usize, right: usize) -> Result<bool> {
        self.check_vertex(left)?;
        self.check_vertex(right)?;
        Ok(self.union(left, right))
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex != NO_VERTEX && vertex <= self.len() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.len(),
            })
        }
    }

    fn root_of(&self, vertex: usize) -> usize {
        let mut current = vertex;
        while self.parents[current] != current {
            current = self.parents[current];
        }
        current
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `false` when both already share a set. Otherwise the root of
    /// `right`'s tree becomes a child of `left`'s root.
    ///
    /// # Panics
    /// Panics when either vertex lies outside `1..=len()`.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find_set(left);
        let right_root = self.find_set(right);
        if left_root == right_root {
            return false;
        }
        self.parents[right_root] = left_root;
        self.set_count -= 1;
        true
    }

    /// Lists every set with its members in ascending order; sets are ordered
    /// by their smallest member.
    #[must_use]
    pub fn sets(&self) -> Vec<Vec<usize>> {
        let mut slot_of_root = vec![None; self.parents.len()];
        let mut sets: Vec<Vec<usize>> = Vec::with_capacity(self.set_count);
        for vertex in 1..=self.len() {
            let root = self.find_set(vertex);
            let slot = *slot_of_root[root].get_or_insert_with(|| {
                sets.push(Vec::new());
                sets.len() - 1
            });
            sets[slot].push(vertex);
        }
        sets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn starts_as_singletons() {
        let forest = DisjointSetForest::new(3);
        assert_eq!(forest.len(), 3);
        assert_eq!(forest.set_count(), 3);
        for vertex in 1..=3 {
            assert_eq!(forest.find_set(vertex), vertex);
            assert_eq!(forest.parent_of(vertex), Some(vertex));
        }
        assert_eq!(forest.parent_of(0), None);
        assert_eq!(forest.parent_of(4), None);
    }

    #[test]
    fn union_hangs_second_root_under_first() {
        let mut forest = DisjointSetForest::new(5);
        assert!(forest.union(1, 2));
        assert!(forest.union(3, 2));
        assert_eq!(forest.parent_of(1), Some(3));
        assert_eq!(forest.parent_of(2), Some(1));
        assert_eq!(forest.find_set(2), 3);
        assert_eq!(forest.set_count(), 3);
    }

    #[test]
    fn union_within_a_set_is_rejected() {
        let mut forest = DisjointSetForest::new(3);
        assert!(forest.union(1, 2));
        assert!(forest.union(2, 3));
        assert!(!forest.union(3, 1));
        assert_eq!(forest.set_count(), 1);
        assert_eq!(forest.sets(), vec![vec![1, 2, 3]]);
    }

    #[test]
    fn sets_are_ordered_by_smallest_member() {
        let mut forest = DisjointSetForest::new(6);
        forest.union(5, 2);
        forest.union(6, 4);
        assert_eq!(
            forest.sets(),
            vec![vec![1], vec![2, 5], vec![3], vec![4, 6]]
        );
    }

    #[test]
    fn empty_forest_has_no_sets() {
        let forest = DisjointSetForest::new(0);
        assert!(forest.is_empty());
        assert!(forest.sets().is_empty());
    }

    #[rstest]
    #[case::zero(0)]
    #[case::past_end(4)]
    fn checked_operations_report_unknown_vertices(#[case] vertex: usize) {
        let mut forest = DisjointSetForest::new(3);
        let expected = GraphError::VertexOutOfRange {
            vertex,
            vertex_count: 3,
        };
        assert_eq!(forest.try_find_set(vertex), Err(expected.clone()));
        assert_eq!(forest.try_union(1, vertex), Err(expected.clone()));
        assert_eq!(forest.try_union(vertex, 2), Err(expected));
        assert_eq!(forest.set_count(), 3);
        assert_eq!(forest.parent_of(1), Some(1));
    }

    #[test]
    fn checked_operations_match_the_asserting_ones() {
        let mut forest = DisjointSetForest::new(4);
        assert_eq!(forest.try_union(4, 2), Ok(true));
        assert_eq!(forest.try_union(2, 4), Ok(false));
        assert_eq!(forest.try_find_set(2), Ok(forest.find_set(2)));
        assert_eq!(forest.try_find_set(2), Ok(4));
    }

    #[rstest]
    #[case::zero(0)]
    #[case::past_end(4)]
    #[should_panic(expected = "is outside")]
    fn find_set_rejects_unknown_vertices(#[case] vertex: usize) {
        let forest = DisjointSetForest::new(3);
        let _ = forest.find_set(vertex);
    }
}
