//! Undirected edge storage.
//!
//! [`Adjacency`] keeps a square `bool` matrix whose only mutation is
//! [`Adjacency::set_symmetric`], so `has_edge(i, k) == has_edge(k, i)` holds
//! for every pair at all times. Edge flags are presence markers only; the
//! underlying matrix exposes no arithmetic for them.

use tether_core::matrix::{Matrix, Position};

/// Symmetric edge-presence matrix over `n` vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Adjacency {
    flags: Matrix<bool>,
}

impl Adjacency {
    /// Creates an adjacency for `vertex_count` vertices with no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            flags: Matrix::square(vertex_count),
        }
    }

    /// Number of vertices this adjacency covers.
    pub fn vertex_count(&self) -> usize {
        self.flags.rows()
    }

    /// Sets the edge flag between `i` and `k` in both directions.
    ///
    /// # Panics
    ///
    /// Panics if either vertex index is out of range.
    pub fn set_symmetric(&mut self, i: usize, k: usize, present: bool) {
        self.flags.set_symmetric(i, k, present);
    }

    /// Adds the undirected edge `i`–`k`.
    ///
    /// # Panics
    ///
    /// Panics if either vertex index is out of range.
    pub fn connect(&mut self, i: usize, k: usize) {
        self.set_symmetric(i, k, true);
    }

    /// Returns `true` if `i` and `k` are connected.
    ///
    /// # Panics
    ///
    /// Panics if either vertex index is out of range.
    pub fn has_edge(&self, i: usize, k: usize) -> bool {
        self.flags.get(i, k)
    }

    /// Returns the edge flag of a matrix cell.
    pub fn contains(&self, position: Position) -> bool {
        self.flags[position]
    }

    /// Iterates each undirected edge once as `(i, k)` with `i <= k`.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.flags
            .cells()
            .filter(|(position, present)| *present && position.row <= position.column)
            .map(|(position, _)| (position.row, position.column))
    }

    /// Number of undirected edges, self-loops included.
    pub fn edge_count(&self) -> usize {
        self.pairs().count()
    }

    /// Returns the underlying edge-flag matrix.
    pub fn as_matrix(&self) -> &Matrix<bool> {
        &self.flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_no_edges() {
        let adjacency = Adjacency::new(4);
        assert_eq!(adjacency.vertex_count(), 4);
        assert_eq!(adjacency.edge_count(), 0);
        assert_eq!(adjacency.pairs().count(), 0);
    }

    #[test]
    fn test_connect_is_symmetric() {
        let mut adjacency = Adjacency::new(3);
        adjacency.connect(2, 0);

        assert!(adjacency.has_edge(0, 2));
        assert!(adjacency.has_edge(2, 0));
        assert!(!adjacency.has_edge(0, 1));
        assert!(!adjacency.has_edge(1, 2));
        assert_eq!(adjacency.pairs().collect::<Vec<_>>(), vec![(0, 2)]);
    }

    #[test]
    fn test_set_symmetric_can_clear() {
        let mut adjacency = Adjacency::new(2);
        adjacency.connect(0, 1);
        adjacency.set_symmetric(1, 0, false);

        assert!(!adjacency.has_edge(0, 1));
        assert!(!adjacency.has_edge(1, 0));
    }

    #[test]
    fn test_edge_count() {
        let mut adjacency = Adjacency::new(5);
        adjacency.connect(1, 4);
        adjacency.connect(1, 0);
        adjacency.connect(2, 3);

        assert_eq!(adjacency.edge_count(), 3);
        assert_eq!(
            adjacency.pairs().collect::<Vec<_>>(),
            vec![(0, 1), (1, 4), (2, 3)]
        );
    }

    #[test]
    fn test_self_loop_counted_once() {
        let mut adjacency = Adjacency::new(2);
        adjacency.connect(1, 1);
        assert_eq!(adjacency.edge_count(), 1);
        assert_eq!(adjacency.pairs().collect::<Vec<_>>(), vec![(1, 1)]);
    }

    #[test]
    #[should_panic(expected = "index outside range")]
    fn test_connect_out_of_range_panics() {
        let mut adjacency = Adjacency::new(2);
        adjacency.connect(0, 2);
    }
}
