//! Dense two-dimensional matrices with row-major storage.
//!
//! A [`Matrix`] owns a flat buffer of `rows * columns` cells. Cell `(row,
//! column)` lives at index `column + row * columns`. Every traversal goes
//! through [`Positions`], a coordinate generator that does not borrow the
//! matrix, so the same row-major order is shared by whoever needs to visit
//! cells: force computation, position integration and rendering.
//!
//! Linear operations ([`Matrix::elementwise_add`], [`Matrix::scale_all`],
//! [`Matrix::add_value`]) are only available when the element type
//! implements [`LinearValue`]. A `Matrix<bool>` can be stored, filled and
//! iterated, but trying to scale one does not compile:
//!
//! ```compile_fail
//! use tether_core::matrix::Matrix;
//!
//! let mut flags = Matrix::<bool>::new(2, 2);
//! flags.scale_all(2.0);
//! ```

use std::{
    fmt,
    iter::FusedIterator,
    ops::{Index, IndexMut},
};

use log::debug;
use thiserror::Error;

use crate::value::LinearValue;

/// Error returned by element-wise operations on matrices of different shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("matrices differ in size: {}x{} vs {}x{}", .left.1, .left.0, .right.1, .right.0)]
pub struct ShapeError {
    /// `(rows, columns)` of the matrix being modified.
    pub left: (usize, usize),
    /// `(rows, columns)` of the operand.
    pub right: (usize, usize),
}

/// A cell coordinate inside a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.column)
    }
}

/// Row-major cursor over every cell position of a `rows x columns` grid.
///
/// The cursor only knows the shape it was created for; it never reads
/// matrix contents. Once exhausted it stays exhausted. Obtain a new one to
/// start over.
///
/// # Examples
///
/// ```
/// use tether_core::matrix::{Position, Positions};
///
/// let cells: Vec<Position> = Positions::new(2, 2).collect();
/// assert_eq!(
///     cells,
///     vec![
///         Position::new(0, 0),
///         Position::new(0, 1),
///         Position::new(1, 0),
///         Position::new(1, 1),
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Positions {
    rows: usize,
    columns: usize,
    row: usize,
    column: usize,
}

impl Positions {
    /// Creates a cursor at `(0, 0)` for a grid of the given shape.
    pub fn new(rows: usize, columns: usize) -> Self {
        // A grid without columns has no cells, whatever the row count.
        let row = if columns == 0 { rows } else { 0 };
        Self {
            rows,
            columns,
            row,
            column: 0,
        }
    }

    /// Returns the position the cursor points at, or `None` once exhausted.
    pub fn current(&self) -> Option<Position> {
        (!self.is_exhausted()).then(|| Position::new(self.row, self.column))
    }

    /// Returns `true` when no positions remain.
    pub fn is_exhausted(&self) -> bool {
        self.row >= self.rows
    }

    /// Moves the cursor to the next position. Does nothing once exhausted.
    pub fn advance(&mut self) {
        if self.is_exhausted() {
            return;
        }
        self.column += 1;
        if self.column >= self.columns {
            self.column = 0;
            self.row += 1;
        }
    }

    fn remaining(&self) -> usize {
        if self.is_exhausted() {
            0
        } else {
            (self.rows - self.row) * self.columns - self.column
        }
    }
}

impl Iterator for Positions {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        let position = self.current()?;
        self.advance();
        Some(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Positions {}

impl FusedIterator for Positions {}

/// Fixed-shape dense matrix stored as one contiguous row-major buffer.
///
/// Indexing outside the matrix is a programming error and panics; it is
/// never clamped.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    cells: Vec<T>,
    rows: usize,
    columns: usize,
}

impl<T: Copy + Default> Matrix<T> {
    /// Creates a matrix with `columns * rows` cells set to `T::default()`.
    ///
    /// Note the argument order: width first, then height.
    ///
    /// # Panics
    ///
    /// Panics if `columns * rows` overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tether_core::matrix::Matrix;
    ///
    /// let matrix = Matrix::<f32>::new(3, 2);
    /// assert_eq!(matrix.columns(), 3);
    /// assert_eq!(matrix.rows(), 2);
    /// assert_eq!(matrix.len(), 6);
    /// assert!(matrix.as_slice().iter().all(|&cell| cell == 0.0));
    /// ```
    pub fn new(columns: usize, rows: usize) -> Self {
        let len = columns
            .checked_mul(rows)
            .unwrap_or_else(|| panic!("matrix of {columns}x{rows} cells overflows usize"));
        Self {
            cells: vec![T::default(); len],
            rows,
            columns,
        }
    }

    /// Creates an `n x n` matrix of default cells.
    pub fn square(n: usize) -> Self {
        Self::new(n, n)
    }

    /// Returns the value at `(row, column)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the matrix.
    pub fn get(&self, row: usize, column: usize) -> T {
        self.cells[self.index_of(row, column)]
    }

    /// Stores `value` at `(row, column)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the matrix.
    pub fn set(&mut self, row: usize, column: usize, value: T) {
        let index = self.index_of(row, column);
        self.cells[index] = value;
    }

    /// Stores `value` at both `(i, k)` and `(k, i)`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate lies outside the matrix.
    pub fn set_symmetric(&mut self, i: usize, k: usize, value: T) {
        self.set(i, k, value);
        self.set(k, i, value);
    }

    /// Sets every cell to `value`.
    pub fn fill(&mut self, value: T) {
        for position in self.positions() {
            self[position] = value;
        }
    }

    /// Iterates over every cell with its position, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, T)> + '_ {
        self.positions().map(move |position| (position, self[position]))
    }
}

impl<T> Matrix<T> {
    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the matrix has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if both matrices have the same number of rows and columns.
    ///
    /// Only the dimensions are compared; the element types may differ.
    pub fn same_shape<U>(&self, other: &Matrix<U>) -> bool {
        self.shape() == other.shape()
    }

    /// Returns a fresh row-major cursor over this matrix's positions.
    pub fn positions(&self) -> Positions {
        Positions::new(self.rows, self.columns)
    }

    /// Returns the cells of `row` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    pub fn row(&self, row: usize) -> &[T] {
        assert!(
            row < self.rows,
            "row {row} outside range of {}x{} matrix",
            self.columns,
            self.rows
        );
        let start = row * self.columns;
        &self.cells[start..start + self.columns]
    }

    /// Returns the underlying row-major buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    fn index_of(&self, row: usize, column: usize) -> usize {
        assert!(
            row < self.rows && column < self.columns,
            "index outside range: ({row}, {column}) in {}x{} matrix",
            self.columns,
            self.rows
        );
        column + row * self.columns
    }
}

impl<T: LinearValue> Matrix<T> {
    /// Adds every cell of `other` into the matching cell of `self`.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] if the shapes differ. Neither matrix is
    /// modified in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use tether_core::matrix::Matrix;
    ///
    /// let mut a = Matrix::<f32>::new(2, 1);
    /// let mut b = Matrix::<f32>::new(2, 1);
    /// b.fill(1.5);
    /// a.elementwise_add(&b).unwrap();
    /// assert_eq!(a.get(0, 1), 1.5);
    ///
    /// let c = Matrix::<f32>::new(1, 2);
    /// assert!(a.elementwise_add(&c).is_err());
    /// ```
    pub fn elementwise_add(&mut self, other: &Matrix<T>) -> Result<(), ShapeError> {
        if !self.same_shape(other) {
            debug!(
                left:? = self.shape(),
                right:? = other.shape();
                "Rejecting element-wise add of differently shaped matrices"
            );
            return Err(ShapeError {
                left: self.shape(),
                right: other.shape(),
            });
        }
        for position in self.positions() {
            self[position] = self[position].add(other[position]);
        }
        Ok(())
    }

    /// Multiplies every cell by `coefficient`.
    pub fn scale_all(&mut self, coefficient: f32) {
        for position in self.positions() {
            self[position] = self[position].scale(coefficient);
        }
    }

    /// Adds `value` to every cell.
    pub fn add_value(&mut self, value: T) {
        for position in self.positions() {
            self[position] = self[position].add(value);
        }
    }

    /// Sums the cells of `row`, starting from `T::default()`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    pub fn row_sum(&self, row: usize) -> T {
        self.row(row)
            .iter()
            .fold(T::default(), |acc, &cell| acc.add(cell))
    }
}

impl<T> Index<Position> for Matrix<T> {
    type Output = T;

    fn index(&self, position: Position) -> &Self::Output {
        &self.cells[self.index_of(position.row, position.column)]
    }
}

impl<T> IndexMut<Position> for Matrix<T> {
    fn index_mut(&mut self, position: Position) -> &mut Self::Output {
        let index = self.index_of(position.row, position.column);
        &mut self.cells[index]
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::geometry::Point;

    #[test]
    fn test_new_matrix_is_default_filled() {
        let matrix = Matrix::<Point>::new(4, 3);
        assert_eq!(matrix.rows(), 3);
        assert_eq!(matrix.columns(), 4);
        assert_eq!(matrix.len(), 12);
        assert!(matrix.as_slice().iter().all(|cell| cell.is_zero()));
    }

    #[test]
    fn test_empty_matrix() {
        let matrix = Matrix::<f32>::new(0, 5);
        assert!(matrix.is_empty());
        assert_eq!(matrix.positions().count(), 0);

        let matrix = Matrix::<f32>::new(5, 0);
        assert!(matrix.is_empty());
        assert_eq!(matrix.positions().count(), 0);
    }

    #[test]
    fn test_get_set_uses_row_major_layout() {
        let mut matrix = Matrix::<f32>::new(3, 2);
        matrix.set(1, 2, 7.0);
        matrix.set(0, 1, 3.0);

        assert_eq!(matrix.get(1, 2), 7.0);
        assert_eq!(matrix.get(0, 1), 3.0);
        assert_eq!(matrix.as_slice(), &[0.0, 3.0, 0.0, 0.0, 0.0, 7.0]);
        assert_eq!(matrix.row(1), &[0.0, 0.0, 7.0]);
    }

    #[test]
    #[should_panic(expected = "index outside range")]
    fn test_get_out_of_range_column_panics() {
        let matrix = Matrix::<f32>::new(3, 2);
        matrix.get(0, 3);
    }

    #[test]
    #[should_panic(expected = "index outside range")]
    fn test_set_out_of_range_row_panics() {
        let mut matrix = Matrix::<f32>::new(3, 2);
        matrix.set(2, 0, 1.0);
    }

    #[test]
    fn test_set_symmetric_touches_only_two_cells() {
        let mut matrix = Matrix::<bool>::square(4);
        matrix.set_symmetric(1, 3, true);

        for (position, value) in matrix.cells() {
            let expected = position == Position::new(1, 3) || position == Position::new(3, 1);
            assert_eq!(value, expected, "unexpected value at {position}");
        }
    }

    #[test]
    fn test_set_symmetric_on_diagonal() {
        let mut matrix = Matrix::<bool>::square(2);
        matrix.set_symmetric(1, 1, true);
        assert_eq!(matrix.cells().filter(|(_, value)| *value).count(), 1);
    }

    #[test]
    fn test_positions_row_major_order() {
        let positions: Vec<String> = Positions::new(2, 3).map(|p| p.to_string()).collect();
        assert_eq!(positions, vec!["0,0", "0,1", "0,2", "1,0", "1,1", "1,2"]);
    }

    #[test]
    fn test_positions_cursor_api() {
        let mut cursor = Positions::new(1, 2);
        assert_eq!(cursor.current(), Some(Position::new(0, 0)));
        assert_eq!(cursor.len(), 2);

        cursor.advance();
        assert_eq!(cursor.current(), Some(Position::new(0, 1)));
        assert!(!cursor.is_exhausted());

        cursor.advance();
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.current(), None);

        // Advancing past the end is harmless
        cursor.advance();
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn test_fresh_cursor_restarts() {
        let matrix = Matrix::<f32>::new(2, 2);
        let mut first = matrix.positions();
        assert_eq!(first.by_ref().count(), 4);
        assert!(first.is_exhausted());
        assert_eq!(matrix.positions().count(), 4);
    }

    #[test]
    fn test_fill() {
        let mut matrix = Matrix::<f32>::new(3, 3);
        matrix.fill(2.5);
        assert!(matrix.as_slice().iter().all(|&cell| cell == 2.5));

        let mut flags = Matrix::<bool>::new(2, 2);
        flags.fill(true);
        assert!(flags.as_slice().iter().all(|&cell| cell));
    }

    #[test]
    fn test_elementwise_add() {
        let mut a = Matrix::<Point>::new(2, 2);
        let mut b = Matrix::<Point>::new(2, 2);
        a.set(0, 0, Point::new(1.0, 1.0));
        b.set(0, 0, Point::new(2.0, -1.0));
        b.set(1, 1, Point::new(0.5, 0.5));

        a.elementwise_add(&b).unwrap();
        assert_eq!(a.get(0, 0), Point::new(3.0, 0.0));
        assert_eq!(a.get(1, 1), Point::new(0.5, 0.5));
        assert!(a.get(0, 1).is_zero());
    }

    #[test]
    fn test_elementwise_add_shape_mismatch_leaves_operands_untouched() {
        let mut a = Matrix::<f32>::new(2, 3);
        a.fill(1.0);
        let mut b = Matrix::<f32>::new(3, 2);
        b.fill(5.0);
        let a_before = a.clone();
        let b_before = b.clone();

        let err = a.elementwise_add(&b).unwrap_err();
        assert_eq!(err.left, (3, 2));
        assert_eq!(err.right, (2, 3));
        assert_eq!(err.to_string(), "matrices differ in size: 2x3 vs 3x2");
        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }

    #[test]
    fn test_scale_all_and_add_value() {
        let mut matrix = Matrix::<f32>::new(5, 10);
        for position in matrix.positions() {
            matrix[position] = (position.row * 100 + position.column) as f32;
        }
        matrix.scale_all(0.5);
        assert_eq!(matrix.get(3, 4), 152.0);

        matrix.add_value(1.0);
        assert_eq!(matrix.get(0, 0), 1.0);
        assert_eq!(matrix.get(9, 4), 453.0);
    }

    #[test]
    fn test_row_sum() {
        let mut matrix = Matrix::<Point>::new(3, 2);
        matrix.set(1, 0, Point::new(1.0, 2.0));
        matrix.set(1, 2, Point::new(-3.0, 1.0));
        assert_eq!(matrix.row_sum(1), Point::new(-2.0, 3.0));
        assert!(matrix.row_sum(0).is_zero());
    }

    #[test]
    fn test_same_shape_across_element_types() {
        let points = Matrix::<Point>::new(4, 4);
        let flags = Matrix::<bool>::new(4, 4);
        let wide = Matrix::<bool>::new(5, 4);
        assert!(points.same_shape(&flags));
        assert!(!points.same_shape(&wide));
    }

    #[test]
    fn test_positions_are_distinct() {
        let set: HashSet<Position> = Positions::new(7, 3).collect();
        assert_eq!(set.len(), 21);
    }
}
