//! Edge-local spring layout engine.
//!
//! A [`Graph`] owns vertex positions, a symmetric [`Adjacency`] and a force
//! matrix with one cell per ordered vertex pair. A simulation step has two
//! phases that must run in order and to completion:
//!
//! 1. [`Graph::compute_forces`] overwrites every force cell: connected pairs
//!    get the [`spring_force`] on the row vertex due to the column vertex,
//!    every other cell gets the zero vector.
//! 2. [`Graph::update_positions`] adds each force cell to the position of
//!    its row vertex.
//!
//! Only neighbors pull or push each other. Unconnected vertices never
//! interact.
//!
//! # Examples
//!
//! ```
//! use tether::Graph;
//! use tether_core::geometry::Point;
//!
//! let mut graph = Graph::new(2);
//! graph.set_vertex(1, Point::new(200.0, 0.0));
//! graph.add_edge(0, 1);
//!
//! graph.step().unwrap();
//! assert!((graph.vertex(0).x() - 10.0).abs() < 1e-4);
//! assert!((graph.vertex(1).x() - 190.0).abs() < 1e-4);
//! ```

mod adjacency;
mod force;

pub use adjacency::Adjacency;
pub use force::spring_force;

use log::{debug, trace};

use tether_core::{
    geometry::{Bounds, Point},
    matrix::Matrix,
    value::LinearValue,
};

use crate::error::LayoutError;

/// Default proportionality between force and movement.
pub const DEFAULT_SPRING_CONSTANT: f32 = 0.1;

/// Default distance at which an edge exerts no force.
pub const DEFAULT_REST_LENGTH: f32 = 100.0;

/// Vertex positions, undirected edges and the per-pair force scratch matrix.
#[derive(Debug, Clone)]
pub struct Graph {
    vertices: Vec<Point>,
    edges: Adjacency,
    forces: Matrix<Point>,
    spring_constant: f32,
    rest_length: f32,
}

impl Graph {
    /// Creates a graph of `vertex_count` vertices at the origin, without edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertices: vec![Point::default(); vertex_count],
            edges: Adjacency::new(vertex_count),
            forces: Matrix::square(vertex_count),
            spring_constant: DEFAULT_SPRING_CONSTANT,
            rest_length: DEFAULT_REST_LENGTH,
        }
    }

    /// Creates a graph with the given vertex positions and no edges.
    pub fn from_vertices(vertices: Vec<Point>) -> Self {
        let vertex_count = vertices.len();
        Self {
            vertices,
            ..Self::new(vertex_count)
        }
    }

    /// Set the spring constant for edge forces
    ///
    /// Values above [`MAX_SPRING_CONSTANT`](crate::config::MAX_SPRING_CONSTANT)
    /// make the layout diverge, which [`step`](Self::step) reports as a
    /// [`LayoutError`].
    pub fn set_spring_constant(&mut self, constant: f32) -> &mut Self {
        self.spring_constant = constant;
        self
    }

    /// Set the distance at which edges exert no force
    pub fn set_rest_length(&mut self, length: f32) -> &mut Self {
        self.rest_length = length;
        self
    }

    pub fn spring_constant(&self) -> f32 {
        self.spring_constant
    }

    pub fn rest_length(&self) -> f32 {
        self.rest_length
    }

    /// Number of vertices, fixed at construction.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Current vertex positions, indexed by vertex.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Returns the position of `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of range.
    pub fn vertex(&self, vertex: usize) -> Point {
        self.vertices[vertex]
    }

    /// Moves `vertex` to `position`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of range.
    pub fn set_vertex(&mut self, vertex: usize, position: Point) {
        self.vertices[vertex] = position;
    }

    /// Read-only view of the edges.
    pub fn edges(&self) -> &Adjacency {
        &self.edges
    }

    /// Connects `i` and `k` with an undirected edge.
    ///
    /// # Panics
    ///
    /// Panics if either vertex index is out of range.
    pub fn add_edge(&mut self, i: usize, k: usize) {
        self.edges.connect(i, k);
    }

    /// Returns `true` if `i` and `k` are connected.
    ///
    /// # Panics
    ///
    /// Panics if either vertex index is out of range.
    pub fn has_edge(&self, i: usize, k: usize) -> bool {
        self.edges.has_edge(i, k)
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.edge_count()
    }

    /// Each undirected edge once, as `(i, k)` with `i <= k`.
    pub fn edge_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.pairs()
    }

    /// Forces from the last [`compute_forces`](Self::compute_forces) call.
    ///
    /// Cell `(i, k)` holds the force on vertex `i` due to vertex `k`.
    pub fn forces(&self) -> &Matrix<Point> {
        &self.forces
    }

    /// Returns the force on `vertex` due to `neighbor`.
    pub fn force(&self, vertex: usize, neighbor: usize) -> Point {
        self.forces.get(vertex, neighbor)
    }

    /// Smallest box containing every vertex, or `None` for an empty graph.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.vertices.iter().copied())
    }

    /// Recomputes the whole force matrix from the current positions.
    ///
    /// Cells without an edge are set to zero. A self-loop also exerts no
    /// force: its two endpoints are the same vertex, so the pair has no
    /// direction at any position, and it is skipped rather than reported
    /// as [`LayoutError::CoincidentVertices`].
    ///
    /// # Errors
    ///
    /// Returns, in row-major order of the first offending cell:
    ///
    /// - [`LayoutError::CoincidentVertices`] if two distinct connected
    ///   vertices share a position.
    /// - [`LayoutError::NonFiniteForce`] if a force is infinite or NaN, as
    ///   happens when connected vertices are nearly coincident.
    /// - [`LayoutError::NonFinitePosition`] if applying the forces would move
    ///   a vertex to a non-finite position, as happens when the layout
    ///   diverges under a large spring constant.
    ///
    /// The force matrix is then reset to zero, so a following
    /// [`update_positions`](Self::update_positions) moves nothing.
    pub fn compute_forces(&mut self) -> Result<(), LayoutError> {
        let mut active = 0usize;
        for position in self.forces.positions() {
            let connected = position.row != position.column && self.edges.contains(position);
            if !connected {
                self.forces[position] = Point::default();
                continue;
            }

            let vertex = self.vertices[position.row];
            let neighbor = self.vertices[position.column];
            let force = match spring_force(vertex, neighbor, self.spring_constant, self.rest_length)
            {
                Some(force) if force.is_finite() => force,
                Some(_) => {
                    return Err(self.reset_forces(LayoutError::NonFiniteForce {
                        vertex: position.row,
                        neighbor: position.column,
                    }));
                }
                None => {
                    return Err(self.reset_forces(LayoutError::CoincidentVertices {
                        vertex: position.row,
                        neighbor: position.column,
                    }));
                }
            };
            self.forces[position] = force;
            active += 1;
        }

        if let Some(vertex) =
            (0..self.vertex_count()).find(|&vertex| !self.displaced(vertex).is_finite())
        {
            return Err(self.reset_forces(LayoutError::NonFinitePosition { vertex }));
        }

        trace!(
            vertex_count = self.vertex_count(),
            active_cells = active;
            "Forces computed"
        );
        Ok(())
    }

    /// Moves every vertex by the sum of the forces in its row.
    pub fn update_positions(&mut self) {
        for vertex in 0..self.vertex_count() {
            self.vertices[vertex] = self.displaced(vertex);
        }
    }

    /// Position of `vertex` after adding its row of forces, in column order.
    fn displaced(&self, vertex: usize) -> Point {
        self.forces
            .row(vertex)
            .iter()
            .fold(self.vertices[vertex], |position, &force| {
                LinearValue::add(position, force)
            })
    }

    /// Zeroes the force matrix after a failed pass and hands back `err`.
    fn reset_forces(&mut self, err: LayoutError) -> LayoutError {
        self.forces.fill(Point::default());
        debug!(err:? = err; "Force computation failed, forces reset");
        err
    }

    /// Runs one simulation tick: [`compute_forces`](Self::compute_forces)
    /// followed by [`update_positions`](Self::update_positions).
    ///
    /// # Errors
    ///
    /// Propagates the force computation error; positions are left untouched
    /// in that case.
    pub fn step(&mut self) -> Result<(), LayoutError> {
        self.compute_forces()?;
        self.update_positions();
        Ok(())
    }
}
