//! Random demo graphs.
//!
//! [`RandomGraph`] scatters vertices uniformly over a rectangular area and
//! joins each unordered pair independently with a fixed probability. Pass a
//! seeded [`rand::rngs::StdRng`] for reproducible graphs.

use log::debug;
use rand::Rng;

use tether_core::geometry::{Bounds, Point, Size};

use crate::{error::TetherError, graph::Graph};

/// Parameters of an Erdős–Rényi style random graph.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomGraph {
    vertex_count: usize,
    edge_probability: f64,
    area: Bounds,
}

impl Default for RandomGraph {
    fn default() -> Self {
        Self {
            vertex_count: 30,
            edge_probability: 0.10,
            area: Bounds::new_from_top_left(Point::new(50.0, 50.0), Size::new(200.0, 200.0)),
        }
    }
}

impl RandomGraph {
    pub fn new(vertex_count: usize, edge_probability: f64, area: Bounds) -> Self {
        Self {
            vertex_count,
            edge_probability,
            area,
        }
    }

    pub fn set_vertex_count(&mut self, count: usize) -> &mut Self {
        self.vertex_count = count;
        self
    }

    pub fn set_edge_probability(&mut self, probability: f64) -> &mut Self {
        self.edge_probability = probability;
        self
    }

    pub fn set_area(&mut self, area: Bounds) -> &mut Self {
        self.area = area;
        self
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_probability(&self) -> f64 {
        self.edge_probability
    }

    pub fn area(&self) -> Bounds {
        self.area
    }

    /// Draws a new graph from `rng`.
    ///
    /// Vertex positions are drawn first, in index order, then one Bernoulli
    /// trial per pair `i < k` in row-major order. The same seed therefore
    /// always yields the same graph.
    ///
    /// # Errors
    ///
    /// Returns [`TetherError::Graph`] if the edge probability is not a
    /// finite number in `[0, 1]`.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Graph, TetherError> {
        let p = self.edge_probability;
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(TetherError::Graph(format!(
                "edge probability must lie in [0, 1], got {p}"
            )));
        }

        let vertices = (0..self.vertex_count)
            .map(|_| {
                Point::new(
                    self.area.min_x() + self.area.width() * rng.random::<f32>(),
                    self.area.min_y() + self.area.height() * rng.random::<f32>(),
                )
            })
            .collect();

        let mut graph = Graph::from_vertices(vertices);
        for i in 0..self.vertex_count {
            for k in (i + 1)..self.vertex_count {
                if rng.random_bool(p) {
                    graph.add_edge(i, k);
                }
            }
        }

        debug!(
            vertex_count = graph.vertex_count(),
            edge_count = graph.edge_count(),
            edge_probability = p;
            "Random graph generated"
        );
        Ok(graph)
    }
}
