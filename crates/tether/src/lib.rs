//! Tether - Edge-local spring layout for undirected graphs.
//!
//! Vertices joined by an edge pull together when farther apart than a rest
//! length and push apart when closer. Each simulation step computes one
//! force per connected pair, then moves every vertex by the sum of its
//! forces. Frames can be rendered to SVG after every step.

pub mod config;
pub mod export;
pub mod generate;
pub mod graph;

mod error;

pub use tether_core::{color, geometry, matrix, value};

pub use error::{LayoutError, TetherError};
pub use graph::{Adjacency, Graph};

use log::{debug, info};

use config::LayoutConfig;

/// Drives a [`Graph`] through a fixed number of simulation steps.
///
/// # Examples
///
/// ```rust
/// use tether::{Graph, Simulation, config::LayoutConfig, geometry::Point};
///
/// let mut graph = Graph::from_vertices(vec![Point::new(0.0, 0.0), Point::new(300.0, 0.0)]);
/// graph.add_edge(0, 1);
///
/// let simulation = Simulation::new(LayoutConfig::new(0.1, 100.0, 50));
/// let mut frames = 0;
/// simulation
///     .run(&mut graph, |_, _| {
///         frames += 1;
///         Ok(())
///     })
///     .expect("Simulation failed");
///
/// assert_eq!(frames, 50);
/// let distance = graph.vertex(0).distance(graph.vertex(1));
/// assert!((distance - 100.0).abs() < 1.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    config: LayoutConfig,
}

impl Simulation {
    /// Create a new simulation with the given layout parameters.
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Copies the spring constant and rest length into `graph`.
    pub fn apply_parameters(&self, graph: &mut Graph) {
        graph
            .set_spring_constant(self.config.spring_constant())
            .set_rest_length(self.config.rest_length());
    }

    /// Runs the configured number of steps on `graph`.
    ///
    /// `on_frame` is called after every step with the zero-based step index
    /// and the updated graph.
    ///
    /// # Errors
    ///
    /// Returns the first step or callback error; no further steps run after it.
    pub fn run<F>(&self, graph: &mut Graph, mut on_frame: F) -> Result<(), TetherError>
    where
        F: FnMut(usize, &Graph) -> Result<(), TetherError>,
    {
        self.apply_parameters(graph);

        let iterations = self.config.iterations();
        info!(
            vertex_count = graph.vertex_count(),
            edge_count = graph.edge_count(),
            iterations = iterations;
            "Starting simulation"
        );

        for step in 0..iterations {
            graph.step()?;
            on_frame(step, graph)?;
            debug!(step = step; "Simulation step completed");
        }

        info!(iterations = iterations; "Simulation finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;
    use crate::geometry::Point;

    fn pair(distance: f32) -> Graph {
        let mut graph =
            Graph::from_vertices(vec![Point::new(0.0, 0.0), Point::new(distance, 0.0)]);
        graph.add_edge(0, 1);
        graph
    }

    #[test]
    fn test_apply_parameters() {
        let mut graph = pair(10.0);
        Simulation::new(LayoutConfig::new(0.25, 40.0, 1)).apply_parameters(&mut graph);

        assert_eq!(graph.spring_constant(), 0.25);
        assert_eq!(graph.rest_length(), 40.0);
    }

    #[test]
    fn test_run_reports_every_step() {
        let mut graph = pair(200.0);
        let mut steps = Vec::new();
        Simulation::new(LayoutConfig::new(0.1, 100.0, 5))
            .run(&mut graph, |step, _| {
                steps.push(step);
                Ok(())
            })
            .unwrap();

        assert_eq!(steps, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_run_converges_to_rest_length() {
        let mut graph = pair(250.0);
        Simulation::new(LayoutConfig::default())
            .run(&mut graph, |_, _| Ok(()))
            .unwrap();

        let distance = graph.vertex(0).distance(graph.vertex(1));
        assert!(approx_eq!(f32, distance, 100.0, epsilon = 0.01));
    }

    #[test]
    fn test_zero_iterations_leaves_graph() {
        let mut graph = pair(250.0);
        let mut calls = 0;
        Simulation::new(LayoutConfig::new(0.1, 100.0, 0))
            .run(&mut graph, |_, _| {
                calls += 1;
                Ok(())
            })
            .unwrap();

        assert_eq!(calls, 0);
        assert_eq!(graph.vertex(1), Point::new(250.0, 0.0));
    }

    #[test]
    fn test_callback_error_aborts() {
        let mut graph = pair(200.0);
        let mut calls = 0;
        let result = Simulation::new(LayoutConfig::new(0.1, 100.0, 10)).run(&mut graph, |step, _| {
            calls += 1;
            if step == 2 {
                Err(TetherError::Graph("stop".to_string()))
            } else {
                Ok(())
            }
        });

        assert!(matches!(result, Err(TetherError::Graph(_))));
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_coincident_vertices_abort() {
        let mut graph = Graph::from_vertices(vec![Point::new(5.0, 5.0), Point::new(5.0, 5.0)]);
        graph.add_edge(0, 1);

        let result = Simulation::new(LayoutConfig::default()).run(&mut graph, |_, _| Ok(()));
        assert!(matches!(
            result,
            Err(TetherError::Layout(LayoutError::CoincidentVertices {
                vertex: 0,
                neighbor: 1
            }))
        ));
        assert_eq!(graph.vertex(0), Point::new(5.0, 5.0));
    }
}
