//! Error types for Tether operations.
//!
//! This module provides the main error type [`TetherError`] which wraps
//! the error conditions that can occur while building, simulating and
//! rendering a graph layout, and [`LayoutError`] for failures of the
//! force computation itself.

use std::io;

use thiserror::Error;

/// Failures of a single force-computation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Two vertices joined by an edge sit on the same point, so the force
    /// between them has no direction.
    #[error("vertices {vertex} and {neighbor} share an edge but occupy the same position")]
    CoincidentVertices { vertex: usize, neighbor: usize },

    /// A spring force overflowed or became NaN, typically because connected
    /// vertices are nearly coincident.
    #[error("force on vertex {vertex} due to vertex {neighbor} is not a finite number")]
    NonFiniteForce { vertex: usize, neighbor: usize },

    /// Applying the forces would move a vertex to an infinite or NaN
    /// position, so the layout has diverged.
    #[error("vertex {vertex} would leave the finite plane; the layout diverged")]
    NonFinitePosition { vertex: usize },
}

/// The main error type for Tether operations.
#[derive(Debug, Error)]
pub enum TetherError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Graph error: {0}")]
    Graph(String),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::Error> for TetherError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
