//! Frame export for rendered graph layouts.
//!
//! The [`Exporter`] trait is the seam between a simulation and whatever
//! stores its frames. [`svg::Svg`] is the file-backed implementation.

pub mod svg;

use std::io;

use thiserror::Error;

use crate::graph::Graph;

/// A sink that receives the state of a graph as one frame.
pub trait Exporter {
    /// Writes the current state of `graph` as a frame.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] when the frame cannot be rendered or stored.
    fn export_frame(&self, graph: &Graph) -> Result<(), Error>;
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
