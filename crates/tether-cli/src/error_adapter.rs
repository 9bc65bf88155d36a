//! Error adapter for converting TetherError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use tether::{LayoutError, TetherError};

/// Adapter giving a [`TetherError`] a stable diagnostic code and, where one
/// applies, a hint on how to fix it.
pub struct ErrorAdapter<'a>(pub &'a TetherError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            TetherError::Io(_) => "tether::io",
            TetherError::Config(_) => "tether::config",
            TetherError::Graph(_) => "tether::graph",
            TetherError::Layout(_) => "tether::layout",
            TetherError::Export(_) => "tether::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            TetherError::Config(_) => "check the [layout] and [style] tables of the config file",
            TetherError::Graph(_) => "--edge-probability must be between 0 and 1",
            TetherError::Layout(LayoutError::CoincidentVertices { .. }) => {
                "try another --seed so no connected vertices start on the same point"
            }
            TetherError::Layout(LayoutError::NonFiniteForce { .. }) => {
                "connected vertices came too close together; try another --seed"
            }
            TetherError::Layout(LayoutError::NonFinitePosition { .. }) => {
                "lower layout.spring_constant so each step does not overshoot"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Convert a [`TetherError`] into a list of reportable errors.
///
/// Tether errors carry no source spans, so every error currently yields a
/// single reportable.
pub fn to_reportables(err: &TetherError) -> Vec<ErrorAdapter<'_>> {
    vec![ErrorAdapter(err)]
}
