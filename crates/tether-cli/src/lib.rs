//! CLI logic for the Tether layout tool.
//!
//! This module contains the core CLI logic: it generates a random demo
//! graph, relaxes it with the spring layout and writes SVG frames.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;
use rand::{SeedableRng, rngs::StdRng};

use tether::{
    Simulation, TetherError,
    export::{
        Exporter,
        svg::{FrameRenderer, Svg},
    },
    generate::RandomGraph,
};

/// File name of the frame written after step `step`.
pub fn frame_path(output_dir: &Path, step: usize) -> PathBuf {
    output_dir.join(format!("frame_{step:04}.svg"))
}

/// Run the Tether CLI application
///
/// This function generates the demo graph described by `args`, runs the
/// simulation and writes either one SVG per step or only the final frame.
///
/// # Errors
///
/// Returns `TetherError` for:
/// - Configuration loading errors
/// - An invalid edge probability
/// - Coincident connected vertices during the layout
/// - File I/O and export errors
pub fn run(args: &Args) -> Result<(), TetherError> {
    info!(
        vertices = args.vertices,
        edge_probability = args.edge_probability,
        seed = args.seed,
        output_dir = args.output_dir.display().to_string();
        "Processing graph"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(iterations) = args.iterations {
        app_config.set_iterations(iterations);
    }

    let mut generator = RandomGraph::default();
    generator
        .set_vertex_count(args.vertices)
        .set_edge_probability(args.edge_probability);
    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut graph = generator.generate(&mut rng)?;

    fs::create_dir_all(&args.output_dir)?;
    let renderer = FrameRenderer::from_style(app_config.style())?;
    let simulation = Simulation::new(app_config.layout().clone());

    if args.final_only {
        simulation.run(&mut graph, |_, _| Ok(()))?;
        let exporter = Svg::new(args.output_dir.join("final.svg"), renderer);
        exporter.export_frame(&graph)?;
        info!(output_file = exporter.file_name().display().to_string(); "Final frame exported");
    } else {
        simulation.run(&mut graph, |step, graph| {
            renderer.write_to(graph, frame_path(&args.output_dir, step))?;
            Ok(())
        })?;
        info!(
            frames = app_config.layout().iterations(),
            output_dir = args.output_dir.display().to_string();
            "Frames exported"
        );
    }

    Ok(())
}
