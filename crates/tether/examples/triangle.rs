//! Example: Relaxing a triangle
//!
//! Builds a three-vertex graph by hand, runs the spring layout on it and
//! writes the final frame to `triangle.svg`.

use tether::{
    Graph, Simulation,
    config::{LayoutConfig, StyleConfig},
    export::svg::FrameRenderer,
    geometry::Point,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut graph = Graph::from_vertices(vec![
        Point::new(140.0, 150.0),
        Point::new(160.0, 150.0),
        Point::new(150.0, 250.0),
    ]);
    graph.add_edge(0, 1);
    graph.add_edge(1, 2);
    graph.add_edge(2, 0);

    let simulation = Simulation::new(LayoutConfig::new(0.1, 100.0, 60));
    simulation.run(&mut graph, |step, graph| {
        if step % 20 == 0 {
            let side = graph.vertex(0).distance(graph.vertex(1));
            println!("step {step:>3}: |v0 v1| = {side:.2}");
        }
        Ok(())
    })?;

    let renderer = FrameRenderer::from_style(&StyleConfig::default())?;
    renderer.write_to(&graph, "triangle.svg")?;
    println!("Wrote triangle.svg");

    Ok(())
}
