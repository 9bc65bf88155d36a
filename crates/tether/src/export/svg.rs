//! SVG rendering of graph frames.
//!
//! Vertices are drawn as dots and edges as straight line segments whose
//! colors cycle through the configured palette.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use log::{debug, error, info};
use svg::{Document, node::element as svg_element};

use tether_core::{
    color::Color,
    geometry::{Bounds, Point, Size},
};

use crate::{
    config::StyleConfig,
    error::TetherError,
    export::{self, Exporter},
    graph::Graph,
};

/// Turns a [`Graph`] into an SVG document.
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    canvas: Size,
    line_width: f32,
    dot_size: f32,
    background: Color,
    palette: Vec<Color>,
    fit_to_vertices: bool,
    margin: f32,
}

impl FrameRenderer {
    /// Creates a renderer from a style configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TetherError::Config`] if the style is invalid.
    pub fn from_style(style: &StyleConfig) -> Result<Self, TetherError> {
        style.validate()?;
        Ok(Self {
            canvas: style.canvas(),
            line_width: style.line_width(),
            dot_size: style.dot_size(),
            background: style.background_color().map_err(TetherError::Config)?,
            palette: style.palette().map_err(TetherError::Config)?,
            fit_to_vertices: style.fit_to_vertices(),
            margin: style.margin(),
        })
    }

    /// Renders the vertices and edges of `graph`.
    pub fn render(&self, graph: &Graph) -> Document {
        let view = self.view_bounds(graph);

        let doc = Document::new()
            .set(
                "viewBox",
                format!(
                    "{} {} {} {}",
                    view.min_x(),
                    view.min_y(),
                    view.width(),
                    view.height()
                ),
            )
            .set("width", self.canvas.width())
            .set("height", self.canvas.height());

        let background = svg_element::Rectangle::new()
            .set("x", view.min_x())
            .set("y", view.min_y())
            .set("width", view.width())
            .set("height", view.height())
            .set("fill", &self.background);

        let mut edges = svg_element::Group::new().set("id", "edges");
        let mut edge_count = 0usize;
        for (i, k) in graph.edge_pairs().filter(|(i, k)| i != k) {
            let color = &self.palette[edge_count % self.palette.len()];
            edges = edges.add(self.render_edge(graph.vertex(i), graph.vertex(k), color));
            edge_count += 1;
        }

        let mut vertices = svg_element::Group::new().set("id", "vertices");
        for &vertex in graph.vertices() {
            vertices = vertices.add(self.render_vertex(vertex));
        }

        debug!(
            edge_count = edge_count,
            vertex_count = graph.vertex_count();
            "SVG frame rendered"
        );

        doc.add(background).add(edges).add(vertices)
    }

    /// Renders `graph` and serializes the document.
    pub fn render_to_string(&self, graph: &Graph) -> String {
        self.render(graph).to_string()
    }

    /// Renders `graph` into the SVG file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Io`] if the file cannot be created or written.
    pub fn write_to(&self, graph: &Graph, path: impl AsRef<Path>) -> Result<(), export::Error> {
        write_document(path.as_ref(), &self.render(graph))
    }

    fn render_edge(&self, a: Point, b: Point, color: &Color) -> svg_element::Line {
        svg_element::Line::new()
            .set("x1", a.x())
            .set("y1", a.y())
            .set("x2", b.x())
            .set("y2", b.y())
            .set("stroke", color)
            .set("stroke-width", self.line_width)
    }

    fn render_vertex(&self, vertex: Point) -> svg_element::Circle {
        svg_element::Circle::new()
            .set("cx", vertex.x())
            .set("cy", vertex.y())
            .set("r", self.dot_size)
            .set("fill", "black")
    }

    /// Region of layout space shown in the frame.
    fn view_bounds(&self, graph: &Graph) -> Bounds {
        let canvas = Bounds::new_from_top_left(Point::default(), self.canvas);
        if !self.fit_to_vertices {
            return canvas;
        }

        match graph.bounds() {
            Some(bounds) if bounds.min_point().is_finite() => {
                let fitted = bounds.expand(self.margin);
                // A lone vertex with no margin would give an empty view box
                let size = Size::new(fitted.width().max(1.0), fitted.height().max(1.0));
                Bounds::new_from_top_left(fitted.min_point(), size)
            }
            _ => canvas,
        }
    }
}

/// File-backed SVG exporter writing one frame per file.
pub struct Svg {
    file_name: PathBuf,
    renderer: FrameRenderer,
}

impl Svg {
    pub fn new(file_name: impl Into<PathBuf>, renderer: FrameRenderer) -> Self {
        Self {
            file_name: file_name.into(),
            renderer,
        }
    }

    pub fn file_name(&self) -> &Path {
        &self.file_name
    }
}

impl Exporter for Svg {
    fn export_frame(&self, graph: &Graph) -> Result<(), export::Error> {
        self.renderer.write_to(graph, &self.file_name)
    }
}

fn write_document(path: &Path, doc: &Document) -> Result<(), export::Error> {
    let file_name = path.display().to_string();
    info!(file_name = file_name; "Creating SVG file");

    let file = match File::create(path) {
        Ok(file) => file,
        Err(err) => {
            error!(file_name = file_name, err:err; "Failed to create SVG file");
            return Err(export::Error::Io(err));
        }
    };

    let mut writer = BufWriter::new(file);
    if let Err(err) = write!(writer, "{doc}").and_then(|()| writer.flush()) {
        error!(file_name = file_name, err:err; "Failed to write SVG content");
        return Err(export::Error::Io(err));
    }

    Ok(())
}
