//! DXF to SVG conversion for the laser-cut panel previews.
//!
//! Reads a panel drawing back from disk and re-emits its LWPOLYLINE and
//! CIRCLE entities as an SVG line drawing. The y axis is flipped so the
//! preview matches the DXF's y-up orientation.

use crate::error::{RenderError, RenderResult};
use dxf::entities::EntityType;
use dxf::Drawing;
use std::fmt::Write;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

const MARGIN: f64 = 2.0;
const STROKE_WIDTH: f64 = 0.2;

#[derive(Debug, Clone, Copy)]
struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    fn empty() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    fn include(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    fn is_empty(&self) -> bool {
        self.min_x > self.max_x
    }
}

/// Convert a DXF panel drawing on disk to an SVG string.
pub fn dxf_to_svg(dxf_path: &Path) -> RenderResult<String> {
    let mut reader = BufReader::new(File::open(dxf_path)?);
    let drawing = Drawing::load(&mut reader).map_err(|source| RenderError::DxfParse {
        path: dxf_path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %dxf_path.display(), "Loaded DXF for SVG conversion");
    Ok(drawing_to_svg(&drawing))
}

fn drawing_to_svg(drawing: &Drawing) -> String {
    let mut bounds = Bounds::empty();
    for entity in drawing.entities() {
        match &entity.specific {
            EntityType::LwPolyline(poly) => {
                for v in &poly.vertices {
                    bounds.include(v.x, v.y);
                }
            }
            EntityType::Circle(circle) => {
                bounds.include(circle.center.x - circle.radius, circle.center.y - circle.radius);
                bounds.include(circle.center.x + circle.radius, circle.center.y + circle.radius);
            }
            _ => {}
        }
    }
    if bounds.is_empty() {
        bounds = Bounds {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 0.0,
            max_y: 0.0,
        };
    }

    // DXF is y-up, SVG is y-down.
    let flip_y = |y: f64| bounds.min_y + bounds.max_y - y;

    let width = bounds.max_x - bounds.min_x + 2.0 * MARGIN;
    let height = bounds.max_y - bounds.min_y + 2.0 * MARGIN;
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}mm\" height=\"{h}mm\" viewBox=\"{x} {y} {w} {h}\">\n",
        x = bounds.min_x - MARGIN,
        y = bounds.min_y - MARGIN,
        w = width,
        h = height
    );
    let _ = writeln!(
        svg,
        "  <g fill=\"none\" stroke=\"black\" stroke-width=\"{}\">",
        STROKE_WIDTH
    );

    for entity in drawing.entities() {
        match &entity.specific {
            EntityType::LwPolyline(poly) => {
                let points = poly
                    .vertices
                    .iter()
                    .map(|v| format!("{},{}", v.x, flip_y(v.y)))
                    .collect::<Vec<_>>()
                    .join(" ");
                let element = if poly.is_closed() {
                    "polygon"
                } else {
                    "polyline"
                };
                let _ = writeln!(svg, "    <{} points=\"{}\"/>", element, points);
            }
            EntityType::Circle(circle) => {
                let _ = writeln!(
                    svg,
                    "    <circle cx=\"{}\" cy=\"{}\" r=\"{}\"/>",
                    circle.center.x,
                    flip_y(circle.center.y),
                    circle.radius
                );
            }
            _ => {}
        }
    }

    svg.push_str("  </g>\n</svg>\n");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use dxf::entities::{Circle, Entity, LwPolyline};
    use dxf::{LwPolylineVertex, Point};

    fn sample_drawing() -> Drawing {
        let mut drawing = Drawing::new();
        let mut outline = LwPolyline::default();
        for (x, y) in [(0.0, 0.0), (100.0, 0.0), (100.0, 50.0), (0.0, 50.0)] {
            outline.vertices.push(LwPolylineVertex {
                x,
                y,
                ..Default::default()
            });
        }
        outline.set_is_closed(true);
        drawing.add_entity(Entity::new(EntityType::LwPolyline(outline)));
        drawing.add_entity(Entity::new(EntityType::Circle(Circle::new(
            Point::new(50.0, 25.0, 0.0),
            6.0,
        ))));
        drawing
    }

    #[test]
    fn test_drawing_to_svg_elements() {
        let svg = drawing_to_svg(&sample_drawing());
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.contains("<polygon points=\"0,50 100,50 100,0 0,0\"/>"));
        assert!(svg.contains("<circle cx=\"50\" cy=\"25\" r=\"6\"/>"));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("panel.dxf");
        let drawing = sample_drawing();
        let mut file = std::io::BufWriter::new(File::create(&path).unwrap());
        drawing.save(&mut file).unwrap();
        drop(file);

        let svg = dxf_to_svg(&path).unwrap();
        assert!(svg.contains("<circle"));
        assert!(svg.contains("<polygon"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = dxf_to_svg(Path::new("/nonexistent/panel.dxf"));
        assert!(matches!(result, Err(RenderError::Io(_))));
    }
}
