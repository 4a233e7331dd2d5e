//! Placement directives produced by the layout calculator.
//!
//! Directives are immutable values describing primitive shapes at absolute
//! positions. They carry no backend knowledge; the emitters in
//! `pedalkit-emit` translate them into OpenSCAD source or DXF entities.

use serde::{Deserialize, Serialize};

/// A point in panel-local 2D coordinates (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point in part-local 3D coordinates (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Axis-aligned extents of a cuboid (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Size3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A primitive solid.
///
/// Cuboid origins are the minimum corner. Cylinder origins are the center of
/// the bottom face; the axis always points along +z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape3 {
    /// Axis-aligned box.
    Cuboid { origin: Point3, size: Size3 },
    /// Circular cylinder along +z.
    Cylinder {
        origin: Point3,
        diameter: f64,
        height: f64,
    },
}

impl Shape3 {
    /// Cuboid from a min corner and extents.
    pub fn cuboid(origin: Point3, size: Size3) -> Self {
        Shape3::Cuboid { origin, size }
    }

    /// Cuboid positioned by its center point.
    pub fn cuboid_centered(center: Point3, size: Size3) -> Self {
        Shape3::Cuboid {
            origin: Point3::new(
                center.x - size.x / 2.0,
                center.y - size.y / 2.0,
                center.z - size.z / 2.0,
            ),
            size,
        }
    }

    /// Cylinder standing on its bottom face.
    pub fn cylinder(origin: Point3, diameter: f64, height: f64) -> Self {
        Shape3::Cylinder {
            origin,
            diameter,
            height,
        }
    }

    /// Cylinder centered along its axis at `center.z`.
    pub fn cylinder_centered(center: Point3, diameter: f64, height: f64) -> Self {
        Shape3::Cylinder {
            origin: Point3::new(center.x, center.y, center.z - height / 2.0),
            diameter,
            height,
        }
    }
}

/// One boolean step in a solid part: material added or removed.
///
/// The solid emitter applies these in declaration order, so a `Cut` only
/// affects the material accumulated before it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SolidOp {
    /// Union this shape into the part.
    Add(Shape3),
    /// Subtract this shape from the part built so far.
    Cut(Shape3),
}

/// An ordered boolean recipe for one physical 3D-printed part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolidPart {
    /// Part name, used for artifact file naming and logging.
    pub name: String,
    /// Boolean steps in declaration order.
    pub ops: Vec<SolidOp>,
}

/// An open or closed 2D polyline in panel-local coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<Point2>,
    pub closed: bool,
}

impl Polyline {
    /// Closed rectangle outline from the panel origin.
    ///
    /// The first point is repeated at the end, matching the drawing
    /// exchange convention used for panel outlines.
    pub fn rectangle(width: f64, height: f64) -> Self {
        Self::rectangle_at(0.0, 0.0, width, height)
    }

    /// Closed rectangle outline with an arbitrary minimum corner.
    pub fn rectangle_at(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            points: vec![
                Point2::new(x, y),
                Point2::new(x + width, y),
                Point2::new(x + width, y + height),
                Point2::new(x, y + height),
                Point2::new(x, y),
            ],
            closed: true,
        }
    }
}

/// A circular hole in panel-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleHole {
    pub center: Point2,
    pub diameter: f64,
}

impl CircleHole {
    pub fn new(center: Point2, diameter: f64) -> Self {
        Self { center, diameter }
    }
}

/// The four laser-cut panel outlines.
///
/// `FrontBack` and `LeftRight` are each cut twice; the two copies share one
/// drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelKind {
    Top,
    Bottom,
    FrontBack,
    LeftRight,
}

impl PanelKind {
    /// Stable file stem for the panel's drawing artifact.
    pub fn file_stem(&self) -> &'static str {
        match self {
            PanelKind::Top => "top",
            PanelKind::Bottom => "bottom",
            PanelKind::FrontBack => "front_back",
            PanelKind::LeftRight => "left_right",
        }
    }
}

impl std::fmt::Display for PanelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PanelKind::Top => write!(f, "Top"),
            PanelKind::Bottom => write!(f, "Bottom"),
            PanelKind::FrontBack => write!(f, "Front/Back"),
            PanelKind::LeftRight => write!(f, "Left/Right"),
        }
    }
}

/// An edge of a panel, used to key finger-joint metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelEdge {
    Top,
    Bottom,
    Left,
    Right,
}

/// One finger-joint segment along a panel edge.
///
/// `depth` is the material thickness for a tab and zero for a slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FingerSegment {
    /// Offset of the segment start along the edge.
    pub offset: f64,
    /// Tab protrusion depth; zero marks a slot.
    pub depth: f64,
}

impl FingerSegment {
    /// Whether this segment is a tab (protrudes) rather than a slot.
    pub fn is_tab(&self) -> bool {
        self.depth > 0.0
    }
}

/// Finger-joint segments for one edge of a panel.
///
/// Metadata only: the segments are not cut into the outline. See the joint
/// notes in the panel generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeJoints {
    pub edge: PanelEdge,
    pub segments: Vec<FingerSegment>,
}

/// A named 2D panel: outer outline plus hole and cutout directives in
/// panel-local coordinates. Panels are independent of each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub kind: PanelKind,
    /// Panel width along x.
    pub width: f64,
    /// Panel height along y.
    pub height: f64,
    /// Closed outer outline.
    pub outline: Polyline,
    /// Circular holes.
    pub holes: Vec<CircleHole>,
    /// Non-circular cutouts (closed polylines).
    pub cutouts: Vec<Polyline>,
    /// Finger-joint metadata per mating edge.
    pub joints: Vec<EdgeJoints>,
}

impl Panel {
    /// Perimeter of the outer outline.
    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }

    /// Area of the outer outline.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cuboid_centered() {
        let s = Shape3::cuboid_centered(Point3::new(10.0, 0.0, 5.0), Size3::new(4.0, 2.0, 6.0));
        match s {
            Shape3::Cuboid { origin, size } => {
                assert_eq!(origin, Point3::new(8.0, -1.0, 2.0));
                assert_eq!(size, Size3::new(4.0, 2.0, 6.0));
            }
            _ => panic!("expected cuboid"),
        }
    }

    #[test]
    fn test_cylinder_centered() {
        let s = Shape3::cylinder_centered(Point3::new(1.0, 2.0, 3.0), 6.0, 2.0);
        match s {
            Shape3::Cylinder {
                origin,
                diameter,
                height,
            } => {
                assert_eq!(origin, Point3::new(1.0, 2.0, 2.0));
                assert_eq!(diameter, 6.0);
                assert_eq!(height, 2.0);
            }
            _ => panic!("expected cylinder"),
        }
    }

    #[test]
    fn test_rectangle_outline_repeats_first_point() {
        let r = Polyline::rectangle(150.0, 100.0);
        assert_eq!(r.points.len(), 5);
        assert_eq!(r.points[0], r.points[4]);
        assert!(r.closed);
    }

    #[test]
    fn test_panel_perimeter_and_area() {
        let p = Panel {
            kind: PanelKind::Top,
            width: 150.0,
            height: 100.0,
            outline: Polyline::rectangle(150.0, 100.0),
            holes: Vec::new(),
            cutouts: Vec::new(),
            joints: Vec::new(),
        };
        assert_eq!(p.perimeter(), 500.0);
        assert_eq!(p.area(), 15000.0);
    }
}
