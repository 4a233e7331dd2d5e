//! DXF panel-drawing emitter.
//!
//! Serializes one [`Panel`] per DXF document: a closed LWPOLYLINE outer
//! outline, CIRCLE entities for holes, and closed LWPOLYLINE cutouts. All
//! coordinates are panel-local millimeters.
//!
//! Documents are built fully in memory so callers can persist them whole;
//! identical input panels serialize to byte-identical documents.

use crate::error::EmitResult;
use dxf::entities::{Circle, Entity, EntityType, LwPolyline};
use dxf::enums::AcadVersion;
use dxf::{Drawing, LwPolylineVertex, Point};
use pedalkit_layout::{Panel, Polyline};

/// Build the DXF document for one panel.
pub fn panel_drawing(panel: &Panel) -> Drawing {
    let mut drawing = Drawing::new();
    drawing.header.version = AcadVersion::R2010;

    add_polyline(&mut drawing, &panel.outline);
    for hole in &panel.holes {
        drawing.add_entity(Entity::new(EntityType::Circle(Circle::new(
            Point::new(hole.center.x, hole.center.y, 0.0),
            hole.diameter / 2.0,
        ))));
    }
    for cutout in &panel.cutouts {
        add_polyline(&mut drawing, cutout);
    }

    tracing::debug!(
        panel = %panel.kind,
        holes = panel.holes.len(),
        cutouts = panel.cutouts.len(),
        "Built DXF drawing"
    );
    drawing
}

/// Serialize one panel to DXF bytes.
pub fn panel_bytes(panel: &Panel) -> EmitResult<Vec<u8>> {
    let drawing = panel_drawing(panel);
    let mut buf = Vec::new();
    drawing.save(&mut buf)?;
    Ok(buf)
}

fn add_polyline(drawing: &mut Drawing, polyline: &Polyline) {
    let mut entity = LwPolyline::default();
    for p in &polyline.points {
        entity.vertices.push(LwPolylineVertex {
            x: p.x,
            y: p.y,
            ..Default::default()
        });
    }
    entity.set_is_closed(polyline.closed);
    drawing.add_entity(Entity::new(EntityType::LwPolyline(entity)));
}
