//! OpenSCAD solid-model emitter.
//!
//! Serializes an ordered [`SolidOp`] recipe into OpenSCAD source by folding
//! the operations left to right: each `Add` run wraps the accumulated tree
//! in a `union()`, each `Cut` run in a `difference()`. Declaration order is
//! therefore preserved exactly; a cut never affects material added after it.

use crate::error::{EmitError, EmitResult};
use pedalkit_layout::{Shape3, SolidOp, SolidPart};

/// Render one solid part plan to OpenSCAD source.
pub fn render_part(part: &SolidPart) -> EmitResult<String> {
    let groups = group_ops(&part.ops);
    let mut iter = groups.into_iter();

    let first = match iter.next() {
        Some((true, shapes)) => shapes,
        _ => return Err(EmitError::EmptyPart(part.name.clone())),
    };

    let mut tree = union_block(&first);
    for (is_add, shapes) in iter {
        let keyword = if is_add { "union()" } else { "difference()" };
        let mut body = indent(&tree);
        for shape in shapes {
            body.push('\n');
            body.push_str(&indent(&shape_statement(&shape)));
        }
        tree = format!("{} {{\n{}\n}}", keyword, body);
    }

    tracing::debug!(part = %part.name, ops = part.ops.len(), "Rendered OpenSCAD part");
    Ok(format!("// {}\n{}\n", part.name, tree))
}

/// Collapse consecutive ops of the same polarity into runs.
fn group_ops(ops: &[SolidOp]) -> Vec<(bool, Vec<Shape3>)> {
    let mut groups: Vec<(bool, Vec<Shape3>)> = Vec::new();
    for op in ops {
        let (is_add, shape) = match op {
            SolidOp::Add(s) => (true, *s),
            SolidOp::Cut(s) => (false, *s),
        };
        match groups.last_mut() {
            Some((polarity, shapes)) if *polarity == is_add => shapes.push(shape),
            _ => groups.push((is_add, vec![shape])),
        }
    }
    groups
}

fn union_block(shapes: &[Shape3]) -> String {
    if shapes.len() == 1 {
        return shape_statement(&shapes[0]);
    }
    let body = shapes
        .iter()
        .map(|s| indent(&shape_statement(s)))
        .collect::<Vec<_>>()
        .join("\n");
    format!("union() {{\n{}\n}}", body)
}

fn shape_statement(shape: &Shape3) -> String {
    match shape {
        Shape3::Cuboid { origin, size } => {
            let cube = format!("cube([{}, {}, {}]);", size.x, size.y, size.z);
            if origin.x == 0.0 && origin.y == 0.0 && origin.z == 0.0 {
                cube
            } else {
                format!(
                    "translate([{}, {}, {}]) {}",
                    origin.x, origin.y, origin.z, cube
                )
            }
        }
        Shape3::Cylinder {
            origin,
            diameter,
            height,
        } => format!(
            "translate([{}, {}, {}]) cylinder(d = {}, h = {});",
            origin.x, origin.y, origin.z, diameter, height
        ),
    }
}

fn indent(block: &str) -> String {
    block
        .lines()
        .map(|line| format!("\t{}", line))
        .collect::<Vec<_>>()
        .join("\n")
}
