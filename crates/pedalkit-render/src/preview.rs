//! OpenSCAD preview snapshots.
//!
//! Shells out to the `openscad` binary to rasterize a `.scad` file into a
//! PNG. The binary is optional tooling; a missing install surfaces as
//! [`RenderError::ToolNotFound`] so callers can skip previews instead of
//! aborting the whole run.

use crate::error::{RenderError, RenderResult};
use std::io;
use std::path::Path;
use std::process::Command;

const OPENSCAD: &str = "openscad";

/// Rasterize a `.scad` file to PNG using the system OpenSCAD install.
pub fn render_scad(
    scad_path: &Path,
    output_png: &Path,
    camera: &str,
    image_size: (u32, u32),
) -> RenderResult<()> {
    render_scad_with(OPENSCAD, scad_path, output_png, camera, image_size)
}

/// Same as [`render_scad`] but with an explicit tool name.
pub fn render_scad_with(
    tool: &str,
    scad_path: &Path,
    output_png: &Path,
    camera: &str,
    image_size: (u32, u32),
) -> RenderResult<()> {
    tracing::info!(scad = %scad_path.display(), png = %output_png.display(), "Rendering preview");

    let output = Command::new(tool)
        .arg("-o")
        .arg(output_png)
        .arg(format!("--camera={}", camera))
        .arg(format!("--imgsize={},{}", image_size.0, image_size.1))
        .arg(scad_path)
        .output()
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => RenderError::ToolNotFound {
                tool: tool.to_string(),
            },
            _ => RenderError::Io(e),
        })?;

    if !output.status.success() {
        return Err(RenderError::ToolFailed {
            tool: tool.to_string(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_tool_is_reported_as_not_found() {
        let result = render_scad_with(
            "definitely-not-an-installed-renderer",
            &PathBuf::from("case.scad"),
            &PathBuf::from("case.png"),
            "0,0,0,45,0,45,100",
            (800, 600),
        );
        assert!(matches!(
            result,
            Err(RenderError::ToolNotFound { tool }) if tool == "definitely-not-an-installed-renderer"
        ));
    }
}
