//! Artifact file generation.
//!
//! Each writer builds its output fully in memory, then persists it with a
//! single `fs::write`, so no partial file is ever left behind. Existing
//! files are overwritten unconditionally. Artifacts are independent: one
//! failed file is logged and counted, and the remaining files in the group
//! are still produced. File names match the ones the firmware and assembly
//! docs reference.

use anyhow::bail;
use pedalkit_core::DesignConfig;
use pedalkit_eda::{button_netlist, config_header, layout_report};
use pedalkit_emit::{panel_bytes, render_part};
use pedalkit_layout::{base_part, lid_part, panel_set, PanelKind};
use pedalkit_render::{dxf_to_svg, render_scad, RenderError};
use std::fs;
use std::path::{Path, PathBuf};

pub const CASE_BASE_SCAD: &str = "esp32_footswitch_case_base.scad";
pub const CASE_LID_SCAD: &str = "esp32_footswitch_case_lid.scad";
pub const NETLIST_FILE: &str = "button_pcb.net";
pub const LAYOUT_FILE: &str = "button_pcb_layout.txt";
pub const FIRMWARE_HEADER: &str = "config.h";
pub const RENDERINGS_DIR: &str = "renderings";

/// File name of the laser-cut drawing for one panel.
pub fn lasercut_file_name(kind: PanelKind) -> String {
    format!("esp32_lasercut_case_{}.dxf", kind.file_stem())
}

/// Persist a batch of in-memory artifacts, continuing past failures.
fn persist_all(
    files: Vec<(PathBuf, anyhow::Result<Vec<u8>>)>,
) -> anyhow::Result<Vec<PathBuf>> {
    let total = files.len();
    let mut written = Vec::new();
    for (path, contents) in files {
        let result = contents.and_then(|bytes| {
            fs::write(&path, bytes)?;
            Ok(())
        });
        match result {
            Ok(()) => {
                tracing::info!("Generated {}", path.display());
                written.push(path);
            }
            Err(err) => {
                tracing::error!("Failed to generate {}: {:#}", path.display(), err);
            }
        }
    }
    if written.len() < total {
        bail!("{} of {} artifacts failed", total - written.len(), total);
    }
    Ok(written)
}

/// Write the OpenSCAD models for the 3D-printed case.
pub fn write_case(config: &DesignConfig, out_dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;
    persist_all(
        [
            (CASE_BASE_SCAD, base_part(config)),
            (CASE_LID_SCAD, lid_part(config)),
        ]
        .into_iter()
        .map(|(file_name, part)| {
            let contents = render_part(&part)
                .map(String::into_bytes)
                .map_err(Into::into);
            (out_dir.join(file_name), contents)
        })
        .collect(),
    )
}

/// Write the DXF drawings for the laser-cut case.
pub fn write_lasercut(config: &DesignConfig, out_dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;
    persist_all(
        panel_set(config)
            .iter()
            .map(|panel| {
                let contents = panel_bytes(panel).map_err(Into::into);
                (out_dir.join(lasercut_file_name(panel.kind)), contents)
            })
            .collect(),
    )
}

/// Write the KiCad netlist and the conceptual layout report.
pub fn write_pcb(config: &DesignConfig, out_dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;
    persist_all(vec![
        (
            out_dir.join(NETLIST_FILE),
            Ok(button_netlist(config).into_bytes()),
        ),
        (
            out_dir.join(LAYOUT_FILE),
            layout_report(config)
                .map(String::into_bytes)
                .map_err(Into::into),
        ),
    ])
}

/// Write the firmware `config.h` header.
pub fn write_firmware(config: &DesignConfig, out_dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;
    persist_all(vec![(
        out_dir.join(FIRMWARE_HEADER),
        Ok(config_header(config).into_bytes()),
    )])
}

/// Outcome of a preview batch.
///
/// Preview rendering is best-effort: a missing OpenSCAD install or a broken
/// DXF fails that one artifact and the batch continues.
#[derive(Debug, Default)]
pub struct RenderSummary {
    pub rendered: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

impl RenderSummary {
    fn success(&mut self, path: PathBuf) {
        self.rendered.push(path);
    }

    fn failure(&mut self, path: PathBuf, error: impl ToString) {
        tracing::warn!("Preview {} failed: {}", path.display(), error.to_string());
        self.failed.push((path, error.to_string()));
    }
}

/// Render PNG previews of the SCAD models and SVG previews of the DXF
/// panels into `out_dir/renderings/`.
///
/// Expects the SCAD and DXF artifacts to already exist in `out_dir`.
pub fn render_previews(config: &DesignConfig, out_dir: &Path) -> anyhow::Result<RenderSummary> {
    let render_dir = out_dir.join(RENDERINGS_DIR);
    fs::create_dir_all(&render_dir)?;

    let mut summary = RenderSummary::default();
    let image_size = (config.rendering.image_width, config.rendering.image_height);
    let mut openscad_missing = false;

    for scad_name in [CASE_BASE_SCAD, CASE_LID_SCAD] {
        let scad_path = out_dir.join(scad_name);
        let png_path = render_dir.join(Path::new(scad_name).with_extension("png"));
        if openscad_missing {
            summary.failure(png_path, "openscad not available");
            continue;
        }
        match render_scad(&scad_path, &png_path, &config.rendering.camera, image_size) {
            Ok(()) => {
                tracing::info!("Rendered {}", png_path.display());
                summary.success(png_path);
            }
            Err(err @ RenderError::ToolNotFound { .. }) => {
                openscad_missing = true;
                summary.failure(png_path, err);
            }
            Err(err) => summary.failure(png_path, err),
        }
    }

    for panel in panel_set(config) {
        let dxf_path = out_dir.join(lasercut_file_name(panel.kind));
        let svg_path = render_dir.join(
            Path::new(&lasercut_file_name(panel.kind)).with_extension("svg"),
        );
        match dxf_to_svg(&dxf_path).and_then(|svg| {
            fs::write(&svg_path, svg)?;
            Ok(())
        }) {
            Ok(()) => {
                tracing::info!("Converted {}", svg_path.display());
                summary.success(svg_path);
            }
            Err(err) => summary.failure(svg_path, err),
        }
    }

    Ok(summary)
}
