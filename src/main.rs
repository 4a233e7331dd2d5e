use anyhow::bail;
use clap::{Parser, Subcommand};
use pedalkit::artifacts;
use pedalkit::{init_logging, DesignConfig};
use pedalkit_reports::{
    bill_of_materials, laser_estimate, print_estimate, render_laser_text, render_print_text,
    render_text,
};
use std::path::PathBuf;

/// Parametric enclosure and build-artifact generator for a DIY ESP32-S3
/// footswitch keyboard.
#[derive(Parser)]
#[command(name = "pedalkit", version = pedalkit::VERSION, about)]
struct Cli {
    /// Design configuration file (TOML). Defaults are used when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory the generated artifacts are written to.
    #[arg(long, global = true, default_value = "out")]
    out_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the OpenSCAD models for the 3D-printed case.
    Case,
    /// Generate the DXF panel drawings for the laser-cut case.
    Lasercut,
    /// Print the bill of materials and fabrication estimates.
    Bom {
        /// Emit JSON instead of the text report.
        #[arg(long)]
        json: bool,
    },
    /// Generate the KiCad netlist and conceptual layout for the button PCB.
    Pcb,
    /// Generate the firmware config.h header.
    Firmware,
    /// Render PNG/SVG previews (regenerates the SCAD and DXF inputs first).
    Render,
    /// Generate every artifact.
    All,
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => DesignConfig::load(path)?,
        None => DesignConfig::default(),
    };
    tracing::info!(project = %config.project_name, "Loaded design configuration");

    let out_dir = &cli.out_dir;
    match cli.command {
        Command::Case => {
            config.validate_geometry()?;
            artifacts::write_case(&config, out_dir)?;
        }
        Command::Lasercut => {
            config.validate_geometry()?;
            artifacts::write_lasercut(&config, out_dir)?;
        }
        Command::Bom { json } => print_bom(&config, json)?,
        Command::Pcb => {
            config.validate_electrical()?;
            artifacts::write_pcb(&config, out_dir)?;
        }
        Command::Firmware => {
            artifacts::write_firmware(&config, out_dir)?;
        }
        Command::Render => {
            config.validate_geometry()?;
            artifacts::write_case(&config, out_dir)?;
            artifacts::write_lasercut(&config, out_dir)?;
            report_previews(artifacts::render_previews(&config, out_dir)?);
        }
        Command::All => run_all(&config, out_dir)?,
    }

    Ok(())
}

fn print_bom(config: &DesignConfig, json: bool) -> anyhow::Result<()> {
    let items = bill_of_materials(config);
    let print = print_estimate(config);
    let laser = laser_estimate(config);

    if json {
        let report = serde_json::json!({
            "bill_of_materials": items,
            "print_estimate": print,
            "laser_estimate": laser,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_text(&items));
        println!("{}", render_print_text(&print));
        println!("{}", render_laser_text(&laser));
    }
    Ok(())
}

fn report_previews(summary: artifacts::RenderSummary) {
    tracing::info!(
        rendered = summary.rendered.len(),
        failed = summary.failed.len(),
        "Preview batch finished"
    );
}

/// Generate every artifact group, isolating failures so one broken artifact
/// does not stop the rest of the run.
fn run_all(config: &DesignConfig, out_dir: &std::path::Path) -> anyhow::Result<()> {
    config.validate()?;

    let steps = [
        ("case", artifacts::write_case(config, out_dir).map(drop)),
        ("lasercut", artifacts::write_lasercut(config, out_dir).map(drop)),
        ("pcb", artifacts::write_pcb(config, out_dir).map(drop)),
        ("firmware", artifacts::write_firmware(config, out_dir).map(drop)),
        (
            "render",
            artifacts::render_previews(config, out_dir).map(report_previews),
        ),
    ];

    let total = steps.len();
    let mut failures = 0;
    for (name, result) in steps {
        if let Err(err) = result {
            tracing::error!("Artifact group '{}' failed: {:#}", name, err);
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("{} of {} artifact groups failed", failures, total);
    }
    Ok(())
}
