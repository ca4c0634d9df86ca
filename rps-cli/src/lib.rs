//! RPS command-line front end.
//!
//! The binary in `main.rs` only installs logging and calls [`run`]; all
//! command handling lives here so it can be driven from tests with an
//! in-memory writer.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use rps_core::{
    export::{self, ExportFormat},
    phase::{PhaseForm, PhaseSequence},
    config::is_valid_tolerance,
    projection, verify, PlatonicSolid, Result, SelectorConfig, SolidSelector, VerifyOptions,
};

#[derive(Parser, Debug)]
#[command(name = "rps")]
#[command(about = "Platonic solids from stereographically projected phase rotors")]
#[command(version)]
pub struct Cli {
    /// Relative edge-length tolerance (overrides RPS_EDGE_TOLERANCE)
    #[arg(long, global = true, value_parser = parse_tolerance_arg)]
    pub edge_tolerance: Option<f64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the rotor for recursion index n and its projection
    Rotor {
        n: u32,

        #[arg(long, value_enum, default_value_t = FormArg::DoubleAngle)]
        form: FormArg,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Distinct rotors among the first LIMIT indices
    Orbit {
        #[arg(long, default_value_t = 64)]
        limit: u32,

        #[arg(long, value_enum, default_value_t = FormArg::DoubleAngle)]
        form: FormArg,
    },

    /// Print or export a solid's vertices
    Solid {
        /// tetrahedron, cube, octahedron, icosahedron or dodecahedron
        name: String,

        #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
        format: FormatArg,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run the verification checks on a solid
    Verify {
        name: String,

        /// Also look for golden-ratio coordinate ratios
        #[arg(long)]
        golden: bool,
    },

    /// Summarise all five solids
    List,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormArg {
    DoubleAngle,
    ConjugatePair,
}

impl From<FormArg> for PhaseForm {
    fn from(arg: FormArg) -> Self {
        match arg {
            FormArg::DoubleAngle => PhaseForm::DoubleAngle,
            FormArg::ConjugatePair => PhaseForm::ConjugatePair,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    Csv,
    Json,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Json => ExportFormat::Json,
        }
    }
}

fn parse_tolerance_arg(raw: &str) -> std::result::Result<f64, String> {
    match raw.trim().parse::<f64>() {
        Ok(v) if is_valid_tolerance(v) => Ok(v),
        _ => Err(format!("expected a positive number, got {:?}", raw)),
    }
}

/// Selector configuration from the environment plus command-line overrides
pub fn selector_config(cli: &Cli) -> SelectorConfig {
    let mut config = SelectorConfig::from_env();
    if let Some(tolerance) = cli.edge_tolerance {
        config.edge_tolerance = tolerance;
    }
    config
}

/// Execute a parsed command, writing human output to `out`
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    match &cli.command {
        Command::Rotor { n, form, json } => rotor(*n, (*form).into(), *json, out),
        Command::Orbit { limit, form } => orbit(*limit, (*form).into(), out),
        Command::Solid { name, format, output } => {
            let solid: PlatonicSolid = name.parse()?;
            let selector = SolidSelector::with_config(selector_config(cli))?;
            let table = selector.solid(solid);
            match output {
                Some(path) => {
                    export::export_to_path(path, table, (*format).into())?;
                    writeln!(out, "Wrote {} vertices of {} to {}", table.len(), solid, path.display())?;
                }
                None => export::write_solid(&mut *out, table, (*format).into())?,
            }
            Ok(())
        }
        Command::Verify { name, golden } => {
            let solid: PlatonicSolid = name.parse()?;
            let config = selector_config(cli);
            let selector = SolidSelector::with_config(config)?;
            let report = verify::full_verify(
                selector.vertices(solid),
                &VerifyOptions {
                    tolerance: config.edge_tolerance,
                    check_golden_ratio: *golden,
                    solid: Some(solid),
                },
            );
            writeln!(out, "{}: {} vertices, {} edges", solid, report.vertex_count, report.edges.edge_count)?;
            writeln!(out, "  edge length      {:.12} (deviation {:e})", report.edges.min_length, report.edges.relative_deviation)?;
            writeln!(out, "  circumradius     {:.12}", report.sphere.mean_radius)?;
            if let Some(found) = report.golden_ratio {
                writeln!(out, "  golden ratio     {}", if found { "found" } else { "not found" })?;
            }
            if let Some(symmetric) = report.symmetric {
                writeln!(
                    out,
                    "  rotation group   {} (order {})",
                    if symmetric { "invariant" } else { "broken" },
                    solid.rotation_group_order()
                )?;
            }
            writeln!(out, "{}", if report.passed { "PASSED" } else { "FAILED" })?;
            Ok(())
        }
        Command::List => {
            let selector = SolidSelector::with_config(selector_config(cli))?;
            writeln!(
                out,
                "{:<14} {:>3} {:>3} {:>3}  {:<14} {:<11} circumradius",
                "solid", "V", "E", "F", "dual", "edge length"
            )?;
            for table in selector.iter() {
                let solid = table.solid;
                writeln!(
                    out,
                    "{:<14} {:>3} {:>3} {:>3}  {:<14} {:<11.6} {:.6}",
                    solid.name(),
                    solid.vertex_count(),
                    solid.edge_count(),
                    solid.face_count(),
                    solid.dual().name(),
                    table.edge_length,
                    table.circumradius()
                )?;
            }
            Ok(())
        }
    }
}

fn rotor(n: u32, form: PhaseForm, json: bool, out: &mut dyn Write) -> Result<()> {
    let step = PhaseSequence::new(form).evaluate(n);
    let projected = projection::project(&step.unit);

    if json {
        let value = serde_json::json!({
            "index": step.index,
            "form": form,
            "phase": step.phase,
            "raw": step.raw,
            "unit": step.unit,
            "projected": projected.as_ref().ok(),
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        return Ok(());
    }

    writeln!(out, "n = {} ({})", n, form)?;
    writeln!(out, "  phase     {:.12}", step.phase)?;
    writeln!(out, "  raw       {}", step.raw)?;
    writeln!(out, "  unit      {}", step.unit)?;
    match projected {
        Ok([x, y, z]) => writeln!(out, "  projected ({:.6}, {:.6}, {:.6})", x, y, z)?,
        Err(err) if err.is_recoverable() => {
            tracing::warn!(index = n, "{}", err);
            writeln!(out, "  projected undefined: {}", err)?
        }
        Err(err) => return Err(err),
    }
    Ok(())
}

fn orbit(limit: u32, form: PhaseForm, out: &mut dyn Write) -> Result<()> {
    let distinct = PhaseSequence::new(form).distinct_rotors(limit, 1e-9);
    writeln!(out, "{} distinct rotors among n < {} ({})", distinct.len(), limit, form)?;
    for step in &distinct {
        writeln!(out, "  n = {:<4} {}", step.index, step.unit)?;
    }
    Ok(())
}
