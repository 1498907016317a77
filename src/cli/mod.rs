//! Command-line parsing for the MC scan-grid tool.
//!
//! Parsing and dispatch stay separate from the physics and rendering code; names of
//! processes and plot types are validated by their `FromStr` impls.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{OutputFormat, PlotType, Process};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "mcgrid", version, about = "SUSY signal-scan MC planning tool")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the production cross section (fb) for each mass.
    Xsec(LookupArgs),
    /// Print the matching scale and truth-matching efficiency for each mass.
    Match(LookupArgs),
    /// Event-weighted average truth-matching efficiency of a grid.
    Eff(EffArgs),
    /// Render categorized plots of a grid.
    Plot(PlotArgs),
}

/// Process plus masses for the lookup subcommands.
#[derive(Debug, Parser, Clone)]
pub struct LookupArgs {
    /// Production process (GlGl, StopStop, SbotSbot, SqSq, C1N2, C1C1, N2N3, StauStau).
    pub process: Process,

    /// Parent masses in GeV.
    #[arg(required = true, num_args = 1..)]
    pub masses: Vec<f64>,
}

/// Options for `mcgrid eff`.
#[derive(Debug, Parser, Clone)]
pub struct EffArgs {
    /// Grid JSON file.
    #[arg(long, value_name = "JSON")]
    pub grid: PathBuf,

    /// Production process used for the efficiency lookup.
    #[arg(long)]
    pub process: Process,
}

/// Options for `mcgrid plot`.
#[derive(Debug, Parser, Clone)]
pub struct PlotArgs {
    /// Grid JSON file.
    #[arg(long, value_name = "JSON")]
    pub grid: PathBuf,

    /// Model name, used in titles and file names (e.g. T1tttt).
    #[arg(long)]
    pub model: String,

    /// Production process used for the cross-section lookup.
    #[arg(long)]
    pub process: Process,

    /// Plot types to render, comma separated
    /// (events, lumi, lumix8, lumi_br5, lumi_br4, lumi_br2).
    #[arg(
        long = "type",
        value_delimiter = ',',
        default_values_t = [PlotType::Events, PlotType::Lumi]
    )]
    pub plot_types: Vec<PlotType>,

    /// Output file format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Pdf)]
    pub format: OutputFormat,

    /// Directory the plots are written to.
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Extra x-range the axes must cover, as MIN,MAX.
    #[arg(long, value_name = "MIN,MAX", value_parser = parse_range)]
    pub x_range: Option<(f64, f64)>,

    /// Extra y-range the axes must cover, as MIN,MAX.
    #[arg(long, value_name = "MIN,MAX", value_parser = parse_range)]
    pub y_range: Option<(f64, f64)>,
}

/// Parse `"MIN,MAX"` into an ordered pair.
pub fn parse_range(s: &str) -> Result<(f64, f64), String> {
    let (lo, hi) = s
        .split_once(',')
        .ok_or_else(|| format!("expected MIN,MAX, got '{s}'"))?;
    let lo: f64 = lo.trim().parse().map_err(|e| format!("bad range minimum '{lo}': {e}"))?;
    let hi: f64 = hi.trim().parse().map_err(|e| format!("bad range maximum '{hi}': {e}"))?;
    if !(lo.is_finite() && hi.is_finite()) || lo > hi {
        return Err(format!("invalid range {lo},{hi}"));
    }
    Ok((lo, hi))
}
