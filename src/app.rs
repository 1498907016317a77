//! Top-level application orchestration.
//!
//! `src/main.rs` only sets up logging; this module is the "real main" that parses
//! CLI arguments and dispatches to the lookup, aggregation and plotting code.

use clap::Parser;

use crate::cli::{Command, EffArgs, LookupArgs, PlotArgs};
use crate::domain::PlotConfig;
use crate::error::{AppError, ScanError};
use crate::plot::{FileCanvas, PlotRequest, check_values, make_plot};

/// Entry point for the `mcgrid` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Xsec(args) => handle_xsec(args),
        Command::Match(args) => handle_match(args),
        Command::Eff(args) => handle_eff(args),
        Command::Plot(args) => handle_plot(args),
    }
}

fn handle_xsec(args: LookupArgs) -> Result<(), AppError> {
    let table = crate::report::format_xsec_table(args.process, &args.masses)?;
    print!("{table}");
    Ok(())
}

fn handle_match(args: LookupArgs) -> Result<(), AppError> {
    let table = crate::report::format_match_table(args.process, &args.masses)?;
    print!("{table}");
    Ok(())
}

fn handle_eff(args: EffArgs) -> Result<(), AppError> {
    let grid = crate::io::read_grid(&args.grid)?;
    let efficiency = crate::report::average_efficiency(grid.points(), args.process)?;
    println!(
        "{}",
        crate::report::format_efficiency_summary(&grid, args.process, efficiency)
    );
    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let config = plot_config_from_args(&args);
    let grid = crate::io::read_grid(&config.grid_path)?;
    if grid.is_empty() {
        return Err(ScanError::EmptyGrid.into());
    }

    check_values(&grid, config.process, &config.plot_types)?;

    std::fs::create_dir_all(&config.out_dir).map_err(|e| ScanError::Render {
        path: config.out_dir.clone(),
        message: e.to_string(),
    })?;

    let mut total_events = 0.0;
    for &plot_type in &config.plot_types {
        let request = PlotRequest {
            model: &config.model,
            process: config.process,
            plot_type,
            x_range: config.x_range,
            y_range: config.y_range,
            out_dir: &config.out_dir,
        };
        let mut canvas = FileCanvas::new(config.format);
        total_events = make_plot(&grid, &request, &mut canvas)?;
    }

    println!(
        "{}: {} plot(s) written to {} ({:.1} million events in the scan)",
        config.model,
        config.plot_types.len(),
        config.out_dir.display(),
        total_events / 1000.0
    );
    Ok(())
}

pub fn plot_config_from_args(args: &PlotArgs) -> PlotConfig {
    PlotConfig {
        grid_path: args.grid.clone(),
        model: args.model.clone(),
        process: args.process,
        plot_types: args.plot_types.clone(),
        format: args.format,
        out_dir: args.out_dir.clone(),
        x_range: args.x_range,
        y_range: args.y_range,
    }
}
