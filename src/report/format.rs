//! Formatted terminal output for the lookup subcommands.
//!
//! Formatting lives here so the physics code stays free of presentation details.

use crate::domain::{Grid, Process};
use crate::error::ScanError;
use crate::models::{match_params, xsec};

/// Table of cross sections for a list of masses.
pub fn format_xsec_table(process: Process, masses: &[f64]) -> Result<String, ScanError> {
    let mut out = String::new();
    out.push_str(&format!("{:>10} {:>16}\n", "mass", format!("xsec({process}) [fb]")));
    for &mass in masses {
        let value = xsec(mass, process)?;
        out.push_str(&format!("{mass:>10.1} {value:>16.6e}\n"));
    }
    Ok(out)
}

/// Table of matching parameters for a list of masses.
pub fn format_match_table(process: Process, masses: &[f64]) -> Result<String, ScanError> {
    let mut out = String::new();
    out.push_str(&format!("{:>10} {:>8} {:>10}\n", "mass", "qcut", "eff"));
    for &mass in masses {
        let params = match_params(mass, process)?;
        out.push_str(&format!(
            "{mass:>10.1} {:>8.0} {:>10.3}\n",
            params.qcut, params.efficiency
        ));
    }
    Ok(out)
}

/// One-line summary of a grid and its average efficiency.
pub fn format_efficiency_summary(grid: &Grid, process: Process, efficiency: f64) -> String {
    format!(
        "{process}: {} points in {} columns, {:.1}k events, \
         average truth-matching efficiency {:.4}",
        grid.point_count(),
        grid.columns().len(),
        grid.total_events(),
        efficiency
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_table_lists_each_mass() {
        let table = format_match_table(Process::GlGl, &[700.0, 1250.0]).unwrap();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("118"));
        assert!(lines[2].contains("0.245"));
    }

    #[test]
    fn xsec_table_propagates_lookup_errors() {
        assert!(format_xsec_table(Process::GlGl, &[1000.0, -5.0]).is_err());
    }
}
