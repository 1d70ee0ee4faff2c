use clap::{Parser, Subcommand};
use clap_num::si_number;
use std::path::PathBuf;

use heatscale::*;

#[path = "cli/error.rs"]
mod error;
use error::CliError;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Path to a heat map file (.json, .ron or .yaml) holding the color scale.
    ///
    /// When omitted, a green, yellow, red scale is used.
    #[arg(short, long, global = true)]
    scale: Option<PathBuf>,
    /// Alpha appended to CSS colors (between 0 and 1). Overrides the value in the scale file.
    #[arg(short, long, global = true)]
    alpha: Option<f64>,
    /// Print CSS rgba() values instead of raw components.
    #[arg(short, long, global = true)]
    css: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Interpolate colors at positions along the scale.
    Map {
        /// Continuous positions, from 0 to the number of colors minus one.
        #[arg(required = true, allow_negative_numbers = true)]
        indices: Vec<f64>,
    },
    /// Color values by their logarithmic position between a minimum and a maximum.
    Heat {
        /// Smallest observed value. Defaults to the smallest given value.
        #[arg(long)]
        min: Option<f64>,
        /// Largest observed value. Defaults to the largest given value.
        #[arg(long)]
        max: Option<f64>,
        #[arg(required = true)]
        values: Vec<f64>,
    },
    /// Format byte counts with binary prefixes (accepts SI postfixes).
    Units {
        #[arg(required = true, value_parser = si_number::<u64>)]
        bytes: Vec<u64>,
    },
}

impl Cli {
    fn heat_map(&self) -> Result<HeatMap, CliError> {
        let heat_map = match &self.scale {
            Some(path) => HeatMap::from_file(path)?,
            None => HeatMap::default(),
        };
        Ok(match self.alpha {
            Some(alpha) => heat_map.with_alpha(alpha)?,
            None => heat_map,
        })
    }

    fn show(&self, heat_map: &HeatMap, color: Rgb) -> String {
        if self.css {
            color.to_css(heat_map.alpha())
        } else {
            format!("{} {} {}", color.red, color.green, color.blue)
        }
    }

    /// Output lines of the selected command.
    fn lines(&self) -> Result<Vec<String>, CliError> {
        Ok(match &self.command {
            Command::Map { indices } => {
                let heat_map = self.heat_map()?;
                indices
                    .iter()
                    .map(|&i| self.show(&heat_map, heat_map.scale().sample(i)))
                    .collect()
            }
            Command::Heat { min, max, values } => {
                let heat_map = self.heat_map()?;
                let range = heat_range(*min, *max, values)?;
                log::debug!(
                    "coloring {} values between {} and {}",
                    values.len(), range.min, range.max
                );
                values
                    .iter()
                    .map(|&v| format!("{}\t{}", v, self.show(&heat_map, heat_map.color_for(&range, v))))
                    .collect()
            }
            Command::Units { bytes } => bytes.iter().map(|&b| format_storage_units(b)).collect(),
        })
    }
}

/// The range to color `values` in, with explicit bounds taking precedence over observed ones.
fn heat_range(min: Option<f64>, max: Option<f64>, values: &[f64]) -> Result<HeatRange, CliError> {
    let observed = HeatRange::from_values(values.iter().copied()).ok_or(CliError::NoValues)?;
    Ok(HeatRange::new(min.unwrap_or(observed.min), max.unwrap_or(observed.max)))
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    for line in cli.lines()? {
        println!("{}", line);
    }
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
