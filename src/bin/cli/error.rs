use thiserror::Error;

use heatscale::HeatMapError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    HeatMap(#[from] HeatMapError),
    #[error("no values given")]
    NoValues,
}
