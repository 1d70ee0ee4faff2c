use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleError {
    #[error("color scale must contain at least one color")]
    InvalidScale,
}

#[derive(Error, Debug)]
pub enum HeatMapError {
    #[error("invalid color scale, {0}")]
    Scale(#[from] ScaleError),
    #[error("alpha must be between 0 and 1")]
    Alpha,
    #[error("could not parse heat map file\n{0}")]
    Json(#[from] serde_json::Error),
    #[error("could not parse heat map file\n{0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("could not parse heat map file\n{0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to read input file\n{0}")]
    FileRead(#[from] std::io::Error),
    #[error("input file does not have valid extension (must be .json, .ron or .yaml)")]
    Extension,
}
