use std::path::PathBuf;
use thiserror::Error;

pub type GeneratorResult<T> = Result<T, GeneratorError>;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Auction {item_id} has no bids")]
    EmptyBids { item_id: String },

    #[error("Invalid category weights: {0}")]
    InvalidWeights(#[from] rand::distributions::WeightedError),
}

impl GeneratorError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GeneratorError::Io {
            path: path.into(),
            source,
        }
    }
}
