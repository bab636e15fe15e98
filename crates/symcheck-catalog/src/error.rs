use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog contains no conditions")]
    EmptyCatalog,

    #[error("unknown condition: {0}")]
    UnknownCondition(String),

    #[error("duplicate condition: {0}")]
    DuplicateCondition(String),

    #[error("condition '{0}' has no symptoms")]
    NoSymptoms(String),

    #[error("condition name is blank")]
    BlankName,

    #[error("failed to read catalog at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid catalog json: {0}")]
    Json(#[from] serde_json::Error),
}
