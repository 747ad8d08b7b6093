use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid entry \"{key}\" in {section}: {message}")]
    InvalidEntry {
        section: String,
        key: String,
        message: String,
    },

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Unable to find prefab for \"{0}\"")]
    MissingPrefab(String),

    #[error("Unknown team \"{0}\"")]
    UnknownTeam(String),

    #[error("Unable to define a category for sticker \"{name}\" (material folder \"{folder}\")")]
    UnresolvedStickerCategory { name: String, folder: String },

    #[error("Unable to find the short name for tournament {0}")]
    MissingTournamentName(String),

    #[error("Pattern \"{pattern}\" not found in {target}")]
    PatternNotFound { pattern: String, target: String },

    #[error("Invalid numeric id \"{0}\"")]
    InvalidId(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
