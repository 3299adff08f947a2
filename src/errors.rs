use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AirfoilError {
    #[error("'{0}' is not a NACA 4-digit designation")]
    InvalidDesignation(String),
}

/// Conditions which abort a loft. Nothing is produced when one of these is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoftError {
    #[error("section {index} has {found} points, expected {expected} like the first section")]
    MismatchedSection {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("face references vertex {index} but the mesh only has {count} vertices")]
    IndexOutOfRange { index: usize, count: usize },
}

/// Reasons a single face is refused by the mesh buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FaceRejection {
    #[error("vertex {0} appears more than once in the face")]
    RepeatedVertex(usize),

    #[error("a face over the same vertices already exists at index {0}")]
    Duplicate(usize),

    #[error("face references vertex {index} but the mesh only has {count} vertices")]
    IndexOutOfRange { index: usize, count: usize },
}

impl FaceRejection {
    /// A degenerate or duplicate face can be skipped without harming the rest of the mesh. A bad
    /// index means the caller built the face wrong and is not recoverable.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            FaceRejection::RepeatedVertex(_) | FaceRejection::Duplicate(_)
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid wing parameters: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum WingError {
    #[error("at least one span station is needed to attach the sharklet")]
    NoStations,

    #[error(transparent)]
    Loft(#[from] LoftError),
}
