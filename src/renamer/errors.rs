use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenameError {
    #[error("Unrecognized card name: {0}")]
    UnrecognizedFormat(String),

    #[error("Unknown rank: {0}")]
    UnknownRank(String),

    #[error("Unknown suit: {0}")]
    UnknownSuit(String),

    #[error("File name is not valid UTF-8: {0}")]
    InvalidFileName(String),

    #[error("Target already exists: {0}")]
    TargetExists(String),

    #[error("I/O error on {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

impl RenameError {
    pub fn io(name: impl Into<String>, source: std::io::Error) -> Self {
        RenameError::Io {
            name: name.into(),
            source,
        }
    }
}
