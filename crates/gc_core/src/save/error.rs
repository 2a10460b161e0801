use thiserror::Error;

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] rmp_serde::encode::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] rmp_serde::decode::Error),

    #[error("Decompression error")]
    Decompression,

    #[error("Corrupted data")]
    Corrupted,

    #[error("Checksum mismatch")]
    ChecksumMismatch,

    #[error("Version mismatch: found {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },
}

impl SaveError {
    pub fn is_recoverable(&self) -> bool {
        match self {
            SaveError::Io(_) => true,
            SaveError::Corrupted => false,
            SaveError::ChecksumMismatch => false,
            SaveError::VersionMismatch { .. } => false,
            _ => false,
        }
    }
}

impl From<SaveError> for crate::error::ScoringError {
    fn from(err: SaveError) -> Self {
        crate::error::ScoringError::Storage(err.to_string())
    }
}
