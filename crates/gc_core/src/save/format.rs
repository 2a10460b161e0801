//! On-disk snapshot format.
//!
//! Layout: 4-byte magic, SHA-256 checksum of the compressed payload, then the
//! MessagePack-encoded [`ScoreSave`] compressed with size-prepended LZ4. The
//! save version lives inside the payload and is checked after decode.

use serde::{Deserialize, Serialize};

use super::error::SaveError;
use super::SAVE_VERSION;
use crate::store::ScoreStore;

use lz4_flex::{compress_prepend_size, decompress_size_prepended};
use rmp_serde::{from_slice, to_vec_named};
use sha2::{Digest, Sha256};

pub const SAVE_MAGIC: &[u8; 4] = b"GCSV";
const CHECKSUM_LEN: usize = 32;

/// Snapshot of all scoring state.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ScoreSave {
    /// Save format version for migration.
    pub version: u32,

    /// Save timestamp (unix milliseconds).
    pub timestamp: u64,

    /// The full document store: matches, teams, innings, ball ledgers.
    pub store: ScoreStore,
}

impl ScoreSave {
    pub fn new(store: ScoreStore) -> Self {
        Self { version: SAVE_VERSION, timestamp: current_timestamp(), store }
    }
}

pub fn current_timestamp() -> u64 {
    chrono::Utc::now().timestamp_millis().max(0) as u64
}

pub fn serialize_and_compress(save: &ScoreSave) -> Result<Vec<u8>, SaveError> {
    let encoded = to_vec_named(save)?;
    let compressed = compress_prepend_size(&encoded);

    let checksum = Sha256::digest(&compressed);

    let mut out = Vec::with_capacity(SAVE_MAGIC.len() + CHECKSUM_LEN + compressed.len());
    out.extend_from_slice(SAVE_MAGIC);
    out.extend_from_slice(&checksum);
    out.extend_from_slice(&compressed);
    Ok(out)
}

pub fn decompress_and_deserialize(data: &[u8]) -> Result<ScoreSave, SaveError> {
    if data.len() < SAVE_MAGIC.len() + CHECKSUM_LEN || &data[..SAVE_MAGIC.len()] != SAVE_MAGIC {
        return Err(SaveError::Corrupted);
    }

    let checksum = &data[SAVE_MAGIC.len()..SAVE_MAGIC.len() + CHECKSUM_LEN];
    let compressed = &data[SAVE_MAGIC.len() + CHECKSUM_LEN..];

    let actual = Sha256::digest(compressed);
    if actual.as_slice() != checksum {
        return Err(SaveError::ChecksumMismatch);
    }

    let encoded = decompress_size_prepended(compressed).map_err(|_| SaveError::Decompression)?;
    let save: ScoreSave = from_slice(&encoded)?;

    if save.version != SAVE_VERSION {
        return Err(SaveError::VersionMismatch { found: save.version, expected: SAVE_VERSION });
    }

    Ok(save)
}
