use std::fs::{remove_file, rename, File};
use std::io::{Read, Write};
use std::path::Path;

use super::error::SaveError;
use super::format::{decompress_and_deserialize, serialize_and_compress, ScoreSave};
use crate::api::service::ScoringService;

pub struct SaveManager;

impl SaveManager {
    /// Snapshot a service and write it to `path`. The write goes through a
    /// sibling temp file and a rename so a crash never leaves a torn save.
    pub fn save_to_path(path: &Path, service: &ScoringService) -> Result<(), SaveError> {
        let save = ScoreSave::new(service.store().clone());
        let bytes = serialize_and_compress(&save)?;

        let tmp_path = path.with_extension("tmp");
        {
            let mut file = File::create(&tmp_path)?;
            file.write_all(&bytes)?;
            file.sync_all()?;
        }
        if let Err(err) = rename(&tmp_path, path) {
            let _ = remove_file(&tmp_path);
            return Err(err.into());
        }

        log::info!("Scoring state saved to {}", path.display());
        Ok(())
    }

    /// Load a snapshot and rebuild a service from it.
    pub fn load_from_path(path: &Path) -> Result<ScoringService, SaveError> {
        let mut bytes = Vec::new();
        File::open(path)?.read_to_end(&mut bytes)?;

        let save = decompress_and_deserialize(&bytes)?;
        log::info!("Scoring state loaded from {}", path.display());
        Ok(ScoringService::from_store(save.store))
    }

    /// Load if the file exists, otherwise start empty.
    pub fn load_or_default(path: &Path) -> Result<ScoringService, SaveError> {
        if path.exists() {
            Self::load_from_path(path)
        } else {
            log::debug!("No save at {}, starting empty", path.display());
            Ok(ScoringService::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::service::{CreateMatchRequest, TossWinner};

    fn create_test_service() -> ScoringService {
        let mut service = ScoringService::new();
        service
            .create_match(CreateMatchRequest {
                location: "Backyard".to_string(),
                team_a_name: "A".to_string(),
                team_b_name: "B".to_string(),
                players_per_team: 6,
                total_overs: 5,
                toss_won_by: TossWinner::TeamA,
            })
            .unwrap();
        service
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.gcsv");

        let service = create_test_service();
        let match_id = service.list_matches()[0].id;

        SaveManager::save_to_path(&path, &service).unwrap();
        let restored = SaveManager::load_from_path(&path).unwrap();

        let details = restored.get_match_details(match_id).unwrap();
        assert_eq!(details.location, "Backyard");
        assert_eq!(details.innings.len(), 1);
    }

    #[test]
    fn test_load_or_default_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let service = SaveManager::load_or_default(&dir.path().join("missing.gcsv")).unwrap();
        assert!(service.list_matches().is_empty());
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.gcsv");
        SaveManager::save_to_path(&path, &create_test_service()).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }
}
