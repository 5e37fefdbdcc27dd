use std::sync::Arc;

use anyhow::{
    Context,
    Error,
};
use serde::Serialize;

use crate::{
    config::StorageOptions,
    error::StoreUnavailable,
    store::BlobStore,
    teams::Team,
};

/// The result of [`TeamStore::save_team`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveOutcome {
    /// Was the team written?
    pub success: bool,
    /// Must the user confirm replacing another team first?
    pub needs_confirmation: bool,
    /// Name of the team that would be replaced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub existing_team_name: Option<String>,
}

impl SaveOutcome {
    fn saved() -> Self {
        Self {
            success: true,
            ..Default::default()
        }
    }

    fn needs_confirmation(existing_team_name: String) -> Self {
        Self {
            success: false,
            needs_confirmation: true,
            existing_team_name: Some(existing_team_name),
        }
    }

    fn failed() -> Self {
        Self::default()
    }
}

/// Persists saved teams as a single JSON array in a [`BlobStore`].
///
/// Only one team is kept at a time: saving a different team requires confirmation, after which
/// [`TeamStore::overwrite_team`] replaces everything. No method fails outward. Storage problems are
/// logged and produce an empty or unsuccessful result.
pub struct TeamStore {
    blobs: Option<Arc<dyn BlobStore>>,
    key: String,
}

impl TeamStore {
    /// Creates a new store over a blob store.
    pub fn new(blobs: Arc<dyn BlobStore>, options: &StorageOptions) -> Self {
        Self {
            blobs: Some(blobs),
            key: options.key.clone(),
        }
    }

    /// Creates a store with no storage behind it.
    ///
    /// Nothing is ever listed, and nothing is ever saved.
    pub fn unavailable() -> Self {
        Self {
            blobs: None,
            key: StorageOptions::default().key,
        }
    }

    /// Key of the blob holding all teams.
    pub fn key(&self) -> &str {
        &self.key
    }

    fn blobs(&self) -> Result<&dyn BlobStore, StoreUnavailable> {
        self.blobs
            .as_deref()
            .ok_or_else(|| StoreUnavailable::new(Error::msg("no blob store")))
    }

    /// Reads all saved teams.
    ///
    /// Fails only if the blob store cannot be read. A blob that does not parse is logged and read as
    /// empty, so the next save replaces it.
    fn read_teams(&self) -> Result<Vec<Team>, StoreUnavailable> {
        let blobs = self.blobs()?;
        let Some(json) = blobs.get(&self.key).map_err(StoreUnavailable::new)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&json) {
            Ok(teams) => Ok(teams),
            Err(err) => {
                log::error!("stored teams under {} are invalid, ignoring them: {err}", self.key);
                Ok(Vec::new())
            }
        }
    }

    fn write_teams(&self, teams: &[Team]) -> Result<(), StoreUnavailable> {
        let blobs = self.blobs()?;
        let json = serde_json::to_string(teams)
            .context("failed to serialize teams")
            .map_err(StoreUnavailable::new)?;
        blobs.set(&self.key, &json).map_err(StoreUnavailable::new)?;
        log::debug!("wrote {} team(s) to {}", teams.len(), self.key);
        Ok(())
    }

    /// Lists all saved teams.
    pub fn list_teams(&self) -> Vec<Team> {
        match self.read_teams() {
            Ok(teams) => teams,
            Err(err) => {
                log::error!("failed to read teams: {err}");
                Vec::new()
            }
        }
    }

    /// Looks up a saved team by id.
    pub fn get_team(&self, id: &str) -> Option<Team> {
        self.list_teams().into_iter().find(|team| team.id == id)
    }

    /// Saves a team.
    ///
    /// A team with the same id as a saved team replaces it in place. A new team is only written
    /// when nothing else is saved; otherwise the outcome asks for confirmation and names the team
    /// that would be replaced.
    ///
    /// Nothing is written if the saved teams cannot be read.
    pub fn save_team(&self, team: &Team) -> SaveOutcome {
        let mut teams = match self.read_teams() {
            Ok(teams) => teams,
            Err(err) => {
                log::error!("failed to save team {}: {err}", team.id);
                return SaveOutcome::failed();
            }
        };
        if let Some(existing) = teams.iter_mut().find(|existing| existing.id == team.id) {
            *existing = team.clone();
        } else if let Some(existing) = teams.first() {
            return SaveOutcome::needs_confirmation(existing.name.clone());
        } else {
            teams.push(team.clone());
        }

        match self.write_teams(&teams) {
            Ok(()) => SaveOutcome::saved(),
            Err(err) => {
                log::error!("failed to save team {}: {err}", team.id);
                SaveOutcome::failed()
            }
        }
    }

    /// Replaces every saved team with the given team.
    ///
    /// Returns whether the team was written.
    pub fn overwrite_team(&self, team: &Team) -> bool {
        match self.write_teams(std::slice::from_ref(team)) {
            Ok(()) => true,
            Err(err) => {
                log::error!("failed to overwrite teams with {}: {err}", team.id);
                false
            }
        }
    }

    /// Deletes the saved team with the given id.
    ///
    /// Deleting a team that is not saved does nothing.
    pub fn delete_team(&self, id: &str) {
        let mut teams = match self.read_teams() {
            Ok(teams) => teams,
            Err(err) => {
                log::error!("failed to delete team {id}: {err}");
                return;
            }
        };
        let before = teams.len();
        teams.retain(|team| team.id != id);
        if teams.len() == before {
            return;
        }
        if let Err(err) = self.write_teams(&teams) {
            log::error!("failed to delete team {id}: {err}");
        }
    }
}

#[cfg(test)]
mod team_store_test {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use crate::{
        config::StorageOptions,
        store::{
            BlobStore,
            MemoryBlobStore,
            SaveOutcome,
            TeamStore,
        },
        teams::Team,
    };

    #[test]
    fn unavailable_store_is_inert() {
        let store = TeamStore::unavailable();
        let team = Team::new("a");
        assert_eq!(store.list_teams(), Vec::new());
        assert_eq!(store.save_team(&team), SaveOutcome::default());
        assert!(!store.overwrite_team(&team));
        store.delete_team(&team.id);
        assert_eq!(store.get_team(&team.id), None);
    }

    #[test]
    fn uses_configured_key() {
        let blobs = Arc::new(MemoryBlobStore::new());
        let store = TeamStore::new(
            blobs.clone(),
            &StorageOptions {
                key: "teams-v2".to_owned(),
            },
        );
        assert_eq!(store.key(), "teams-v2");
        assert!(store.save_team(&Team::new("a")).success);
        assert!(blobs.get("teams-v2").unwrap().is_some());
        assert_eq!(blobs.get("pokemon-teams").unwrap(), None);
    }

    #[test]
    fn treats_corrupt_blob_as_empty() {
        let blobs = Arc::new(MemoryBlobStore::new());
        blobs.set("pokemon-teams", "{not json").unwrap();
        let store = TeamStore::new(blobs, &StorageOptions::default());
        assert_eq!(store.list_teams(), Vec::new());

        let team = Team::new("a");
        assert!(store.save_team(&team).success);
        assert_eq!(store.list_teams(), vec![team]);
    }

    #[test]
    fn serializes_outcome_in_camel_case() {
        assert_eq!(
            serde_json::to_string(&SaveOutcome::needs_confirmation("x".to_owned())).unwrap(),
            r#"{"success":false,"needsConfirmation":true,"existingTeamName":"x"}"#
        );
    }
}
