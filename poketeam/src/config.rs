use std::path::Path;

use anyhow::{
    Context,
    Result,
};
use serde::{
    Deserialize,
    Serialize,
};

fn default_view_path() -> String {
    "/view".to_owned()
}

fn default_query_param() -> String {
    "data".to_owned()
}

fn default_storage_key() -> String {
    "pokemon-teams".to_owned()
}

/// Options for building and reading share URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareOptions {
    /// Origin prepended to every share URL.
    ///
    /// Empty by default, which produces a relative URL.
    #[serde(default)]
    pub base_url: String,
    /// Path of the page that displays a shared team.
    #[serde(default = "default_view_path")]
    pub view_path: String,
    /// Query parameter holding the team token.
    #[serde(default = "default_query_param")]
    pub query_param: String,
}

impl Default for ShareOptions {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            view_path: default_view_path(),
            query_param: default_query_param(),
        }
    }
}

/// Options for persisting teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageOptions {
    /// Key of the blob holding all saved teams.
    #[serde(default = "default_storage_key")]
    pub key: String,
}

impl Default for StorageOptions {
    fn default() -> Self {
        Self {
            key: default_storage_key(),
        }
    }
}

/// Options for the whole team builder.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoketeamOptions {
    #[serde(default)]
    pub share: ShareOptions,
    #[serde(default)]
    pub storage: StorageOptions,
}

impl PoketeamOptions {
    /// Parses options from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to parse options")
    }

    /// Reads options from a JSON file.
    pub fn from_file<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read options from {}", path.display()))?;
        Self::from_json(&json)
    }
}
