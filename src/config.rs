//! Tournament configuration: bye policy and where the durable store lives.
//!
//! Override with env: SWISS_BYE_POLICY (trailing | leading), SWISS_AVOID_REPEAT_BYES
//! (true | false), SWISS_DATA_PATH (path to the JSON store).

use crate::models::StorageError;
use crate::store::JsonFileStore;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Which end of the standings receives the bye when the pool is odd-sized.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ByePolicy {
    /// Lowest-ranked player sits out.
    #[default]
    Trailing,
    /// Highest-ranked player sits out.
    Leading,
}

impl FromStr for ByePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trailing" | "last" => Ok(ByePolicy::Trailing),
            "leading" | "first" => Ok(ByePolicy::Leading),
            other => Err(format!("unknown bye policy '{}'", other)),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentConfig {
    #[serde(default)]
    pub bye_policy: ByePolicy,
    /// Skip players who already had a bye when choosing who sits out.
    #[serde(default = "default_avoid_repeat_byes")]
    pub avoid_repeat_byes: bool,
    /// JSON store location; `None` means the caller supplies its own store.
    #[serde(default)]
    pub data_path: Option<PathBuf>,
}

fn default_avoid_repeat_byes() -> bool {
    true
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            bye_policy: ByePolicy::default(),
            avoid_repeat_byes: default_avoid_repeat_byes(),
            data_path: None,
        }
    }
}

impl TournamentConfig {
    /// Read overrides from the environment. Anything unset or unparsable keeps its default.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = env::var("SWISS_BYE_POLICY") {
            match raw.parse::<ByePolicy>() {
                Ok(policy) => config.bye_policy = policy,
                Err(e) => log::warn!("Ignoring SWISS_BYE_POLICY: {}", e),
            }
        }

        if let Ok(raw) = env::var("SWISS_AVOID_REPEAT_BYES") {
            match raw.trim().parse::<bool>() {
                Ok(flag) => config.avoid_repeat_byes = flag,
                Err(_) => log::warn!(
                    "Ignoring SWISS_AVOID_REPEAT_BYES: expected true or false, got '{}'",
                    raw
                ),
            }
        }

        config.data_path = env::var_os("SWISS_DATA_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        config
    }

    /// Open the configured JSON store, or `None` if no data path is set.
    pub fn open_store(&self) -> Result<Option<JsonFileStore>, StorageError> {
        self.data_path.as_ref().map(JsonFileStore::open).transpose()
    }
}
