use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    core::{
        models::Language,
        OrbError,
    },
    persistence,
};

const SETTINGS_FILE: &str = "settings.json";

/// Persisted user preferences. The language choice is passed explicitly
/// into store and client calls; nothing reads it as ambient state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub language: Language,
}

impl Settings {
    pub fn load() -> Self {
        persistence::load_json_or_default(SETTINGS_FILE)
    }

    pub fn save(&self) -> Result<(), OrbError> {
        persistence::save_json(self, SETTINGS_FILE)
    }
}
