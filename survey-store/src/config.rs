use serde::{Deserialize, Serialize};

/// Store settings, read from the `[store]` table of a TOML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Upper bound on stored records. `None` is unbounded.
    #[serde(default)]
    pub max_records: Option<usize>,
    /// Record names whose value must be a level code.
    #[serde(default, rename = "level-fields")]
    pub level_fields: Vec<String>,
}

#[derive(Deserialize)]
struct StoreFile {
    #[serde(default)]
    store: StoreConfig,
}

impl StoreConfig {
    pub fn from_toml_str(contents: &str) -> crate::StoreResult<Self> {
        let file: StoreFile = toml::from_str(contents)?;
        Ok(file.store)
    }
}
