use serde::Deserialize;

use crate::error::EditorResult;
use crate::types::{FieldCatalog, SchemaField, TraitCategory};

/// Root application configuration. Loaded from environment variables with
/// the prefix `SEGMENT_STUDIO__`; every section has defaults matching the
/// canonical seven-field trait catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct StudioConfig {
    #[serde(default = "default_catalog")]
    pub catalog: Vec<FieldDef>,
    #[serde(default = "default_initial_selected")]
    pub initial_selected: usize,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

/// Raw catalog entry as it appears in configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldDef {
    pub label: String,
    pub value: String,
    pub category: TraitCategory,
}

impl From<FieldDef> for SchemaField {
    fn from(def: FieldDef) -> Self {
        SchemaField::new(def.label, def.value, def.category)
    }
}

fn default_initial_selected() -> usize {
    2
}

fn default_log_filter() -> String {
    "segment_studio=info".to_string()
}

fn default_catalog() -> Vec<FieldDef> {
    let user = TraitCategory::UserTrait;
    let group = TraitCategory::GroupTrait;
    [
        ("First Name", "first_name", user),
        ("Last Name", "last_name", user),
        ("Gender", "gender", user),
        ("Age", "age", user),
        ("Account Name", "account_name", group),
        ("City", "city", group),
        ("State", "state", group),
    ]
    .into_iter()
    .map(|(label, value, category)| FieldDef {
        label: label.to_string(),
        value: value.to_string(),
        category,
    })
    .collect()
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            initial_selected: default_initial_selected(),
            log_filter: default_log_filter(),
        }
    }
}

impl StudioConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("SEGMENT_STUDIO")
                .separator("__")
                .try_parsing(true)
                .list_separator(","),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Convert the raw catalog definitions into a validated catalog.
    pub fn catalog(&self) -> EditorResult<FieldCatalog> {
        let fields = self
            .catalog
            .iter()
            .cloned()
            .map(SchemaField::from)
            .collect();
        FieldCatalog::new(fields, self.initial_selected)
    }
}
