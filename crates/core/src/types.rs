//! Catalog and payload types for the segment editor.

use std::collections::HashSet;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{EditorError, EditorResult};

/// The two mutually exclusive schema field categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitCategory {
    UserTrait,
    GroupTrait,
}

impl TraitCategory {
    /// Human-readable display name for this category.
    pub fn display_name(&self) -> &'static str {
        match self {
            TraitCategory::UserTrait => "User Trait",
            TraitCategory::GroupTrait => "Group Trait",
        }
    }

    /// Legacy display color used by UI consumers (user=green, group=red).
    pub fn color(&self) -> &'static str {
        match self {
            TraitCategory::UserTrait => "green",
            TraitCategory::GroupTrait => "red",
        }
    }
}

/// A selectable schema attribute drawn from the field catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaField {
    /// Display name shown to the user, e.g. "First Name".
    pub label: String,
    /// Stable key used in the save payload, e.g. "first_name".
    pub value: String,
    pub category: TraitCategory,
}

impl SchemaField {
    pub fn new(
        label: impl Into<String>,
        value: impl Into<String>,
        category: TraitCategory,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            category,
        }
    }
}

/// Validated, ordered catalog of schema fields known at startup.
///
/// The first `initial_selected` entries seed the editor's selected list;
/// the remainder seed the available pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldCatalog {
    fields: Vec<SchemaField>,
    initial_selected: usize,
}

impl FieldCatalog {
    /// Build a catalog, rejecting empty input, duplicate value keys, and an
    /// initial selection larger than the catalog itself.
    pub fn new(fields: Vec<SchemaField>, initial_selected: usize) -> EditorResult<Self> {
        if fields.is_empty() {
            return Err(EditorError::InvalidCatalog("catalog is empty".into()));
        }
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.value.as_str()) {
                return Err(EditorError::InvalidCatalog(format!(
                    "duplicate field value: {}",
                    field.value
                )));
            }
        }
        if initial_selected > fields.len() {
            return Err(EditorError::InvalidCatalog(format!(
                "initial selection {} exceeds catalog size {}",
                initial_selected,
                fields.len()
            )));
        }
        Ok(Self {
            fields,
            initial_selected,
        })
    }

    pub fn fields(&self) -> &[SchemaField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up a field by its stable value key.
    pub fn lookup(&self, value: &str) -> Option<&SchemaField> {
        self.fields.iter().find(|f| f.value == value)
    }

    /// The seed partition: (initially selected, initially available).
    pub fn initial_split(&self) -> (Vec<SchemaField>, Vec<SchemaField>) {
        let selected = self.fields[..self.initial_selected].to_vec();
        let available = self.fields[self.initial_selected..].to_vec();
        (selected, available)
    }
}

/// One column of the save payload. Serializes as a single-key JSON map
/// `{ "<value>": "<label>" }`, the shape the external sink expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaEntry {
    pub value: String,
    pub label: String,
}

impl From<&SchemaField> for SchemaEntry {
    fn from(field: &SchemaField) -> Self {
        Self {
            value: field.value.clone(),
            label: field.label.clone(),
        }
    }
}

impl Serialize for SchemaEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.value, &self.label)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for SchemaEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntryVisitor;

        impl<'de> Visitor<'de> for EntryVisitor {
            type Value = SchemaEntry;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a single-key map of field value to label")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let (value, label): (String, String) = access
                    .next_entry()?
                    .ok_or_else(|| serde::de::Error::custom("schema entry map is empty"))?;
                if access.next_entry::<String, String>()?.is_some() {
                    return Err(serde::de::Error::custom(
                        "schema entry must contain exactly one key",
                    ));
                }
                Ok(SchemaEntry { value, label })
            }
        }

        deserializer.deserialize_map(EntryVisitor)
    }
}

/// The structure emitted on save: segment name plus the ordered schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentPayload {
    pub segment_name: String,
    pub schema: Vec<SchemaEntry>,
}

impl SegmentPayload {
    /// Build a payload from the draft name and the selected fields, in order.
    pub fn from_selection(segment_name: impl Into<String>, selected: &[SchemaField]) -> Self {
        Self {
            segment_name: segment_name.into(),
            schema: selected.iter().map(SchemaEntry::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> FieldCatalog {
        FieldCatalog::new(
            vec![
                SchemaField::new("First Name", "first_name", TraitCategory::UserTrait),
                SchemaField::new("Last Name", "last_name", TraitCategory::UserTrait),
                SchemaField::new("City", "city", TraitCategory::GroupTrait),
            ],
            2,
        )
        .unwrap()
    }

    #[test]
    fn test_catalog_validation() {
        assert!(matches!(
            FieldCatalog::new(vec![], 0),
            Err(EditorError::InvalidCatalog(_))
        ));

        let dup = vec![
            SchemaField::new("Age", "age", TraitCategory::UserTrait),
            SchemaField::new("Age Again", "age", TraitCategory::UserTrait),
        ];
        assert!(matches!(
            FieldCatalog::new(dup, 1),
            Err(EditorError::InvalidCatalog(_))
        ));

        let one = vec![SchemaField::new("Age", "age", TraitCategory::UserTrait)];
        assert!(matches!(
            FieldCatalog::new(one, 2),
            Err(EditorError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_initial_split() {
        let catalog = sample_catalog();
        let (selected, available) = catalog.initial_split();
        assert_eq!(selected.len(), 2);
        assert_eq!(available.len(), 1);
        assert_eq!(selected[0].value, "first_name");
        assert_eq!(available[0].value, "city");
    }

    #[test]
    fn test_lookup() {
        let catalog = sample_catalog();
        assert_eq!(catalog.lookup("city").unwrap().label, "City");
        assert!(catalog.lookup("missing").is_none());
    }

    #[test]
    fn test_payload_serialization_shape() {
        let catalog = sample_catalog();
        let (selected, _) = catalog.initial_split();
        let payload = SegmentPayload::from_selection("VIP Users", &selected);

        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(
            json,
            r#"{"segment_name":"VIP Users","schema":[{"first_name":"First Name"},{"last_name":"Last Name"}]}"#
        );

        let back: SegmentPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(back, payload);
    }

    #[test]
    fn test_schema_entry_rejects_multi_key_map() {
        let err = serde_json::from_str::<SchemaEntry>(r#"{"a":"A","b":"B"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_trait_category_color() {
        assert_eq!(TraitCategory::UserTrait.color(), "green");
        assert_eq!(TraitCategory::GroupTrait.color(), "red");
    }
}
