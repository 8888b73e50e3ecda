//! Editor state — panel visibility, draft name, and the field partition.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use segment_core::{FieldCatalog, SchemaField};

/// Panel visibility. `Open` is reached only via `OpenPanel`; `ClosePanel`
/// and `Save` are the only transitions back to `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelState {
    Closed,
    Open,
}

/// The complete editor state as one value. Every action produces a new
/// state through [`EditorState::apply`](crate::actions); nothing mutates
/// slots independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorState {
    pub panel: PanelState,
    pub segment_name: String,
    /// Value picked in the "add schema" dropdown but not yet added.
    pub pending_selection: Option<String>,
    /// Ordered list of selected fields; order drives the save payload.
    pub selected: Vec<SchemaField>,
    /// Fields not currently selected, in append order.
    pub available: Vec<SchemaField>,
}

impl EditorState {
    /// Seed a fresh state from the catalog: panel closed, empty name, the
    /// catalog's initial split as the selected/available partition.
    pub fn seeded(catalog: &FieldCatalog) -> Self {
        let (selected, available) = catalog.initial_split();
        Self {
            panel: PanelState::Closed,
            segment_name: String::new(),
            pending_selection: None,
            selected,
            available,
        }
    }

    pub fn is_open(&self) -> bool {
        self.panel == PanelState::Open
    }

    /// Check the partition invariant against the catalog: selected and
    /// available are disjoint and together cover the catalog exactly.
    pub fn partition_holds(&self, catalog: &FieldCatalog) -> bool {
        let selected: HashSet<&str> = self.selected.iter().map(|f| f.value.as_str()).collect();
        let available: HashSet<&str> = self.available.iter().map(|f| f.value.as_str()).collect();
        if selected.len() != self.selected.len() || available.len() != self.available.len() {
            return false;
        }
        if !selected.is_disjoint(&available) {
            return false;
        }
        let catalog_values: HashSet<&str> =
            catalog.fields().iter().map(|f| f.value.as_str()).collect();
        let union: HashSet<&str> = selected.union(&available).copied().collect();
        union == catalog_values
    }
}
