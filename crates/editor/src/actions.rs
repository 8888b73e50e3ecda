//! Editor actions and the reducer that applies them.

use serde::{Deserialize, Serialize};

use segment_core::{EditorError, EditorResult, FieldCatalog, SegmentPayload};

use crate::state::{EditorState, PanelState};

/// Every operation the panel supports, as a serializable action. The CLI
/// replays scripts of these; the facade dispatches them one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum EditorAction {
    OpenPanel,
    ClosePanel,
    SetName { name: String },
    SelectField { value: String },
    AddField,
    RemoveField { index: usize },
    ReplaceField { index: usize, value: String },
    ReorderField { from: usize, to: usize },
    Save,
}

/// Result of applying an action: the next state, plus the payload emitted
/// when the action was a save.
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: EditorState,
    pub emitted: Option<SegmentPayload>,
}

impl Transition {
    fn to(state: EditorState) -> Self {
        Self {
            state,
            emitted: None,
        }
    }
}

impl EditorState {
    /// Apply one action, producing the next state. Errors leave the caller's
    /// state untouched; editing actions require the panel to be open.
    pub fn apply(&self, catalog: &FieldCatalog, action: EditorAction) -> EditorResult<Transition> {
        let mut next = self.clone();

        match action {
            EditorAction::OpenPanel => {
                next.panel = PanelState::Open;
                Ok(Transition::to(next))
            }
            // Closing keeps the draft name and list state intact.
            EditorAction::ClosePanel => {
                next.panel = PanelState::Closed;
                Ok(Transition::to(next))
            }
            EditorAction::SetName { name } => {
                next.require_open()?;
                next.segment_name = name;
                Ok(Transition::to(next))
            }
            EditorAction::SelectField { value } => {
                next.require_open()?;
                if !next.available.iter().any(|f| f.value == value) {
                    return Err(EditorError::FieldNotAvailable(value));
                }
                next.pending_selection = Some(value);
                Ok(Transition::to(next))
            }
            EditorAction::AddField => {
                next.require_open()?;
                // No pending selection is a documented no-op.
                let Some(value) = next.pending_selection.take() else {
                    return Ok(Transition::to(next));
                };
                let pos = next
                    .available
                    .iter()
                    .position(|f| f.value == value)
                    .ok_or(EditorError::FieldNotAvailable(value))?;
                let field = next.available.remove(pos);
                next.selected.push(field);
                Ok(Transition::to(next))
            }
            EditorAction::RemoveField { index } => {
                next.require_open()?;
                next.check_index(index)?;
                let field = next.selected.remove(index);
                next.available.push(field);
                Ok(Transition::to(next))
            }
            EditorAction::ReplaceField { index, value } => {
                next.require_open()?;
                next.check_index(index)?;
                if next.selected[index].value == value {
                    return Ok(Transition::to(next));
                }
                let incoming = catalog
                    .lookup(&value)
                    .cloned()
                    .ok_or_else(|| EditorError::UnknownField(value.clone()))?;
                if next.selected.iter().any(|f| f.value == value) {
                    return Err(EditorError::FieldAlreadySelected(value));
                }
                // Bidirectional swap keeps the partition intact: the incoming
                // field leaves the pool, the outgoing field rejoins it.
                let pos = next
                    .available
                    .iter()
                    .position(|f| f.value == value)
                    .ok_or(EditorError::FieldNotAvailable(value))?;
                next.available.remove(pos);
                let outgoing = std::mem::replace(&mut next.selected[index], incoming);
                next.available.push(outgoing);
                Ok(Transition::to(next))
            }
            EditorAction::ReorderField { from, to } => {
                next.require_open()?;
                next.check_index(from)?;
                next.check_index(to)?;
                let field = next.selected.remove(from);
                next.selected.insert(to, field);
                Ok(Transition::to(next))
            }
            EditorAction::Save => {
                next.require_open()?;
                let payload =
                    SegmentPayload::from_selection(next.segment_name.clone(), &next.selected);
                next.panel = PanelState::Closed;
                Ok(Transition {
                    state: next,
                    emitted: Some(payload),
                })
            }
        }
    }

    fn require_open(&self) -> EditorResult<()> {
        if self.is_open() {
            Ok(())
        } else {
            Err(EditorError::PanelClosed)
        }
    }

    fn check_index(&self, index: usize) -> EditorResult<()> {
        let len = self.selected.len();
        if index < len {
            Ok(())
        } else {
            Err(EditorError::IndexOutOfRange { index, len })
        }
    }
}
