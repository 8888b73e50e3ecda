//! Editor facade — one method per panel operation, driving the reducer and
//! delivering saved payloads to the configured sink.

use tracing::{debug, info};

use segment_core::{EditorError, EditorResult, FieldCatalog, SegmentPayload};

use crate::actions::EditorAction;
use crate::sink::SaveSink;
use crate::state::EditorState;

pub struct SegmentEditor {
    catalog: FieldCatalog,
    state: EditorState,
    sink: Box<dyn SaveSink>,
}

impl SegmentEditor {
    /// Create an editor seeded from the catalog, delivering saves to `sink`.
    pub fn new(catalog: FieldCatalog, sink: Box<dyn SaveSink>) -> Self {
        let state = EditorState::seeded(&catalog);
        Self {
            catalog,
            state,
            sink,
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn catalog(&self) -> &FieldCatalog {
        &self.catalog
    }

    /// Apply one action. On success the editor advances to the new state;
    /// on error the state is unchanged. Returns the payload for saves.
    pub fn dispatch(&mut self, action: EditorAction) -> EditorResult<Option<SegmentPayload>> {
        debug!(?action, "Dispatching editor action");
        let transition = self.state.apply(&self.catalog, action)?;
        self.state = transition.state;

        if let Some(payload) = &transition.emitted {
            info!(
                segment_name = %payload.segment_name,
                fields = payload.schema.len(),
                "Segment saved"
            );
            self.sink.deliver(payload).map_err(EditorError::Sink)?;
        }
        Ok(transition.emitted)
    }

    pub fn open(&mut self) -> EditorResult<()> {
        self.dispatch(EditorAction::OpenPanel).map(|_| ())
    }

    pub fn close(&mut self) -> EditorResult<()> {
        self.dispatch(EditorAction::ClosePanel).map(|_| ())
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> EditorResult<()> {
        self.dispatch(EditorAction::SetName { name: name.into() })
            .map(|_| ())
    }

    /// Pick a field from the available pool as the pending selection.
    pub fn select_field(&mut self, value: impl Into<String>) -> EditorResult<()> {
        self.dispatch(EditorAction::SelectField {
            value: value.into(),
        })
        .map(|_| ())
    }

    /// Move the pending selection to the end of the selected list. A missing
    /// pending selection is a silent no-op.
    pub fn add_field(&mut self) -> EditorResult<()> {
        self.dispatch(EditorAction::AddField).map(|_| ())
    }

    /// Remove the selected field at `index`, returning it to the pool.
    pub fn remove_field(&mut self, index: usize) -> EditorResult<()> {
        self.dispatch(EditorAction::RemoveField { index }).map(|_| ())
    }

    /// Swap the selected field at `index` for the catalog field `value`.
    pub fn replace_field(&mut self, index: usize, value: impl Into<String>) -> EditorResult<()> {
        self.dispatch(EditorAction::ReplaceField {
            index,
            value: value.into(),
        })
        .map(|_| ())
    }

    /// Move the selected field at `from` to position `to`.
    pub fn reorder_field(&mut self, from: usize, to: usize) -> EditorResult<()> {
        self.dispatch(EditorAction::ReorderField { from, to })
            .map(|_| ())
    }

    /// Build the payload from the draft, deliver it, and close the panel.
    pub fn save(&mut self) -> EditorResult<SegmentPayload> {
        let payload = self.dispatch(EditorAction::Save)?;
        // The reducer always emits on Save.
        payload.ok_or_else(|| EditorError::Sink(anyhow::anyhow!("save emitted no payload")))
    }
}
