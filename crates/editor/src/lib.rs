//! Segment editor — the "Save Segment" panel as a pure state machine.
//!
//! All editing operations (add, remove, replace, reorder) are expressed as
//! explicit actions over a single state value, decoupled from any UI input
//! mechanism, with the selected/available partition invariant enforced in
//! one place.

pub mod actions;
pub mod editor;
pub mod sink;
pub mod state;

pub use actions::{EditorAction, Transition};
pub use editor::SegmentEditor;
pub use sink::{ConsoleSink, MemorySink, SaveSink, SavedSegment};
pub use state::{EditorState, PanelState};
