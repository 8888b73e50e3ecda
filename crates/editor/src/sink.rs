//! Save sinks — where emitted segment payloads end up.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use segment_core::SegmentPayload;

/// Consumer for saved segments. The editor delivers exactly one payload per
/// successful save.
pub trait SaveSink: Send + Sync {
    fn deliver(&self, payload: &SegmentPayload) -> anyhow::Result<()>;
}

impl<T: SaveSink + ?Sized> SaveSink for std::sync::Arc<T> {
    fn deliver(&self, payload: &SegmentPayload) -> anyhow::Result<()> {
        (**self).deliver(payload)
    }
}

/// Writes each payload as one JSON line to stdout. This is the original
/// console sink behavior.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl SaveSink for ConsoleSink {
    fn deliver(&self, payload: &SegmentPayload) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string(payload)?);
        Ok(())
    }
}

/// A saved segment with delivery metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedSegment {
    pub id: Uuid,
    pub saved_at: DateTime<Utc>,
    pub payload: SegmentPayload,
}

/// Records payloads in memory; used by tests and the CLI summary.
#[derive(Debug, Default)]
pub struct MemorySink {
    saved: Mutex<Vec<SavedSegment>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything delivered so far, in order.
    pub fn saved(&self) -> Vec<SavedSegment> {
        self.saved.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.saved.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.saved.lock().is_empty()
    }

    /// The most recently delivered payload, if any.
    pub fn last(&self) -> Option<SegmentPayload> {
        self.saved.lock().last().map(|s| s.payload.clone())
    }
}

impl SaveSink for MemorySink {
    fn deliver(&self, payload: &SegmentPayload) -> anyhow::Result<()> {
        let record = SavedSegment {
            id: Uuid::new_v4(),
            saved_at: Utc::now(),
            payload: payload.clone(),
        };
        info!(segment_id = %record.id, segment_name = %payload.segment_name, "Segment recorded");
        self.saved.lock().push(record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use segment_core::{SchemaField, TraitCategory};

    #[test]
    fn test_memory_sink_records_in_order() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        let fields = [SchemaField::new("Age", "age", TraitCategory::UserTrait)];
        sink.deliver(&SegmentPayload::from_selection("A", &fields))
            .unwrap();
        sink.deliver(&SegmentPayload::from_selection("B", &fields))
            .unwrap();

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.saved()[0].payload.segment_name, "A");
        assert_eq!(sink.last().unwrap().segment_name, "B");
    }
}
