use thiserror::Error;

pub type EditorResult<T> = Result<T, EditorError>;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Panel is closed; open it before editing")]
    PanelClosed,

    #[error("Index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Unknown schema field: {0}")]
    UnknownField(String),

    #[error("Schema field not in the available pool: {0}")]
    FieldNotAvailable(String),

    #[error("Schema field already selected: {0}")]
    FieldAlreadySelected(String),

    #[error("Invalid field catalog: {0}")]
    InvalidCatalog(String),

    #[error("Save sink error: {0}")]
    Sink(#[from] anyhow::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
