#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("question schema error: {0}")]
    Schema(#[from] soap_schema::SchemaError),

    #[error("unknown case '{0}'")]
    UnknownCase(String),
    #[error("unknown stage '{0}'")]
    UnknownStage(String),
    #[error("case '{case}' has no questions for stage '{stage}'")]
    MissingStage { case: String, stage: String },

    #[error("stage '{0}' does not accept pasted text")]
    PasteNotAllowed(String),

    #[error("failed to read session file: {0}")]
    SessionRead(std::io::Error),
    #[error("failed to deserialize session YAML: {0}")]
    SessionDeserialization(serde_yaml::Error),
    #[error("failed to serialize record: {0}")]
    Serialization(serde_json::Error),

    #[error("finished note was empty")]
    EmptyNote(#[from] soap_types::TextError),
}

pub type NoteResult<T> = std::result::Result<T, NoteError>;
