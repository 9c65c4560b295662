use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Normalized text was empty; the document could not be read
    #[error("document contains no readable text")]
    EmptyDocument,
}
