use crate::domain::AppError;

/// Source location token meaning standard input.
pub const STDIN_SOURCE: &str = "-";

/// Port for reading template documents.
pub trait DocumentStore {
    /// Read the document at `source`; `-` reads standard input.
    fn read_document(&self, source: &str) -> Result<String, AppError>;

    /// Read an optional file, returning `None` when it does not exist.
    fn read_optional(&self, path: &str) -> Result<Option<String>, AppError>;
}
