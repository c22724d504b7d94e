use std::collections::HashMap;

use crate::domain::AppError;
use crate::ports::DocumentStore;

/// In-memory document store keyed by path.
#[derive(Debug, Default, Clone)]
pub struct MemoryDocumentStore {
    files: HashMap<String, String>,
}

impl MemoryDocumentStore {
    pub fn with(mut self, path: &str, content: &str) -> Self {
        self.files.insert(path.to_string(), content.to_string());
        self
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn read_document(&self, source: &str) -> Result<String, AppError> {
        self.files.get(source).cloned().ok_or_else(|| AppError::TemplateNotFound(source.to_string()))
    }

    fn read_optional(&self, path: &str) -> Result<Option<String>, AppError> {
        Ok(self.files.get(path).cloned())
    }
}
