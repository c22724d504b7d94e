use crate::domain::ProcessConfig;
use crate::ports::DocumentStore;

/// Application context holding dependencies for command execution.
pub struct AppContext<D: DocumentStore> {
    documents: D,
    config: ProcessConfig,
}

impl<D: DocumentStore> AppContext<D> {
    /// Create a new application context.
    pub fn new(documents: D, config: ProcessConfig) -> Self {
        Self { documents, config }
    }

    /// Get a reference to the document store.
    pub fn documents(&self) -> &D {
        &self.documents
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ProcessConfig {
        &self.config
    }
}
