use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::{DocumentStore, STDIN_SOURCE};

/// Reads documents from disk relative to a base directory, or from stdin.
#[derive(Debug, Clone)]
pub struct FilesystemDocumentStore {
    root: PathBuf,
}

impl FilesystemDocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted at the current working directory.
    pub fn current() -> Result<Self, AppError> {
        Ok(Self::new(std::env::current_dir()?))
    }

    fn resolve_path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl DocumentStore for FilesystemDocumentStore {
    fn read_document(&self, source: &str) -> Result<String, AppError> {
        if source == STDIN_SOURCE {
            let mut content = String::new();
            io::stdin().read_to_string(&mut content)?;
            return Ok(content);
        }
        let path = self.resolve_path(source);
        fs::read_to_string(&path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => AppError::TemplateNotFound(path.display().to_string()),
            _ => AppError::from(err),
        })
    }

    fn read_optional(&self, path: &str) -> Result<Option<String>, AppError> {
        match fs::read_to_string(self.resolve_path(path)) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(AppError::from(err)),
        }
    }
}
