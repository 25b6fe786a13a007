use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, PortfolioDocument};
use crate::ports::DocumentStore;

/// JSON-file-backed document store.
#[derive(Debug, Clone)]
pub struct FilesystemDocumentStore {
    path: PathBuf,
}

impl FilesystemDocumentStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn malformed(&self, reason: impl ToString) -> AppError {
        AppError::MalformedDocument { path: self.path.clone(), reason: reason.to_string() }
    }
}

impl DocumentStore for FilesystemDocumentStore {
    fn try_load(&self) -> Result<Option<PortfolioDocument>, AppError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(self.malformed(err)),
        };
        serde_json::from_str(&content).map(Some).map_err(|err| self.malformed(err))
    }

    fn save(&self, document: &PortfolioDocument) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut json = serde_json::to_string_pretty(document)?;
        json.push('\n');
        fs::write(&self.path, json)?;
        Ok(())
    }
}
