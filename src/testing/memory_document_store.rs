use std::sync::Mutex;

use crate::domain::{AppError, PortfolioDocument};
use crate::ports::DocumentStore;

/// In-memory document store.
#[derive(Default)]
pub struct MemoryDocumentStore {
    document: Mutex<Option<PortfolioDocument>>,
    corrupt: bool,
    saves: Mutex<usize>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: PortfolioDocument) -> Self {
        Self { document: Mutex::new(Some(document)), ..Self::default() }
    }

    /// A store whose stored document exists but cannot be parsed.
    pub fn corrupt() -> Self {
        Self { corrupt: true, ..Self::default() }
    }

    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn try_load(&self) -> Result<Option<PortfolioDocument>, AppError> {
        if self.corrupt && self.save_count() == 0 {
            return Err(AppError::MalformedDocument {
                path: "memory".into(),
                reason: "unknown variant `gallery`".into(),
            });
        }
        Ok(self.document.lock().unwrap().clone())
    }

    fn save(&self, document: &PortfolioDocument) -> Result<(), AppError> {
        *self.document.lock().unwrap() = Some(document.clone());
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
}
