use crate::domain::{AppError, PortfolioDocument};

/// Persistence for the single portfolio document.
pub trait DocumentStore: Send + Sync {
    /// Stored document; `None` when nothing is stored yet.
    ///
    /// An existing but unreadable or malformed document is an error, so callers that
    /// write back can refuse to clobber it.
    fn try_load(&self) -> Result<Option<PortfolioDocument>, AppError>;

    /// Replace the stored document wholesale. Last writer wins.
    fn save(&self, document: &PortfolioDocument) -> Result<(), AppError>;

    /// Stored document, or the default document when nothing usable is stored.
    fn load(&self) -> PortfolioDocument {
        match self.try_load() {
            Ok(document) => document.unwrap_or_default(),
            Err(err) => {
                tracing::warn!(error = %err, "Using default portfolio document");
                PortfolioDocument::default()
            }
        }
    }
}
