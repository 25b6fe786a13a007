use crate::domain::{AppError, ColorPalette, PortfolioDocument};

/// Where a rendered page is headed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Served by the local editor; carries a banner linking back to `/admin`.
    Preview,
    /// Written to the output directory and published.
    Publish,
}

/// Turns a document into a complete HTML page.
///
/// Must be deterministic: the same document, palette and mode yield byte-identical output.
pub trait PageRenderer: Send + Sync {
    fn render(
        &self,
        document: &PortfolioDocument,
        palette: &ColorPalette,
        mode: RenderMode,
    ) -> Result<String, AppError>;
}
