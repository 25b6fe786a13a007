use std::fs;
use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{DocumentStore, GitPort, PageRenderer, RenderMode};

/// Result of rendering the portfolio to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    pub output_file: PathBuf,
    pub bytes_written: usize,
}

/// Render the stored document and write it to `output/index.html`.
///
/// Creates the output directory when absent. The written page is always the
/// publish rendition, never the preview.
pub fn execute<S, G, R>(ctx: &AppContext<S, G, R>) -> Result<GenerateOutcome, AppError>
where
    S: DocumentStore,
    G: GitPort,
    R: PageRenderer,
{
    let document = ctx.store().load();
    let html = ctx.renderer().render(&document, document.palette(), RenderMode::Publish)?;

    fs::create_dir_all(ctx.paths().output_dir())?;
    let output_file = ctx.paths().output_file();
    fs::write(&output_file, &html)?;

    tracing::info!(path = %output_file.display(), bytes = html.len(), "Portfolio generated");
    Ok(GenerateOutcome { output_file, bytes_written: html.len() })
}
