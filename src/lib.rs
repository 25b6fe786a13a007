//! folio: edit a single-page portfolio locally and publish it to GitHub Pages.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod server;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;

use adapters::{FilesystemDocumentStore, GitCommandAdapter, MinijinjaPageRenderer};
use app::AppContext;
use app::commands::{deploy, generate};
use domain::{ColorPalette, SitePaths, palette};
use ports::DocumentStore;

pub use app::commands::generate::GenerateOutcome;
pub use app::config::AppConfig;
pub use domain::{AppError, DeployResult, PortfolioDocument};

/// Context backed by the real filesystem, git binary, and embedded templates.
pub type LocalContext = AppContext<FilesystemDocumentStore, GitCommandAdapter, MinijinjaPageRenderer>;

/// Wire the production adapters for the configured root.
pub fn local_context(config: &AppConfig) -> Result<LocalContext, AppError> {
    let paths = SitePaths::new(&config.root);
    let store = FilesystemDocumentStore::new(paths.data_file());
    let git = GitCommandAdapter::new(config.root.clone())
        .with_program(config.git_program.clone())
        .with_timeout(config.git_timeout);
    let renderer = MinijinjaPageRenderer::new()?;
    Ok(AppContext::new(paths, store, git, renderer))
}

/// Render the stored document to `output/index.html`.
pub fn generate(config: &AppConfig) -> Result<GenerateOutcome, AppError> {
    let ctx = local_context(config)?;
    let outcome = generate::execute(&ctx)?;
    println!("✅ Portfolio generated at {}", outcome.output_file.display());
    Ok(outcome)
}

/// Load the stored document, falling back to the placeholder portfolio.
pub fn show(config: &AppConfig) -> Result<PortfolioDocument, AppError> {
    Ok(local_context(config)?.store().load())
}

/// The fixed color scheme catalog.
pub fn schemes() -> &'static [ColorPalette] {
    &palette::PALETTES
}

/// Render and publish to the hosting branch, committing at the local time.
pub async fn deploy(config: &AppConfig) -> Result<DeployResult, AppError> {
    let ctx = local_context(config)?;
    Ok(deploy::execute(&ctx, chrono::Local::now().naive_local()).await)
}

/// Run the editor's HTTP surface until interrupted.
pub async fn serve(config: &AppConfig) -> Result<(), AppError> {
    let ctx = Arc::new(local_context(config)?);
    server::serve(config, ctx).await
}
