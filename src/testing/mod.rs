mod fake_git;
mod memory_document_store;

use tempfile::TempDir;

use crate::adapters::MinijinjaPageRenderer;
use crate::app::AppContext;
use crate::domain::SitePaths;

pub use fake_git::FakeGit;
pub use memory_document_store::MemoryDocumentStore;

pub type TestContext = AppContext<MemoryDocumentStore, FakeGit, MinijinjaPageRenderer>;

/// Context rooted in a fresh temp directory. Keep the `TempDir` alive for the test.
pub fn test_context(store: MemoryDocumentStore, git: FakeGit) -> (TempDir, TestContext) {
    let dir = TempDir::new().unwrap();
    let paths = SitePaths::new(dir.path());
    let renderer = MinijinjaPageRenderer::new().unwrap();
    (dir, AppContext::new(paths, store, git, renderer))
}
