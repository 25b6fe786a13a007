use crate::domain::SitePaths;
use crate::ports::{DocumentStore, GitPort, PageRenderer};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: DocumentStore, G: GitPort, R: PageRenderer> {
    paths: SitePaths,
    store: S,
    git: G,
    renderer: R,
}

impl<S: DocumentStore, G: GitPort, R: PageRenderer> AppContext<S, G, R> {
    /// Create a new application context.
    pub fn new(paths: SitePaths, store: S, git: G, renderer: R) -> Self {
        Self { paths, store, git, renderer }
    }

    /// Document and output locations.
    pub fn paths(&self) -> &SitePaths {
        &self.paths
    }

    /// Get a reference to the document store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the git runner.
    pub fn git(&self) -> &G {
        &self.git
    }

    /// Get a reference to the page renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
