mod document_store;
mod git;
mod page_renderer;

pub use document_store::DocumentStore;
pub use git::GitPort;
pub use page_renderer::{PageRenderer, RenderMode};
