mod document_filesystem;
mod git_command;
mod template;

pub use document_filesystem::FilesystemDocumentStore;
pub use git_command::{DEFAULT_COMMAND_TIMEOUT, GitCommandAdapter};
pub use template::MinijinjaPageRenderer;
