use std::path::{Path, PathBuf};

/// Portfolio document file name, relative to the application root.
pub const DATA_FILE: &str = "portfolio_data.json";

/// Directory holding the rendered site, relative to the application root.
pub const OUTPUT_DIR: &str = "output";

/// Rendered page file name inside [`OUTPUT_DIR`].
pub const OUTPUT_FILE: &str = "index.html";

/// Locations of the document and rendered page under one application root.
///
/// Absolute paths are used for I/O, relative ones for git arguments, which always
/// run with the root as working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePaths {
    root: PathBuf,
}

impl SitePaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_file(&self) -> PathBuf {
        self.root.join(DATA_FILE)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.join(OUTPUT_DIR)
    }

    pub fn output_file(&self) -> PathBuf {
        self.output_dir().join(OUTPUT_FILE)
    }

    /// `portfolio_data.json`, as passed to `git add`.
    pub fn data_file_relative(&self) -> &'static str {
        DATA_FILE
    }

    /// `output/index.html`, as passed to `git add`.
    pub fn output_file_relative(&self) -> String {
        format!("{OUTPUT_DIR}/{OUTPUT_FILE}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_rooted() {
        let paths = SitePaths::new("/srv/site");
        assert_eq!(paths.data_file(), PathBuf::from("/srv/site/portfolio_data.json"));
        assert_eq!(paths.output_file(), PathBuf::from("/srv/site/output/index.html"));
        assert_eq!(paths.output_file_relative(), "output/index.html");
    }
}
