pub mod deploy;
pub mod document;
mod error;
pub mod palette;
pub mod site_paths;

pub use deploy::{
    BranchListing, CommandOutcome, DeployResult, DeployStepReport, FALLBACK_BRANCH, HOSTING_BRANCH,
    REMOTE, RepoSlug, TIMEOUT_MESSAGE,
};
pub use document::{Bio, Contact, PortfolioDocument, Photo, Project, Section, Social};
pub use error::AppError;
pub use palette::{ColorPalette, DEFAULT_SCHEME};
pub use site_paths::SitePaths;
