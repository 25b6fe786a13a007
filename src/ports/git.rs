use std::future::Future;

use crate::domain::CommandOutcome;

/// Narrow boundary around the `git` executable.
///
/// Implementations never fail: spawn errors, non-zero exits and timeouts all
/// come back as an unsuccessful [`CommandOutcome`].
pub trait GitPort: Send + Sync {
    /// Run `git <args>` in the repository root and capture combined output.
    fn run(&self, args: &[&str]) -> impl Future<Output = CommandOutcome> + Send;
}
