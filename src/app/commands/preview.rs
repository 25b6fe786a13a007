use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{DocumentStore, GitPort, PageRenderer, RenderMode};

/// Render the stored document for the local preview. Nothing is written.
pub fn execute<S, G, R>(ctx: &AppContext<S, G, R>) -> Result<String, AppError>
where
    S: DocumentStore,
    G: GitPort,
    R: PageRenderer,
{
    let document = ctx.store().load();
    ctx.renderer().render(&document, document.palette(), RenderMode::Preview)
}
