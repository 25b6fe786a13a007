use crate::app::AppContext;
use crate::domain::{AppError, PortfolioDocument, Section};
use crate::ports::{DocumentStore, GitPort, PageRenderer};

/// Replace the document's section order and save it.
///
/// `None` keeps the stored order. Repeated sections keep their first position.
/// A stored document that cannot be read is left untouched and reported as an error.
pub fn execute<S, G, R>(
    ctx: &AppContext<S, G, R>,
    order: Option<Vec<Section>>,
) -> Result<PortfolioDocument, AppError>
where
    S: DocumentStore,
    G: GitPort,
    R: PageRenderer,
{
    let mut document = ctx.store().try_load()?.unwrap_or_default();

    if let Some(order) = order {
        if order.is_empty() {
            return Err(AppError::Validation("Section order must name at least one section".into()));
        }
        let mut deduped: Vec<Section> = Vec::with_capacity(order.len());
        for section in order {
            if !deduped.contains(&section) {
                deduped.push(section);
            }
        }
        document.section_order = deduped;
    }

    ctx.store().save(&document)?;
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeGit, MemoryDocumentStore, test_context};

    #[test]
    fn replaces_order_and_keeps_other_fields() {
        let mut doc = PortfolioDocument::default();
        doc.github_username = "alice".into();
        let (_dir, ctx) = test_context(MemoryDocumentStore::with_document(doc), FakeGit::new());

        execute(&ctx, Some(vec![Section::Skills, Section::Bio])).unwrap();

        let stored = ctx.store().load();
        assert_eq!(stored.section_order, vec![Section::Skills, Section::Bio]);
        assert_eq!(stored.github_username, "alice");
    }

    #[test]
    fn missing_order_keeps_existing_and_still_saves() {
        let (_dir, ctx) = test_context(MemoryDocumentStore::new(), FakeGit::new());
        let doc = execute(&ctx, None).unwrap();
        assert_eq!(doc.section_order, Section::ALL.to_vec());
        assert_eq!(ctx.store().save_count(), 1);
    }

    #[test]
    fn duplicates_are_dropped() {
        let (_dir, ctx) = test_context(MemoryDocumentStore::new(), FakeGit::new());
        let doc = execute(&ctx, Some(vec![Section::Bio, Section::Photo, Section::Bio])).unwrap();
        assert_eq!(doc.section_order, vec![Section::Bio, Section::Photo]);
    }

    #[test]
    fn unreadable_document_is_not_overwritten() {
        let (_dir, ctx) = test_context(MemoryDocumentStore::corrupt(), FakeGit::new());

        let err = execute(&ctx, Some(vec![Section::Skills, Section::Bio])).unwrap_err();

        assert!(matches!(err, AppError::MalformedDocument { .. }));
        assert_eq!(ctx.store().save_count(), 0);
    }

    #[test]
    fn empty_order_is_rejected_without_saving() {
        let (_dir, ctx) = test_context(MemoryDocumentStore::new(), FakeGit::new());
        let err = execute(&ctx, Some(vec![])).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(ctx.store().save_count(), 0);
    }
}
