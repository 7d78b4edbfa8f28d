use crate::document::HtmlDocument;
use crate::viewport::BlockViewport;

/// A loaded chat page: its origin, live tree and scrolling window.
#[derive(Debug)]
pub struct Page {
    pub origin: String,
    pub document: HtmlDocument,
    pub viewport: BlockViewport,
}

impl Page {
    pub fn new(origin: impl Into<String>, document: HtmlDocument, viewport: BlockViewport) -> Self {
        Self {
            origin: origin.into(),
            document,
            viewport,
        }
    }

    pub fn parse(origin: impl Into<String>, html: &str, viewport_height: f64) -> Self {
        Self::new(origin, HtmlDocument::parse(html), BlockViewport::new(viewport_height))
    }
}
