use outline_core::Turn;

use super::query::{role_attribute_turns, root_or_body};
use super::{PlatformAdapter, PlatformId};
use crate::document::{HtmlDocument, NodeHandle};

/// Messages are tagged with a role attribute on the message container.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChatGptAdapter;

impl PlatformAdapter for ChatGptAdapter {
    fn platform(&self) -> PlatformId {
        PlatformId::ChatGpt
    }

    fn observe_target(&self, doc: &HtmlDocument) -> NodeHandle {
        root_or_body(doc, &["main"])
    }

    fn conversation_turns(&self, doc: &HtmlDocument, root: NodeHandle) -> Vec<Turn<NodeHandle>> {
        role_attribute_turns(doc, root)
    }
}
