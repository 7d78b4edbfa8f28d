use outline_core::Turn;

use super::query::{all_from_first_matching, merge_in_document_order, root_or_body};
use super::{PlatformAdapter, PlatformId};
use crate::document::{HtmlDocument, NodeHandle};

const ROOT: [&str; 3] = [".chat-content", "[class*=\"chat-container\"]", "main"];

const USER: [&str; 3] = [
    ".chat-content-item.chat-content-item-user",
    "[class*=\"user-message\"]",
    "[class*=\"human-message\"]",
];

const ASSISTANT: [&str; 3] = [
    ".chat-content-item.chat-content-item-assistant",
    "[class*=\"assistant-message\"]",
    "[class*=\"ai-message\"]",
];

/// Sibling `chat-content-item` blocks. The page re-lays out once a smooth
/// scroll settles, so navigation scrolls a second time.
#[derive(Debug, Default, Clone, Copy)]
pub struct KimiAdapter;

impl PlatformAdapter for KimiAdapter {
    fn platform(&self) -> PlatformId {
        PlatformId::Kimi
    }

    fn observe_target(&self, doc: &HtmlDocument) -> NodeHandle {
        root_or_body(doc, &ROOT)
    }

    fn conversation_turns(&self, doc: &HtmlDocument, root: NodeHandle) -> Vec<Turn<NodeHandle>> {
        let users = all_from_first_matching(doc, root, &USER);
        let assistants = all_from_first_matching(doc, root, &ASSISTANT);
        merge_in_document_order(doc, users, assistants)
    }

    fn reflows_after_scroll(&self) -> bool {
        true
    }
}
