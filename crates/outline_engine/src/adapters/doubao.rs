use outline_core::Turn;

use super::query::{all_from_first_matching, merge_in_document_order, root_or_body};
use super::{PlatformAdapter, PlatformId};
use crate::document::{HtmlDocument, NodeHandle};

const ROOT: [&str; 3] = [".chat-container", "[class*=\"chat-container\"]", "main"];

const USER: [&str; 6] = [
    "div[data-testid=\"send_message\"]",
    ".user-message",
    "[class*=\"user-message\"]",
    "[class*=\"user\"][class*=\"message\"]",
    "[class*=\"send\"][class*=\"message\"]",
    "[class*=\"question\"]",
];

const ASSISTANT: [&str; 5] = [
    "div[data-testid=\"receive_message\"]",
    ".bot-message",
    "[class*=\"bot-message\"]",
    "[class*=\"receive\"][class*=\"message\"]",
    "[class*=\"answer\"]",
];

/// Send/receive message blocks, matched by test id first and by class
/// fragments after that.
#[derive(Debug, Default, Clone, Copy)]
pub struct DoubaoAdapter;

impl PlatformAdapter for DoubaoAdapter {
    fn platform(&self) -> PlatformId {
        PlatformId::Doubao
    }

    fn observe_target(&self, doc: &HtmlDocument) -> NodeHandle {
        root_or_body(doc, &ROOT)
    }

    fn conversation_turns(&self, doc: &HtmlDocument, root: NodeHandle) -> Vec<Turn<NodeHandle>> {
        let users = all_from_first_matching(doc, root, &USER);
        let assistants = all_from_first_matching(doc, root, &ASSISTANT);
        merge_in_document_order(doc, users, assistants)
    }
}
