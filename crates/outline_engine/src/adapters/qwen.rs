use outline_core::{Role, Turn};

use super::query::{all_from_first_matching, merge_in_document_order, root_or_body};
use super::{PlatformAdapter, PlatformId};
use crate::document::{HtmlDocument, NodeHandle};

const ROOT: [&str; 3] = ["[class*=\"chat-container\"]", "[class*=\"conversation\"]", "main"];

const USER: [&str; 3] = [
    "div[class*=\"questionItem-\"][data-msgid]",
    "[class*=\"user-message\"]",
    "[class*=\"question\"]",
];

const ASSISTANT: [&str; 3] = [
    "div[class*=\"answerItem-\"][data-msgid]",
    "[class*=\"assistant-message\"]",
    "[class*=\"answer\"]",
];

/// Body of a message item, without the model/timestamp header and the
/// action buttons.
const CONTENT: [&str; 4] = [
    "div[class*=\"answerContent-\"]",
    "div[class*=\"questionContent-\"]",
    "div[class*=\"bubble-\"]",
    ".markdown-body",
];

/// Hashed CSS-module class names (`questionItem-3f9a`), keyed by message id.
#[derive(Debug, Default, Clone, Copy)]
pub struct QwenAdapter;

impl PlatformAdapter for QwenAdapter {
    fn platform(&self) -> PlatformId {
        PlatformId::Qwen
    }

    fn observe_target(&self, doc: &HtmlDocument) -> NodeHandle {
        root_or_body(doc, &ROOT)
    }

    fn conversation_turns(&self, doc: &HtmlDocument, root: NodeHandle) -> Vec<Turn<NodeHandle>> {
        let users = all_from_first_matching(doc, root, &USER);
        let assistants = all_from_first_matching(doc, root, &ASSISTANT);
        merge_in_document_order(doc, users, assistants)
    }

    fn text_from_node(&self, doc: &HtmlDocument, node: NodeHandle, _role: Role) -> Option<String> {
        CONTENT
            .iter()
            .filter_map(|css| doc.query_in(node, css))
            .map(|content| doc.text_content(content).trim().to_string())
            .find(|text| !text.is_empty())
    }
}
