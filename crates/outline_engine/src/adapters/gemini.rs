use outline_core::{Role, Turn};

use super::query::{role_attribute_turns, role_from_attributes, root_or_body};
use super::{PlatformAdapter, PlatformId};
use crate::document::{HtmlDocument, NodeHandle};

const ROOT: [&str; 2] = ["chat-window", "main"];
const TURN_CONTAINER: &str = ".conversation-container";
const USER: [&str; 2] = ["user-query .query-text", "user-query"];
const ASSISTANT: [&str; 2] = ["model-response message-content", "model-response"];

/// Custom elements (`user-query`, `model-response`), usually grouped in
/// `.conversation-container` turn containers.
#[derive(Debug, Default, Clone, Copy)]
pub struct GeminiAdapter;

impl GeminiAdapter {
    fn from_containers(doc: &HtmlDocument, root: NodeHandle) -> Vec<Turn<NodeHandle>> {
        let mut turns = Vec::new();
        for container in doc.query_all_in(root, TURN_CONTAINER) {
            if let Some(node) = first_within(doc, container, &USER) {
                turns.push(Turn::user(node));
            }
            if let Some(node) = first_within(doc, container, &ASSISTANT) {
                turns.push(Turn::assistant(node));
            }
        }
        turns
    }

    fn from_custom_elements(doc: &HtmlDocument, root: NodeHandle) -> Vec<Turn<NodeHandle>> {
        let selector = USER.iter().chain(&ASSISTANT).copied().collect::<Vec<_>>().join(",");
        let turns: Vec<Turn<NodeHandle>> = doc
            .query_all_in(root, &selector)
            .into_iter()
            .filter_map(|node| role_of(doc, node).map(|role| Turn { node, role }))
            .collect();

        // `user-query` and its `.query-text` both match; keep the innermost.
        turns
            .iter()
            .filter(|turn| {
                !turns.iter().any(|other| {
                    other.node != turn.node
                        && other.role == turn.role
                        && doc.contains(turn.node, other.node)
                })
            })
            .cloned()
            .collect()
    }
}

fn first_within(doc: &HtmlDocument, scope: NodeHandle, selectors: &[&str]) -> Option<NodeHandle> {
    selectors.iter().find_map(|css| doc.query_in(scope, css))
}

fn role_of(doc: &HtmlDocument, node: NodeHandle) -> Option<Role> {
    if USER.iter().any(|css| doc.matches(node, css)) {
        Some(Role::User)
    } else if ASSISTANT.iter().any(|css| doc.matches(node, css)) {
        Some(Role::Assistant)
    } else {
        role_from_attributes(doc, node)
    }
}

impl PlatformAdapter for GeminiAdapter {
    fn platform(&self) -> PlatformId {
        PlatformId::Gemini
    }

    fn observe_target(&self, doc: &HtmlDocument) -> NodeHandle {
        root_or_body(doc, &ROOT)
    }

    fn conversation_turns(&self, doc: &HtmlDocument, root: NodeHandle) -> Vec<Turn<NodeHandle>> {
        let turns = Self::from_containers(doc, root);
        if !turns.is_empty() {
            return turns;
        }
        let turns = Self::from_custom_elements(doc, root);
        if !turns.is_empty() {
            return turns;
        }
        role_attribute_turns(doc, root)
    }
}
