use outline_core::{Role, Turn};

use crate::document::{HtmlDocument, NodeHandle};

pub(crate) const ROLE_ATTRIBUTES: [&str; 3] =
    ["data-message-author-role", "data-author-role", "data-role"];

/// First node matching the first selector with any match, document-wide.
pub(crate) fn first_in(doc: &HtmlDocument, selectors: &[&str]) -> Option<NodeHandle> {
    selectors.iter().find_map(|css| doc.query(css))
}

pub(crate) fn root_or_body(doc: &HtmlDocument, selectors: &[&str]) -> NodeHandle {
    first_in(doc, selectors).unwrap_or_else(|| doc.body_or_root())
}

/// Matches of the first selector in `selectors` that finds anything in `scope`.
pub(crate) fn all_from_first_matching(
    doc: &HtmlDocument,
    scope: NodeHandle,
    selectors: &[&str],
) -> Vec<NodeHandle> {
    selectors
        .iter()
        .map(|css| doc.query_all_in(scope, css))
        .find(|nodes| !nodes.is_empty())
        .unwrap_or_default()
}

/// Combine separately queried user and assistant nodes into one sequence in
/// document order. A node matched by both lists keeps its user role.
pub(crate) fn merge_in_document_order(
    doc: &HtmlDocument,
    users: Vec<NodeHandle>,
    assistants: Vec<NodeHandle>,
) -> Vec<Turn<NodeHandle>> {
    let mut turns: Vec<Turn<NodeHandle>> = users.into_iter().map(Turn::user).collect();
    for node in assistants {
        if !turns.iter().any(|turn| turn.node == node) {
            turns.push(Turn::assistant(node));
        }
    }
    turns.sort_by(|a, b| doc.compare_position(a.node, b.node));
    turns
}

pub(crate) fn role_from_attributes(doc: &HtmlDocument, node: NodeHandle) -> Option<Role> {
    ROLE_ATTRIBUTES
        .iter()
        .filter_map(|attr| doc.attr(node, attr))
        .filter(|value| !value.is_empty())
        .find_map(Role::from_alias)
}

/// Every node in `root` carrying a recognised role attribute.
pub(crate) fn role_attribute_turns(doc: &HtmlDocument, root: NodeHandle) -> Vec<Turn<NodeHandle>> {
    let selector = ROLE_ATTRIBUTES
        .iter()
        .map(|attr| format!("[{attr}]"))
        .collect::<Vec<_>>()
        .join(",");
    doc.query_all_in(root, &selector)
        .into_iter()
        .filter_map(|node| role_from_attributes(doc, node).map(|role| Turn { node, role }))
        .collect()
}
