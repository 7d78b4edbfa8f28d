use outline_core::{pair_turns, Role, TextLimits, Turn, Unit};
use outline_logging::outline_debug;

use crate::adapters::PlatformAdapter;
use crate::document::{HtmlDocument, NodeHandle};

/// Outcome of one extraction pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub root: NodeHandle,
    pub turns: Vec<Turn<NodeHandle>>,
    pub units: Vec<Unit<NodeHandle>>,
}

/// Locate the conversation root, collect its turns and pair them into units.
pub fn extract(adapter: &dyn PlatformAdapter, doc: &HtmlDocument, limits: &TextLimits) -> Extraction {
    let root = adapter.conversation_root(doc);
    let turns = adapter.conversation_turns(doc, root);
    let units = pair_turns(&turns, limits, |node, role| turn_text(adapter, doc, *node, role));
    outline_debug!(
        "{} extraction: {} turns, {} units",
        adapter.name(),
        turns.len(),
        units.len()
    );
    Extraction { root, turns, units }
}

/// Text of a turn: the adapter's semantic payload when it has one, the full
/// text content otherwise.
pub fn turn_text(adapter: &dyn PlatformAdapter, doc: &HtmlDocument, node: NodeHandle, role: Role) -> String {
    adapter
        .text_from_node(doc, node, role)
        .unwrap_or_else(|| doc.text_content(node))
}
