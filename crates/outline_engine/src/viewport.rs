use std::collections::HashMap;

use ego_tree::iter::Edge;
use outline_core::{normalize_text, RootMargin, ScrollBehavior, VisibilityEntry};

use crate::document::{HtmlDocument, NodeHandle};

/// Vertical extent of a node in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub top: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRecord {
    pub node: NodeHandle,
    pub scroll_top: f64,
    pub behavior: ScrollBehavior,
}

/// Headless stand-in for a scrolling window.
///
/// Layout is a single column: every non-blank text node takes as many lines
/// as its normalized text needs at `chars_per_line`, and an element spans the
/// lines of its descendants. Only attached nodes have a block.
#[derive(Debug, Clone)]
pub struct BlockViewport {
    height: f64,
    scroll_top: f64,
    line_height: f64,
    chars_per_line: usize,
    scrolls: Vec<ScrollRecord>,
}

impl BlockViewport {
    pub fn new(height: f64) -> Self {
        Self {
            height,
            scroll_top: 0.0,
            line_height: 20.0,
            chars_per_line: 80,
            scrolls: Vec::new(),
        }
    }

    pub fn with_line_metrics(mut self, line_height: f64, chars_per_line: usize) -> Self {
        self.line_height = line_height;
        self.chars_per_line = chars_per_line.max(1);
        self
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    pub fn scroll_log(&self) -> &[ScrollRecord] {
        &self.scrolls
    }

    fn layout(&self, doc: &HtmlDocument) -> (HashMap<NodeHandle, Block>, f64) {
        let mut blocks = HashMap::new();
        let mut opened: HashMap<NodeHandle, f64> = HashMap::new();
        let mut cursor = 0.0;

        for edge in doc.tree().root().traverse() {
            match edge {
                Edge::Open(node) => {
                    if let Some(text) = node.value().as_text() {
                        let chars = normalize_text(text).chars().count();
                        if chars > 0 {
                            let lines = chars.div_ceil(self.chars_per_line);
                            cursor += lines as f64 * self.line_height;
                        }
                    }
                    opened.insert(node.id(), cursor);
                }
                Edge::Close(node) => {
                    let top = opened.remove(&node.id()).unwrap_or(cursor);
                    blocks.insert(
                        node.id(),
                        Block {
                            top,
                            height: cursor - top,
                        },
                    );
                }
            }
        }
        (blocks, cursor)
    }

    pub fn block(&self, doc: &HtmlDocument, node: NodeHandle) -> Option<Block> {
        self.layout(doc).0.get(&node).copied()
    }

    pub fn content_height(&self, doc: &HtmlDocument) -> f64 {
        self.layout(doc).1
    }

    /// Scroll to `scroll_top`, clamped to the scrollable range.
    pub fn scroll_to(&mut self, doc: &HtmlDocument, scroll_top: f64) {
        let max = (self.content_height(doc) - self.height).max(0.0);
        self.scroll_top = scroll_top.clamp(0.0, max);
    }

    /// Align the top of `node` with the top of the viewport. Returns false for
    /// detached nodes.
    pub fn scroll_into_view(&mut self, doc: &HtmlDocument, node: NodeHandle, behavior: ScrollBehavior) -> bool {
        let Some(block) = self.block(doc, node) else {
            return false;
        };
        self.scroll_to(doc, block.top);
        self.scrolls.push(ScrollRecord {
            node,
            scroll_top: self.scroll_top,
            behavior,
        });
        true
    }

    /// Geometry of every attached anchor, relative to the viewport top, with
    /// intersection judged against the margin-adjusted viewport.
    pub fn intersections(
        &self,
        doc: &HtmlDocument,
        anchors: &[NodeHandle],
        margin: &RootMargin,
        threshold: f64,
    ) -> Vec<VisibilityEntry<NodeHandle>> {
        let (blocks, _) = self.layout(doc);
        let root_top = -margin.top.resolve(self.height);
        let root_bottom = self.height + margin.bottom.resolve(self.height);

        anchors
            .iter()
            .filter_map(|node| blocks.get(node).map(|block| (*node, *block)))
            .map(|(node, block)| {
                let top = block.top - self.scroll_top;
                let bottom = top + block.height;
                let overlap = bottom.min(root_bottom) - top.max(root_top);
                let is_intersecting = if block.height <= 0.0 {
                    top >= root_top && top <= root_bottom
                } else {
                    overlap > 0.0 && overlap / block.height >= threshold
                };
                VisibilityEntry {
                    node,
                    top,
                    height: block.height,
                    is_intersecting,
                }
            })
            .collect()
    }
}
