use std::collections::HashMap;

use outline_core::HighlightConfig;

use crate::document::{HtmlDocument, NodeHandle};

#[derive(Debug, Clone, PartialEq, Eq)]
struct SavedStyle {
    background: Option<String>,
    transition: Option<String>,
    border_radius: Option<String>,
}

/// Transient background pulse on a navigation target.
///
/// The inline values a node had before its first pulse are kept until the
/// final restore, so overlapping pulses still restore the page's own styling.
#[derive(Debug, Clone)]
pub struct Highlighter {
    config: HighlightConfig,
    saved: HashMap<NodeHandle, SavedStyle>,
}

impl Highlighter {
    pub fn new(config: HighlightConfig) -> Self {
        Self {
            config,
            saved: HashMap::new(),
        }
    }

    pub fn apply(&mut self, doc: &mut HtmlDocument, node: NodeHandle, border_radius: &str) {
        if doc.element(node).is_none() {
            return;
        }
        self.saved.entry(node).or_insert_with(|| SavedStyle {
            background: doc.style_property(node, "background"),
            transition: doc.style_property(node, "transition"),
            border_radius: doc.style_property(node, "border-radius"),
        });
        doc.set_style_property(node, "transition", Some(self.config.transition.as_str()));
        doc.set_style_property(node, "background", Some(self.config.background.as_str()));
        doc.set_style_property(node, "border-radius", Some(border_radius));
    }

    /// Put the original background back; the transition animates the fade.
    pub fn fade(&self, doc: &mut HtmlDocument, node: NodeHandle) {
        if let Some(saved) = self.saved.get(&node) {
            doc.set_style_property(node, "background", saved.background.as_deref());
        }
    }

    /// Put every saved property back and forget the node.
    pub fn restore(&mut self, doc: &mut HtmlDocument, node: NodeHandle) {
        if let Some(saved) = self.saved.remove(&node) {
            doc.set_style_property(node, "background", saved.background.as_deref());
            doc.set_style_property(node, "transition", saved.transition.as_deref());
            doc.set_style_property(node, "border-radius", saved.border_radius.as_deref());
        }
    }
}

#[cfg(test)]
mod tests {
    use outline_core::HighlightConfig;

    use super::Highlighter;
    use crate::document::HtmlDocument;

    #[test]
    fn restores_pre_highlight_inline_values() {
        let mut doc = HtmlDocument::parse(
            r#"<html><body><div id="t" style="background: white; border-radius: 4px">x</div></body></html>"#,
        );
        let node = doc.query("#t").unwrap();
        let mut highlighter = Highlighter::new(HighlightConfig::default());

        highlighter.apply(&mut doc, node, "18px");
        highlighter.apply(&mut doc, node, "18px");
        assert_eq!(
            doc.style_property(node, "background").as_deref(),
            Some("rgba(0, 108, 255, 0.12)")
        );

        highlighter.fade(&mut doc, node);
        assert_eq!(doc.style_property(node, "background").as_deref(), Some("white"));
        assert_eq!(doc.style_property(node, "border-radius").as_deref(), Some("18px"));

        highlighter.restore(&mut doc, node);
        assert_eq!(doc.style_property(node, "border-radius").as_deref(), Some("4px"));
        assert_eq!(doc.style_property(node, "transition"), None);
    }
}
