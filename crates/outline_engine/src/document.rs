use std::cmp::Ordering;
use std::collections::HashMap;

use ego_tree::{NodeId, Tree};
use outline_logging::outline_trace;
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};

/// Reference to a node of an [`HtmlDocument`]. Stays valid as an id even when
/// the node is detached from the tree by a later mutation.
pub type NodeHandle = NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    ChildList,
    CharacterData,
    Attributes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationRecord {
    pub target: NodeHandle,
    pub kind: MutationKind,
}

#[derive(Debug)]
enum Interest {
    Content { subtree: bool },
    /// Attribute changes on the target itself, limited to these names.
    Attributes(Vec<String>),
}

#[derive(Debug)]
struct Observer {
    id: ObserverId,
    target: NodeHandle,
    interest: Interest,
    records: Vec<MutationRecord>,
}

/// A live, mutable HTML tree.
///
/// Queries only ever walk the attached tree; detached subtrees stay addressable
/// by handle so stale references can be detected. Content observers receive
/// child-list and character-data records for mutations at or below their
/// target; attribute observers receive filtered attribute records.
#[derive(Debug)]
pub struct HtmlDocument {
    html: Html,
    observers: Vec<Observer>,
    next_observer: u64,
    styles: HashMap<NodeHandle, Vec<(String, String)>>,
}

impl HtmlDocument {
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
            observers: Vec::new(),
            next_observer: 0,
            styles: HashMap::new(),
        }
    }

    pub(crate) fn tree(&self) -> &Tree<Node> {
        &self.html.tree
    }

    /// The `<html>` element.
    pub fn document_element(&self) -> NodeHandle {
        self.html.root_element().id()
    }

    pub fn body(&self) -> Option<NodeHandle> {
        self.query("body")
    }

    /// `<body>`, or the document element for body-less trees.
    pub fn body_or_root(&self) -> NodeHandle {
        self.body().unwrap_or_else(|| self.document_element())
    }

    pub fn element(&self, node: NodeHandle) -> Option<ElementRef<'_>> {
        self.html.tree.get(node).and_then(ElementRef::wrap)
    }

    pub fn tag_name(&self, node: NodeHandle) -> Option<&str> {
        self.element(node).map(|element| element.value().name())
    }

    pub fn attr(&self, node: NodeHandle, name: &str) -> Option<&str> {
        self.element(node).and_then(|element| element.value().attr(name))
    }

    pub fn has_class(&self, node: NodeHandle, class: &str) -> bool {
        self.element(node)
            .map(|element| element.value().classes().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Whether `node` is still reachable from the document root.
    pub fn is_attached(&self, node: NodeHandle) -> bool {
        let root = self.html.tree.root().id();
        match self.html.tree.get(node) {
            Some(found) if found.id() == root => true,
            Some(found) => found.ancestors().any(|ancestor| ancestor.id() == root),
            None => false,
        }
    }

    /// Whether `node` is `ancestor` or lies inside it.
    pub fn contains(&self, ancestor: NodeHandle, node: NodeHandle) -> bool {
        if ancestor == node {
            return true;
        }
        self.html
            .tree
            .get(node)
            .map(|found| found.ancestors().any(|a| a.id() == ancestor))
            .unwrap_or(false)
    }

    /// Concatenated text of every text node under `node`.
    pub fn text_content(&self, node: NodeHandle) -> String {
        let Some(found) = self.html.tree.get(node) else {
            return String::new();
        };
        found
            .descendants()
            .filter_map(|n| n.value().as_text())
            .map(|text| &**text)
            .collect()
    }

    pub fn inner_html(&self, node: NodeHandle) -> String {
        self.element(node)
            .map(|element| element.inner_html())
            .unwrap_or_default()
    }

    /// All elements below `scope` matching `css`, in document order.
    /// Selectors that fail to parse match nothing.
    pub fn query_all_in(&self, scope: NodeHandle, css: &str) -> Vec<NodeHandle> {
        let (Some(selector), Some(scope)) = (parse_selector(css), self.element(scope)) else {
            return Vec::new();
        };
        scope.select(&selector).map(|element| element.id()).collect()
    }

    pub fn query_in(&self, scope: NodeHandle, css: &str) -> Option<NodeHandle> {
        let selector = parse_selector(css)?;
        let scope = self.element(scope)?;
        let found = scope.select(&selector).next().map(|element| element.id());
        found
    }

    /// Document-wide query, including the document element itself.
    pub fn query_all(&self, css: &str) -> Vec<NodeHandle> {
        let Some(selector) = parse_selector(css) else {
            return Vec::new();
        };
        let root = self.html.root_element();
        let mut found = Vec::new();
        if selector.matches(&root) {
            found.push(root.id());
        }
        found.extend(root.select(&selector).map(|element| element.id()));
        found
    }

    pub fn query(&self, css: &str) -> Option<NodeHandle> {
        self.query_all(css).into_iter().next()
    }

    pub fn matches(&self, node: NodeHandle, css: &str) -> bool {
        match (parse_selector(css), self.element(node)) {
            (Some(selector), Some(element)) => selector.matches(&element),
            _ => false,
        }
    }

    /// Strict document-order comparator. Ancestors precede descendants; nodes
    /// in different trees compare equal.
    pub fn compare_position(&self, a: NodeHandle, b: NodeHandle) -> Ordering {
        if a == b {
            return Ordering::Equal;
        }
        let path_a = self.path_from_root(a);
        let path_b = self.path_from_root(b);
        if path_a.first() != path_b.first() {
            return Ordering::Equal;
        }

        let shared = path_a
            .iter()
            .zip(&path_b)
            .take_while(|(x, y)| x == y)
            .count();
        match (path_a.get(shared), path_b.get(shared)) {
            (None, _) => Ordering::Less,
            (_, None) => Ordering::Greater,
            (Some(&branch_a), Some(&branch_b)) => {
                let follows = self
                    .html
                    .tree
                    .get(branch_a)
                    .map(|n| n.next_siblings().any(|s| s.id() == branch_b))
                    .unwrap_or(false);
                if follows {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
        }
    }

    fn path_from_root(&self, node: NodeHandle) -> Vec<NodeHandle> {
        let Some(found) = self.html.tree.get(node) else {
            return Vec::new();
        };
        let mut path: Vec<NodeHandle> = found.ancestors().map(|a| a.id()).collect();
        path.reverse();
        path.push(node);
        path
    }

pub fn observe(&mut self, target: NodeHandle, subtree: bool) -> ObserverId {
        self.add_observer(target, Interest::Content { subtree })
    }

    /// Watch attribute changes on `target` whose name is in `filter`.
    pub fn observe_attributes(&mut self, target: NodeHandle, filter: &[&str]) -> ObserverId {
        let names = filter.iter().map(|name| name.to_ascii_lowercase()).collect();
        self.add_observer(target, Interest::Attributes(names))
    }

    fn add_observer(&mut self, target: NodeHandle, interest: Interest) -> ObserverId {
        self.next_observer += 1;
        let id = ObserverId(self.next_observer);
        self.observers.push(Observer {
            id,
            target,
            interest,
            records: Vec::new(),
        });
        id
    }

    pub fn disconnect(&mut self, observer: ObserverId) {
        self.observers.retain(|o| o.id != observer);
    }

    pub fn observer_target(&self, observer: ObserverId) -> Option<NodeHandle> {
        self.observers
            .iter()
            .find(|o| o.id == observer)
            .map(|o| o.target)
    }

    /// Drain the records queued for `observer`.
    pub fn take_records(&mut self, observer: ObserverId) -> Vec<MutationRecord> {
        self.observers
            .iter_mut()
            .find(|o| o.id == observer)
            .map(|o| std::mem::take(&mut o.records))
            .unwrap_or_default()
    }

    /// Replace every child of `parent` with the nodes parsed from `fragment`.
    pub fn replace_children_html(&mut self, parent: NodeHandle, fragment: &str) {
        let children: Vec<NodeHandle> = match self.html.tree.get(parent) {
            Some(node) => node.children().map(|c| c.id()).collect(),
            None => return,
        };
        for child in children {
            if let Some(mut child) = self.html.tree.get_mut(child) {
                child.detach();
            }
        }
        self.graft(parent, fragment);
        self.record(parent, MutationKind::ChildList);
    }

    /// Append the nodes parsed from `fragment` as last children of `parent`.
    pub fn append_html(&mut self, parent: NodeHandle, fragment: &str) {
        if self.html.tree.get(parent).is_none() {
            return;
        }
        self.graft(parent, fragment);
        self.record(parent, MutationKind::ChildList);
    }

    /// Rewrite the text of `node`. A lone text child is updated in place,
    /// which is how a streaming reply grows.
    pub fn set_text(&mut self, node: NodeHandle, text: &str) {
        let lone_text = self.html.tree.get(node).and_then(|n| {
            let mut children = n.children();
            match (children.next(), children.next()) {
                (Some(only), None) if only.value().is_text() => Some(only.id()),
                _ => None,
            }
        });

        let parsed = Html::parse_fragment(&escape_text(text));
        let replacement = parsed
            .root_element()
            .children()
            .find(|child| child.value().is_text())
            .map(|child| child.value().clone());

        match (lone_text, replacement) {
            (Some(text_node), Some(value)) => {
                if let Some(mut target) = self.html.tree.get_mut(text_node) {
                    *target.value() = value;
                }
                self.record(text_node, MutationKind::CharacterData);
            }
            _ => self.replace_children_html(node, &escape_text(text)),
        }
    }

    /// Detach `node` from its parent.
    pub fn remove(&mut self, node: NodeHandle) {
        let parent = self.html.tree.get(node).and_then(|n| n.parent()).map(|p| p.id());
        let Some(parent) = parent else {
            return;
        };
        if let Some(mut target) = self.html.tree.get_mut(node) {
            target.detach();
        }
        self.record(parent, MutationKind::ChildList);
    }

    /// Set or remove (`None`) an attribute of an element.
    pub fn set_attribute(&mut self, node: NodeHandle, name: &str, value: Option<&str>) {
        let name = name.to_ascii_lowercase();
        let Some(element) = self.element(node) else {
            return;
        };
        let current = element.value();

        // Re-parse the start tag so the element's class and id caches start empty.
        let mut markup = String::from("<div");
        for (attr, existing) in current.attrs().filter(|(attr, _)| *attr != name) {
            markup.push_str(&format!(" {attr}=\"{}\"", escape_attribute(existing)));
        }
        if let Some(value) = value {
            markup.push_str(&format!(" {name}=\"{}\"", escape_attribute(value)));
        }
        markup.push_str("></div>");
        let tag = current.name.clone();

        let parsed = Html::parse_fragment(&markup);
        let Some(mut rebuilt) = parsed
            .root_element()
            .children()
            .find_map(|child| child.value().as_element().cloned())
        else {
            outline_trace!("could not rebuild element for attribute {:?}", name);
            return;
        };
        rebuilt.name = tag;
        if let Some(mut target) = self.html.tree.get_mut(node) {
            *target.value() = Node::Element(rebuilt);
        }
        if name == "style" {
            self.styles.remove(&node);
        }
        self.record_attribute(node, &name);
    }

    /// Inline style value of `property`, overlay first, then the parsed
    /// `style` attribute.
    pub fn style_property(&self, node: NodeHandle, property: &str) -> Option<String> {
        let declarations = match self.styles.get(&node) {
            Some(declarations) => declarations.clone(),
            None => parse_style(self.attr(node, "style").unwrap_or_default()),
        };
        declarations
            .into_iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value)
    }

    /// Set or clear (`None`) an inline style property. Style writes are not
    /// reported to mutation observers.
    pub fn set_style_property(&mut self, node: NodeHandle, property: &str, value: Option<&str>) {
        if self.element(node).is_none() {
            return;
        }
        let initial = parse_style(self.attr(node, "style").unwrap_or_default());
        let declarations = self.styles.entry(node).or_insert(initial);
        declarations.retain(|(name, _)| name != property);
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            declarations.push((property.to_string(), value.to_string()));
        }
    }

    /// Serialized inline style of `node`.
    pub fn inline_style(&self, node: NodeHandle) -> String {
        let declarations = match self.styles.get(&node) {
            Some(declarations) => declarations.clone(),
            None => parse_style(self.attr(node, "style").unwrap_or_default()),
        };
        declarations
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn graft(&mut self, parent: NodeHandle, fragment: &str) {
        let parsed = Html::parse_fragment(fragment);
        for child in parsed.root_element().children() {
            self.copy_subtree(parent, child);
        }
    }

    fn copy_subtree(&mut self, parent: NodeHandle, source: ego_tree::NodeRef<'_, Node>) {
        let Some(mut target) = self.html.tree.get_mut(parent) else {
            return;
        };
        let id = target.append(source.value().clone()).id();
        for child in source.children() {
            self.copy_subtree(id, child);
        }
    }

    fn record(&mut self, target: NodeHandle, kind: MutationKind) {
        let chain: Vec<NodeHandle> = match self.html.tree.get(target) {
            Some(node) => node.ancestors().map(|a| a.id()).collect(),
            None => return,
        };
        for observer in &mut self.observers {
            let hit = match observer.interest {
                Interest::Content { subtree } => {
                    observer.target == target || (subtree && chain.contains(&observer.target))
                }
                Interest::Attributes(_) => false,
            };
            if hit {
                observer.records.push(MutationRecord { target, kind });
            }
        }
    }

    fn record_attribute(&mut self, target: NodeHandle, name: &str) {
        for observer in &mut self.observers {
            let hit = observer.target == target
                && matches!(&observer.interest, Interest::Attributes(filter) if filter.iter().any(|n| n == name));
            if hit {
                observer.records.push(MutationRecord {
                    target,
                    kind: MutationKind::Attributes,
                });
            }
        }
    }
}

fn parse_selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(selector) => Some(selector),
        Err(err) => {
            outline_trace!("ignoring selector {:?}: {}", css, err);
            None
        }
    }
}

fn parse_style(raw: &str) -> Vec<(String, String)> {
    raw.split(';')
        .filter_map(|declaration| {
            let (name, value) = declaration.split_once(':')?;
            let name = name.trim().to_ascii_lowercase();
            let value = value.trim();
            (!name.is_empty() && !value.is_empty()).then(|| (name, value.to_string()))
        })
        .collect()
}

fn escape_attribute(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
