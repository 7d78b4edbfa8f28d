use serde::Serialize;

/// One rendered row of the outline list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineItem {
    pub index: usize,
    pub title: String,
    /// `None` when previews are switched off or the reply is empty.
    pub preview: Option<String>,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ListView {
    pub items: Vec<OutlineItem>,
    pub active_index: Option<usize>,
}
