#![allow(dead_code)]

use std::sync::Once;

use outline_core::{ListView, SidebarPosition};
use outline_engine::Presenter;

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(outline_logging::initialize_for_tests);
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shown {
    List(ListView),
    Bound,
    Active(Option<usize>),
    Visible(bool),
    Position(SidebarPosition),
    Theme(bool),
    Focus(usize),
}

/// Presenter that remembers every call in order.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub shown: Vec<Shown>,
}

impl RecordingPresenter {
    pub fn renders(&self) -> usize {
        self.shown.iter().filter(|s| matches!(s, Shown::List(_))).count()
    }

    pub fn last_list(&self) -> Option<&ListView> {
        self.shown.iter().rev().find_map(|s| match s {
            Shown::List(list) => Some(list),
            _ => None,
        })
    }

    pub fn titles(&self) -> Vec<String> {
        self.last_list()
            .map(|list| list.items.iter().map(|item| item.title.clone()).collect())
            .unwrap_or_default()
    }

    pub fn last_active(&self) -> Option<Option<usize>> {
        self.shown.iter().rev().find_map(|s| match s {
            Shown::Active(active) => Some(*active),
            _ => None,
        })
    }
}

impl Presenter for RecordingPresenter {
    fn render_list(&mut self, list: &ListView) {
        self.shown.push(Shown::List(list.clone()));
    }

    fn update_active_item(&mut self, active: Option<usize>) {
        self.shown.push(Shown::Active(active));
    }

    fn set_visible(&mut self, visible: bool) {
        self.shown.push(Shown::Visible(visible));
    }

    fn update_position(&mut self, position: SidebarPosition) {
        self.shown.push(Shown::Position(position));
    }

    fn update_theme(&mut self, is_dark: bool) {
        self.shown.push(Shown::Theme(is_dark));
    }

    fn bind_interactions(&mut self) {
        self.shown.push(Shown::Bound);
    }

    fn focus_item(&mut self, index: usize) {
        self.shown.push(Shown::Focus(index));
    }
}

/// Role-attribute markup for `(prompt, reply)` pairs.
pub fn chat_turns(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(prompt, reply)| {
            format!(
                r#"<div data-message-author-role="user">{prompt}</div><div data-message-author-role="assistant">{reply}</div>"#
            )
        })
        .collect()
}

pub fn chat_page(pairs: &[(&str, &str)]) -> String {
    format!(
        "<html><head></head><body><nav>history</nav><main>{}</main></body></html>",
        chat_turns(pairs)
    )
}
