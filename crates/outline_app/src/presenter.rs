use std::fmt::Write as _;

use outline_core::{ListView, SidebarPosition};
use outline_engine::Presenter;
use outline_logging::outline_debug;

/// Keeps the latest outline and prints it to stdout when asked to.
#[derive(Debug)]
pub struct TerminalPresenter {
    echo: bool,
    list: ListView,
    visible: bool,
    position: SidebarPosition,
    is_dark: bool,
}

impl TerminalPresenter {
    /// With `echo` set, every re-render is printed as it happens.
    pub fn new(echo: bool) -> Self {
        Self {
            echo,
            list: ListView::default(),
            visible: true,
            position: SidebarPosition::default(),
            is_dark: false,
        }
    }

    pub fn list(&self) -> &ListView {
        &self.list
    }

    pub fn render(&self) -> String {
        let side = match self.position {
            SidebarPosition::Left => "left",
            SidebarPosition::Right => "right",
        };
        let mut out = format!(
            "{} prompts (sidebar {}, {}{})\n",
            self.list.items.len(),
            side,
            if self.visible { "visible" } else { "hidden" },
            if self.is_dark { ", dark" } else { "" },
        );
        for item in &self.list.items {
            let marker = if item.active { '>' } else { ' ' };
            let _ = writeln!(out, "{marker} {:>3}. {}", item.index + 1, item.title);
            if let Some(preview) = &item.preview {
                let _ = writeln!(out, "        {preview}");
            }
        }
        out
    }
}

impl Presenter for TerminalPresenter {
    fn render_list(&mut self, list: &ListView) {
        self.list = list.clone();
        if self.echo {
            print!("{}", self.render());
        }
    }

    fn update_active_item(&mut self, active: Option<usize>) {
        self.list.active_index = active;
        for item in &mut self.list.items {
            item.active = Some(item.index) == active;
        }
        outline_debug!("active item {:?}", active);
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn update_position(&mut self, position: SidebarPosition) {
        self.position = position;
    }

    fn update_theme(&mut self, is_dark: bool) {
        self.is_dark = is_dark;
    }
}
