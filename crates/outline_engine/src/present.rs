use outline_core::{ListView, SidebarPosition};

/// Consumer of the outline list. Implementations draw it; the session only
/// tells them what changed.
pub trait Presenter {
    fn render_list(&mut self, list: &ListView);
    fn update_active_item(&mut self, active: Option<usize>);
    fn set_visible(&mut self, visible: bool);
    fn update_position(&mut self, position: SidebarPosition);
    fn update_theme(&mut self, is_dark: bool);

    /// Called after every render so item handlers point at the new list.
    fn bind_interactions(&mut self) {}

    /// Move keyboard focus to item `index`.
    fn focus_item(&mut self, _index: usize) {}
}
