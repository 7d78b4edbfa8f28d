use std::time::Duration;

use crate::config::ScrollBehavior;
use crate::pairing::Unit;
use crate::settings::SidebarPosition;
use crate::view_model::ListView;

/// Deferred callbacks. Generation tags let stale timers fall through as no-ops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timer<N> {
    Debounce { generation: u64 },
    HighlightFade { node: N },
    HighlightRestore { node: N },
    Rescroll { node: N },
    NavigationGrace { navigation: u64 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect<N> {
    ScheduleTimer { after: Duration, timer: Timer<N> },
    /// (Re)bind the subtree mutation observer to `target`.
    ObserveMutations { target: N },
    /// Watch the page theme and answer with `Msg::ThemeChanged`, now and on
    /// every later change.
    ObserveTheme,
    /// Run an extraction pass and answer with `Msg::Extracted`.
    Extract,
    /// Re-acquire a live node for `stale` and answer with `Msg::AnchorResolved`.
    ResolveAnchor {
        navigation: u64,
        index: usize,
        stale: Unit<N>,
    },
    UnobserveAnchors(Vec<N>),
    ObserveAnchors(Vec<N>),
    RenderList(ListView),
    BindInteractions,
    UpdateActiveItem(Option<usize>),
    ScrollIntoView { node: N, behavior: ScrollBehavior },
    ApplyHighlight { node: N },
    FadeHighlight { node: N },
    RestoreHighlight { node: N },
    FocusItem(usize),
    SetVisible(bool),
    UpdatePosition(SidebarPosition),
    UpdateTheme(bool),
    PersistVisibility(bool),
    DisconnectObservers,
}
