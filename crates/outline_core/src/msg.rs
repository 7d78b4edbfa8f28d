use crate::effect::Timer;
use crate::pairing::Unit;
use crate::settings::SettingsPatch;
use crate::viewport::VisibilityEntry;

/// Keys the outline list reacts to while one of its items has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKey {
    Enter,
    Space,
    ArrowUp,
    ArrowDown,
    Home,
    End,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg<N> {
    /// Session is live; apply initial presentation and run the first pass.
    Started,
    /// The observed subtree changed; restarts the quiescence countdown.
    MutationObserved,
    /// A timer scheduled through [`crate::Effect::ScheduleTimer`] elapsed.
    TimerFired(Timer<N>),
    /// Result of an extraction pass.
    Extracted { root: N, units: Vec<Unit<N>> },
    /// User picked an outline item.
    UnitSelected { index: usize },
    /// Result of anchor resolution for navigation `navigation`.
    AnchorResolved {
        navigation: u64,
        index: usize,
        node: Option<N>,
    },
    /// Snapshot of every observed anchor's geometry.
    ViewportChanged {
        viewport_height: f64,
        entries: Vec<VisibilityEntry<N>>,
    },
    /// Key press on the focused list item.
    ListKeyPressed { focused: usize, key: ListKey },
    /// Control channel: flip sidebar visibility.
    ToggleSidebar,
    /// Control channel: merge partial settings.
    SettingsChanged(SettingsPatch),
    /// Page theme evaluation.
    ThemeChanged { is_dark: bool },
    /// Session is being torn down; everything after this is a no-op.
    TornDown,
}
