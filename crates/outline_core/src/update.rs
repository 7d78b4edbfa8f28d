use crate::config::ScrollBehavior;
use crate::navigation::NavigationPhase;
use crate::viewport::pick_active;
use crate::{Effect, ListKey, Msg, NodeKey, OutlineState, SettingsPatch, Timer};

/// Pure update function: applies a message to state and returns any effects.
pub fn update<N: NodeKey>(mut state: OutlineState<N>, msg: Msg<N>) -> (OutlineState<N>, Vec<Effect<N>>) {
    if !state.is_active() {
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::Started => vec![
            Effect::UpdatePosition(state.settings().sidebar_position),
            Effect::SetVisible(state.effective_visibility()),
            Effect::ObserveTheme,
            Effect::Extract,
        ],
        Msg::MutationObserved => {
            let generation = state.bump_debounce();
            vec![Effect::ScheduleTimer {
                after: state.config().debounce(),
                timer: Timer::Debounce { generation },
            }]
        }
        Msg::TimerFired(timer) => on_timer(&mut state, timer),
        Msg::Extracted { root, units } => {
            let mut effects = Vec::new();
            if state.set_root(root.clone()) {
                effects.push(Effect::ObserveMutations { target: root });
            }
            // Equal signatures leave the rendered list untouched.
            if let Some(previous) = state.commit_units(units) {
                if !previous.is_empty() {
                    effects.push(Effect::UnobserveAnchors(previous));
                }
                effects.push(Effect::RenderList(state.list_view()));
                effects.push(Effect::BindInteractions);
                effects.push(Effect::ObserveAnchors(state.anchors()));
            }
            effects
        }
        Msg::UnitSelected { index } => select(&mut state, index),
        Msg::AnchorResolved {
            navigation,
            index,
            node,
        } => on_resolved(&mut state, navigation, index, node),
        Msg::ViewportChanged {
            viewport_height,
            entries,
        } => {
            if state.is_navigating() {
                return (state, Vec::new());
            }
            let center = viewport_height / 2.0;
            let candidates: Vec<(usize, f64)> = entries
                .iter()
                .filter(|entry| entry.is_intersecting)
                .filter_map(|entry| {
                    state
                        .unit_index_of(&entry.node)
                        .map(|index| (index, (entry.center() - center).abs()))
                })
                .collect();
            match pick_active(&candidates, state.active_index()) {
                Some(index) if state.set_active_index(Some(index)) => {
                    vec![Effect::UpdateActiveItem(Some(index))]
                }
                _ => Vec::new(),
            }
        }
        Msg::ListKeyPressed { focused, key } => {
            let count = state.units().len();
            match key {
                ListKey::Enter | ListKey::Space => select(&mut state, focused),
                ListKey::ArrowDown => focus(focused.checked_add(1), count),
                ListKey::ArrowUp => focus(focused.checked_sub(1), count),
                ListKey::Home => focus(Some(0), count),
                ListKey::End => focus(count.checked_sub(1), count),
            }
        }
        Msg::ToggleSidebar => {
            let visible = state.toggle_visible();
            vec![
                Effect::SetVisible(state.effective_visibility()),
                Effect::PersistVisibility(visible),
            ]
        }
        Msg::SettingsChanged(patch) => apply_patch(&mut state, patch),
        Msg::ThemeChanged { is_dark } => {
            if state.set_theme(is_dark) {
                vec![Effect::UpdateTheme(is_dark)]
            } else {
                Vec::new()
            }
        }
        Msg::TornDown => {
            let mut effects = vec![Effect::DisconnectObservers];
            let anchors = state.anchors();
            if !anchors.is_empty() {
                effects.push(Effect::UnobserveAnchors(anchors));
            }
            // Pending restore timers die with the session; revert styles now.
            for node in state.take_highlights() {
                effects.push(Effect::FadeHighlight { node: node.clone() });
                effects.push(Effect::RestoreHighlight { node });
            }
            state.deactivate();
            effects
        }
    };

    (state, effects)
}

fn on_timer<N: NodeKey>(state: &mut OutlineState<N>, timer: Timer<N>) -> Vec<Effect<N>> {
    match timer {
        Timer::Debounce { generation } => {
            if generation == state.debounce_generation() {
                vec![Effect::Extract]
            } else {
                Vec::new()
            }
        }
        Timer::HighlightFade { node } => {
            if state.highlighted().contains(&node) {
                vec![Effect::FadeHighlight { node }]
            } else {
                Vec::new()
            }
        }
        Timer::HighlightRestore { node } => {
            if state.release_highlight(&node) {
                vec![Effect::RestoreHighlight { node }]
            } else {
                Vec::new()
            }
        }
        Timer::Rescroll { node } => vec![Effect::ScrollIntoView {
            node,
            behavior: ScrollBehavior::Instant,
        }],
        Timer::NavigationGrace { navigation } => {
            if navigation == state.navigation_id() {
                state.set_navigation(NavigationPhase::Idle);
            }
            Vec::new()
        }
    }
}

fn select<N: NodeKey>(state: &mut OutlineState<N>, index: usize) -> Vec<Effect<N>> {
    let Some(stale) = state.unit(index).cloned() else {
        return Vec::new();
    };
    let navigation = state.begin_navigation(index);
    vec![Effect::ResolveAnchor {
        navigation,
        index,
        stale,
    }]
}

fn on_resolved<N: NodeKey>(
    state: &mut OutlineState<N>,
    navigation: u64,
    index: usize,
    node: Option<N>,
) -> Vec<Effect<N>> {
    if navigation != state.navigation_id() || state.navigation() != (NavigationPhase::Resolving { index }) {
        return Vec::new();
    }
    let Some(node) = node else {
        state.set_navigation(NavigationPhase::Idle);
        return Vec::new();
    };

    state.set_navigation(NavigationPhase::Scrolled { index });
    state.set_active_index(Some(index));
    state.track_highlight(node.clone());

    let config = state.config();
    let mut effects = vec![
        Effect::ScrollIntoView {
            node: node.clone(),
            behavior: config.scroll_behavior,
        },
        Effect::UpdateActiveItem(Some(index)),
        Effect::ApplyHighlight { node: node.clone() },
        Effect::ScheduleTimer {
            after: config.highlight_fade(),
            timer: Timer::HighlightFade { node: node.clone() },
        },
        Effect::ScheduleTimer {
            after: config.highlight_restore(),
            timer: Timer::HighlightRestore { node: node.clone() },
        },
    ];
    if state.hints().reflows_after_scroll {
        effects.push(Effect::ScheduleTimer {
            after: config.rescroll_delay(),
            timer: Timer::Rescroll { node },
        });
    }
    effects.push(Effect::ScheduleTimer {
        after: config.navigation_grace(),
        timer: Timer::NavigationGrace { navigation },
    });
    effects
}

fn focus<N>(target: Option<usize>, count: usize) -> Vec<Effect<N>> {
    match target {
        Some(index) if index < count => vec![Effect::FocusItem(index)],
        _ => Vec::new(),
    }
}

fn apply_patch<N: NodeKey>(state: &mut OutlineState<N>, patch: SettingsPatch) -> Vec<Effect<N>> {
    state.apply_settings(state.settings().merged(&patch));

    let mut effects = Vec::new();
    if let Some(position) = patch.sidebar_position {
        effects.push(Effect::UpdatePosition(position));
    }
    if patch.show_preview.is_some() {
        effects.push(Effect::RenderList(state.list_view()));
        effects.push(Effect::BindInteractions);
    }
    if patch.enabled.is_some() {
        effects.push(Effect::SetVisible(state.effective_visibility()));
    }
    effects
}
