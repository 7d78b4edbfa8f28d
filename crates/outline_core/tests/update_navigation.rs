use std::time::Duration;

use outline_core::{
    update, AdapterHints, Effect, Msg, NavigationPhase, OutlineConfig, OutlineState,
    ScrollBehavior, Settings, Timer, Unit, VisibilityEntry,
};
use pretty_assertions::assert_eq;

fn unit(anchor: u32, title: &str) -> Unit<u32> {
    Unit {
        anchor,
        title: title.to_string(),
        preview: String::new(),
        raw_text: title.to_string(),
        reply_end: None,
    }
}

fn loaded(hints: AdapterHints) -> OutlineState<u32> {
    let state = OutlineState::new(OutlineConfig::default(), hints, Settings::default(), true);
    let (state, _) = update(
        state,
        Msg::Extracted {
            root: 100,
            units: vec![unit(1, "first"), unit(2, "second")],
        },
    );
    state
}

fn entry(node: u32, top: f64) -> VisibilityEntry<u32> {
    VisibilityEntry {
        node,
        top,
        height: 100.0,
        is_intersecting: true,
    }
}

#[test]
fn out_of_range_selection_is_noop() {
    let state = loaded(AdapterHints::default());
    let (state, effects) = update(state, Msg::UnitSelected { index: 2 });

    assert!(effects.is_empty());
    assert_eq!(state.navigation(), NavigationPhase::Idle);
}

#[test]
fn selection_requests_resolution_with_stale_unit() {
    let state = loaded(AdapterHints::default());
    let (state, effects) = update(state, Msg::UnitSelected { index: 1 });

    assert_eq!(
        effects,
        vec![Effect::ResolveAnchor {
            navigation: 1,
            index: 1,
            stale: unit(2, "second"),
        }]
    );
    assert_eq!(state.navigation(), NavigationPhase::Resolving { index: 1 });
}

#[test]
fn resolved_navigation_scrolls_highlights_and_schedules_grace() {
    let state = loaded(AdapterHints::default());
    let (state, _) = update(state, Msg::UnitSelected { index: 1 });
    let (state, effects) = update(
        state,
        Msg::AnchorResolved {
            navigation: 1,
            index: 1,
            node: Some(42),
        },
    );

    assert_eq!(
        effects,
        vec![
            Effect::ScrollIntoView {
                node: 42,
                behavior: ScrollBehavior::Smooth,
            },
            Effect::UpdateActiveItem(Some(1)),
            Effect::ApplyHighlight { node: 42 },
            Effect::ScheduleTimer {
                after: Duration::from_millis(1_500),
                timer: Timer::HighlightFade { node: 42 },
            },
            Effect::ScheduleTimer {
                after: Duration::from_millis(1_800),
                timer: Timer::HighlightRestore { node: 42 },
            },
            Effect::ScheduleTimer {
                after: Duration::from_millis(500),
                timer: Timer::NavigationGrace { navigation: 1 },
            },
        ]
    );
    assert_eq!(state.navigation(), NavigationPhase::Scrolled { index: 1 });
    assert_eq!(state.active_index(), Some(1));
    assert_eq!(state.highlighted(), &[42]);
}

#[test]
fn reflowing_platforms_get_one_instant_rescroll() {
    let state = loaded(AdapterHints {
        reflows_after_scroll: true,
    });
    let (state, _) = update(state, Msg::UnitSelected { index: 0 });
    let (state, effects) = update(
        state,
        Msg::AnchorResolved {
            navigation: 1,
            index: 0,
            node: Some(1),
        },
    );
    assert!(effects.contains(&Effect::ScheduleTimer {
        after: Duration::from_millis(150),
        timer: Timer::Rescroll { node: 1 },
    }));

    let (_state, effects) = update(state, Msg::TimerFired(Timer::Rescroll { node: 1 }));
    assert_eq!(
        effects,
        vec![Effect::ScrollIntoView {
            node: 1,
            behavior: ScrollBehavior::Instant,
        }]
    );
}

#[test]
fn failed_resolution_aborts_silently() {
    let state = loaded(AdapterHints::default());
    let (state, _) = update(state, Msg::UnitSelected { index: 0 });
    let (state, effects) = update(
        state,
        Msg::AnchorResolved {
            navigation: 1,
            index: 0,
            node: None,
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.navigation(), NavigationPhase::Idle);
    assert_eq!(state.active_index(), None);
}

#[test]
fn viewport_updates_are_suppressed_until_grace_elapses() {
    let state = loaded(AdapterHints::default());
    let (state, _) = update(state, Msg::UnitSelected { index: 1 });
    let (state, _) = update(
        state,
        Msg::AnchorResolved {
            navigation: 1,
            index: 1,
            node: Some(2),
        },
    );

    let viewport = Msg::ViewportChanged {
        viewport_height: 1000.0,
        entries: vec![entry(1, 450.0)],
    };
    let (state, effects) = update(state, viewport.clone());
    assert!(effects.is_empty());
    assert_eq!(state.active_index(), Some(1));

    let (state, _) = update(state, Msg::TimerFired(Timer::NavigationGrace { navigation: 1 }));
    assert_eq!(state.navigation(), NavigationPhase::Idle);
    let (state, effects) = update(state, viewport);
    assert_eq!(effects, vec![Effect::UpdateActiveItem(Some(0))]);
    assert_eq!(state.active_index(), Some(0));
}

#[test]
fn grace_from_superseded_navigation_is_ignored() {
    let state = loaded(AdapterHints::default());
    let (state, _) = update(state, Msg::UnitSelected { index: 0 });
    let (state, _) = update(state, Msg::UnitSelected { index: 1 });

    let (state, _) = update(state, Msg::TimerFired(Timer::NavigationGrace { navigation: 1 }));
    assert_eq!(state.navigation(), NavigationPhase::Resolving { index: 1 });

    // Resolution answers for the old request are dropped too.
    let (state, effects) = update(
        state,
        Msg::AnchorResolved {
            navigation: 1,
            index: 0,
            node: Some(1),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.active_index(), None);
}

#[test]
fn highlight_timers_fade_then_restore_once() {
    let state = loaded(AdapterHints::default());
    let (state, _) = update(state, Msg::UnitSelected { index: 0 });
    let (state, _) = update(
        state,
        Msg::AnchorResolved {
            navigation: 1,
            index: 0,
            node: Some(1),
        },
    );

    let (state, fade) = update(state, Msg::TimerFired(Timer::HighlightFade { node: 1 }));
    assert_eq!(fade, vec![Effect::FadeHighlight { node: 1 }]);
    let (state, restore) = update(state, Msg::TimerFired(Timer::HighlightRestore { node: 1 }));
    assert_eq!(restore, vec![Effect::RestoreHighlight { node: 1 }]);
    let (_state, again) = update(state, Msg::TimerFired(Timer::HighlightRestore { node: 1 }));
    assert!(again.is_empty());
}

#[test]
fn teardown_reverts_highlights_and_silences_timers() {
    let state = loaded(AdapterHints::default());
    let (state, _) = update(state, Msg::UnitSelected { index: 0 });
    let (state, _) = update(
        state,
        Msg::AnchorResolved {
            navigation: 1,
            index: 0,
            node: Some(1),
        },
    );

    let (state, effects) = update(state, Msg::TornDown);
    assert_eq!(
        effects,
        vec![
            Effect::DisconnectObservers,
            Effect::UnobserveAnchors(vec![1, 2]),
            Effect::FadeHighlight { node: 1 },
            Effect::RestoreHighlight { node: 1 },
        ]
    );
    assert!(!state.is_active());

    let (state, effects) = update(state, Msg::TimerFired(Timer::HighlightRestore { node: 1 }));
    assert!(effects.is_empty());
    let (_state, effects) = update(state, Msg::MutationObserved);
    assert!(effects.is_empty());
}
