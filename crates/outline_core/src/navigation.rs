use crate::pairing::Unit;

/// Per-request navigation state: `Idle -> Resolving -> Scrolled -> Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationPhase {
    #[default]
    Idle,
    Resolving {
        index: usize,
    },
    Scrolled {
        index: usize,
    },
}

impl NavigationPhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, NavigationPhase::Idle)
    }
}

/// Which re-acquisition step produced the scroll target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionTier {
    StoredAnchor,
    TitleMatch,
    SameIndex,
}

/// Find a live node for the unit at `index`, first success wins:
/// the stored anchor, then a fresh unit with the same title, then the fresh
/// unit at the same index. `refresh` only runs when the stored anchor is gone.
pub fn resolve_anchor<N, A, R>(
    stale: &Unit<N>,
    index: usize,
    is_attached: A,
    refresh: R,
) -> Option<(N, ResolutionTier)>
where
    N: Clone,
    A: Fn(&N) -> bool,
    R: FnOnce() -> Vec<Unit<N>>,
{
    if is_attached(&stale.anchor) {
        return Some((stale.anchor.clone(), ResolutionTier::StoredAnchor));
    }

    let fresh = refresh();
    if let Some(unit) = fresh.iter().find(|unit| unit.title == stale.title) {
        if is_attached(&unit.anchor) {
            return Some((unit.anchor.clone(), ResolutionTier::TitleMatch));
        }
    }
    fresh
        .get(index)
        .filter(|unit| is_attached(&unit.anchor))
        .map(|unit| (unit.anchor.clone(), ResolutionTier::SameIndex))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::{resolve_anchor, ResolutionTier};
    use crate::pairing::Unit;

    fn unit(anchor: u32, title: &str) -> Unit<u32> {
        Unit {
            anchor,
            title: title.to_string(),
            preview: String::new(),
            raw_text: title.to_string(),
            reply_end: None,
        }
    }

    #[test]
    fn attached_anchor_skips_refresh() {
        let refreshed = Cell::new(false);
        let resolved = resolve_anchor(&unit(1, "a"), 0, |_| true, || {
            refreshed.set(true);
            Vec::new()
        });
        assert_eq!(resolved, Some((1, ResolutionTier::StoredAnchor)));
        assert!(!refreshed.get());
    }

    #[test]
    fn detached_anchor_falls_back_to_title_then_index() {
        let attached = |node: &u32| *node >= 10;
        let by_title = resolve_anchor(&unit(1, "b"), 0, attached, || {
            vec![unit(10, "a"), unit(11, "b")]
        });
        assert_eq!(by_title, Some((11, ResolutionTier::TitleMatch)));

        let by_index = resolve_anchor(&unit(1, "gone"), 1, attached, || {
            vec![unit(10, "a"), unit(11, "b")]
        });
        assert_eq!(by_index, Some((11, ResolutionTier::SameIndex)));
    }

    #[test]
    fn title_match_on_detached_node_moves_to_index_tier() {
        let attached = |node: &u32| *node != 1 && *node != 20;
        let resolved = resolve_anchor(&unit(1, "b"), 0, attached, || {
            vec![unit(12, "a"), unit(20, "b")]
        });
        assert_eq!(resolved, Some((12, ResolutionTier::SameIndex)));
    }

    #[test]
    fn all_tiers_failing_yields_none() {
        let resolved = resolve_anchor(&unit(1, "a"), 3, |_| false, || vec![unit(2, "a")]);
        assert_eq!(resolved, None);
    }
}
