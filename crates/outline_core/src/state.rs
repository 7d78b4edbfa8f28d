use crate::config::OutlineConfig;
use crate::navigation::NavigationPhase;
use crate::pairing::Unit;
use crate::settings::Settings;
use crate::signature::Signature;
use crate::view_model::{ListView, OutlineItem};
use crate::NodeKey;

/// Adapter display hints the state machine needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdapterHints {
    /// Reply regions keep reflowing after a scroll; schedule one re-scroll.
    pub reflows_after_scroll: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutlineState<N> {
    config: OutlineConfig,
    hints: AdapterHints,
    settings: Settings,
    visible: bool,
    active: bool,
    units: Vec<Unit<N>>,
    signature: Option<Signature>,
    root: Option<N>,
    active_index: Option<usize>,
    debounce_generation: u64,
    navigation_id: u64,
    navigation: NavigationPhase,
    highlighted: Vec<N>,
    is_dark: Option<bool>,
}

impl<N> Default for OutlineState<N> {
    fn default() -> Self {
        Self {
            config: OutlineConfig::default(),
            hints: AdapterHints::default(),
            settings: Settings::default(),
            visible: true,
            active: true,
            units: Vec::new(),
            signature: None,
            root: None,
            active_index: None,
            debounce_generation: 0,
            navigation_id: 0,
            navigation: NavigationPhase::Idle,
            highlighted: Vec::new(),
            is_dark: None,
        }
    }
}

impl<N: NodeKey> OutlineState<N> {
    pub fn new(config: OutlineConfig, hints: AdapterHints, settings: Settings, visible: bool) -> Self {
        Self {
            config,
            hints,
            settings,
            visible,
            ..Self::default()
        }
    }

    pub fn list_view(&self) -> ListView {
        let items = self
            .units
            .iter()
            .enumerate()
            .map(|(index, unit)| OutlineItem {
                index,
                title: unit.title.clone(),
                preview: (self.settings.show_preview && !unit.preview.is_empty())
                    .then(|| unit.preview.clone()),
                active: self.active_index == Some(index),
            })
            .collect();
        ListView {
            items,
            active_index: self.active_index,
        }
    }

    pub fn config(&self) -> &OutlineConfig {
        &self.config
    }

    pub fn hints(&self) -> AdapterHints {
        self.hints
    }

    pub fn units(&self) -> &[Unit<N>] {
        &self.units
    }

    pub fn signature(&self) -> Option<&Signature> {
        self.signature.as_ref()
    }

    pub fn root(&self) -> Option<&N> {
        self.root.as_ref()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn navigation(&self) -> NavigationPhase {
        self.navigation
    }

    /// Whether viewport-driven updates are currently suppressed.
    pub fn is_navigating(&self) -> bool {
        !self.navigation.is_idle()
    }

    pub fn highlighted(&self) -> &[N] {
        &self.highlighted
    }

    pub(crate) fn effective_visibility(&self) -> bool {
        self.visible && self.settings.enabled
    }

    pub(crate) fn anchors(&self) -> Vec<N> {
        self.units.iter().map(|unit| unit.anchor.clone()).collect()
    }

    pub(crate) fn unit(&self, index: usize) -> Option<&Unit<N>> {
        self.units.get(index)
    }

    pub(crate) fn unit_index_of(&self, node: &N) -> Option<usize> {
        self.units.iter().position(|unit| &unit.anchor == node)
    }

    pub(crate) fn deactivate(&mut self) {
        self.active = false;
        self.navigation = NavigationPhase::Idle;
    }

    pub(crate) fn bump_debounce(&mut self) -> u64 {
        self.debounce_generation += 1;
        self.debounce_generation
    }

    pub(crate) fn debounce_generation(&self) -> u64 {
        self.debounce_generation
    }

    /// Returns whether the conversation root changed identity.
    pub(crate) fn set_root(&mut self, root: N) -> bool {
        if self.root.as_ref() == Some(&root) {
            return false;
        }
        self.root = Some(root);
        true
    }

    /// Commit a freshly extracted list unless its signature is unchanged.
    /// Returns the anchors that were tracked before the swap.
    pub(crate) fn commit_units(&mut self, units: Vec<Unit<N>>) -> Option<Vec<N>> {
        let signature = Signature::of(&units);
        if self.signature.as_ref() == Some(&signature) {
            return None;
        }
        let previous = self.anchors();
        self.signature = Some(signature);
        self.units = units;
        Some(previous)
    }

    pub(crate) fn set_active_index(&mut self, index: Option<usize>) -> bool {
        if self.active_index == index {
            return false;
        }
        self.active_index = index;
        true
    }

    pub(crate) fn begin_navigation(&mut self, index: usize) -> u64 {
        self.navigation_id += 1;
        self.navigation = NavigationPhase::Resolving { index };
        self.navigation_id
    }

    pub(crate) fn navigation_id(&self) -> u64 {
        self.navigation_id
    }

    pub(crate) fn set_navigation(&mut self, phase: NavigationPhase) {
        self.navigation = phase;
    }

    pub(crate) fn track_highlight(&mut self, node: N) {
        if !self.highlighted.contains(&node) {
            self.highlighted.push(node);
        }
    }

    pub(crate) fn release_highlight(&mut self, node: &N) -> bool {
        let before = self.highlighted.len();
        self.highlighted.retain(|held| held != node);
        before != self.highlighted.len()
    }

    pub(crate) fn take_highlights(&mut self) -> Vec<N> {
        std::mem::take(&mut self.highlighted)
    }

    pub(crate) fn toggle_visible(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    pub(crate) fn apply_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    /// Returns whether the theme differs from the last evaluation.
    pub(crate) fn set_theme(&mut self, is_dark: bool) -> bool {
        if self.is_dark == Some(is_dark) {
            return false;
        }
        self.is_dark = Some(is_dark);
        true
    }
}
