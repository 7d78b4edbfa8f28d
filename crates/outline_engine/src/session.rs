use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use outline_core::{
    resolve_anchor, update, AdapterHints, Effect, ListKey, Msg, OutlineConfig, OutlineState,
    RootMargin, Timer,
};
use outline_logging::{outline_debug, outline_info, outline_warn, set_extraction_pass};

use crate::adapters::PlatformAdapter;
use crate::control::{ControlRequest, ControlResponse};
use crate::document::{NodeHandle, ObserverId};
use crate::extract::extract;
use crate::highlight::Highlighter;
use crate::page::Page;
use crate::present::Presenter;
use crate::registry::AdapterRegistry;
use crate::store::SettingsStore;
use crate::theme::{detect_dark_mode, THEME_TRIGGERS};
use crate::timers::TimerQueue;

type OutlineMsg = Msg<NodeHandle>;

/// One live outline attached to one page.
///
/// Messages go through the pure `update` function; the session executes the
/// returned effects against the page, the presenter and the store. Timers run
/// on a virtual clock moved by [`OutlineSession::advance`].
pub struct OutlineSession<P: Presenter> {
    adapter: Arc<dyn PlatformAdapter>,
    page: Page,
    presenter: P,
    store: Box<dyn SettingsStore>,
    state: OutlineState<NodeHandle>,
    timers: TimerQueue<Timer<NodeHandle>>,
    highlighter: Highlighter,
    root_margin: RootMargin,
    observer: Option<ObserverId>,
    theme_observers: Vec<ObserverId>,
    root_lost: bool,
    observed_anchors: Vec<NodeHandle>,
    inbox: VecDeque<OutlineMsg>,
    pass: u64,
}

impl<P: Presenter> OutlineSession<P> {
    /// Start a session, or `None` when no adapter serves the page's origin.
    /// The first extraction pass runs before this returns.
    pub fn init(
        registry: &AdapterRegistry,
        page: Page,
        presenter: P,
        store: Box<dyn SettingsStore>,
        config: OutlineConfig,
    ) -> Option<Self> {
        let Some(adapter) = registry.adapter_for(&page.origin) else {
            outline_info!("No adapter for {:?}; outline disabled", page.origin);
            return None;
        };
        outline_info!("Starting {} outline for {:?}", adapter.name(), page.origin);

        let root_margin = config.parsed_root_margin().unwrap_or_else(|err| {
            outline_warn!("Invalid root margin {:?}: {}", config.root_margin, err);
            RootMargin::default()
        });
        let settings = store.load_settings().unwrap_or_else(|err| {
            outline_warn!("Using default settings: {}", err);
            Default::default()
        });
        let visible = store.load_visibility().unwrap_or_else(|err| {
            outline_warn!("Assuming visible sidebar: {}", err);
            true
        });

        let hints = AdapterHints {
            reflows_after_scroll: adapter.reflows_after_scroll(),
        };
        let highlighter = Highlighter::new(config.highlight.clone());
        let state = OutlineState::new(config, hints, settings, visible);

        let mut session = Self {
            adapter,
            page,
            presenter,
            store,
            state,
            timers: TimerQueue::new(),
            highlighter,
            root_margin,
            observer: None,
            theme_observers: Vec::new(),
            root_lost: false,
            observed_anchors: Vec::new(),
            inbox: VecDeque::new(),
            pass: 0,
        };
        session.dispatch(Msg::Started);
        Some(session)
    }

    pub fn adapter(&self) -> &dyn PlatformAdapter {
        self.adapter.as_ref()
    }

    pub fn state(&self) -> &OutlineState<NodeHandle> {
        &self.state
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Mutate the page; call [`Self::pump`] or [`Self::advance`] afterwards
    /// so the observer's records are delivered.
    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// Virtual session clock.
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn observed_anchors(&self) -> &[NodeHandle] {
        &self.observed_anchors
    }

    pub fn extraction_passes(&self) -> u64 {
        self.pass
    }

    /// Deliver queued mutation records.
    pub fn pump(&mut self) {
        let mut theme_touched = false;
        for observer in &self.theme_observers {
            theme_touched |= !self.page.document.take_records(*observer).is_empty();
        }
        if theme_touched {
            let is_dark = detect_dark_mode(&self.page.document);
            self.dispatch(Msg::ThemeChanged { is_dark });
        }

        let Some(observer) = self.observer else {
            return;
        };
        let records = self.page.document.take_records(observer);
        if !records.is_empty() {
            outline_debug!("{} mutation records", records.len());
            self.dispatch(Msg::MutationObserved);
            return;
        }

        // A re-rendered page may drop the observed container itself.
        let lost = self
            .page
            .document
            .observer_target(observer)
            .is_some_and(|target| !self.page.document.is_attached(target));
        if lost && !self.root_lost {
            outline_debug!("observed container detached");
            self.root_lost = true;
            self.dispatch(Msg::MutationObserved);
        }
    }

    /// Move the clock forward by `elapsed`, firing every timer that falls due.
    pub fn advance(&mut self, elapsed: Duration) {
        self.pump();
        let until = self.timers.now() + elapsed;
        while let Some(timer) = self.timers.pop_due(until) {
            self.dispatch(Msg::TimerFired(timer));
        }
        self.timers.advance_to(until);
    }

    /// Fire every pending timer, however far away.
    pub fn settle(&mut self) {
        self.pump();
        while let Some(timer) = self.timers.pop_due(Duration::MAX) {
            self.dispatch(Msg::TimerFired(timer));
        }
    }

    pub fn select(&mut self, index: usize) {
        self.dispatch(Msg::UnitSelected { index });
    }

    pub fn key_pressed(&mut self, focused: usize, key: ListKey) {
        self.dispatch(Msg::ListKeyPressed { focused, key });
    }

    /// User scroll: move the viewport and report what is now in view.
    pub fn scroll_to(&mut self, scroll_top: f64) {
        self.page.viewport.scroll_to(&self.page.document, scroll_top);
        self.viewport_changed();
    }

    pub fn viewport_changed(&mut self) {
        let msg = self.viewport_snapshot();
        self.dispatch(msg);
    }

    pub fn handle_control(&mut self, request: ControlRequest) -> ControlResponse {
        outline_debug!("control request {:?}", request);
        match request {
            ControlRequest::ToggleSidebar => self.dispatch(Msg::ToggleSidebar),
            ControlRequest::UpdateSettings { settings } => {
                self.dispatch(Msg::SettingsChanged(settings))
            }
        }
        ControlResponse::ok()
    }

    /// Detach every observer, restore highlighted nodes and drop pending
    /// timers. Later calls are no-ops.
    pub fn teardown(&mut self) {
        self.dispatch(Msg::TornDown);
        self.timers.clear();
        outline_info!("Outline session torn down after {} passes", self.pass);
    }

    fn dispatch(&mut self, msg: OutlineMsg) {
        self.inbox.push_back(msg);
        while let Some(msg) = self.inbox.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            for effect in effects {
                self.run(effect);
            }
        }
    }

    fn run(&mut self, effect: Effect<NodeHandle>) {
        match effect {
            Effect::ScheduleTimer { after, timer } => self.timers.schedule(after, timer),
            Effect::ObserveMutations { target } => {
                if let Some(previous) = self.observer.take() {
                    self.page.document.disconnect(previous);
                }
                self.observer = Some(self.page.document.observe(target, true));
                self.root_lost = false;
                outline_debug!("observing mutations under {:?}", target);
            }
            Effect::ObserveTheme => {
                let doc = &mut self.page.document;
                let mut targets = vec![doc.document_element()];
                targets.extend(doc.body());
                for target in targets {
                    let observer = doc.observe_attributes(target, &THEME_TRIGGERS);
                    self.theme_observers.push(observer);
                }
                self.inbox.push_back(Msg::ThemeChanged {
                    is_dark: detect_dark_mode(doc),
                });
            }
            Effect::Extract => {
                self.pass += 1;
                set_extraction_pass(self.pass);
                let limits = self.state.config().limits();
                let extraction = extract(self.adapter.as_ref(), &self.page.document, &limits);
                self.inbox.push_back(Msg::Extracted {
                    root: extraction.root,
                    units: extraction.units,
                });
            }
            Effect::ResolveAnchor {
                navigation,
                index,
                stale,
            } => {
                let doc = &self.page.document;
                let adapter = self.adapter.as_ref();
                let limits = self.state.config().limits();
                let resolved = resolve_anchor(
                    &stale,
                    index,
                    |node| doc.is_attached(*node),
                    || extract(adapter, doc, &limits).units,
                );
                match &resolved {
                    Some((_, tier)) => outline_debug!("unit {} resolved via {:?}", index, tier),
                    None => outline_warn!("unit {} has no live anchor; navigation dropped", index),
                }
                self.inbox.push_back(Msg::AnchorResolved {
                    navigation,
                    index,
                    node: resolved.map(|(node, _)| node),
                });
            }
            Effect::UnobserveAnchors(anchors) => {
                self.observed_anchors.retain(|node| !anchors.contains(node));
            }
            Effect::ObserveAnchors(anchors) => {
                self.observed_anchors.extend(anchors);
                let snapshot = self.viewport_snapshot();
                self.inbox.push_back(snapshot);
            }
            Effect::RenderList(list) => self.presenter.render_list(&list),
            Effect::BindInteractions => self.presenter.bind_interactions(),
            Effect::UpdateActiveItem(active) => self.presenter.update_active_item(active),
            Effect::ScrollIntoView { node, behavior } => {
                let page = &mut self.page;
                if page.viewport.scroll_into_view(&page.document, node, behavior) {
                    let snapshot = self.viewport_snapshot();
                    self.inbox.push_back(snapshot);
                }
            }
            Effect::ApplyHighlight { node } => {
                let radius = self.adapter.highlight_border_radius();
                self.highlighter.apply(&mut self.page.document, node, radius);
            }
            Effect::FadeHighlight { node } => self.highlighter.fade(&mut self.page.document, node),
            Effect::RestoreHighlight { node } => {
                self.highlighter.restore(&mut self.page.document, node)
            }
            Effect::FocusItem(index) => self.presenter.focus_item(index),
            Effect::SetVisible(visible) => self.presenter.set_visible(visible),
            Effect::UpdatePosition(position) => self.presenter.update_position(position),
            Effect::UpdateTheme(is_dark) => self.presenter.update_theme(is_dark),
            Effect::PersistVisibility(visible) => {
                if let Err(err) = self.store.save_visibility(visible) {
                    outline_warn!("Failed to persist sidebar visibility: {}", err);
                }
            }
            Effect::DisconnectObservers => {
                if let Some(observer) = self.observer.take() {
                    self.page.document.disconnect(observer);
                }
                for observer in self.theme_observers.drain(..) {
                    self.page.document.disconnect(observer);
                }
                self.observed_anchors.clear();
            }
        }
    }

    fn viewport_snapshot(&self) -> OutlineMsg {
        let viewport = &self.page.viewport;
        Msg::ViewportChanged {
            viewport_height: viewport.height(),
            entries: viewport.intersections(
                &self.page.document,
                &self.observed_anchors,
                &self.root_margin,
                self.state.config().intersection_threshold,
            ),
        }
    }
}
