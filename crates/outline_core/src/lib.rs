//! Outline core: pure pairing, change detection and the session state machine.
//!
//! Nothing in this crate touches a document. Node references are an opaque
//! type parameter `N`; the engine crate instantiates it with its tree handles.
mod config;
mod effect;
mod msg;
mod navigation;
mod pairing;
mod settings;
mod signature;
mod state;
mod text;
mod turn;
mod update;
mod view_model;
mod viewport;

pub use config::{
    ConfigError, HighlightConfig, MarginLength, OutlineConfig, RootMargin, ScrollBehavior,
};
pub use effect::{Effect, Timer};
pub use msg::{ListKey, Msg};
pub use navigation::{resolve_anchor, NavigationPhase, ResolutionTier};
pub use pairing::{pair_turns, Unit};
pub use settings::{Settings, SettingsPatch, SidebarPosition};
pub use signature::Signature;
pub use state::{AdapterHints, OutlineState};
pub use text::{normalize_text, truncate, TextLimits, ELLIPSIS};
pub use turn::{Role, Turn};
pub use update::update;
pub use view_model::{ListView, OutlineItem};
pub use viewport::{pick_active, VisibilityEntry};

/// Bound shared by every node reference the core carries around.
pub trait NodeKey: Clone + PartialEq + std::fmt::Debug {}

impl<T: Clone + PartialEq + std::fmt::Debug> NodeKey for T {}
