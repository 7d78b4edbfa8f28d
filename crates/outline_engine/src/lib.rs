//! Outline engine: the live page, platform adapters and session execution.
mod adapters;
mod control;
mod document;
mod extract;
mod highlight;
mod page;
mod persist;
mod present;
mod registry;
mod session;
mod store;
mod theme;
mod timers;
mod viewport;

pub use adapters::{
    ChatGptAdapter, DoubaoAdapter, GeminiAdapter, KimiAdapter, PlatformAdapter, PlatformId,
    QwenAdapter,
};
pub use control::{ControlRequest, ControlResponse};
pub use document::{HtmlDocument, MutationKind, MutationRecord, NodeHandle, ObserverId};
pub use extract::{extract, turn_text, Extraction};
pub use highlight::Highlighter;
pub use page::Page;
pub use persist::{ensure_state_dir, AtomicFileWriter, PersistError};
pub use present::Presenter;
pub use registry::{detect_platform, AdapterRegistry};
pub use session::OutlineSession;
pub use store::{MemorySettingsStore, RonFileStore, SettingsStore, StoreError, SETTINGS_FILENAME};
pub use theme::detect_dark_mode;
pub use timers::TimerQueue;
pub use viewport::{Block, BlockViewport, ScrollRecord};
