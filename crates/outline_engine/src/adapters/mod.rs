//! Platform adapters: one markup dialect each.
//!
//! An adapter turns a live page into an ordered `{node, role}` sequence. Every
//! adapter tries its lookup strategies in a fixed priority order and never
//! fails: a missing root falls back to the body and a miss yields no turns.
mod chatgpt;
mod gemini;
mod doubao;
mod kimi;
mod qwen;
mod query;

pub use chatgpt::ChatGptAdapter;
pub use doubao::DoubaoAdapter;
pub use gemini::GeminiAdapter;
pub use kimi::KimiAdapter;
pub use qwen::QwenAdapter;

use std::fmt;

use outline_core::{Role, Turn};
use serde::{Deserialize, Serialize};

use crate::document::{HtmlDocument, NodeHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformId {
    ChatGpt,
    Gemini,
    Doubao,
    Kimi,
    Qwen,
    Unknown,
}

impl PlatformId {
    /// Every supported platform, in detection order.
    pub const ALL: [PlatformId; 5] = [
        PlatformId::ChatGpt,
        PlatformId::Gemini,
        PlatformId::Doubao,
        PlatformId::Kimi,
        PlatformId::Qwen,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PlatformId::ChatGpt => "chatgpt",
            PlatformId::Gemini => "gemini",
            PlatformId::Doubao => "doubao",
            PlatformId::Kimi => "kimi",
            PlatformId::Qwen => "qwen",
            PlatformId::Unknown => "unknown",
        }
    }

    /// Hosts served by the platform. Subdomains match too.
    pub fn host_patterns(self) -> &'static [&'static str] {
        match self {
            PlatformId::ChatGpt => &["chatgpt.com", "chat.openai.com"],
            PlatformId::Gemini => &["gemini.google.com"],
            PlatformId::Doubao => &["doubao.com"],
            PlatformId::Kimi => &["kimi.moonshot.cn", "kimi.com"],
            PlatformId::Qwen => &["tongyi.aliyun.com", "qianwen.com"],
            PlatformId::Unknown => &[],
        }
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability contract of a markup dialect. Registered once, immutable after.
pub trait PlatformAdapter: Send + Sync {
    fn platform(&self) -> PlatformId;

    /// Container the mutation observer watches.
    fn observe_target(&self, doc: &HtmlDocument) -> NodeHandle;

    /// Container that scopes turn queries.
    fn conversation_root(&self, doc: &HtmlDocument) -> NodeHandle {
        self.observe_target(doc)
    }

    /// Every message in `root`, in document order.
    fn conversation_turns(&self, doc: &HtmlDocument, root: NodeHandle) -> Vec<Turn<NodeHandle>>;

    /// Semantic payload of a turn container. `None` means full text content.
    fn text_from_node(&self, _doc: &HtmlDocument, _node: NodeHandle, _role: Role) -> Option<String> {
        None
    }

    fn highlight_border_radius(&self) -> &str {
        "18px"
    }

    /// The page shifts layout after a smooth scroll settles.
    fn reflows_after_scroll(&self) -> bool {
        false
    }

    fn host_patterns(&self) -> &'static [&'static str] {
        self.platform().host_patterns()
    }

    fn name(&self) -> &'static str {
        self.platform().as_str()
    }
}
