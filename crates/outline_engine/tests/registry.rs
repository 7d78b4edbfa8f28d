mod common;

use std::sync::Arc;

use outline_core::Turn;
use outline_engine::{
    detect_platform, AdapterRegistry, HtmlDocument, NodeHandle, PlatformAdapter, PlatformId,
};
use pretty_assertions::assert_eq;

#[test]
fn detects_every_builtin_host() {
    common::init_logging();
    let cases = [
        ("https://chatgpt.com/c/42", PlatformId::ChatGpt),
        ("https://chat.openai.com/", PlatformId::ChatGpt),
        ("https://gemini.google.com/app/abc", PlatformId::Gemini),
        ("https://www.doubao.com/chat/1", PlatformId::Doubao),
        ("kimi.moonshot.cn", PlatformId::Kimi),
        ("https://www.kimi.com/chat/x", PlatformId::Kimi),
        ("https://tongyi.aliyun.com/qianwen/", PlatformId::Qwen),
        ("https://www.qianwen.com/", PlatformId::Qwen),
        ("https://example.org/", PlatformId::Unknown),
        ("", PlatformId::Unknown),
    ];
    for (origin, expected) in cases {
        assert_eq!(detect_platform(origin), expected, "{origin}");
    }
}

#[test]
fn unknown_origin_disables_extraction() {
    let registry = AdapterRegistry::with_builtin_adapters();
    assert!(registry.adapter_for("https://example.org/").is_none());
    assert_eq!(
        registry.adapter_for("https://chatgpt.com/").map(|a| a.platform()),
        Some(PlatformId::ChatGpt)
    );
    assert_eq!(registry.platforms(), PlatformId::ALL.to_vec());
}

struct Stub;

impl PlatformAdapter for Stub {
    fn platform(&self) -> PlatformId {
        PlatformId::Kimi
    }

    fn observe_target(&self, doc: &HtmlDocument) -> NodeHandle {
        doc.body_or_root()
    }

    fn conversation_turns(&self, _doc: &HtmlDocument, _root: NodeHandle) -> Vec<Turn<NodeHandle>> {
        Vec::new()
    }

    fn highlight_border_radius(&self) -> &str {
        "4px"
    }
}

#[test]
fn last_registration_wins() {
    let mut registry = AdapterRegistry::with_builtin_adapters();
    registry.register(PlatformId::Kimi, Arc::new(Stub));
    registry.register(PlatformId::Kimi, Arc::new(Stub));

    let adapter = registry.adapter(PlatformId::Kimi).unwrap();
    assert_eq!(adapter.highlight_border_radius(), "4px");
    assert_eq!(registry.platforms().len(), 5);
    assert!(AdapterRegistry::new().adapter(PlatformId::ChatGpt).is_none());
}
