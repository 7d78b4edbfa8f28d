use std::collections::HashMap;
use std::sync::Arc;

use outline_logging::outline_debug;
use url::Url;

use crate::adapters::{
    ChatGptAdapter, DoubaoAdapter, GeminiAdapter, KimiAdapter, PlatformAdapter, PlatformId,
    QwenAdapter,
};

/// Adapters keyed by platform. The last registration for an id wins.
#[derive(Default, Clone)]
pub struct AdapterRegistry {
    adapters: HashMap<PlatformId, Arc<dyn PlatformAdapter>>,
}

impl AdapterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtin_adapters() -> Self {
        let mut registry = Self::new();
        registry.register(PlatformId::ChatGpt, Arc::new(ChatGptAdapter));
        registry.register(PlatformId::Gemini, Arc::new(GeminiAdapter));
        registry.register(PlatformId::Doubao, Arc::new(DoubaoAdapter));
        registry.register(PlatformId::Kimi, Arc::new(KimiAdapter));
        registry.register(PlatformId::Qwen, Arc::new(QwenAdapter));
        registry
    }

    pub fn register(&mut self, platform: PlatformId, adapter: Arc<dyn PlatformAdapter>) {
        outline_debug!("registering {} adapter", platform);
        self.adapters.insert(platform, adapter);
    }

    pub fn adapter(&self, platform: PlatformId) -> Option<Arc<dyn PlatformAdapter>> {
        self.adapters.get(&platform).cloned()
    }

    /// Adapter for the page at `origin`; `None` disables extraction.
    pub fn adapter_for(&self, origin: &str) -> Option<Arc<dyn PlatformAdapter>> {
        match detect_platform(origin) {
            PlatformId::Unknown => None,
            platform => self.adapter(platform),
        }
    }

    pub fn platforms(&self) -> Vec<PlatformId> {
        let mut platforms: Vec<PlatformId> = self.adapters.keys().copied().collect();
        platforms.sort_by_key(|p| PlatformId::ALL.iter().position(|known| known == p));
        platforms
    }
}

impl std::fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdapterRegistry")
            .field("platforms", &self.platforms())
            .finish()
    }
}

/// Platform serving `origin`, given as a URL or a bare host name.
pub fn detect_platform(origin: &str) -> PlatformId {
    let Some(host) = host_of(origin) else {
        return PlatformId::Unknown;
    };
    PlatformId::ALL
        .into_iter()
        .find(|platform| {
            platform
                .host_patterns()
                .iter()
                .any(|pattern| host == *pattern || host.ends_with(&format!(".{pattern}")))
        })
        .unwrap_or(PlatformId::Unknown)
}

fn host_of(origin: &str) -> Option<String> {
    let origin = origin.trim();
    if origin.is_empty() {
        return None;
    }
    let parsed = Url::parse(origin).or_else(|_| Url::parse(&format!("https://{origin}")));
    parsed
        .ok()
        .and_then(|url| url.host_str().map(|host| host.to_ascii_lowercase()))
}
