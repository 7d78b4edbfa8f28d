mod common;

use outline_core::{Role, TextLimits};
use outline_engine::{
    extract, ChatGptAdapter, DoubaoAdapter, GeminiAdapter, HtmlDocument, KimiAdapter,
    PlatformAdapter, QwenAdapter,
};
use pretty_assertions::assert_eq;

fn summary(adapter: &dyn PlatformAdapter, html: &str) -> Vec<(String, String)> {
    let doc = HtmlDocument::parse(html);
    extract(adapter, &doc, &TextLimits::default())
        .units
        .into_iter()
        .map(|unit| (unit.title, unit.preview))
        .collect()
}

fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(title, preview)| (title.to_string(), preview.to_string()))
        .collect()
}

#[test]
fn chatgpt_reads_role_attributes_and_aliases() {
    common::init_logging();
    let html = r#"<html><body><main>
        <div data-message-author-role="user"><p>How do I   sort
            a Vec?</p></div>
        <div data-message-author-role="assistant"><p>Use sort().</p></div>
        <div data-message-author-role="system">ignored</div>
        <div data-role="human">Second question</div>
        <div data-author-role="BOT">Second answer</div>
    </main></body></html>"#;

    assert_eq!(
        summary(&ChatGptAdapter, html),
        pairs(&[("How do I sort a Vec?", "Use sort()."), ("Second question", "Second answer")])
    );
}

#[test]
fn image_only_prompt_keeps_its_slot() {
    let html = r#"<html><body><main>
        <div data-message-author-role="user"><img src="x.png"></div>
        <div data-message-author-role="assistant">A picture of a cat</div>
        <div data-message-author-role="user">Second</div>
    </main></body></html>"#;

    assert_eq!(
        summary(&ChatGptAdapter, html),
        pairs(&[("Prompt 1", "A picture of a cat"), ("Second", "")])
    );
}

#[test]
fn missing_root_falls_back_to_body() {
    let doc = HtmlDocument::parse(r#"<html><body><div data-role="user">Hi</div></body></html>"#);
    assert_eq!(ChatGptAdapter.conversation_root(&doc), doc.body().unwrap());

    let extraction = extract(&ChatGptAdapter, &doc, &TextLimits::default());
    assert_eq!(extraction.units.len(), 1);
    assert_eq!(extraction.units[0].preview, "");
}

#[test]
fn gemini_prefers_turn_containers() {
    let html = r#"<html><body><chat-window>
        <div class="conversation-container">
            <user-query><span class="label">You said</span><div class="query-text">Explain borrowck</div></user-query>
            <model-response><message-content>It checks lifetimes.</message-content><button>Copy</button></model-response>
        </div>
        <div class="conversation-container">
            <user-query>Plain query</user-query>
            <model-response>Plain answer</model-response>
        </div>
    </chat-window></body></html>"#;

    assert_eq!(
        summary(&GeminiAdapter, html),
        pairs(&[("Explain borrowck", "It checks lifetimes."), ("Plain query", "Plain answer")])
    );
}

#[test]
fn gemini_custom_elements_keep_innermost_match() {
    let html = r#"<html><body><main>
        <user-query><div class="query-text">First</div></user-query>
        <model-response><message-content>Reply one</message-content></model-response>
        <user-query>Second</user-query>
    </main></body></html>"#;

    let doc = HtmlDocument::parse(html);
    let root = GeminiAdapter.conversation_root(&doc);
    let turns = GeminiAdapter.conversation_turns(&doc, root);
    let roles: Vec<Role> = turns.iter().map(|turn| turn.role).collect();
    assert_eq!(roles, vec![Role::User, Role::Assistant, Role::User]);
    assert!(doc.has_class(turns[0].node, "query-text"));
    assert_eq!(doc.tag_name(turns[1].node), Some("message-content"));

    assert_eq!(
        summary(&GeminiAdapter, html),
        pairs(&[("First", "Reply one"), ("Second", "")])
    );
}

#[test]
fn gemini_falls_back_to_role_attributes() {
    let html = r#"<html><body><main>
        <div data-role="user">Hi there</div><div data-role="model">Hello</div>
    </main></body></html>"#;
    assert_eq!(summary(&GeminiAdapter, html), pairs(&[("Hi there", "Hello")]));
}

#[test]
fn doubao_merges_user_and_bot_lists_in_document_order() {
    let html = r#"<html><body><div class="chat-container">
        <div data-testid="send_message">Q1</div>
        <div data-testid="receive_message">A1</div>
        <div data-testid="send_message">Q2</div>
        <div data-testid="receive_message">A2</div>
        <div class="user-message">not used once test ids match</div>
    </div></body></html>"#;

    assert_eq!(summary(&DoubaoAdapter, html), pairs(&[("Q1", "A1"), ("Q2", "A2")]));
}

#[test]
fn doubao_falls_through_to_class_selectors() {
    let html = r#"<html><body><div class="chat-container">
        <div class="user-message">Question</div>
        <div class="bot-message">Answer</div>
    </div></body></html>"#;

    assert_eq!(summary(&DoubaoAdapter, html), pairs(&[("Question", "Answer")]));
}

#[test]
fn kimi_reads_chat_content_items_and_reflows() {
    let html = r#"<html><body><div class="chat-content">
        <div class="chat-content-item chat-content-item-user">Q</div>
        <div class="chat-content-item chat-content-item-assistant">A</div>
    </div></body></html>"#;

    assert_eq!(summary(&KimiAdapter, html), pairs(&[("Q", "A")]));
    assert!(KimiAdapter.reflows_after_scroll());
    assert!(!DoubaoAdapter.reflows_after_scroll());
}

#[test]
fn qwen_reads_only_message_content() {
    let html = r#"<html><body><div class="chat-container-x1">
        <div class="questionItem-ab12" data-msgid="1">
            <div class="questionContent-cd">What is Rust?</div><span>11:22</span>
        </div>
        <div class="answerItem-ef34" data-msgid="2">
            <div class="answerMeta-9">Qwen3-Max 11:22:35</div>
            <div class="answerContent-77">A systems language.</div>
            <button>Copy</button>
        </div>
    </div></body></html>"#;

    assert_eq!(
        summary(&QwenAdapter, html),
        pairs(&[("What is Rust?", "A systems language.")])
    );
}

#[test]
fn every_adapter_uses_the_same_border_radius() {
    let adapters: [&dyn PlatformAdapter; 5] = [
        &ChatGptAdapter,
        &GeminiAdapter,
        &DoubaoAdapter,
        &KimiAdapter,
        &QwenAdapter,
    ];
    for adapter in adapters {
        assert_eq!(adapter.highlight_border_radius(), "18px", "{}", adapter.name());
    }
}
