use crate::text::{normalize_text, truncate, TextLimits};
use crate::turn::{Role, Turn};

/// A (prompt, reply window) navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit<N> {
    /// The user turn's node; may be detached by a later re-render.
    pub anchor: N,
    pub title: String,
    pub preview: String,
    /// Normalized, untruncated prompt text.
    pub raw_text: String,
    /// Last assistant node of the reply window, if any.
    pub reply_end: Option<N>,
}

/// Group an ordered turn sequence into units.
///
/// Each user turn opens a unit whose reply window extends to the next user turn.
/// The first assistant turn with text in that window feeds the preview and the
/// last assistant turn becomes `reply_end`. Assistant turns seen before any user
/// turn are ignored. A user turn without text keeps its place in the list under
/// a positional `Prompt N` title.
pub fn pair_turns<N, F>(turns: &[Turn<N>], limits: &TextLimits, mut text_of: F) -> Vec<Unit<N>>
where
    N: Clone,
    F: FnMut(&N, Role) -> String,
{
    let mut units = Vec::new();

    for (index, turn) in turns.iter().enumerate() {
        if turn.role != Role::User {
            continue;
        }

        let raw_text = normalize_text(&text_of(&turn.node, Role::User));
        let mut title = truncate(&raw_text, limits.title_max_len);
        if title.is_empty() {
            title = format!("Prompt {}", units.len() + 1);
        }

        let mut reply_text = String::new();
        let mut reply_end = None;
        for next in &turns[index + 1..] {
            match next.role {
                Role::User => break,
                Role::Assistant => {
                    if reply_text.is_empty() {
                        reply_text = normalize_text(&text_of(&next.node, Role::Assistant));
                    }
                    reply_end = Some(next.node.clone());
                }
            }
        }

        let preview = if reply_text.is_empty() {
            String::new()
        } else {
            truncate(&reply_text, limits.preview_max_len)
        };

        units.push(Unit {
            anchor: turn.node.clone(),
            title,
            preview,
            raw_text,
            reply_end,
        });
    }

    units
}
