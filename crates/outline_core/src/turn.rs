use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Resolve a role attribute value through the aliases chat pages use.
    pub fn from_alias(value: &str) -> Option<Role> {
        match value.trim().to_ascii_lowercase().as_str() {
            "user" | "human" | "me" => Some(Role::User),
            "assistant" | "ai" | "bot" | "model" => Some(Role::Assistant),
            _ => None,
        }
    }
}

/// One message-bearing node, in document order, tagged with its role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn<N> {
    pub node: N,
    pub role: Role,
}

impl<N> Turn<N> {
    pub fn user(node: N) -> Self {
        Self {
            node,
            role: Role::User,
        }
    }

    pub fn assistant(node: N) -> Self {
        Self {
            node,
            role: Role::Assistant,
        }
    }
}
