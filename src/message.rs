//! Role-tagged messages produced by the context walker.
//!
//! A [`Message`] is the unit handed to a downstream LLM invocation:
//! a conversational [`Role`] plus text content. The walker only ever
//! emits the three roles a chat completion API understands; anything
//! a document declares beyond those collapses to [`Role::User`] via
//! [`Role::normalize`].
//!
//! # Examples
//!
//! ```
//! use canvasweave::message::{Message, Role};
//!
//! let system = Message::system("You are a helpful assistant.");
//! let user = Message::user("What is the capital of France?");
//!
//! assert_eq!(system.role, Role::System);
//! assert_eq!(user.role.as_str(), "user");
//!
//! // Unrecognized declared roles degrade to user.
//! assert_eq!(Role::normalize(Some("moderator")), Role::User);
//! assert_eq!(Role::normalize(None), Role::User);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Conversational role of a message.
///
/// Exactly the three roles accepted by chat-style LLM APIs. Declared
/// roles coming out of document front matter are free-form strings;
/// [`Role::normalize`] is the single place they are mapped onto this
/// enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System prompt or instruction.
    System,
    /// Human input. Also the fallback for unrecognized declared roles.
    #[default]
    User,
    /// Model response.
    Assistant,
}

impl Role {
    /// Map an optional declared role onto the closed role set.
    ///
    /// `"system"`, `"user"` and `"assistant"` map to themselves; any
    /// other value, and the absence of a value, collapse to
    /// [`Role::User`].
    ///
    /// # Examples
    ///
    /// ```
    /// use canvasweave::message::Role;
    ///
    /// assert_eq!(Role::normalize(Some("assistant")), Role::Assistant);
    /// assert_eq!(Role::normalize(Some("narrator")), Role::User);
    /// assert_eq!(Role::normalize(None), Role::User);
    /// ```
    #[must_use]
    pub fn normalize(declared: Option<&str>) -> Self {
        match declared {
            Some("system") => Role::System,
            Some("assistant") => Role::Assistant,
            _ => Role::User,
        }
    }

    /// The wire-format name of this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single role-tagged unit of conversational context.
///
/// Serializes to the `{"role": ..., "content": ...}` shape chat APIs
/// expect, so a walker result can be forwarded verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Message {
    /// Who is speaking.
    pub role: Role,
    /// The text of the message.
    pub content: String,
}

impl Message {
    /// Creates a message with an explicit role.
    #[must_use]
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Creates a system message.
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Creates a user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Creates an assistant message.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Returns true if this message carries the given role.
    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }
}
