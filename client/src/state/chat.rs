//! AI insights chat history.
//!
//! Only one question is in flight at a time from the UI's point of view; a
//! "new chat" while waiting invalidates the pending reply so it cannot land
//! in the fresh conversation.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use super::fence::{RequestFence, RequestToken};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
    Error,
}

impl ChatRole {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    fn new(role: ChatRole, content: String) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), role, content }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub loading: bool,
    fence: RequestFence,
}

impl ChatState {
    /// Append the user's question and start waiting for the reply.
    ///
    /// Returns `None` for blank input or while a reply is pending.
    pub fn push_user(&mut self, text: &str) -> Option<RequestToken> {
        let text = text.trim();
        if text.is_empty() || self.loading {
            return None;
        }
        self.messages.push(ChatMessage::new(ChatRole::User, text.to_owned()));
        self.loading = true;
        Some(self.fence.begin())
    }

    /// Apply a reply. Replies for a superseded request are dropped.
    pub fn apply_reply(&mut self, token: RequestToken, result: Result<String, String>) -> bool {
        if !self.fence.is_current(token) {
            return false;
        }
        self.loading = false;
        let message = match result {
            Ok(reply) => ChatMessage::new(ChatRole::Assistant, reply),
            Err(e) => ChatMessage::new(ChatRole::Error, format!("Insight request failed: {e}")),
        };
        self.messages.push(message);
        true
    }

    /// Start a new conversation.
    pub fn reset(&mut self) {
        self.fence.invalidate();
        self.messages.clear();
        self.loading = false;
    }
}
