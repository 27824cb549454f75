use chrono::{DateTime, Utc};

use super::responder::{AssistantReply, Attachment};

/// Greeting seeded into every new conversation.
const GREETING: &str =
    "Hello! I'm your WalkWise AI assistant. How can I help you stay safe today?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    pub sent_at: DateTime<Utc>,
    pub attachment: Option<Attachment>,
}

/// Conversation transcript. Messages are append-only and numbered in order.
#[derive(Debug)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl ChatLog {
    pub fn new() -> Self {
        let mut log = Self {
            messages: Vec::new(),
            next_id: 1,
        };
        log.push(Sender::Assistant, GREETING.to_string(), None);
        log
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn push_user(&mut self, text: impl Into<String>) -> u64 {
        self.push(Sender::User, text.into(), None)
    }

    pub fn push_reply(&mut self, reply: AssistantReply) -> u64 {
        self.push(Sender::Assistant, reply.text, reply.attachment)
    }

    fn push(&mut self, sender: Sender, text: String, attachment: Option<Attachment>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            sender,
            text,
            sent_at: Utc::now(),
            attachment,
        });
        id
    }
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::respond;

    #[test]
    fn test_new_log_starts_with_the_greeting() {
        let log = ChatLog::new();
        assert_eq!(log.messages().len(), 1);
        let first = &log.messages()[0];
        assert_eq!(first.sender, Sender::Assistant);
        assert!(first.text.starts_with("Hello!"));
    }

    #[test]
    fn test_messages_are_numbered_in_order() {
        let mut log = ChatLog::new();
        let a = log.push_user("is this route safe?");
        let b = log.push_reply(respond("is this route safe?"));
        assert!(a < b);
        assert_eq!(log.messages().len(), 3);
    }

    #[test]
    fn test_reply_attachment_is_kept() {
        let mut log = ChatLog::new();
        log.push_reply(respond("safest route please"));
        let last = log.messages().last().unwrap();
        assert!(last.attachment.is_some());
    }
}
