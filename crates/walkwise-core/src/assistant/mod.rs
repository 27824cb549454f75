//! The "AI assistant": a keyword matcher with canned replies.
//!
//! This module provides:
//! - `respond`: the four-branch matcher producing an `AssistantReply`
//! - `QuickAction`: prompt shortcuts shown under the chat input
//! - `ChatLog`: the append-only conversation transcript
//!
//! There is no model and no inference; matching is substring search over
//! the lowercased prompt.

pub mod chat;
pub mod responder;

pub use chat::{ChatLog, ChatMessage, Sender};
pub use responder::{
    respond, AreaAlert, AssistantReply, AtmSuggestion, Attachment, QuickAction, RoutePreview,
    TYPING_DELAY_MS,
};
