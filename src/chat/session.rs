// file: src/chat/session.rs
// description: in-memory chat session driving the FAQ matcher
// reference: internal conversation state

use crate::config::ChatConfig;
use crate::matcher::FaqMatcher;
use crate::models::Message;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

/// A single conversation: a matcher plus a growing transcript.
///
/// The transcript is append-only and lives in memory for the session
/// lifetime. Each submitted query appends the user message first, then the
/// resolved bot reply, so the transcript is strictly FIFO. The reply delay is
/// cosmetic and carries no ordering contract beyond that.
pub struct ChatSession {
    id: Uuid,
    matcher: FaqMatcher,
    messages: Vec<Message>,
    reply_delay: Duration,
}

impl ChatSession {
    pub fn new(matcher: FaqMatcher, config: ChatConfig) -> Self {
        let mut session = Self {
            id: Uuid::new_v4(),
            matcher,
            messages: Vec::new(),
            reply_delay: Duration::from_millis(config.reply_delay_ms),
        };
        session.messages.push(Message::bot(config.greeting));
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Resolve a query synchronously: append the user message, then the bot
    /// reply. Blank input is ignored and appends nothing.
    pub fn respond(&mut self, query: &str) -> Option<&Message> {
        if query.trim().is_empty() {
            debug!("ignoring blank input");
            return None;
        }

        self.messages.push(Message::user(query));
        let reply = self.matcher.find_best_answer(query);
        self.messages.push(Message::bot(reply));
        self.messages.last()
    }

    /// Like [`respond`](Self::respond), but waits the configured delay
    /// between the user message and the bot reply.
    pub async fn submit(&mut self, query: &str) -> Option<&Message> {
        if query.trim().is_empty() {
            debug!("ignoring blank input");
            return None;
        }

        self.messages.push(Message::user(query));
        let reply = self.matcher.find_best_answer(query);

        if !self.reply_delay.is_zero() {
            tokio::time::sleep(self.reply_delay).await;
        }

        self.messages.push(Message::bot(reply));
        self.messages.last()
    }
}
