#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use api::{ChatEvent, ConnectionStatus};

/// State for the chat view: the input draft, the received messages in
/// arrival order and the connection status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatState {
    pub draft: String,
    pub messages: Vec<String>,
    pub status: ConnectionStatus,
}

impl ChatState {
    /// Clear the input and return what should be sent, if anything.
    ///
    /// The input is cleared even when the draft is blank.
    pub fn take_draft(&mut self) -> Option<String> {
        let draft = std::mem::take(&mut self.draft);
        if draft.trim().is_empty() { None } else { Some(draft) }
    }

    pub fn apply(&mut self, event: ChatEvent) {
        match event {
            ChatEvent::Status(status) => self.status = status,
            ChatEvent::Message(text) => self.messages.push(text),
        }
    }

    /// Whether a sent message can still go out. While connecting it is
    /// queued until the channel is up.
    pub fn accepts_messages(&self) -> bool {
        self.status != ConnectionStatus::Disconnected
    }

    pub fn status_label(&self) -> &'static str {
        match self.status {
            ConnectionStatus::Disconnected => "Disconnected",
            ConnectionStatus::Connecting => "Connecting...",
            ConnectionStatus::Connected => "Connected",
        }
    }
}
