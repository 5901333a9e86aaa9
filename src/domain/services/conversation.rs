#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;

use crate::domain::models::InstructionMessage;

/// Append-only log of submitted instructions. Storage order is append order
/// and is never mutated by display needs; rendering newest-first is a view
/// transform over `display_order`.
#[derive(Default)]
pub struct ConversationLog {
    messages: Vec<InstructionMessage>,
}

impl ConversationLog {
    pub fn append(&mut self, text: &str) -> usize {
        let id = self.messages.len();
        self.messages.push(InstructionMessage::new(id, text));
        return id;
    }

    pub fn get(&self, id: usize) -> Option<&InstructionMessage> {
        return self.messages.iter().find(|message| {
            return message.id == id;
        });
    }

    /// Lookup by id, not by position. Completions for concurrently in-flight
    /// instructions must land on the exact message they belong to.
    pub fn get_mut(&mut self, id: usize) -> Option<&mut InstructionMessage> {
        return self.messages.iter_mut().find(|message| {
            return message.id == id;
        });
    }

    pub fn messages(&self) -> &[InstructionMessage] {
        return &self.messages;
    }

    pub fn display_order(&self) -> impl Iterator<Item = &InstructionMessage> {
        return self.messages.iter().rev();
    }

    pub fn is_empty(&self) -> bool {
        return self.messages.is_empty();
    }

    pub fn len(&self) -> usize {
        return self.messages.len();
    }
}
