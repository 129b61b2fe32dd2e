//! In-memory conversation state for a single chat session.

use maatu_core::types::{iso_now, ConversationTurn};
use uuid::Uuid;

/// Mutable state carried between messages in one session.
///
/// Holds the ordered transcript plus the index of the turn currently
/// being edited, if any. The transcript is append-only: `human` text is
/// never rewritten, and an edit only overwrites the `assistant` half of
/// an existing turn.
#[derive(Debug)]
pub struct SessionContext {
    id: Uuid,
    turns: Vec<ConversationTurn>,
    editing_index: Option<usize>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            turns: Vec::new(),
            editing_index: None,
        }
    }

    /// Resume a session from previously persisted turns.
    pub fn with_turns(turns: Vec<ConversationTurn>) -> Self {
        Self {
            id: Uuid::new_v4(),
            turns,
            editing_index: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn editing_index(&self) -> Option<usize> {
        self.editing_index
    }

    pub fn append(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }

    /// Mark the turn at `index` as the edit target. Returns false when
    /// the index is out of range; a later `begin_edit` simply moves the
    /// target, so at most one turn is ever in edit state.
    pub fn begin_edit(&mut self, index: usize) -> bool {
        if index >= self.turns.len() {
            return false;
        }
        self.editing_index = Some(index);
        true
    }

    pub fn cancel_edit(&mut self) {
        self.editing_index = None;
    }

    /// Overwrite the assistant text of the turn under edit and refresh
    /// its timestamp. The human side of the turn is left untouched.
    /// Returns the edited index, or None when no edit is active.
    pub fn apply_edit(&mut self, new_text: &str) -> Option<usize> {
        let index = self.editing_index.take()?;
        let turn = self.turns.get_mut(index)?;
        turn.assistant = new_text.to_string();
        turn.assistant_timestamp = iso_now();
        Some(index)
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(human: &str, assistant: &str) -> ConversationTurn {
        ConversationTurn {
            human: human.to_string(),
            human_timestamp: iso_now(),
            assistant: assistant.to_string(),
            assistant_timestamp: iso_now(),
            language: "english".to_string(),
        }
    }

    #[test]
    fn test_append_keeps_order() {
        let mut session = SessionContext::new();
        session.append(turn("first", "one"));
        session.append(turn("second", "two"));

        assert_eq!(session.len(), 2);
        assert_eq!(session.turns()[0].human, "first");
        assert_eq!(session.turns()[1].human, "second");
    }

    #[test]
    fn test_begin_edit_rejects_out_of_range() {
        let mut session = SessionContext::new();
        session.append(turn("only", "one"));

        assert!(!session.begin_edit(1));
        assert_eq!(session.editing_index(), None);
        assert!(session.begin_edit(0));
        assert_eq!(session.editing_index(), Some(0));
    }

    #[test]
    fn test_apply_edit_overwrites_assistant_only() {
        let mut session = SessionContext::new();
        session.append(turn("question", "old answer"));
        let before = session.turns()[0].assistant_timestamp.clone();

        assert!(session.begin_edit(0));
        let edited = session.apply_edit("Updated");

        assert_eq!(edited, Some(0));
        assert_eq!(session.len(), 1);
        let turn = &session.turns()[0];
        assert_eq!(turn.human, "question");
        assert_eq!(turn.assistant, "Updated");
        assert_ne!(turn.assistant_timestamp, before);
        assert_eq!(session.editing_index(), None);
    }

    #[test]
    fn test_apply_edit_without_target_is_none() {
        let mut session = SessionContext::new();
        session.append(turn("a", "1"));
        assert_eq!(session.apply_edit("nope"), None);
        assert_eq!(session.turns()[0].assistant, "1");
    }

    #[test]
    fn test_cancel_edit_discards_target() {
        let mut session = SessionContext::new();
        session.append(turn("a", "1"));
        assert!(session.begin_edit(0));
        session.cancel_edit();
        assert_eq!(session.apply_edit("nope"), None);
    }

    #[test]
    fn test_second_begin_edit_moves_target() {
        let mut session = SessionContext::new();
        session.append(turn("a", "1"));
        session.append(turn("b", "2"));

        assert!(session.begin_edit(0));
        assert!(session.begin_edit(1));
        assert_eq!(session.apply_edit("revised"), Some(1));
        assert_eq!(session.turns()[0].assistant, "1");
        assert_eq!(session.turns()[1].assistant, "revised");
    }

    #[test]
    fn test_with_turns_resumes_transcript() {
        let session = SessionContext::with_turns(vec![turn("a", "1"), turn("b", "2")]);
        assert_eq!(session.len(), 2);
        assert_eq!(session.editing_index(), None);
    }
}
