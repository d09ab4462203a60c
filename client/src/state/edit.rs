//! In-flight edit session backing the edit dialog.
//!
//! DESIGN
//! ======
//! Fields are private so the only way to mark a session open is `open`,
//! which always pairs it with a target index. At most one session exists;
//! opening again replaces it.

#[cfg(test)]
#[path = "edit_test.rs"]
mod edit_test;

/// Ephemeral state for one edit of one quote.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditSession {
    target_index: Option<usize>,
    draft_content: String,
    is_open: bool,
}

impl EditSession {
    /// Open (or replace) the session for the quote at `index`, seeding the
    /// draft with its current content.
    pub fn open(&mut self, index: usize, seed: &str) {
        self.target_index = Some(index);
        self.draft_content = seed.to_owned();
        self.is_open = true;
    }

    /// Replace the draft verbatim. Ignored while closed.
    pub fn set_draft(&mut self, text: &str) {
        if self.is_open {
            text.clone_into(&mut self.draft_content);
        }
    }

    /// Close the session and hand back `(target_index, draft)` if it was open.
    pub fn take(&mut self) -> Option<(usize, String)> {
        let session = std::mem::take(self);
        if !session.is_open {
            return None;
        }
        session.target_index.map(|index| (index, session.draft_content))
    }

    /// Close the session, discarding the draft.
    pub fn close(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn target_index(&self) -> Option<usize> {
        self.target_index
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft_content
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }
}
