//! Quote list state and the transitions the board UI drives.
//!
//! SYSTEM CONTEXT
//! ==============
//! `QuoteBoard` is the single owner of all widget state. Components hold an
//! `RwSignal<QuoteBoard>` from context and call these methods inside
//! `update`, so every transition runs to completion before the next render.
//!
//! ERROR HANDLING
//! ==============
//! Invalid user input (blank add, drop outside the list, commit after the
//! target vanished) is a silent no-op. An out-of-range index passed to
//! `delete_quote`, `begin_edit`, `reorder`, or `start_drag` can only come
//! from a caller bug: it trips a `debug_assert!` in debug builds and is
//! logged and ignored in release builds.

#[cfg(test)]
#[path = "quotes_test.rs"]
mod quotes_test;

use super::drag::{DragState, DropResult};
use super::edit::EditSession;
use crate::util::id::fresh_id;

/// One list entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quote {
    /// Unique within the board; immutable after creation.
    pub id: String,
    pub content: String,
}

/// Complete widget state: ordered quotes, the add-field text, the edit
/// dialog session, and the drag gesture.
#[derive(Clone, Debug, Default)]
pub struct QuoteBoard {
    pub quotes: Vec<Quote>,
    pub pending_input: String,
    pub edit_session: EditSession,
    pub drag: DragState,
}

impl QuoteBoard {
    /// Mirror the add field.
    pub fn set_pending_input(&mut self, text: &str) {
        text.clone_into(&mut self.pending_input);
    }

    /// Add whatever is in the add field.
    pub fn add_pending(&mut self) -> Option<&Quote> {
        let text = self.pending_input.clone();
        self.add_quote(&text)
    }

    /// Append a quote with trimmed `text` and clear the add field.
    ///
    /// Blank input is discarded and leaves the add field untouched.
    pub fn add_quote(&mut self, text: &str) -> Option<&Quote> {
        let content = text.trim();
        if content.is_empty() {
            return None;
        }
        let id = fresh_id(|candidate| self.quotes.iter().any(|q| q.id == candidate));
        self.quotes.push(Quote { id, content: content.to_owned() });
        self.pending_input.clear();
        self.quotes.last()
    }

    /// Remove and return the quote at `index`; later quotes shift down by one.
    pub fn delete_quote(&mut self, index: usize) -> Option<Quote> {
        if !self.index_in_range("delete_quote", index) {
            return None;
        }
        Some(self.quotes.remove(index))
    }

    /// Open the edit session for the quote at `index`, replacing any open one.
    pub fn begin_edit(&mut self, index: usize) -> bool {
        if !self.index_in_range("begin_edit", index) {
            return false;
        }
        self.edit_session.open(index, &self.quotes[index].content);
        true
    }

    /// Replace the draft text verbatim.
    pub fn update_draft(&mut self, text: &str) {
        self.edit_session.set_draft(text);
    }

    /// Write the draft into the target quote (untrimmed) and close the session.
    ///
    /// Returns `false` when no session was open or its target no longer
    /// exists; the draft is dropped either way.
    pub fn commit_edit(&mut self) -> bool {
        let Some((index, draft)) = self.edit_session.take() else {
            return false;
        };
        match self.quotes.get_mut(index) {
            Some(quote) => {
                quote.content = draft;
                true
            }
            None => false,
        }
    }

    /// Close the session without touching the list.
    pub fn cancel_edit(&mut self) {
        self.edit_session.close();
    }

    /// Move the quote at `source` so it ends up at `destination`.
    ///
    /// `destination` indexes the list after removal, so `reorder(0, 2)` on
    /// `[A, B, C]` yields `[B, C, A]`.
    pub fn reorder(&mut self, source: usize, destination: usize) -> bool {
        if !self.index_in_range("reorder", source) || !self.index_in_range("reorder", destination) {
            return false;
        }
        if source == destination {
            return false;
        }
        let quote = self.quotes.remove(source);
        self.quotes.insert(destination, quote);
        true
    }

    /// Apply a finished drag gesture.
    pub fn on_drag_end(&mut self, result: DropResult) -> bool {
        match result.destination_index {
            Some(destination) if destination != result.source_index => self.reorder(result.source_index, destination),
            _ => false,
        }
    }

    /// Begin dragging the quote at `index`.
    pub fn start_drag(&mut self, index: usize) {
        if self.index_in_range("start_drag", index) {
            self.drag.start(index);
        }
    }

    /// Track the row under the pointer during a drag.
    pub fn drag_over(&mut self, index: Option<usize>) {
        self.drag.hover(index);
    }

    /// Release the dragged quote onto the row at `destination`.
    pub fn drop_on(&mut self, destination: usize) -> bool {
        match self.drag.finish(Some(destination)) {
            Some(result) => self.on_drag_end(result),
            None => false,
        }
    }

    /// End the gesture without a drop target. No-op after a handled drop.
    pub fn end_drag(&mut self) -> bool {
        match self.drag.finish(None) {
            Some(result) => self.on_drag_end(result),
            None => false,
        }
    }

    fn index_in_range(&self, op: &str, index: usize) -> bool {
        let len = self.quotes.len();
        debug_assert!(index < len, "{op}: index {index} out of range (len {len})");
        if index >= len {
            leptos::logging::warn!("{op}: ignoring index {index} out of range (len {len})");
            return false;
        }
        true
    }
}
