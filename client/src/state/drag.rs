//! Drag gesture lifecycle for list reordering.
//!
//! SYSTEM CONTEXT
//! ==============
//! Gesture recognition belongs to the browser's native drag-and-drop. This
//! module only tracks `idle -> dragging -> dropped -> idle` and turns the
//! release into a `DropResult` for the quote list to apply.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

/// Outcome of a drag gesture, handed to the reorder callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropResult {
    pub source_index: usize,
    /// `None` when the row was released outside the list.
    pub destination_index: Option<usize>,
}

/// Current phase of the drag gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        source_index: usize,
        /// Row currently under the pointer, if any.
        over_index: Option<usize>,
    },
}

impl DragState {
    /// Begin dragging the row at `source_index`. Restarts any gesture in flight.
    pub fn start(&mut self, source_index: usize) {
        *self = Self::Dragging { source_index, over_index: None };
    }

    /// Track the row under the pointer. Ignored while idle.
    pub fn hover(&mut self, index: Option<usize>) {
        if let Self::Dragging { over_index, .. } = self {
            *over_index = index;
        }
    }

    /// Release the row over `destination` and return to idle.
    ///
    /// Returns `None` when no gesture was in flight, which is the case for the
    /// `dragend` that follows a drop already handled.
    pub fn finish(&mut self, destination: Option<usize>) -> Option<DropResult> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Dragging { source_index, .. } => Some(DropResult { source_index, destination_index: destination }),
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    #[must_use]
    pub fn source_index(&self) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::Dragging { source_index, .. } => Some(*source_index),
        }
    }

    #[must_use]
    pub fn over_index(&self) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::Dragging { over_index, .. } => *over_index,
        }
    }
}
