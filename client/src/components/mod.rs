//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write the shared `RwSignal<QuoteBoard>` from Leptos
//! context; the edit dialog instead takes signals and callbacks so it stays
//! unaware of the board.

pub mod edit_quote_dialog;
pub mod quote_input;
pub mod quote_list;
pub mod quote_row;
