//! Client-side state for the quote board.
//!
//! DESIGN
//! ======
//! `quotes::QuoteBoard` owns everything; `edit` and `drag` model the two
//! transient interactions it coordinates.

pub mod drag;
pub mod edit;
pub mod quotes;
