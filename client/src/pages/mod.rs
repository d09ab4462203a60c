//! Page modules for route-level screens.

pub mod quote_board;
