//! Stateful components
//!
//! - `history`: the loaded commit listing (the input of every command)
//! - `viewer`: couples the history with the output writer; commands are
//!   implemented on it

pub mod history;
pub mod viewer;
