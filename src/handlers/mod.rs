//! Transport handlers module
//!
//! Adapters that carry messages between a user and the quiz dialogue.

pub mod console;
