//! Report rendering.
//!
//! Only a terminal report exists; each piece renders to a `String` so the
//! pipeline decides where and when it is written.

pub mod terminal;

pub use terminal::TerminalReport;
