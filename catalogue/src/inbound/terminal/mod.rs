//! Line-oriented terminal adapter.
//!
//! Reads one command per line, applies it to the catalogue domain and writes
//! the resulting rendering.

mod command;
mod render;
mod session;

pub use command::{Command, CommandError, ShowTarget};
pub use render::{FormDisplay, HELP, ItemDisplay, ListDisplay};
pub use session::{Outcome, PROMPT, Session, run};
