//! Equipment hire catalogue.
//!
//! A line-oriented terminal session over an in-memory catalogue: list, sort
//! and page through equipment, and add new items through a validated form.
//! The domain lives in [`domain`]; [`inbound::terminal`] parses commands and
//! renders results; [`seeding`] fills the catalogue from a seed registry at
//! startup.

pub mod domain;
pub mod inbound;
pub mod seeding;
pub mod settings;
pub mod telemetry;
