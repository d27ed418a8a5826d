//! Inbound adapters that drive the catalogue domain.

pub mod terminal;
