//! Deck generation.
//!
//! ## Key Types
//!
//! - `Deck`: ordered cards of one game, each symbol exactly twice
//! - `generate`: shuffled deck for a requested size
//! - `supported_total`: the size a request is clamped to

pub mod generator;
pub mod layout;

pub use generator::{generate, supported_total};
pub use layout::Deck;
