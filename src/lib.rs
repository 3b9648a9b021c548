// Library crate for the card image renamer
// This file exposes the public API for the binary and integration tests

pub mod cards;
pub mod config;
pub mod renamer;

// Re-export commonly used types for easier access in tests
pub use cards::{Card, Rank, Suit};
pub use config::Config;
pub use renamer::{
    CardDirectory, InMemoryCardDirectory, LocalCardDirectory, RenameError, RenameOutcome,
    RenameReport, RenameService,
};
