pub mod basic;

pub use basic::{Card, Rank, Suit, IMAGE_EXTENSION};
