//! Test data factories


pub use fixtures::{DeckConfig, DeckFactory};
