//! Protocol standards shared across providers.

pub mod openai;
