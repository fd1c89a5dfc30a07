//! Integration tests driving the tokenizer the way downstream consumers do.

pub mod highlight;
pub mod ini;
