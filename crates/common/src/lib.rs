//! Deq common types and tokenization.
//!
//! This crate provides the foundational data structures for the Deq
//! language:
//!
//! - [`Value`] — runtime value stored in the deque
//! - [`Mnemonic`] — the fixed instruction set
//! - [`Program`] — the token sequence produced from source text
//! - [`decode`] — splitting a token into [`Side`], operand and label flag
//!
//! # Dependencies
//!
//! This crate has no runtime dependencies.

pub mod mnemonic;
pub mod program;
pub mod token;
pub mod value;

// Re-export commonly used types at the crate root.
pub use mnemonic::Mnemonic;
pub use program::Program;
pub use token::{decode, Decoded, Side, StripRule};
pub use value::{parse_number, Value};
