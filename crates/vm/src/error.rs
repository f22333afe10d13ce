//! Runtime errors for the Deq VM.
//!
//! Every error is fatal and aborts the run. Variants include the
//! instruction index (`at`) of the offending token.

use deq_common::Value;
use thiserror::Error;

/// Errors that occur while preparing or executing a program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Two tokens define the same label. Raised before execution starts.
    #[error("duplicate label '{name}' at instruction {at}")]
    DuplicateLabel { at: usize, name: String },

    /// Pop on an empty deque.
    #[error("pop from empty deque at instruction {at}")]
    EmptyDeque { at: usize },

    /// Operand is not a mnemonic, a number, or a known label.
    #[error("unknown token '{token}' at instruction {at}")]
    UnknownToken { at: usize, token: String },

    /// `jmp`/`jmpif` popped a falsy target.
    #[error("unknown label for jump target {target} at instruction {at}")]
    UnknownLabel { at: usize, target: Value },

    /// Jump target is truthy but not a non-negative integer index.
    #[error("invalid jump target {target} at instruction {at}")]
    InvalidJumpTarget { at: usize, target: Value },

    /// The configured step limit ran out.
    #[error("step limit of {limit} exceeded")]
    StepLimitExceeded { limit: u64 },

    /// The output sink rejected an event.
    #[error("output failed at instruction {at}: {reason}")]
    Output { at: usize, reason: String },
}
