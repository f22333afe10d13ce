//! Deq virtual machine — executes token programs against a single deque.
//!
//! The VM is a deque-based machine with:
//! - One double-ended value store shared by every instruction
//! - A label table resolved once, before the first instruction
//! - An instruction pointer indexing the token sequence
//!
//! Observable effects (`print`, `trace`, `exit`) are delivered in order to
//! an [`Output`] sink.
//!
//! # Usage
//!
//! ```
//! use deq_common::Value;
//! use deq_vm::{run, Event};
//!
//! let mut events: Vec<Event> = Vec::new();
//! run("5. 3. add. print.", &mut events).unwrap();
//! assert_eq!(events, vec![Event::Print(Value::Number(8.0))]);
//! ```

pub mod deque;
pub mod error;
pub mod execute;
pub mod labels;
pub mod machine;
pub mod output;

pub use deque::Deque;
pub use error::RuntimeError;
pub use labels::LabelTable;
pub use machine::{Config, Halt, Outcome, VM};
pub use output::{Event, LineOutput, Output};

use deq_common::Program;

/// Tokenize and execute source text with the default configuration.
///
/// # Errors
///
/// Returns [`RuntimeError`] on a duplicate label (before anything runs),
/// an empty-deque pop, an unknown token, or a bad jump target.
pub fn run(source: &str, output: &mut dyn Output) -> Result<Outcome, RuntimeError> {
    run_with(source, Config::default(), output)
}

/// Tokenize and execute source text with an explicit configuration.
pub fn run_with(
    source: &str,
    config: Config,
    output: &mut dyn Output,
) -> Result<Outcome, RuntimeError> {
    let program = Program::parse(source);
    run_program(&program, config, output)
}

/// Execute an already-tokenized program.
pub fn run_program(
    program: &Program,
    config: Config,
    output: &mut dyn Output,
) -> Result<Outcome, RuntimeError> {
    let mut vm = VM::new(program, config, output);
    vm.execute()
}

#[cfg(test)]
mod proptests {
    use super::*;
    use deq_common::Value;
    use proptest::prelude::*;

    fn literal(n: i32) -> String {
        format!("{n}.")
    }

    fn run_ok(source: &str) -> Outcome {
        let mut events: Vec<Event> = Vec::new();
        run(source, &mut events).unwrap()
    }

    fn arb_prefix() -> impl Strategy<Value = Vec<i32>> {
        prop::collection::vec(-1000i32..1000, 2..8)
    }

    proptest! {
        /// Pushing then dropping on the same side leaves the deque as it was.
        #[test]
        fn push_then_pop_restores(prefix in arb_prefix(), v in -1000i32..1000, left in any::<bool>()) {
            let base: Vec<String> = prefix.iter().map(|&n| literal(n)).collect();
            let base = base.join(" ");
            let (push, drop) = if left {
                (format!("!{v}"), "!drop".to_string())
            } else {
                (literal(v), "drop.".to_string())
            };
            let before = run_ok(&base);
            let after = run_ok(&format!("{base} {push} {drop}"));
            prop_assert_eq!(before.deque, after.deque);
        }

        /// `dup drop` is a no-op.
        #[test]
        fn dup_then_drop_is_noop(prefix in arb_prefix()) {
            let base: Vec<String> = prefix.iter().map(|&n| literal(n)).collect();
            let base = base.join(" ");
            let before = run_ok(&base);
            let after = run_ok(&format!("{base} dup. drop. !dup !drop"));
            prop_assert_eq!(before.deque, after.deque);
        }

        /// `swap swap` is a no-op on either side.
        #[test]
        fn swap_twice_is_noop(prefix in arb_prefix()) {
            let base: Vec<String> = prefix.iter().map(|&n| literal(n)).collect();
            let base = base.join(" ");
            let before = run_ok(&base);
            let after = run_ok(&format!("{base} swap. swap. !swap !swap"));
            prop_assert_eq!(before.deque, after.deque);
        }

        /// Literals land in the deque in push order.
        #[test]
        fn literals_fill_deque(prefix in arb_prefix()) {
            let base: Vec<String> = prefix.iter().map(|&n| literal(n)).collect();
            let out = run_ok(&base.join(" "));
            let expected: Vec<Value> = prefix.iter().map(|&n| Value::Number(n as f64)).collect();
            prop_assert_eq!(out.deque, expected);
        }
    }
}
