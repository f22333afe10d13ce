//! VM state management: deque, labels, instruction pointer, configuration.

use crate::deque::Deque;
use crate::error::RuntimeError;
use crate::labels::LabelTable;
use crate::output::{Event, Output};
use deq_common::{Program, Side, StripRule, Value};

/// Run configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    /// How operands are cut out of tokens.
    pub strip: StripRule,
    /// Emit a [`Event::Step`] before every instruction.
    pub trace: bool,
    /// Abort after this many executed instructions. Unlimited when `None`.
    pub max_steps: Option<u64>,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Halt {
    /// An `exit` instruction ran.
    Exit,
    /// The instruction pointer left the program.
    EndOfProgram,
}

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub halt: Halt,
    /// Final deque contents, left to right.
    pub deque: Vec<Value>,
    /// Number of instructions executed.
    pub steps: u64,
}

/// The Deq virtual machine. One instance per run.
pub struct VM<'a> {
    /// The program being executed.
    pub(crate) program: &'a Program,
    /// Event sink.
    pub(crate) output: &'a mut dyn Output,
    pub(crate) config: Config,
    pub(crate) deque: Deque,
    /// Filled in by `execute` before the first instruction.
    pub(crate) labels: LabelTable,
    /// Instruction pointer (token index).
    pub(crate) ip: usize,
    pub(crate) steps: u64,
    pub(crate) halt: Option<Halt>,
}

impl<'a> VM<'a> {
    /// Create a new VM for the given program.
    pub fn new(program: &'a Program, config: Config, output: &'a mut dyn Output) -> Self {
        Self {
            program,
            output,
            config,
            deque: Deque::new(),
            labels: LabelTable::default(),
            ip: 0,
            steps: 0,
            halt: None,
        }
    }

    /// Push a value onto the given end.
    pub(crate) fn push(&mut self, side: Side, value: Value) {
        self.deque.push(side, value);
    }

    /// Pop a value from the given end.
    pub(crate) fn pop(&mut self, side: Side) -> Result<Value, RuntimeError> {
        self.deque
            .pop(side)
            .ok_or(RuntimeError::EmptyDeque { at: self.ip })
    }

    /// Hand an event to the output sink.
    pub(crate) fn emit(&mut self, event: Event) -> Result<(), RuntimeError> {
        let at = self.ip;
        self.output.emit(event).map_err(|e| RuntimeError::Output {
            at,
            reason: e.to_string(),
        })
    }

    pub(crate) fn outcome(&self) -> Outcome {
        Outcome {
            halt: self.halt.unwrap_or(Halt::EndOfProgram),
            deque: self.deque.snapshot(),
            steps: self.steps,
        }
    }
}
