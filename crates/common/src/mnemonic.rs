//! Instruction mnemonics of the Deq language.
//!
//! Mnemonics are matched against the decoded operand string exactly and
//! case-sensitively. Anything that does not match is a label definition,
//! a numeric literal or a label reference.

use std::fmt;

/// Identifies the operation to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    // Control
    /// Emit the deque contents and stop the run.
    Exit,
    /// Pop one value and discard it.
    Drop,
    /// Emit a zero/non-zero marker line for the deque. No mutation.
    Trace,
    /// Pop one value and emit it.
    Print,
    /// Pop a target index and jump to it.
    Jmp,
    /// Pop a target index, pop a condition, jump if the condition is truthy.
    JmpIf,

    // Arithmetic
    /// Pop a, pop b, push a + b.
    Add,
    /// Pop a, pop b, push b - a.
    Sub,

    // Comparison
    /// Pop a, pop b, push a > b.
    Gt,
    /// Pop a, pop b, push a >= b.
    Gte,
    /// Pop a, pop b, push a < b.
    Lt,
    /// Pop a, pop b, push a == b (loose).
    Eq,

    // Bitwise
    /// Pop a, pop b, push b >> a (arithmetic).
    Shr,
    /// Pop a, pop b, push b << a.
    Shl,
    /// Pop a, pop b, push a | b.
    Or,
    /// Pop a, pop b, push a & b.
    And,

    // Deque manipulation
    /// Exchange the top two values.
    Swap,
    /// Move one value to the opposite end.
    Move,
    /// Copy the second value over the first.
    Over,
    /// Duplicate the top value.
    Dup,
}

/// Every mnemonic, in table order.
pub const ALL_MNEMONICS: [Mnemonic; 20] = [
    Mnemonic::Exit,
    Mnemonic::Drop,
    Mnemonic::Trace,
    Mnemonic::Add,
    Mnemonic::Sub,
    Mnemonic::Print,
    Mnemonic::Jmp,
    Mnemonic::JmpIf,
    Mnemonic::Gt,
    Mnemonic::Gte,
    Mnemonic::Lt,
    Mnemonic::Eq,
    Mnemonic::Shr,
    Mnemonic::Shl,
    Mnemonic::Or,
    Mnemonic::And,
    Mnemonic::Swap,
    Mnemonic::Move,
    Mnemonic::Over,
    Mnemonic::Dup,
];

impl Mnemonic {
    /// Look up a mnemonic by its source spelling.
    pub fn from_name(name: &str) -> Option<Self> {
        let m = match name {
            "exit" => Mnemonic::Exit,
            "drop" => Mnemonic::Drop,
            "trace" => Mnemonic::Trace,
            "add" => Mnemonic::Add,
            "sub" => Mnemonic::Sub,
            "print" => Mnemonic::Print,
            "jmp" => Mnemonic::Jmp,
            "jmpif" => Mnemonic::JmpIf,
            ">" => Mnemonic::Gt,
            ">=" => Mnemonic::Gte,
            "<" => Mnemonic::Lt,
            "eq" => Mnemonic::Eq,
            "shr" => Mnemonic::Shr,
            "shl" => Mnemonic::Shl,
            "or" => Mnemonic::Or,
            "and" => Mnemonic::And,
            "swap" => Mnemonic::Swap,
            "move" => Mnemonic::Move,
            "over" => Mnemonic::Over,
            "dup" => Mnemonic::Dup,
            _ => return None,
        };
        Some(m)
    }

    /// The source spelling.
    pub fn name(self) -> &'static str {
        match self {
            Mnemonic::Exit => "exit",
            Mnemonic::Drop => "drop",
            Mnemonic::Trace => "trace",
            Mnemonic::Add => "add",
            Mnemonic::Sub => "sub",
            Mnemonic::Print => "print",
            Mnemonic::Jmp => "jmp",
            Mnemonic::JmpIf => "jmpif",
            Mnemonic::Gt => ">",
            Mnemonic::Gte => ">=",
            Mnemonic::Lt => "<",
            Mnemonic::Eq => "eq",
            Mnemonic::Shr => "shr",
            Mnemonic::Shl => "shl",
            Mnemonic::Or => "or",
            Mnemonic::And => "and",
            Mnemonic::Swap => "swap",
            Mnemonic::Move => "move",
            Mnemonic::Over => "over",
            Mnemonic::Dup => "dup",
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
