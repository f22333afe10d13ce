//! Main execution loop and instruction dispatch for the Deq VM.

use crate::error::RuntimeError;
use crate::labels::LabelTable;
use crate::machine::{Halt, Outcome, VM};
use crate::output::Event;
use deq_common::{decode, parse_number, Mnemonic, Side, Value};

impl<'a> VM<'a> {
    /// Resolve labels, then execute until `exit`, end of program, or error.
    pub fn execute(&mut self) -> Result<Outcome, RuntimeError> {
        self.labels = LabelTable::build(self.program)?;
        self.ip = 0;

        while self.ip < self.program.len() {
            if let Some(limit) = self.config.max_steps {
                if self.steps >= limit {
                    return Err(RuntimeError::StepLimitExceeded { limit });
                }
            }
            self.steps += 1;
            self.step()?;
        }

        Ok(self.outcome())
    }

    /// Decode and execute the token at the instruction pointer.
    fn step(&mut self) -> Result<(), RuntimeError> {
        let program = self.program;
        let Some(token) = program.get(self.ip) else {
            return Ok(());
        };

        if self.config.trace {
            let event = Event::Step {
                ip: self.ip,
                token: token.to_string(),
                deque: self.deque.snapshot(),
            };
            self.emit(event)?;
        }

        let decoded = decode(token, self.config.strip);
        let side = decoded.side;

        if let Some(m) = Mnemonic::from_name(decoded.operand) {
            return self.dispatch(m, side);
        }

        if !decoded.is_label && !decoded.operand.is_empty() {
            let value = self.resolve_operand(decoded.operand)?;
            self.push(side, value);
        }
        self.ip += 1;
        Ok(())
    }

    /// A numeric literal, or else the index of a known label.
    fn resolve_operand(&self, operand: &str) -> Result<Value, RuntimeError> {
        if let Some(n) = parse_number(operand) {
            return Ok(Value::Number(n));
        }
        match self.labels.get(operand) {
            Some(index) => Ok(Value::Number(index as f64)),
            None => Err(RuntimeError::UnknownToken {
                at: self.ip,
                token: operand.to_string(),
            }),
        }
    }

    fn dispatch(&mut self, m: Mnemonic, side: Side) -> Result<(), RuntimeError> {
        match m {
            // Control
            Mnemonic::Exit => return self.exec_exit(),
            Mnemonic::Jmp => return self.exec_jmp(side),
            Mnemonic::JmpIf => return self.exec_jmpif(side),
            Mnemonic::Drop => {
                self.pop(side)?;
            }
            Mnemonic::Trace => {
                let snapshot = self.deque.snapshot();
                self.emit(Event::Trace(snapshot))?;
            }
            Mnemonic::Print => {
                let v = self.pop(side)?;
                self.emit(Event::Print(v))?;
            }

            // Arithmetic
            Mnemonic::Add => self.exec_binary(side, add)?,
            Mnemonic::Sub => self.exec_binary(side, sub)?,

            // Comparison
            Mnemonic::Gt => self.exec_binary(side, |a, b| compare(a, b, |x, y| x > y))?,
            Mnemonic::Gte => self.exec_binary(side, |a, b| compare(a, b, |x, y| x >= y))?,
            Mnemonic::Lt => self.exec_binary(side, |a, b| compare(a, b, |x, y| x < y))?,
            Mnemonic::Eq => self.exec_binary(side, |a, b| Value::Bool(a.loose_eq(b)))?,

            // Bitwise
            Mnemonic::Shr => self.exec_binary(side, shr)?,
            Mnemonic::Shl => self.exec_binary(side, shl)?,
            Mnemonic::Or => self.exec_binary(side, |a, b| int32(a.to_i32() | b.to_i32()))?,
            Mnemonic::And => self.exec_binary(side, |a, b| int32(a.to_i32() & b.to_i32()))?,

            // Deque manipulation
            Mnemonic::Swap => self.exec_swap(side)?,
            Mnemonic::Move => {
                let v = self.pop(side)?;
                self.push(side.opposite(), v);
            }
            Mnemonic::Over => self.exec_over(side)?,
            Mnemonic::Dup => {
                let v = self.pop(side)?;
                self.push(side, v);
                self.push(side, v);
            }
        }

        self.ip += 1;
        Ok(())
    }

    // ---- Control ----

    fn exec_exit(&mut self) -> Result<(), RuntimeError> {
        let snapshot = self.deque.snapshot();
        self.emit(Event::Exit(snapshot))?;
        self.halt = Some(Halt::Exit);
        self.ip = self.program.len() + 1;
        Ok(())
    }

    fn exec_jmp(&mut self, side: Side) -> Result<(), RuntimeError> {
        let target = self.pop(side)?;
        self.jump_to(target)
    }

    /// The condition is checked before the target, so a falsy condition
    /// never validates the target it popped.
    fn exec_jmpif(&mut self, side: Side) -> Result<(), RuntimeError> {
        let target = self.pop(side)?;
        let condition = self.pop(side)?;
        if condition.is_truthy() {
            self.jump_to(target)
        } else {
            self.ip += 1;
            Ok(())
        }
    }

    fn jump_to(&mut self, target: Value) -> Result<(), RuntimeError> {
        if !target.is_truthy() {
            return Err(RuntimeError::UnknownLabel {
                at: self.ip,
                target,
            });
        }
        let n = target.to_number();
        if !n.is_finite() || n < 0.0 || n.fract() != 0.0 {
            return Err(RuntimeError::InvalidJumpTarget {
                at: self.ip,
                target,
            });
        }
        // Saturating cast; targets past the end simply stop the run.
        self.ip = n as usize;
        Ok(())
    }

    // ---- Binary operators ----

    /// Pop a, pop b, push `op(a, b)`.
    fn exec_binary(
        &mut self,
        side: Side,
        op: fn(Value, Value) -> Value,
    ) -> Result<(), RuntimeError> {
        let a = self.pop(side)?;
        let b = self.pop(side)?;
        self.push(side, op(a, b));
        Ok(())
    }

    // ---- Deque manipulation ----

    fn exec_swap(&mut self, side: Side) -> Result<(), RuntimeError> {
        let a = self.pop(side)?;
        let b = self.pop(side)?;
        self.push(side, a);
        self.push(side, b);
        Ok(())
    }

    fn exec_over(&mut self, side: Side) -> Result<(), RuntimeError> {
        let a = self.pop(side)?;
        let b = self.pop(side)?;
        self.push(side, b);
        self.push(side, a);
        self.push(side, b);
        Ok(())
    }
}

// Operand order throughout: `a` was popped first, `b` second.

fn add(a: Value, b: Value) -> Value {
    Value::from(a.to_number() + b.to_number())
}

fn sub(a: Value, b: Value) -> Value {
    Value::from(b.to_number() - a.to_number())
}

fn compare(a: Value, b: Value, op: fn(f64, f64) -> bool) -> Value {
    Value::from(op(a.to_number(), b.to_number()))
}

fn shr(a: Value, b: Value) -> Value {
    int32(b.to_i32() >> a.to_shift())
}

fn shl(a: Value, b: Value) -> Value {
    int32(b.to_i32().wrapping_shl(a.to_shift()))
}

fn int32(n: i32) -> Value {
    Value::from(f64::from(n))
}
