//! Observable events and the sinks that receive them.

use std::fmt;
use std::io::{self, Write};

use deq_common::value::json_list;
use deq_common::Value;

/// Something the running program produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// `exit` ran; the final deque contents.
    Exit(Vec<Value>),
    /// `trace` ran; the deque contents at that point.
    Trace(Vec<Value>),
    /// `print` popped this value.
    Print(Value),
    /// About to execute `token` at `ip`. Only emitted with tracing on.
    Step {
        ip: usize,
        token: String,
        deque: Vec<Value>,
    },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Exit(values) => write!(f, "EXIT {}", json_list(values)),
            Event::Trace(values) => {
                for v in values {
                    f.write_str(if v.is_zero() { " " } else { "*" })?;
                }
                Ok(())
            }
            Event::Print(value) => write!(f, "PRINT:  {value}"),
            Event::Step { ip, token, deque } => {
                write!(f, "{ip}\t{token} \t<-  {}", json_list(deque))
            }
        }
    }
}

/// Receiver of events, in program order.
pub trait Output {
    fn emit(&mut self, event: Event) -> io::Result<()>;
}

/// Collects events in memory.
impl Output for Vec<Event> {
    fn emit(&mut self, event: Event) -> io::Result<()> {
        self.push(event);
        Ok(())
    }
}

/// Writes one line per event. Step events go to `debug`, the rest to `out`.
pub struct LineOutput<W, D> {
    out: W,
    debug: D,
}

impl<W: Write, D: Write> LineOutput<W, D> {
    pub fn new(out: W, debug: D) -> Self {
        Self { out, debug }
    }

    pub fn into_inner(self) -> (W, D) {
        (self.out, self.debug)
    }
}

impl<W: Write, D: Write> Output for LineOutput<W, D> {
    fn emit(&mut self, event: Event) -> io::Result<()> {
        match event {
            Event::Step { .. } => writeln!(self.debug, "{event}"),
            _ => writeln!(self.out, "{event}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: f64) -> Value {
        Value::Number(n)
    }

    #[test]
    fn exit_line() {
        let e = Event::Exit(vec![num(1.0), Value::Bool(true), num(-2.5)]);
        assert_eq!(e.to_string(), "EXIT [1,true,-2.5]");
        assert_eq!(Event::Exit(vec![]).to_string(), "EXIT []");
    }

    #[test]
    fn trace_line_marks_zero_only() {
        let e = Event::Trace(vec![num(0.0), num(3.0), Value::Bool(false), num(0.0)]);
        assert_eq!(e.to_string(), " ** ");
    }

    #[test]
    fn print_line() {
        assert_eq!(Event::Print(num(8.0)).to_string(), "PRINT:  8");
        assert_eq!(Event::Print(Value::Bool(true)).to_string(), "PRINT:  true");
    }

    #[test]
    fn step_line() {
        let e = Event::Step {
            ip: 3,
            token: "add.".to_string(),
            deque: vec![num(5.0), num(3.0)],
        };
        assert_eq!(e.to_string(), "3\tadd. \t<-  [5,3]");
    }

    #[test]
    fn line_output_splits_streams() {
        let mut sink = LineOutput::new(Vec::new(), Vec::new());
        sink.emit(Event::Print(num(1.0))).unwrap();
        sink.emit(Event::Step {
            ip: 0,
            token: "x".to_string(),
            deque: vec![],
        })
        .unwrap();
        let (out, debug) = sink.into_inner();
        assert_eq!(String::from_utf8(out).unwrap(), "PRINT:  1\n");
        assert_eq!(String::from_utf8(debug).unwrap(), "0\tx \t<-  []\n");
    }
}
