//! The double-ended value store shared by every instruction.

use std::collections::VecDeque;

use deq_common::{Side, Value};

/// Ordered sequence of values, mutable only at its two ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deque {
    values: VecDeque<Value>,
}

impl Deque {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a value onto the given end.
    pub fn push(&mut self, side: Side, value: Value) {
        match side {
            Side::Left => self.values.push_front(value),
            Side::Right => self.values.push_back(value),
        }
    }

    /// Pop a value from the given end. `None` when empty.
    pub fn pop(&mut self, side: Side) -> Option<Value> {
        match side {
            Side::Left => self.values.pop_front(),
            Side::Right => self.values.pop_back(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Left-to-right copy of the contents.
    pub fn snapshot(&self) -> Vec<Value> {
        self.values.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: f64) -> Value {
        Value::Number(n)
    }

    #[test]
    fn right_end_is_stack_order() {
        let mut d = Deque::new();
        d.push(Side::Right, num(1.0));
        d.push(Side::Right, num(2.0));
        assert_eq!(d.pop(Side::Right), Some(num(2.0)));
        assert_eq!(d.pop(Side::Right), Some(num(1.0)));
        assert_eq!(d.pop(Side::Right), None);
    }

    #[test]
    fn left_push_prepends() {
        let mut d = Deque::new();
        d.push(Side::Right, num(1.0));
        d.push(Side::Left, num(0.0));
        assert_eq!(d.snapshot(), vec![num(0.0), num(1.0)]);
        assert_eq!(d.pop(Side::Left), Some(num(0.0)));
    }

    #[test]
    fn opposite_ends_behave_as_queue() {
        let mut d = Deque::new();
        d.push(Side::Right, num(1.0));
        d.push(Side::Right, num(2.0));
        assert_eq!(d.pop(Side::Left), Some(num(1.0)));
        assert_eq!(d.len(), 1);
    }

    #[test]
    fn empty_pop_is_none_on_both_ends() {
        let mut d = Deque::new();
        assert!(d.is_empty());
        assert_eq!(d.pop(Side::Left), None);
        assert_eq!(d.pop(Side::Right), None);
    }
}
