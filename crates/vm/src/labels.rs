//! Label table: label names resolved to token indices before execution.

use std::collections::HashMap;

use crate::error::RuntimeError;
use deq_common::{token, Program};

/// Mapping from label name to the index of its defining token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTable {
    entries: HashMap<String, usize>,
}

impl LabelTable {
    /// Scan every token for label definitions.
    ///
    /// The whole program is scanned before anything runs, so a duplicate
    /// anywhere aborts the run without side effects.
    pub fn build(program: &Program) -> Result<Self, RuntimeError> {
        let mut entries = HashMap::new();

        for (at, tok) in program.tokens.iter().enumerate() {
            let Some(name) = token::label_name(tok) else {
                continue;
            };
            if entries.contains_key(name) {
                return Err(RuntimeError::DuplicateLabel {
                    at,
                    name: name.to_string(),
                });
            }
            entries.insert(name.to_string(), at);
        }

        Ok(Self { entries })
    }

    /// Index of the token defining `name`.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.entries.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by index.
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut v: Vec<(&str, usize)> = self
            .entries
            .iter()
            .map(|(name, &at)| (name.as_str(), at))
            .collect();
        v.sort_by_key(|&(_, at)| at);
        v
    }
}
