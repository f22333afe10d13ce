//! Program representation: the flat token sequence of a source text.
//!
//! Tokenization never fails. Every `\n` or `\r` starts a new line, every
//! space or tab starts a new token, and comment lines (first non-blank
//! character `#`) contribute a single empty token. Empty tokens are kept
//! because token indices are jump targets.

/// A Deq program: an immutable sequence of tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// The token stream.
    pub tokens: Vec<String>,
}

impl Program {
    /// Create a program from already-split tokens.
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    /// Tokenize source text into a program.
    pub fn parse(source: &str) -> Self {
        let tokens = source
            .split(['\n', '\r'])
            .flat_map(|line| {
                let content = if line.trim_start().starts_with('#') {
                    ""
                } else {
                    line
                };
                content.split([' ', '\t'])
            })
            .map(str::to_string)
            .collect();
        Self { tokens }
    }

    /// The token at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// Number of tokens in the program.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the program has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(source: &str) -> Vec<String> {
        Program::parse(source).tokens
    }

    #[test]
    fn empty_source_is_one_empty_token() {
        assert_eq!(toks(""), vec![""]);
    }

    #[test]
    fn simple_line() {
        assert_eq!(toks("5. 3. add. print."), vec!["5.", "3.", "add.", "print."]);
    }

    #[test]
    fn multiple_lines() {
        assert_eq!(toks("1. 2.\ndup."), vec!["1.", "2.", "dup."]);
    }

    #[test]
    fn comment_line_becomes_empty_token() {
        assert_eq!(toks("# a comment\n1."), vec!["", "1."]);
        assert_eq!(toks("   # indented comment"), vec![""]);
    }

    #[test]
    fn hash_inside_line_is_not_a_comment() {
        assert_eq!(toks("1. #2"), vec!["1.", "#2"]);
    }

    #[test]
    fn blank_line_is_one_empty_token() {
        assert_eq!(toks("a\n\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn crlf_yields_an_empty_line() {
        assert_eq!(toks("a\r\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn consecutive_separators_yield_empty_tokens() {
        assert_eq!(toks("a  b"), vec!["a", "", "b"]);
        assert_eq!(toks("\ta"), vec!["", "a"]);
        assert_eq!(toks("a "), vec!["a", ""]);
    }

    #[test]
    fn label_positions_follow_token_order() {
        let p = Program::parse("# header\nloop: 1. drop.\nloop. jmp.");
        assert_eq!(p.get(1), Some("loop:"));
        assert_eq!(p.get(4), Some("loop."));
        assert_eq!(p.len(), 6);
        assert_eq!(p.get(6), None);
    }

    #[test]
    fn new_and_is_empty() {
        assert!(Program::new(vec![]).is_empty());
        assert!(!Program::parse("").is_empty());
    }
}
