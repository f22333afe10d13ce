//! Decoding a raw program token into side, operand and label flag.

/// Which end of the deque an instruction reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Selected by a leading `!`.
    Left,
    /// The default.
    Right,
}

impl Side {
    /// The other end.
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// How the operand string is cut out of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StripRule {
    /// Left tokens lose their first character; every other token loses
    /// its last character, whatever it is. Right-side mnemonics and
    /// literals therefore need one trailing character (`5. add.`).
    #[default]
    Trailing,
    /// Left tokens lose a leading `!`; right tokens lose a trailing `:`
    /// only when one is present.
    LabelOnly,
}

/// The pieces of a token the engine dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded<'a> {
    pub side: Side,
    pub operand: &'a str,
    /// The token ends in `:` once trailing whitespace is trimmed.
    pub is_label: bool,
}

/// Split a token into its side, operand string and label flag.
pub fn decode(token: &str, rule: StripRule) -> Decoded<'_> {
    let side = if token.trim_start().starts_with('!') {
        Side::Left
    } else {
        Side::Right
    };
    let is_label = is_label_definition(token);

    let operand = match (rule, side) {
        (StripRule::Trailing, Side::Left) => drop_first_char(token),
        (StripRule::Trailing, Side::Right) => drop_last_char(token),
        (StripRule::LabelOnly, Side::Left) => {
            let t = token.trim_start();
            t.strip_prefix('!').unwrap_or(t)
        }
        (StripRule::LabelOnly, Side::Right) => {
            let t = token.trim_end();
            t.strip_suffix(':').unwrap_or(t)
        }
    };

    Decoded {
        side,
        operand,
        is_label,
    }
}

/// True if the token, with trailing whitespace trimmed, ends in `:`.
pub fn is_label_definition(token: &str) -> bool {
    token.trim_end().ends_with(':')
}

/// The label name a definition token introduces, if it is one.
pub fn label_name(token: &str) -> Option<&str> {
    token.trim_end().strip_suffix(':')
}

fn drop_first_char(s: &str) -> &str {
    let mut chars = s.chars();
    chars.next();
    chars.as_str()
}

fn drop_last_char(s: &str) -> &str {
    let mut chars = s.chars();
    chars.next_back();
    chars.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_rule_strips_last_char_of_right_tokens() {
        let d = decode("add.", StripRule::Trailing);
        assert_eq!(d.side, Side::Right);
        assert_eq!(d.operand, "add");
        assert!(!d.is_label);

        // The bare mnemonic loses its final letter.
        assert_eq!(decode("add", StripRule::Trailing).operand, "ad");
        assert_eq!(decode("5", StripRule::Trailing).operand, "");
    }

    #[test]
    fn trailing_rule_strips_bang_of_left_tokens() {
        let d = decode("!add", StripRule::Trailing);
        assert_eq!(d.side, Side::Left);
        assert_eq!(d.operand, "add");
    }

    #[test]
    fn left_label_keeps_its_colon() {
        let d = decode("!loop:", StripRule::Trailing);
        assert_eq!(d.side, Side::Left);
        assert_eq!(d.operand, "loop:");
        assert!(d.is_label);
    }

    #[test]
    fn label_definition_decodes_to_name() {
        let d = decode("loop:", StripRule::Trailing);
        assert_eq!(d.operand, "loop");
        assert!(d.is_label);
    }

    #[test]
    fn empty_token() {
        let d = decode("", StripRule::Trailing);
        assert_eq!(d.side, Side::Right);
        assert_eq!(d.operand, "");
        assert!(!d.is_label);
    }

    #[test]
    fn multibyte_trailing_char() {
        assert_eq!(decode("dup\u{e9}", StripRule::Trailing).operand, "dup");
    }

    #[test]
    fn label_only_rule() {
        assert_eq!(decode("add", StripRule::LabelOnly).operand, "add");
        assert_eq!(decode("5", StripRule::LabelOnly).operand, "5");
        assert_eq!(decode("loop:", StripRule::LabelOnly).operand, "loop");
        assert_eq!(decode("!sub", StripRule::LabelOnly).operand, "sub");
        assert_eq!(decode("!sub", StripRule::LabelOnly).side, Side::Left);
    }

    #[test]
    fn label_names() {
        assert_eq!(label_name("loop:"), Some("loop"));
        assert_eq!(label_name("a::"), Some("a:"));
        assert_eq!(label_name(":"), Some(""));
        assert_eq!(label_name("loop"), None);
    }

    #[test]
    fn side_opposite() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite(), Side::Left);
    }
}
