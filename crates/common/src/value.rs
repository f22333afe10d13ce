//! Runtime value representation for the Deq machine.
//!
//! Values are what live in the deque during execution. There are only two
//! kinds: numbers (literals, label indices, arithmetic results) and booleans
//! (comparison results). Every operator coerces its operands, so any value
//! may appear anywhere.

use std::fmt;

/// Runtime value representation.
#[derive(Debug, Clone, Copy)]
pub enum Value {
    /// IEEE 754 64-bit float. Integers, label indices and bitwise results
    /// are all carried in this form.
    Number(f64),
    /// Boolean produced by a comparison.
    Bool(bool),
}

// Structural equality, used by tests and snapshots. Numbers compare
// bitwise so NaN == NaN here; the `eq` instruction uses `loose_eq` instead.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a.to_bits() == b.to_bits(),
            (Value::Bool(a), Value::Bool(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl Value {
    /// Numeric form: booleans become 1 or 0.
    pub fn to_number(self) -> f64 {
        match self {
            Value::Number(n) => n,
            Value::Bool(true) => 1.0,
            Value::Bool(false) => 0.0,
        }
    }

    /// Zero, NaN and `false` are falsy; everything else is truthy.
    pub fn is_truthy(self) -> bool {
        match self {
            Value::Number(n) => n != 0.0 && !n.is_nan(),
            Value::Bool(b) => b,
        }
    }

    /// Signed 32-bit form used by the bitwise and shift instructions.
    ///
    /// Truncates toward zero and wraps modulo 2^32. NaN and the
    /// infinities map to 0.
    pub fn to_i32(self) -> i32 {
        let n = self.to_number();
        if !n.is_finite() {
            return 0;
        }
        let wrapped = n.trunc().rem_euclid(4_294_967_296.0);
        wrapped as u32 as i32
    }

    /// Shift count: the low five bits of the 32-bit form.
    pub fn to_shift(self) -> u32 {
        (self.to_i32() as u32) & 0x1f
    }

    /// Loose equality across the numeric/boolean domain.
    pub fn loose_eq(self, other: Value) -> bool {
        self.to_number() == other.to_number()
    }

    /// True only for numeric zero (either sign). `false` is not zero here.
    pub fn is_zero(self) -> bool {
        matches!(self, Value::Number(n) if n == 0.0)
    }

    /// JSON rendering used for deque snapshots.
    pub fn to_json(self) -> String {
        match self {
            Value::Bool(b) => b.to_string(),
            Value::Number(n) if !n.is_finite() => "null".to_string(),
            Value::Number(n) if n == 0.0 => "0".to_string(),
            Value::Number(n) => format_number(n),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Render a list of values as a compact JSON array: `[1,2,true]`.
pub fn json_list(values: &[Value]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_json()).collect();
    format!("[{}]", items.join(","))
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let abs = n.abs();
    if abs != 0.0 && !(1e-6..1e21).contains(&abs) {
        // `{:e}` gives "1e21" / "1.5e-7"; positive exponents carry a sign.
        let exp = format!("{n:e}");
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{mantissa}e+{power}")
            }
            _ => exp,
        };
    }
    format!("{n}")
}

/// Parse a numeric literal.
///
/// Accepts decimal literals with optional sign, fraction and exponent,
/// `Infinity` with optional sign, and unsigned `0x`/`0o`/`0b` integers.
/// Surrounding whitespace (including U+FEFF) is ignored and an
/// all-whitespace string is zero.
/// Returns `None` for anything else, including `nan` and `inf`.
pub fn parse_number(text: &str) -> Option<f64> {
    let s = text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if s.is_empty() {
        return Some(0.0);
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            return parse_radix(digits, radix);
        }
    }

    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    if unsigned == "Infinity" {
        return Some(if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    if !is_decimal_literal(unsigned) {
        return None;
    }
    s.parse::<f64>().ok()
}

fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    let mut acc = 0.0_f64;
    for c in digits.chars() {
        let d = c.to_digit(radix)?;
        acc = acc * radix as f64 + d as f64;
    }
    Some(acc)
}

/// `digits [. digits] [e [sign] digits]`, with at least one mantissa digit.
fn is_decimal_literal(s: &str) -> bool {
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(pos) => (&s[..pos], Some(&s[pos + 1..])),
        None => (s, None),
    };

    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((i, f)) => (i, f),
        None => (mantissa, ""),
    };
    let all_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) {
        return false;
    }
    if int_part.is_empty() && frac_part.is_empty() {
        return false;
    }

    match exponent {
        None => true,
        Some(e) => {
            let e = e.strip_prefix(['+', '-']).unwrap_or(e);
            !e.is_empty() && all_digits(e)
        }
    }
}
