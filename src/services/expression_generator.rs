use std::sync::{Mutex, OnceLock, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Regex;
use serde_json::Value;

use crate::domain::{Generator, GeneratorError};

const MAX_RANGE_LENGTH: usize = 255;

const WORD: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_";
const DIGITS: &str = "0123456789";
const ALPHA: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const PUNCTUATION: &str = "~!@#$%^&*()-_+={}[]\\|<,>.?/\"';:`";

static RANGE_EXP: OnceLock<Regex> = OnceLock::new();

fn range_exp() -> &'static Regex {
    RANGE_EXP.get_or_init(|| {
        Regex::new(r"\[([a-zA-Z0-9\-\\]+)\]\{(\w+)\}").expect("range pattern must be valid")
    })
}

/// Generates random strings from character-class expressions.
///
/// Every `[ranges]{n}` group is replaced by `n` characters drawn from the
/// ranges; other text is copied as-is. `"user-[a-z0-9]{6}"` may yield
/// `"user-k3x9q1"`.
pub struct ExpressionValueGenerator {
    rng: Mutex<StdRng>,
}

impl ExpressionValueGenerator {
    /// Generator seeded from system entropy.
    pub fn new() -> Self {
        Self { rng: Mutex::new(StdRng::from_entropy()) }
    }

    /// Generator with reproducible output.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: Mutex::new(StdRng::seed_from_u64(seed)) }
    }

    fn expand(&self, expression: &str) -> Result<String, GeneratorError> {
        let mut out = String::with_capacity(expression.len());
        let mut last = 0;
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        for caps in range_exp().captures_iter(expression) {
            let Some(group) = caps.get(0) else { continue };
            let alphabet = alphabet(&caps[1], expression)?;
            let length = range_length(&caps[2], expression)?;

            out.push_str(&expression[last..group.start()]);
            for _ in 0..length {
                out.push(alphabet[rng.gen_range(0..alphabet.len())]);
            }
            last = group.end();
        }

        out.push_str(&expression[last..]);
        Ok(out)
    }
}

impl Default for ExpressionValueGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for ExpressionValueGenerator {
    fn generate_value(&self, expression: &str) -> Result<Value, GeneratorError> {
        self.expand(expression).map(Value::String)
    }
}

fn invalid(expression: &str, reason: impl Into<String>) -> GeneratorError {
    GeneratorError::InvalidExpression { expression: expression.to_string(), reason: reason.into() }
}

fn class_chars(class: char) -> Option<&'static str> {
    match class {
        'w' => Some(WORD),
        'd' => Some(DIGITS),
        'a' => Some(ALPHA),
        'A' => Some(PUNCTUATION),
        _ => None,
    }
}

/// Expand `a-z0-9\d` style range text into the characters it allows.
fn alphabet(ranges: &str, expression: &str) -> Result<Vec<char>, GeneratorError> {
    let chars: Vec<char> = ranges.chars().collect();
    let mut alphabet = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '\\' => {
                let class = chars.get(i + 1).copied();
                let members = class.and_then(class_chars).ok_or_else(|| {
                    invalid(expression, format!("unknown character class '\\{}'", class.unwrap_or(' ')))
                })?;
                alphabet.extend(members.chars());
                i += 2;
            }
            start if chars.get(i + 1) == Some(&'-') && i + 2 < chars.len() => {
                let end = chars[i + 2];
                if start > end {
                    return Err(invalid(expression, format!("invalid range '{}-{}'", start, end)));
                }
                alphabet.extend(start..=end);
                i += 3;
            }
            literal => {
                alphabet.push(literal);
                i += 1;
            }
        }
    }

    if alphabet.is_empty() {
        return Err(invalid(expression, "empty character range"));
    }
    Ok(alphabet)
}

fn range_length(length: &str, expression: &str) -> Result<usize, GeneratorError> {
    let length: usize = length
        .parse()
        .map_err(|_| invalid(expression, format!("invalid length '{}'", length)))?;
    if length == 0 || length > MAX_RANGE_LENGTH {
        return Err(invalid(
            expression,
            format!("range length must be between 1 and {} characters", MAX_RANGE_LENGTH),
        ));
    }
    Ok(length)
}
