use std::borrow::Borrow;
use std::borrow::Cow;
use std::collections::BTreeMap;

use serde_json::Value;

/// Replace `${NAME}` macros in `input` with values from `params`.
///
/// `$$` emits a single `$` but only consumes the first dollar, so the second
/// one may still open a macro: `$${NAME}` yields `$` followed by the value.
/// Macros naming unknown parameters are kept verbatim.
pub fn substitute_parameters<'s, V>(input: &'s str, params: &BTreeMap<&str, V>) -> Cow<'s, str>
where
    V: Borrow<str>,
{
    if !input.contains("${") {
        return Cow::Borrowed(input);
    }

    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut copied = 0;
    let mut i = 0;
    // First `}` at or after the last lookup; reused until the scan passes it.
    let mut close: Option<usize> = None;

    while i < bytes.len() {
        if bytes[i] != b'$' {
            i += 1;
            continue;
        }
        match bytes.get(i + 1) {
            Some(b'$') => {
                // Escaped dollar: the first is literal, the second is scanned next.
                i += 1;
            }
            Some(b'{') => {
                let name_start = i + 2;
                let end = match close {
                    Some(end) if end >= name_start => end,
                    _ => match input[name_start..].find('}') {
                        Some(len) => name_start + len,
                        // No closing brace remains, so nothing later can be a macro.
                        None => break,
                    },
                };
                close = Some(end);
                let name = &input[name_start..end];
                if let Some(value) = params.get(name) {
                    out.push_str(&input[copied..i]);
                    out.push_str(<V as Borrow<str>>::borrow(value));
                    i = end + 1;
                    copied = i;
                } else {
                    i += 1;
                }
            }
            _ => i += 1,
        }
    }

    out.push_str(&input[copied..]);
    Cow::Owned(out)
}

/// Substitute macros in every string leaf below `value`. Object keys and
/// non-string scalars are left alone.
pub fn substitute_value<V>(value: &mut Value, params: &BTreeMap<&str, V>)
where
    V: Borrow<str>,
{
    match value {
        Value::String(text) => {
            let replaced = match substitute_parameters(text, params) {
                Cow::Owned(replaced) => replaced,
                Cow::Borrowed(_) => return,
            };
            *text = replaced;
        }
        Value::Array(items) => {
            for item in items {
                substitute_value(item, params);
            }
        }
        Value::Object(fields) => {
            for (_, field) in fields.iter_mut() {
                substitute_value(field, params);
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}
