//! Python literal evaluation: strings, numbers, docstring cleanup.

use crate::ast::Constant;

/// Decoded value of a single string token.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum StringToken {
    Str(String),
    Bytes(String),
    /// f-string or t-string; not a constant.
    Formatted,
}

/// Decode one Python string token such as `r'a\b'` or `"""doc"""`.
///
/// Returns `None` when the text is not a well-formed string token.
pub(crate) fn decode_string_token(token: &str) -> Option<StringToken> {
    let quote_at = token.find(['\'', '"'])?;
    let (prefix, quoted) = token.split_at(quote_at);
    let prefix = prefix.to_ascii_lowercase();

    let delimiter = ["\"\"\"", "'''", "\"", "'"]
        .into_iter()
        .find(|d| quoted.starts_with(d) && quoted.len() >= 2 * d.len() && quoted.ends_with(d))?;
    let body = &quoted[delimiter.len()..quoted.len() - delimiter.len()];

    if prefix.contains('f') || prefix.contains('t') {
        return Some(StringToken::Formatted);
    }
    if prefix.contains('b') {
        return Some(StringToken::Bytes(body.to_string()));
    }

    let body = body.replace("\r\n", "\n");
    if prefix.contains('r') {
        Some(StringToken::Str(body))
    } else {
        Some(StringToken::Str(unescape(&body)))
    }
}

/// Process backslash escapes of a non-raw `str` literal.
///
/// Unknown escapes are kept verbatim, as Python does. Named escapes
/// (`\N{BULLET}`) are kept verbatim too: resolving them needs the Unicode
/// character name table, which this crate does not carry.
pub(crate) fn unescape(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(next) = chars.next() else {
            out.push('\\');
            break;
        };
        match next {
            '\n' => {}
            '\\' => out.push('\\'),
            '\'' => out.push('\''),
            '"' => out.push('"'),
            'a' => out.push('\u{07}'),
            'b' => out.push('\u{08}'),
            'f' => out.push('\u{0c}'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'v' => out.push('\u{0b}'),
            '0'..='7' => {
                let mut value = next.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match chars.peek().and_then(|d| d.to_digit(8)) {
                        Some(d) => {
                            value = value * 8 + d;
                            chars.next();
                        }
                        None => break,
                    }
                }
                out.push(char::from_u32(value).unwrap_or('\u{fffd}'));
            }
            'x' | 'u' | 'U' => {
                let width = match next {
                    'x' => 2,
                    'u' => 4,
                    _ => 8,
                };
                let digits: String = chars.clone().take(width).collect();
                let decoded = (digits.len() == width && digits.chars().all(|d| d.is_ascii_hexdigit()))
                    .then(|| u32::from_str_radix(&digits, 16).ok())
                    .flatten()
                    .and_then(char::from_u32);
                if let Some(ch) = decoded {
                    out.push(ch);
                    for _ in 0..width {
                        chars.next();
                    }
                } else {
                    out.push('\\');
                    out.push(next);
                }
            }
            other => {
                out.push('\\');
                out.push(other);
            }
        }
    }
    out
}

/// Evaluate an `integer` token (`42`, `0x_ff`, `1_000`, `3j`).
pub(crate) fn parse_integer(token: &str) -> Option<Constant> {
    let cleaned: String = token.chars().filter(|c| *c != '_').collect();
    let lower = cleaned.to_ascii_lowercase();
    if lower.ends_with('j') {
        return Some(Constant::Complex(token.to_string()));
    }
    let (digits, radix) = if let Some(rest) = lower.strip_prefix("0x") {
        (rest, 16)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (rest, 8)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (rest, 2)
    } else {
        (lower.as_str(), 10)
    };
    i128::from_str_radix(digits, radix).ok().map(Constant::Int)
}

/// Evaluate a `float` token (`1.5`, `1e-3`, `.5`, `2.5j`).
///
/// Literals that overflow to infinity have no JSON number form and yield `None`.
pub(crate) fn parse_float(token: &str) -> Option<Constant> {
    let cleaned: String = token.chars().filter(|c| *c != '_').collect();
    if cleaned.ends_with(['j', 'J']) {
        return Some(Constant::Complex(token.to_string()));
    }
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(Constant::Float)
}

/// Clean a docstring the way `inspect.cleandoc` does.
///
/// Tabs are expanded, the first line is left-stripped, the common
/// indentation of the remaining lines is removed, and leading/trailing
/// blank lines are dropped.
#[must_use]
pub fn cleandoc(doc: &str) -> String {
    let expanded = expand_tabs(doc, 8);
    let lines: Vec<&str> = expanded.split('\n').collect();

    let margin = lines
        .iter()
        .skip(1)
        .filter_map(|line| {
            let content = line.trim_start();
            (!content.is_empty()).then(|| line.chars().count() - content.chars().count())
        })
        .min();

    let mut cleaned: Vec<String> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| match (i, margin) {
            (0, _) => line.trim_start().to_string(),
            (_, Some(m)) => line.chars().skip(m).collect(),
            (_, None) => (*line).to_string(),
        })
        .collect();

    while cleaned.last().is_some_and(String::is_empty) {
        cleaned.pop();
    }
    let first = cleaned
        .iter()
        .position(|line| !line.is_empty())
        .unwrap_or(cleaned.len());
    cleaned[first..].join("\n")
}

fn expand_tabs(s: &str, tab_size: usize) -> String {
    let mut out = String::with_capacity(s.len());
    let mut column = 0;
    for c in s.chars() {
        match c {
            '\t' => {
                let pad = tab_size - column % tab_size;
                out.extend(std::iter::repeat_n(' ', pad));
                column += pad;
            }
            '\n' | '\r' => {
                out.push(c);
                column = 0;
            }
            _ => {
                out.push(c);
                column += 1;
            }
        }
    }
    out
}
