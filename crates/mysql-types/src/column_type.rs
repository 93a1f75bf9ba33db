//! Raw MySQL column type string parsing.
//!
//! Turns strings such as `bigint(20) unsigned zerofill`, `decimal(10,2)` or
//! `enum('small','medium')` into a [`ParsedColumnType`]. Matching is
//! case-insensitive; width/precision parentheses and the `unsigned` /
//! `zerofill` modifiers never change the base type.

use typegen_core::BaseSqlType;

/// A raw type string split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedColumnType {
    pub base: BaseSqlType,

    /// First number inside the parentheses, e.g. `11` for `int(11)`
    pub display_width: Option<u32>,

    pub unsigned: bool,
    pub zerofill: bool,

    /// Quoted members of an `enum(...)` / `set(...)` type
    pub members: Vec<String>,
}

impl ParsedColumnType {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let keyword_end = trimmed
            .find(|c: char| c == '(' || c.is_whitespace())
            .unwrap_or(trimmed.len());
        let keyword = trimmed[..keyword_end].to_lowercase();
        let base = BaseSqlType::from_keyword(&keyword).unwrap_or(BaseSqlType::Unknown);

        let (arguments, rest) = split_arguments(&trimmed[keyword_end..]);

        let mut parsed = Self {
            base,
            display_width: None,
            unsigned: false,
            zerofill: false,
            members: Vec::new(),
        };

        match base {
            BaseSqlType::Enum | BaseSqlType::Set => {
                if let Some(arguments) = arguments {
                    parsed.members = parse_literal_list(arguments).unwrap_or_default();
                }
            }
            _ => {
                parsed.display_width = arguments.and_then(extract_length);
            }
        }

        for modifier in rest.split_whitespace() {
            match modifier.to_lowercase().as_str() {
                "unsigned" => parsed.unsigned = true,
                "zerofill" => parsed.zerofill = true,
                _ => {}
            }
        }

        parsed
    }
}

/// Split `"(20) unsigned"` into `(Some("20"), " unsigned")`.
///
/// The closing parenthesis is found outside quoted literals so enum members
/// containing `)` survive.
fn split_arguments(after_keyword: &str) -> (Option<&str>, &str) {
    let trimmed = after_keyword.trim_start();
    let Some(inner) = trimmed.strip_prefix('(') else {
        return (None, after_keyword);
    };

    let mut quote: Option<char> = None;
    let mut chars = inner.char_indices().peekable();
    while let Some((idx, c)) = chars.next() {
        match quote {
            Some(_) if c == '\\' => {
                chars.next();
            }
            Some(q) if c == q => {
                // doubled quote is an escaped quote
                if matches!(chars.peek(), Some((_, next)) if *next == q) {
                    chars.next();
                } else {
                    quote = None;
                }
            }
            Some(_) => {}
            None if c == '\'' || c == '"' => quote = Some(c),
            None if c == ')' => return (Some(&inner[..idx]), &inner[idx + 1..]),
            None => {}
        }
    }

    // unterminated: treat the remainder as the argument text
    (Some(inner), "")
}

/// Extract the leading number from a width/precision argument.
///
/// E.g., "255" -> Some(255), "10,2" -> Some(10)
fn extract_length(arguments: &str) -> Option<u32> {
    let first_part = arguments.split(',').next().unwrap_or(arguments);
    first_part.trim().parse().ok()
}

/// Parse a comma-separated literal list.
///
/// Items may be single-quoted, double-quoted or bare. Inside quotes a doubled
/// quote or a backslash escapes the next character. Returns an error message
/// for empty items or an unterminated quote.
///
/// E.g., `'a','b'` -> `["a", "b"]`, `a, b` -> `["a", "b"]`
pub fn parse_literal_list(content: &str) -> Result<Vec<String>, String> {
    let mut values = Vec::new();
    let mut chars = content.chars().peekable();

    loop {
        while matches!(chars.peek(), Some(c) if c.is_whitespace()) {
            chars.next();
        }

        let value = match chars.peek().copied() {
            None => {
                if values.is_empty() {
                    return Err("empty member list".to_string());
                }
                return Err("trailing comma".to_string());
            }
            Some(quote @ ('\'' | '"')) => {
                chars.next();
                let mut value = String::new();
                let mut closed = false;
                while let Some(c) = chars.next() {
                    if c == '\\' {
                        if let Some(escaped) = chars.next() {
                            value.push(escaped);
                        }
                    } else if c == quote {
                        if chars.peek() == Some(&quote) {
                            chars.next();
                            value.push(quote);
                        } else {
                            closed = true;
                            break;
                        }
                    } else {
                        value.push(c);
                    }
                }
                if !closed {
                    return Err("unterminated quoted member".to_string());
                }
                value
            }
            Some(_) => {
                let mut value = String::new();
                while let Some(&c) = chars.peek() {
                    if c == ',' {
                        break;
                    }
                    value.push(c);
                    chars.next();
                }
                let value = value.trim().to_string();
                if value.is_empty() {
                    return Err("empty member".to_string());
                }
                value
            }
        };
        values.push(value);

        while matches!(chars.peek(), Some(c) if c.is_whitespace()) {
            chars.next();
        }
        match chars.next() {
            None => return Ok(values),
            Some(',') => continue,
            Some(c) => return Err(format!("unexpected '{c}' after member")),
        }
    }
}
