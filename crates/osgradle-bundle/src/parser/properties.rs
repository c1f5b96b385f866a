//! Codec for `.properties` files such as `build.properties`.
//!
//! Input is decoded as ISO-8859-1. Supports `#`/`!` comments, the `=`, `:`
//! and whitespace separators, backslash line continuations, and the
//! `\t \n \r \f \uXXXX` escapes. Keys, separators and escapes are parsed
//! with `nom`.

use std::collections::BTreeMap;

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{is_not, tag, take_while, take_while_m_n},
    character::complete::{anychar, char, one_of},
    combinator::{map, map_opt, opt, recognize, value},
    multi::{fold_many0, many0_count},
    sequence::preceded,
};

/// Decodes ISO-8859-1 bytes; every byte maps to the code point of the same value.
#[must_use]
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

const fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{c}')
}

/// Returns `true` when the line ends in an odd number of backslashes.
fn continues(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Joins physical lines into logical lines, dropping comments and blanks.
fn logical_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut pending: Option<String> = None;

    for raw in text.lines() {
        let line = raw.trim_start_matches(is_blank);
        let mut logical = match pending.take() {
            Some(previous) => previous,
            None => {
                if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                    continue;
                }
                String::new()
            }
        };
        if continues(line) {
            logical.push_str(&line[..line.len() - 1]);
            pending = Some(logical);
        } else {
            logical.push_str(line);
            lines.push(logical);
        }
    }
    if let Some(last) = pending {
        lines.push(last);
    }

    lines
}

/// A piece of an escaped key or value.
enum Fragment<'a> {
    Literal(&'a str),
    Escaped(char),
}

fn literal_run(input: &str) -> IResult<&str, &str> {
    is_not("\\").parse(input)
}

/// `\uXXXX`, four hex digits naming a code point.
fn unicode_escape(input: &str) -> IResult<&str, char> {
    map_opt(
        preceded(tag("\\u"), take_while_m_n(4, 4, |c: char| c.is_ascii_hexdigit())),
        |hex: &str| u32::from_str_radix(hex, 16).ok().and_then(char::from_u32),
    )
    .parse(input)
}

/// `\t \n \r \f`, or any other escaped character standing for itself.
fn simple_escape(input: &str) -> IResult<&str, char> {
    preceded(
        char('\\'),
        map(anychar, |c| match c {
            't' => '\t',
            'n' => '\n',
            'r' => '\r',
            'f' => '\u{c}',
            other => other,
        }),
    )
    .parse(input)
}

fn fragment(input: &str) -> IResult<&str, Fragment<'_>> {
    alt((
        map(literal_run, Fragment::Literal),
        map(unicode_escape, Fragment::Escaped),
        map(simple_escape, Fragment::Escaped),
    ))
    .parse(input)
}

/// Resolves backslash escapes in a key or value.
///
/// A trailing lone backslash is dropped.
fn unescape(raw: &str) -> String {
    let folded = fold_many0(
        fragment,
        || String::with_capacity(raw.len()),
        |mut out, fragment| {
            match fragment {
                Fragment::Literal(text) => out.push_str(text),
                Fragment::Escaped(c) => out.push(c),
            }
            out
        },
    )
    .parse(raw);
    folded.map_or_else(|_| raw.to_owned(), |(_, out)| out)
}

/// One key character run: an escaped character, unescaped key text, or a
/// lone trailing backslash.
fn key_chunk(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(preceded(char('\\'), anychar)),
        is_not("\\=: \t\u{c}"),
        tag("\\"),
    ))
    .parse(input)
}

fn entry_key(input: &str) -> IResult<&str, &str> {
    recognize(many0_count(key_chunk)).parse(input)
}

/// Blanks, at most one `=` or `:`, then blanks again.
fn separator(input: &str) -> IResult<&str, ()> {
    value(
        (),
        (take_while(is_blank), opt(one_of("=:")), take_while(is_blank)),
    )
    .parse(input)
}

/// A logical line as its raw key and raw value.
fn entry(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, key) = entry_key(input)?;
    let (raw_value, ()) = separator(input)?;
    Ok(("", (key, raw_value)))
}

/// Splits a logical line into its raw key and raw value.
fn split_entry(line: &str) -> (&str, &str) {
    entry(line).map_or((line, ""), |(_, parts)| parts)
}

/// Parses `.properties` text into a sorted key/value map.
///
/// Later duplicates of a key replace earlier ones.
#[must_use]
pub fn parse_properties(text: &str) -> BTreeMap<String, String> {
    let mut properties = BTreeMap::new();
    for line in logical_lines(text) {
        let (key, value) = split_entry(&line);
        let _ = properties.insert(unescape(key), unescape(value));
    }
    properties
}

/// Escapes a key or value for writing to a `.properties` file.
///
/// Every space in a key is escaped; in a value only a leading one is.
/// Characters outside printable ASCII become `\uXXXX`.
#[must_use]
pub fn escape(text: &str, is_key: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for (idx, c) in text.chars().enumerate() {
        match c {
            ' ' if idx == 0 || is_key => out.push_str("\\ "),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{c}' => out.push_str("\\f"),
            '\\' | '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(c);
            }
            ' '..='~' => out.push(c),
            _ => {
                let mut units = [0_u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{unit:04X}"));
                }
            }
        }
    }
    out
}

/// Renders properties with leading `#` comment lines, sorted by key.
#[must_use]
pub fn render_properties(comments: &[&str], properties: &BTreeMap<String, String>) -> String {
    let mut out = String::new();
    for comment in comments {
        out.push('#');
        out.push_str(comment);
        out.push('\n');
    }
    for (key, value) in properties {
        out.push_str(&escape(key, true));
        out.push('=');
        out.push_str(&escape(value, false));
        out.push('\n');
    }
    out
}
