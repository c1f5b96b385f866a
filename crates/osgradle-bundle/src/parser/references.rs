//! Reference-list grammar for `Require-Bundle`-style headers, built on `nom`.
//!
//! Each entry has the shape
//! `NAME (;bundle-version=VALUE)? (;ATTR:=VALUE | ;ATTR=VALUE)*`, where a
//! `VALUE` is either a double-quoted string or a run of characters other
//! than `,` and `;`. Entries are found by scanning left to right: where no
//! entry starts, one character is skipped and the scan resumes.

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{is_not, tag, take_till1, take_while1},
    character::complete::char,
    combinator::{opt, recognize},
    multi::many0,
    sequence::{delimited, preceded},
};
use osgradle_common::constants::VERSION_CLAUSE;

use crate::model::Reference;

const fn is_delimiter(c: char) -> bool {
    c == ';' || c == ','
}

/// Name run: everything up to the next `;` or `,`.
fn entry_name(input: &str) -> IResult<&str, &str> {
    take_till1(is_delimiter).parse(input)
}

/// A double-quoted value, quotes included.
fn quoted_value(input: &str) -> IResult<&str, &str> {
    recognize(delimited(char('"'), is_not("\""), char('"'))).parse(input)
}

/// An unquoted value: everything up to the next `,` or `;`.
fn bare_value(input: &str) -> IResult<&str, &str> {
    take_till1(is_delimiter).parse(input)
}

fn clause_value(input: &str) -> IResult<&str, &str> {
    alt((quoted_value, bare_value)).parse(input)
}

fn version_clause(input: &str) -> IResult<&str, &str> {
    preceded(tag(VERSION_CLAUSE), clause_value).parse(input)
}

const fn is_attribute_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Any other `;attr=value` or `;directive:=value` clause.
fn attribute_clause(input: &str) -> IResult<&str, &str> {
    recognize((
        char(';'),
        take_while1(is_attribute_char),
        opt(char(':')),
        char('='),
        clause_value,
    ))
    .parse(input)
}

/// One reference entry: its name and raw version capture.
fn reference_entry(input: &str) -> IResult<&str, (&str, Option<&str>)> {
    let (input, name) = entry_name(input)?;
    let (input, version) = opt(version_clause).parse(input)?;
    let (input, _) = many0(attribute_clause).parse(input)?;
    Ok((input, (name, version)))
}

/// Removes one pair of surrounding double quotes, if present.
fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .map_or(value, |inner| inner.strip_suffix('"').unwrap_or(inner))
}

/// Parses a reference-list header value.
///
/// Never fails: clauses that do not fit the grammar are skipped or leave
/// the reference without a version. An absent or empty value yields no
/// references.
#[must_use]
pub fn parse_reference_list(raw: Option<&str>) -> Vec<Reference> {
    let mut references = Vec::new();
    let mut rest = raw.unwrap_or_default();

    while !rest.is_empty() {
        if let Ok((remaining, (name, version))) = reference_entry(rest) {
            let name = name.trim();
            if name.is_empty() {
                tracing::debug!("skipping blank reference entry");
            } else {
                references.push(Reference::new(name, version.map(|v| unquote(v).to_owned())));
            }
            rest = remaining;
        } else {
            let mut chars = rest.chars();
            let _ = chars.next();
            rest = chars.as_str();
        }
    }

    references
}
